use crate::geometry::DataPoint;

use super::map::IdentityMap;

/// Match each new centroid to its nearest unclaimed predecessor and inherit
/// that predecessor's stable identity.
///
/// New centroids are processed in positional order. An earlier centroid keeps
/// whatever it claimed even when a later one would have been a closer match,
/// so the result is not a minimum-total-distance assignment; it is always
/// bijective. Exact distance ties go to the earliest-scanned predecessor.
///
/// With no history (`previous` empty) the mapping seeds to the identity
/// function. A new centroid that finds every predecessor already claimed
/// falls back to its own positional index; that only happens when the new
/// list outgrew the old one, which a cluster-count change preempts by
/// reseeding.
pub fn reconcile(
    previous: &IdentityMap,
    previous_centroids: &[DataPoint],
    new_centroids: &[DataPoint],
) -> IdentityMap {
    if previous.is_empty() {
        return IdentityMap::seed(new_centroids.len());
    }

    let mut claimed = vec![false; previous_centroids.len()];
    let mut stable_ids = Vec::with_capacity(new_centroids.len());

    for (position, centroid) in new_centroids.iter().enumerate() {
        let mut best: Option<(usize, f64)> = None;
        for (prev_index, prev) in previous_centroids.iter().enumerate() {
            if claimed[prev_index] {
                continue;
            }
            let distance = centroid.distance_to(prev);
            // strict `<` keeps the first of equally distant candidates
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((prev_index, distance));
            }
        }

        let inherited =
            best.and_then(|(prev_index, _)| Some((prev_index, previous.stable_id(prev_index)?)));
        match inherited {
            Some((prev_index, id)) => {
                claimed[prev_index] = true;
                stable_ids.push(id);
            }
            None => stable_ids.push(position),
        }
    }

    IdentityMap::from_ids(stable_ids)
}
