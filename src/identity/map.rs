/// Mapping from a response's positional cluster indices to stable identities.
///
/// The server may permute its cluster order on every call; stable identities
/// are what keep a cluster's color and label fixed across redraws. The map is
/// always a bijection: every positional index has exactly one stable identity
/// and no identity repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityMap {
    stable_ids: Vec<usize>,
}

impl IdentityMap {
    /// The no-history state, used at session start and after a cluster-count
    /// change.
    pub fn empty() -> Self {
        Self {
            stable_ids: Vec::new(),
        }
    }

    /// Seed mapping: stable identity `i` for positional index `i`.
    pub fn seed(len: usize) -> Self {
        Self {
            stable_ids: (0..len).collect(),
        }
    }

    pub(crate) fn from_ids(stable_ids: Vec<usize>) -> Self {
        Self { stable_ids }
    }

    pub fn stable_id(&self, positional: usize) -> Option<usize> {
        self.stable_ids.get(positional).copied()
    }

    pub fn ids(&self) -> &[usize] {
        &self.stable_ids
    }

    pub fn len(&self) -> usize {
        self.stable_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stable_ids.is_empty()
    }
}
