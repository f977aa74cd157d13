use super::*;
use crate::serving::{ModelStatusResponse, PointPrediction, VersionStatus};

// nothing listens here; requests fail fast with a connect error
fn offline_client() -> ClusteringClient {
    ClusteringClient::new("http://127.0.0.1:9", "kmeans")
}

fn offline_session() -> ClusterSession {
    ClusterSession::new(offline_client(), SurfaceSize::new(800.0, 600.0))
}

fn response(centroids: &[[f64; 2]], assignments: &[(usize, f64)]) -> PredictResponse {
    PredictResponse {
        predictions: assignments
            .iter()
            .map(|&(cluster, distance)| PointPrediction { cluster, distance })
            .collect(),
        centroids: centroids.to_vec(),
    }
}

fn catalog(counts: &[(u32, bool)]) -> ModelCatalog {
    ModelCatalog::from_status(ModelStatusResponse {
        model_version_status: counts
            .iter()
            .map(|&(count, available)| VersionStatus {
                version: count.to_string(),
                state: if available { "AVAILABLE" } else { "UNLOADING" }.to_string(),
            })
            .collect(),
    })
}

#[tokio::test]
async fn test_single_point_issues_no_request() {
    let mut session = offline_session();
    assert_eq!(session.state(), SessionState::Empty);

    session.add_point(DataPoint::new(1.0, 1.0)).await;

    assert_eq!(session.state(), SessionState::Insufficient);
    assert_eq!(session.seq, 0);
    assert!(session.last_error().is_none());
}

#[tokio::test]
async fn test_empty_batch_is_a_no_op() {
    let mut session = offline_session();
    session.add_points(Vec::new()).await;
    assert_eq!(session.state(), SessionState::Empty);
    assert_eq!(session.seq, 0);
}

#[test]
fn test_first_response_seeds_identities() {
    let mut session = offline_session();
    session.points.append_batch(vec![
        DataPoint::new(1.0, 1.0),
        DataPoint::new(1.5, 1.5),
        DataPoint::new(8.0, 8.0),
        DataPoint::new(8.5, 8.5),
        DataPoint::new(5.0, 5.0),
    ]);

    let seq = session.next_seq();
    session.apply_response(
        seq,
        response(
            &[[1.25, 1.25], [8.25, 8.25], [5.0, 5.0]],
            &[(0, 0.35), (0, 0.35), (1, 0.35), (1, 0.35), (2, 0.0)],
        ),
    );

    assert_eq!(session.state(), SessionState::Ready);
    let result = session.result().unwrap();
    assert_eq!(result.assignments.len(), 5);
    assert_eq!(result.centroids.len(), 3);
    for assignment in &result.assignments {
        assert!(assignment.cluster < result.centroids.len());
    }
    assert_eq!(session.identities().ids(), &[0, 1, 2]);
    assert!(session.result.is_consistent_with(session.points.len()));
}

#[test]
fn test_stale_response_is_discarded() {
    let mut session = offline_session();
    session
        .points
        .append_batch(vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)]);

    let first = session.next_seq();
    let second = session.next_seq();

    // the older request's response arrives after the newer one was issued
    session.apply_response(first, response(&[[0.0, 0.0], [1.0, 1.0]], &[(0, 0.0), (1, 0.0)]));
    assert!(session.result().is_none());
    assert_ne!(session.state(), SessionState::Ready);

    session.apply_response(second, response(&[[0.5, 0.5], [1.5, 1.5]], &[(0, 0.7), (1, 0.7)]));
    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(
        session.result().unwrap().centroids[0],
        DataPoint::new(0.5, 0.5)
    );
}

#[test]
fn test_out_of_order_response_does_not_overwrite_newest() {
    let mut session = offline_session();
    session
        .points
        .append_batch(vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)]);

    let first = session.next_seq();
    let second = session.next_seq();

    session.apply_response(second, response(&[[2.0, 2.0]], &[(0, 1.0), (0, 1.0)]));
    session.apply_response(first, response(&[[9.0, 9.0]], &[(0, 1.0), (0, 1.0)]));

    assert_eq!(
        session.result().unwrap().centroids[0],
        DataPoint::new(2.0, 2.0)
    );
}

#[test]
fn test_reconciliation_runs_on_every_response() {
    let mut session = offline_session();
    session
        .points
        .append_batch(vec![DataPoint::new(-5.0, 0.0), DataPoint::new(5.0, 0.0)]);

    let seq = session.next_seq();
    session.apply_response(seq, response(&[[-5.0, 0.0], [5.0, 0.0]], &[(0, 0.0), (1, 0.0)]));
    assert_eq!(session.identities().ids(), &[0, 1]);

    // next response lists the same two clusters in swapped order
    let seq = session.next_seq();
    session.apply_response(seq, response(&[[5.1, 0.0], [-5.1, 0.0]], &[(1, 0.1), (0, 0.1)]));
    assert_eq!(session.identities().ids(), &[1, 0]);
}

#[test]
fn test_failure_keeps_last_good_result() {
    let mut session = offline_session();
    session
        .points
        .append_batch(vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)]);

    let seq = session.next_seq();
    session.apply_response(seq, response(&[[0.5, 0.5]], &[(0, 0.7), (0, 0.7)]));
    assert_eq!(session.state(), SessionState::Ready);

    session.fail(ServingError::Server {
        status: 500,
        body: "internal error".to_string(),
    });

    assert_eq!(session.state(), SessionState::Ready);
    assert!(session.result().is_some());
    assert!(session.last_error().unwrap().contains("500"));
}

#[test]
fn test_failure_without_result_settles_to_insufficient() {
    let mut session = offline_session();
    session
        .points
        .append_batch(vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)]);

    session.fail(ServingError::Server {
        status: 503,
        body: "loading".to_string(),
    });

    assert_eq!(session.state(), SessionState::Insufficient);
    assert!(session.last_error().is_some());
}

#[test]
fn test_clear_resets_everything_and_outdates_in_flight_requests() {
    let mut session = offline_session();
    session
        .points
        .append_batch(vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)]);

    let in_flight = session.next_seq();
    session.clear();

    assert_eq!(session.state(), SessionState::Empty);
    assert!(session.points().is_empty());
    assert!(session.result().is_none());
    assert!(session.identities().is_empty());

    // the straggler response from before the clear must be ignored
    session.apply_response(in_flight, response(&[[0.5, 0.5]], &[(0, 0.7), (0, 0.7)]));
    assert!(session.result().is_none());
    assert_eq!(session.state(), SessionState::Empty);
}

#[tokio::test]
async fn test_cluster_count_change_resets_identities_and_reclusters() {
    let mut session = offline_session();
    session
        .points
        .append_batch(vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)]);

    let seq = session.next_seq();
    session.apply_response(seq, response(&[[0.5, 0.5]], &[(0, 0.7), (0, 0.7)]));
    assert!(!session.identities().is_empty());

    // the reclustering request fails against the offline endpoint, but the
    // parameter change and the identity reset must stick
    let accepted = session.set_cluster_count(4).await;

    assert!(accepted);
    assert_eq!(session.cluster_count(), 4);
    assert!(session.identities().is_empty());
    assert!(session.last_error().is_some());
    // the previous scene stays up
    assert_eq!(session.state(), SessionState::Ready);
    assert!(session.result().is_some());
}

#[tokio::test]
async fn test_cluster_count_validated_against_catalog() {
    let mut session = offline_session();
    session.catalog = catalog(&[(2, true), (3, true), (6, false)]);

    assert!(!session.set_cluster_count(6).await);
    assert!(!session.set_cluster_count(5).await);
    assert_eq!(session.cluster_count(), DEFAULT_CLUSTER_COUNT);

    assert!(session.set_cluster_count(2).await);
    assert_eq!(session.cluster_count(), 2);
}

#[tokio::test]
async fn test_unreachable_server_surfaces_error() {
    let mut session = offline_session();
    session
        .add_points(vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)])
        .await;

    assert_eq!(session.state(), SessionState::Insufficient);
    assert!(session.last_error().unwrap().contains("unreachable"));
    // points are kept; only the request failed
    assert_eq!(session.points().len(), 2);
}

#[tokio::test]
async fn test_surface_click_maps_through_projection() {
    let mut session = offline_session();

    // the exact center of an 800x600 surface is the data origin
    session.add_surface_point(400.0, 300.0).await;

    assert_eq!(session.points()[0], DataPoint::new(0.0, 0.0));
    assert_eq!(session.state(), SessionState::Insufficient);
}

#[test]
fn test_resize_preserves_points_and_result() {
    let mut session = offline_session();
    session
        .points
        .append_batch(vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)]);
    let seq = session.next_seq();
    session.apply_response(seq, response(&[[0.5, 0.5]], &[(0, 0.7), (0, 0.7)]));

    session.resize_surface(SurfaceSize::new(1280.0, 720.0));

    assert_eq!(session.surface(), SurfaceSize::new(1280.0, 720.0));
    assert_eq!(session.points().len(), 2);
    assert!(session.result().is_some());
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn test_render_derives_from_current_state_only() {
    let mut session = offline_session();
    session.points.append(DataPoint::new(2.0, 2.0));

    let scene = session.render();
    let again = session.render();
    assert_eq!(scene, again);
    assert_eq!(session.state(), SessionState::Empty); // render never mutates
}

// Integration test - requires a model server running
#[tokio::test]
#[ignore]
async fn test_live_session_round_trip() {
    let mut session = ClusterSession::new(
        ClusteringClient::new("http://localhost:8501", "kmeans"),
        SurfaceSize::new(800.0, 600.0),
    );

    session.refresh_catalog().await.unwrap();
    session
        .add_points(vec![
            DataPoint::new(1.0, 1.0),
            DataPoint::new(1.5, 1.5),
            DataPoint::new(8.0, 8.0),
            DataPoint::new(8.5, 8.5),
            DataPoint::new(5.0, 5.0),
        ])
        .await;

    assert_eq!(session.state(), SessionState::Ready);
    let result = session.result().unwrap();
    assert_eq!(result.assignments.len(), 5);
    assert_eq!(session.identities().len(), result.centroids.len());
}
