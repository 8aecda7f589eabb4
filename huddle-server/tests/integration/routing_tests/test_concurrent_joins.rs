use huddle_core::RoomId;

use crate::integration::{connect_peer, create_test_service, init_tracing, join_room};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_joins() {
    init_tracing();

    let (service, output) = create_test_service();
    let peer_count = 32;

    let mut peers = Vec::new();
    for _ in 0..peer_count {
        peers.push(connect_peer(&service).await);
    }

    let tasks: Vec<_> = peers
        .iter()
        .map(|peer| {
            let service = service.clone();
            let peer = *peer;
            tokio::spawn(async move { join_room(&service, &peer, "crowd").await })
        })
        .collect();
    for task in tasks {
        task.await.expect("Join task panicked");
    }

    // Every pair is introduced exactly once, to whichever of the two joined first.
    assert_eq!(
        output.new_peer_count().await,
        peer_count * (peer_count - 1) / 2
    );
    assert_eq!(
        service.directory().members_of(&RoomId::from("crowd")).len(),
        peer_count
    );
}
