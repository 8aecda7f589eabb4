use huddle_core::{RoomId, ServerEvent};
use huddle_server::InboundEvent;

use crate::integration::{connect_peer, create_test_service, init_tracing, join_room};

#[tokio::test]
async fn test_screen_sharing_broadcast() {
    init_tracing();

    let (service, output) = create_test_service();
    let host = connect_peer(&service).await;
    let viewer1 = connect_peer(&service).await;
    let viewer2 = connect_peer(&service).await;
    join_room(&service, &viewer1, "stage").await;
    join_room(&service, &viewer2, "stage").await;

    service
        .handle(
            &host,
            InboundEvent::ScreenSharing {
                room_id: RoomId::from("stage"),
                stream_id: "stream-42".to_string(),
            },
        )
        .await;

    for viewer in [&viewer1, &viewer2] {
        let last = output.events_for(viewer).await.pop().expect("Announcement");
        assert!(
            matches!(&last, ServerEvent::ScreenSharing { stream_id } if stream_id == "stream-42"),
            "unexpected event {:?}",
            last
        );
    }
    assert!(output.events_for(&host).await.is_empty());
    assert!(
        service
            .directory()
            .members_of(&RoomId::from("stage"))
            .contains(&host)
    );
}
