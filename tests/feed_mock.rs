use chrono::Local;
use roomboard::board;
use roomboard::components::live_feed::{FeedDocument, FeedEvent, FeedSnapshot};
use roomboard::error::BoardResult;

/// Mock implementation of the live feed handle for testing without the
/// network
#[derive(Debug, Clone, Default)]
pub struct MockLiveFeedHandle {
    document: FeedDocument,
}

impl MockLiveFeedHandle {
    /// Create a new mock handle with a predefined feed document
    pub fn new() -> Self {
        let document = FeedDocument {
            meeting_room: vec![
                FeedEvent {
                    title: Some("Customer demo".to_string()),
                    start: Some("2024-01-15T10:00:00Z".to_string()),
                    end: Some("2024-01-15T11:00:00Z".to_string()),
                    location: Some("Front office".to_string()),
                },
                FeedEvent {
                    title: Some("Broken record".to_string()),
                    start: None,
                    end: None,
                    location: None,
                },
            ],
            training_room: vec![FeedEvent {
                title: Some("Onboarding".to_string()),
                start: Some("2024-01-16T09:00:00Z".to_string()),
                end: None,
                location: None,
            }],
            last_updated: Some("2024-01-15T09:55:00Z".to_string()),
        };

        Self { document }
    }

    /// Get a snapshot from the mock
    pub async fn get_snapshot(&self) -> BoardResult<Option<FeedSnapshot>> {
        Ok(Some(FeedSnapshot {
            document: self.document.clone(),
            fetched_at: Local::now(),
        }))
    }

    /// Simulate a refresh
    pub async fn refresh(&self) -> BoardResult<FeedSnapshot> {
        Ok(FeedSnapshot {
            document: self.document.clone(),
            fetched_at: Local::now(),
        })
    }

    /// Shutdown the mock
    #[allow(dead_code)]
    pub async fn shutdown(&self) -> BoardResult<()> {
        Ok(())
    }
}

/// Test that demonstrates how to use the mock
#[tokio::test]
async fn test_live_feed_mock() {
    // Create the mock
    let mock_handle = MockLiveFeedHandle::new();

    // Get a snapshot from the mock
    let snapshot = mock_handle.get_snapshot().await.unwrap().unwrap();

    let schedules = snapshot.room_schedules();
    assert_eq!(schedules.len(), 2);

    // The record without a start time is dropped during conversion
    assert_eq!(schedules[0].events.len(), 1);
    assert_eq!(schedules[0].events[0].summary, "Customer demo");
    assert_eq!(schedules[0].events[0].location, "Front office");

    assert_eq!(schedules[1].events.len(), 1);
    assert_eq!(schedules[1].events[0].summary, "Onboarding");
    assert!(schedules[1].events[0].end.is_none());

    // The feed's own lastUpdated stamp is carried onto both schedules
    assert!(schedules[0].last_updated.is_some());
    assert_eq!(schedules[0].last_updated, schedules[1].last_updated);
}

/// Test rendering boards straight from a mock snapshot
#[tokio::test]
async fn test_render_from_mock_snapshot() {
    let mock_handle = MockLiveFeedHandle::new();
    let snapshot = mock_handle.refresh().await.unwrap();

    let now = Local::now();
    for schedule in snapshot.room_schedules() {
        let rendered = board::render_schedule(&schedule, now, 7);
        assert!(rendered.starts_with(&format!("=== {} ===", schedule.label)));
        assert!(rendered.contains("Status: "));
    }
}
