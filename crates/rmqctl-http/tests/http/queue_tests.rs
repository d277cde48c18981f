use super::test_utilities::{StubBroker, unreachable_url};
use rmqctl::select::{SelectionSpec, select};
use rmqctl::{QueueInfo, bulk};
use rmqctl_http::ManagementClient;

fn sample_queues() -> Vec<QueueInfo> {
    vec![
        QueueInfo::new("logs", "/", true, false),
        QueueInfo::new("logs-eu", "/", true, false),
        QueueInfo::new("events", "prod", false, true),
    ]
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|n| n.to_string()).collect()
}

#[tokio::test]
async fn list_queues_returns_full_inventory() {
    let broker = StubBroker::start(sample_queues()).await;
    let client = ManagementClient::from_url(&broker.base_url).unwrap();

    let queues = client.list_queues().await.unwrap();

    assert_eq!(queues, sample_queues());
}

#[tokio::test]
async fn deletes_literal_names_in_order() {
    let broker = StubBroker::start(sample_queues()).await;
    let client = ManagementClient::from_url(&broker.base_url).unwrap();

    let result = bulk::execute("/", &names(&["logs", "logs-eu"]), &client).await;

    assert!(result.all_succeeded);
    assert_eq!(
        broker.deletions(),
        vec![
            ("/".to_string(), "logs".to_string()),
            ("/".to_string(), "logs-eu".to_string()),
        ]
    );
    assert_eq!(broker.remaining_queues(), vec![sample_queues()[2].clone()]);
}

#[tokio::test]
async fn default_vhost_is_percent_encoded_on_the_wire() {
    // Both queues live in vhost "/", which must travel as %2F and
    // still route to one path segment.
    let broker = StubBroker::start(sample_queues()).await;
    let client = ManagementClient::from_url(&broker.base_url).unwrap();

    let result = bulk::execute("/", &names(&["logs"]), &client).await;

    assert!(result.all_succeeded);
    assert_eq!(result.outcomes[0].status_code, 204);
}

#[tokio::test]
async fn missing_queue_is_recorded_but_does_not_stop_the_batch() {
    let broker = StubBroker::start(sample_queues()).await;
    let client = ManagementClient::from_url(&broker.base_url).unwrap();

    let result = bulk::execute("/", &names(&["missing", "logs"]), &client).await;

    assert!(!result.all_succeeded);
    assert!(!result.aborted);
    assert_eq!(result.outcomes.len(), 2);
    assert_eq!(result.outcomes[0].status_code, 404);
    assert!(result.outcomes[0].detail.contains("Object Not Found"));
    assert!(result.outcomes[1].succeeded);
    assert_eq!(broker.deletions(), vec![("/".to_string(), "logs".to_string())]);
}

#[tokio::test]
async fn wrong_vhost_yields_not_found() {
    let broker = StubBroker::start(sample_queues()).await;
    let client = ManagementClient::from_url(&broker.base_url).unwrap();

    let result = bulk::execute("staging", &names(&["events"]), &client).await;

    assert!(!result.all_succeeded);
    assert_eq!(result.outcomes[0].status_code, 404);
    assert!(broker.deletions().is_empty());
}

#[tokio::test]
async fn unreachable_broker_aborts_the_batch() {
    let client = ManagementClient::from_url(&unreachable_url()).unwrap();

    let result = bulk::execute("/", &names(&["a", "b", "c"]), &client).await;

    assert!(result.aborted);
    assert_eq!(result.outcomes.len(), 1);
    assert!(!result.outcomes[0].succeeded);
    assert_eq!(result.outcomes[0].status_code, 0);
}

#[tokio::test]
async fn rerun_after_deletion_yields_all_not_found() {
    let broker = StubBroker::start(sample_queues()).await;
    let client = ManagementClient::from_url(&broker.base_url).unwrap();
    let queue_names = names(&["logs", "logs-eu"]);

    let first = bulk::execute("/", &queue_names, &client).await;
    let second = bulk::execute("/", &queue_names, &client).await;

    assert!(first.all_succeeded);
    assert!(!second.all_succeeded);
    assert!(!second.aborted);
    assert!(second.outcomes.iter().all(|o| o.status_code == 404));
}

#[tokio::test]
async fn pattern_selection_feeds_deletion_end_to_end() {
    let broker = StubBroker::start(sample_queues()).await;
    let client = ManagementClient::from_url(&broker.base_url).unwrap();

    let inventory = client.list_queues().await.unwrap();
    let spec = SelectionSpec::Pattern {
        patterns: vec!["log".to_string(), "eu".to_string()],
    };
    let selected = select(&inventory, &spec).unwrap();
    assert_eq!(selected, vec!["logs", "logs-eu", "logs-eu"]);

    let result = bulk::execute("/", &selected, &client).await;

    // The duplicated multi-match entry becomes a second delete attempt
    // that the broker rejects as not found.
    assert!(!result.all_succeeded);
    assert!(!result.aborted);
    assert_eq!(result.outcomes.len(), 3);
    assert!(result.outcomes[0].succeeded);
    assert!(result.outcomes[1].succeeded);
    assert_eq!(result.outcomes[2].status_code, 404);
    assert_eq!(
        broker.deletions(),
        vec![
            ("/".to_string(), "logs".to_string()),
            ("/".to_string(), "logs-eu".to_string()),
        ]
    );
}
