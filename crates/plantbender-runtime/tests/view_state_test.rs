use std::sync::Arc;
use std::time::Duration;

use plantbender_client::{HttpPlantApi, PlantApi};
use plantbender_runtime::{
    FetchPhase, HumidityViewState, NotificationLevel, WateringToggle, current_humidity,
};
use plantbender_testing::{MockApi, MockServer, fixtures};
use plantbender_types::{Activation, Normalization};

#[tokio::test]
async fn test_fetch_of_n_records_is_published() {
    let records = fixtures::records_from(&fixtures::dry_history());
    let api = Arc::new(MockApi::with_records(records));

    let state = HumidityViewState::spawn(api.clone());
    let snapshot = state.wait_until_loaded().await;

    assert_eq!(snapshot.records.len(), 4);
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.phase(), FetchPhase::Loaded);
    assert_eq!(api.fetch_calls(), 1);
}

#[tokio::test]
async fn test_network_failure_yields_empty_result() {
    let state = HumidityViewState::spawn(Arc::new(MockApi::failing_network("dns lookup failed")));
    let snapshot = state.wait_until_loaded().await;

    assert!(snapshot.records.is_empty());
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.phase(), FetchPhase::Empty);
}

#[tokio::test]
async fn test_status_error_is_indistinguishable_from_network_failure() {
    let by_status = HumidityViewState::spawn(Arc::new(MockApi::failing_status(500)));
    let by_network = HumidityViewState::spawn(Arc::new(MockApi::failing_network("reset")));

    let a = by_status.wait_until_loaded().await;
    let b = by_network.wait_until_loaded().await;

    assert_eq!(a.records.len(), b.records.len());
    assert_eq!(a.is_loading, b.is_loading);
    assert_eq!(a.phase(), b.phase());
}

#[tokio::test]
async fn test_malformed_payload_yields_empty_result() {
    let state = HumidityViewState::spawn(Arc::new(MockApi::malformed()));
    let snapshot = state.wait_until_loaded().await;
    assert_eq!(snapshot.phase(), FetchPhase::Empty);
}

#[tokio::test]
async fn test_receivers_observe_completion() {
    let records = fixtures::records_from(&fixtures::wet_history());
    let api = Arc::new(MockApi::with_records(records).gated());
    let state = HumidityViewState::spawn(api.clone());

    let mut records_rx = state.records();
    let mut loading_rx = state.loading();
    assert!(*loading_rx.borrow_and_update());

    assert!(records_rx.borrow_and_update().is_empty());
    assert!(!records_rx.has_changed().unwrap_or(true));

    api.release();
    state.wait_until_loaded().await;

    // Senders are dropped with the finished task; last values stay readable.
    assert!(!*loading_rx.borrow_and_update());
    assert_eq!(records_rx.borrow_and_update().len(), 2);
}

#[tokio::test]
async fn test_cancel_stops_in_flight_fetch() {
    let records = fixtures::records_from(&fixtures::single_reading());
    let api = Arc::new(MockApi::with_records(records).gated());
    let state = HumidityViewState::spawn(api.clone());

    state.cancel();
    let snapshot = tokio::time::timeout(Duration::from_secs(2), state.wait_until_loaded())
        .await
        .expect("cancelled fetch should clear loading");

    assert!(!snapshot.is_loading);
    assert!(snapshot.records.is_empty());
}

#[tokio::test]
async fn test_dropping_holder_cancels_fetch() {
    let api = Arc::new(MockApi::with_records(vec![]).gated());
    let state = HumidityViewState::spawn(api.clone());
    let mut loading = state.loading();
    drop(state);

    tokio::time::timeout(Duration::from_secs(2), loading.wait_for(|l| !*l))
        .await
        .expect("loading should clear after drop")
        .ok();
}

#[tokio::test]
async fn test_end_to_end_over_http() -> anyhow::Result<()> {
    let server = MockServer::with_records(fixtures::single_reading());
    let api = Arc::new(HttpPlantApi::new(server.api_config())?);

    let state = HumidityViewState::spawn(api.clone());
    let snapshot = state.wait_until_loaded().await;

    let latest = snapshot.latest().expect("one record");
    assert_eq!(latest.percentage(Normalization::default()).to_string(), "50.05");
    assert_eq!(latest.date_label_in(&chrono::Utc), "2024-06-01");
    assert_eq!(server.records_hits(), 1);

    // 50.05% is above the threshold: the toggle refuses without sending.
    let humidity = current_humidity(&snapshot.records, Normalization::default());
    let toast = WateringToggle::new().press(api.as_ref(), humidity).await;
    assert_eq!(toast.level, NotificationLevel::Warning);
    assert!(server.activations().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_watering_round_trip_over_http() -> anyhow::Result<()> {
    let server = MockServer::with_records(fixtures::dry_history());
    let api = HttpPlantApi::new(server.api_config())?;

    let records = api.fetch_records().await?;
    let humidity = current_humidity(&records, Normalization::default());

    let mut toggle = WateringToggle::new();
    let toast = toggle.press(&api, humidity).await;
    assert_eq!(toast.message, "Request successful with value: 1");
    assert_eq!(toggle.next_activation(), Activation::Stop);

    server.fail_activations(503);
    let toast = toggle.press(&api, humidity).await;
    assert_eq!(toast.message, "Request failed");

    let bodies: Vec<String> = server.activations().into_iter().map(|a| a.body).collect();
    assert_eq!(bodies, vec!["\"1\"", "\"0\""]);
    Ok(())
}
