use plantbender_client::{ApiConfig, ApiError, HttpPlantApi, PlantApi};
use plantbender_testing::fixtures;
use plantbender_testing::server::{MockServer, unreachable_base_url};
use plantbender_types::{Activation, Normalization};
use std::time::Duration;

#[tokio::test]
async fn test_fetch_records_decodes_payload() -> anyhow::Result<()> {
    let server = MockServer::with_records(fixtures::dry_history());
    let api = HttpPlantApi::new(server.api_config())?;

    let records = api.fetch_records().await?;

    assert_eq!(records.len(), 4);
    assert_eq!(records[1].raw_value(), None);
    assert_eq!(records[3].raw_value(), Some(300));
    assert_eq!(
        records[3].percentage(Normalization::default()).to_string(),
        "29.33"
    );
    assert_eq!(server.records_hits(), 1);
    Ok(())
}

#[tokio::test]
async fn test_fetch_records_status_error() -> anyhow::Result<()> {
    let server = MockServer::with_records(fixtures::single_reading());
    server.fail_records(503);
    let api = HttpPlantApi::new(server.api_config())?;

    let err = api.fetch_records().await.unwrap_err();
    assert!(matches!(err, ApiError::Status(s) if s.as_u16() == 503));
    assert!(!err.is_network());
    Ok(())
}

#[tokio::test]
async fn test_wrong_code_is_rejected() -> anyhow::Result<()> {
    let server = MockServer::with_records(fixtures::single_reading());
    let config = ApiConfig::new(server.base_url(), "wrong", "wrong");
    let api = HttpPlantApi::new(config)?;

    let err = api.fetch_records().await.unwrap_err();
    assert!(matches!(err, ApiError::Status(s) if s.as_u16() == 401));
    Ok(())
}

#[tokio::test]
async fn test_malformed_payload_is_decode_error() -> anyhow::Result<()> {
    let server = MockServer::start();
    server.set_records_body(r#"{"error": "maintenance"}"#);
    let api = HttpPlantApi::new(server.api_config())?;

    let err = api.fetch_records().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() -> anyhow::Result<()> {
    let config = ApiConfig::new(unreachable_base_url(), "r", "w")
        .with_timeout(Duration::from_secs(2));
    let api = HttpPlantApi::new(config)?;

    let err = api.fetch_records().await.unwrap_err();
    assert!(err.is_network(), "got {:?}", err);
    assert!(!err.reason().contains("code="));
    Ok(())
}

#[tokio::test]
async fn test_send_activation_posts_json_string() -> anyhow::Result<()> {
    let server = MockServer::start();
    let api = HttpPlantApi::new(server.api_config())?;

    api.send_activation(Activation::Start).await?;
    api.send_activation(Activation::Stop).await?;

    let received = server.activations();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].body, "\"1\"");
    assert_eq!(received[1].body, "\"0\"");
    assert_eq!(received[0].code.as_deref(), Some(fixtures::ACTIVATION_CODE));
    assert_eq!(received[0].content_type.as_deref(), Some("application/json"));
    Ok(())
}

#[tokio::test]
async fn test_send_activation_rejected() -> anyhow::Result<()> {
    let server = MockServer::start();
    server.fail_activations(500);
    let api = HttpPlantApi::new(server.api_config())?;

    let err = api.send_activation(Activation::Start).await.unwrap_err();
    assert!(matches!(err, ApiError::Status(s) if s.as_u16() == 500));
    assert_eq!(server.activations().len(), 1);
    Ok(())
}
