use anyhow::{Result, bail};
use plantbender_runtime::{
    Config, HumidityViewState, WateringToggle, current_humidity, send_activation,
};
use plantbender_types::Activation;
use tracing::info;

use super::context::{HandlerContext, connect};
use crate::args::WaterAction;
use crate::presentation::presenters::present_water;

/// Send one activation. `start` checks the watering rule first unless forced;
/// `stop` is always sent.
pub async fn handle(
    ctx: &HandlerContext,
    config: &Config,
    action: WaterAction,
    force: bool,
) -> Result<()> {
    let api = connect(config)?;
    let activation = Activation::from(action);

    let mut checked_humidity = None;
    let notification = if activation.is_start() && !force {
        let state = HumidityViewState::spawn(api.clone());
        let snapshot = state.wait_until_loaded().await;
        let humidity = current_humidity(&snapshot.records, config.normalization());
        checked_humidity = Some(humidity);

        WateringToggle::new().press(api.as_ref(), humidity).await
    } else {
        if force {
            info!(%activation, "humidity check skipped");
        }
        send_activation(api.as_ref(), activation).await
    };

    let succeeded = notification.is_success();
    let message = notification.message.clone();
    ctx.render(present_water(activation, &notification, checked_humidity))?;

    if !succeeded {
        bail!(message);
    }
    Ok(())
}
