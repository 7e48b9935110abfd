use anyhow::Result;
use plantbender_runtime::{Config, HumidityViewState};

use super::context::{HandlerContext, connect};
use crate::presentation::presenters::present_status;

pub async fn handle(ctx: &HandlerContext, config: &Config) -> Result<()> {
    let api = connect(config)?;

    let state = HumidityViewState::spawn(api);
    let snapshot = state.wait_until_loaded().await;

    ctx.render(present_status(&snapshot, config.normalization()))
}
