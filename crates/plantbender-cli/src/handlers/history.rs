use anyhow::Result;
use plantbender_runtime::{Config, HumidityViewState};

use super::context::{HandlerContext, connect};
use crate::presentation::presenters::present_history;

pub async fn handle(ctx: &HandlerContext, config: &Config, limit: Option<usize>) -> Result<()> {
    let api = connect(config)?;

    let state = HumidityViewState::spawn(api);
    let snapshot = state.wait_until_loaded().await;

    ctx.render(present_history(&snapshot, config.normalization(), limit))
}
