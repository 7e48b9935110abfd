use anyhow::Result;
use plantbender_runtime::Config;

use super::context::HandlerContext;
use crate::presentation::presenters::{present_config_saved, present_config_show};

pub struct ConfigInitArgs {
    pub base_url: Option<String>,
    pub records_code: Option<String>,
    pub activation_code: Option<String>,
    pub scale_max: Option<u32>,
}

/// Update `config.toml` in place; unspecified settings keep their current value.
pub fn init(ctx: &HandlerContext, args: ConfigInitArgs) -> Result<()> {
    let path = ctx.config_path();
    let mut config = Config::load_from(&path)?;

    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    if let Some(code) = args.records_code {
        config.api.records_code = code;
    }
    if let Some(code) = args.activation_code {
        config.api.activation_code = code;
    }
    if let Some(scale_max) = args.scale_max {
        config.display.scale_max = scale_max;
    }

    config.save_to(&path)?;
    ctx.render(present_config_saved(&config, &path))
}

pub fn show(ctx: &HandlerContext) -> Result<()> {
    let config = ctx.load_config()?;
    ctx.render(present_config_show(&config, &ctx.config_path()))
}
