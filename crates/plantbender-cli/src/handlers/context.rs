use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use plantbender_client::HttpPlantApi;
use plantbender_runtime::{CONFIG_FILE, Config};
use serde::Serialize;

use crate::args::OutputFormat;
use crate::args::hints::cmd;
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub data_dir: PathBuf,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, data_dir: PathBuf) -> Self {
        Self { format, data_dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    /// `config.toml` plus environment overrides.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(&self.data_dir)?)
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display + Send + Sync,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json);
        renderer.render(view_model)
    }
}

/// Build the HTTP client, refusing to start without access codes.
pub fn connect(config: &Config) -> Result<Arc<HttpPlantApi>> {
    config
        .validate()
        .map_err(|e| anyhow!("{}. Run `{}` first", e, cmd::CONFIG_INIT))?;
    Ok(Arc::new(HttpPlantApi::new(config.api_config())?))
}
