use std::path::Path;

use plantbender_client::config::mask;
use plantbender_runtime::Config;

use crate::args::hints::cmd;
use crate::presentation::formatters;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, StatusBadge,
};

fn config_view_model(config: &Config, path: &Path) -> ConfigViewModel {
    ConfigViewModel {
        config_path: path.display().to_string(),
        file_exists: path.exists(),
        base_url: config.api.base_url.clone(),
        records_code: mask(&config.api.records_code),
        activation_code: mask(&config.api.activation_code),
        timeout_secs: config.api.timeout_secs,
        scale_max: config.display.scale_max,
        unit: formatters::unit_of(config.normalization()),
    }
}

pub fn present_config_show(config: &Config, path: &Path) -> CommandResultViewModel<ConfigViewModel> {
    let result = CommandResultViewModel::new(config_view_model(config, path));

    match config.validate() {
        Ok(()) => result
            .with_badge(StatusBadge::success("Configuration is complete"))
            .with_suggestion(Guidance::new("Check the plant").with_command(cmd::STATUS)),
        Err(err) => result
            .with_badge(StatusBadge::warning(err.to_string()))
            .with_suggestion(Guidance::new("Set the access codes").with_command(cmd::CONFIG_INIT)),
    }
}

pub fn present_config_saved(config: &Config, path: &Path) -> CommandResultViewModel<ConfigViewModel> {
    let result = CommandResultViewModel::new(config_view_model(config, path))
        .with_badge(StatusBadge::success(format!("Saved {}", path.display())));

    if config.validate().is_ok() {
        result.with_suggestion(Guidance::new("View the history").with_command(cmd::HISTORY))
    } else {
        result.with_suggestion(Guidance::new("Set the access codes").with_command(cmd::CONFIG_INIT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_masked() {
        let mut config = Config::default();
        config.api.records_code = "abcdefgh".to_string();
        let result = present_config_show(&config, Path::new("/nonexistent/config.toml"));

        assert_eq!(result.content.records_code, "abcd****");
        assert_eq!(result.content.activation_code, "(not set)");
        assert!(!result.content.file_exists);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some(cmd::CONFIG_INIT)
        );
    }
}
