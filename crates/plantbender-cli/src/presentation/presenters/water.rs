use plantbender_runtime::{Notification, NotificationLevel};
use plantbender_types::Activation;

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, WaterViewModel,
};

pub fn present_water(
    activation: Activation,
    notification: &Notification,
    checked_humidity: Option<f64>,
) -> CommandResultViewModel<WaterViewModel> {
    let content = WaterViewModel {
        activation,
        payload: activation.as_payload().to_string(),
        message: notification.message.clone(),
        level: notification.level,
        checked_humidity,
    };

    let result = CommandResultViewModel::new(content);
    match notification.level {
        NotificationLevel::Success => {
            let label = if activation.is_start() {
                "Watering started"
            } else {
                "Watering stopped"
            };
            let result = result.with_badge(StatusBadge::success(label));
            if activation.is_start() {
                result.with_suggestion(
                    Guidance::new("Stop the relay when done").with_command(cmd::WATER_STOP),
                )
            } else {
                result
            }
        }
        NotificationLevel::Warning => result
            .with_badge(StatusBadge::warning("Watering not permitted"))
            .with_suggestion(
                Guidance::new("Override the humidity check").with_command(cmd::WATER_START_FORCE),
            ),
        NotificationLevel::Error => result
            .with_badge(StatusBadge::error("Activation failed"))
            .with_suggestion(
                Guidance::new("Check the backend settings").with_command(cmd::CONFIG_SHOW),
            ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_start_suggests_stop() {
        let toast = Notification::success("Request successful with value: 1");
        let result = present_water(Activation::Start, &toast, Some(20.0));
        assert_eq!(result.content.payload, "1");
        assert_eq!(result.suggestions[0].command.as_deref(), Some(cmd::WATER_STOP));
    }

    #[test]
    fn test_rejection_suggests_force() {
        let toast = Notification::warning("Watering is only available below 50% humidity");
        let result = present_water(Activation::Start, &toast, Some(88.0));
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some(cmd::WATER_START_FORCE)
        );
    }
}
