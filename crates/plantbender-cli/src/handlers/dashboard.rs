//! Dashboard handler
//!
//! Owns the domain side of the TUI:
//! - the view-state holder (one fetch per dashboard session)
//! - the watering toggle and the current notification
//! - activation requests, each spawned as its own task
//!
//! The renderer pulls a fresh `DashboardViewModel` every tick.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use plantbender_client::PlantApi;
use plantbender_runtime::{
    Config, HumidityViewState, Notification, WateringToggle, current_humidity, send_activation,
};
use plantbender_types::Normalization;
use tokio::runtime::Handle;
use tracing::{debug, info};

use super::context::connect;
use crate::args::hints::cmd;
use crate::presentation::presenters::build_dashboard_view_model;
use crate::presentation::renderers::{DashboardSource, TuiRenderer};
use crate::presentation::view_models::DashboardViewModel;

struct DashboardHandler {
    state: HumidityViewState,
    api: Arc<dyn PlantApi>,
    runtime: Handle,
    normalization: Normalization,
    toggle: WateringToggle,
    notification: Option<Notification>,
    results_tx: Sender<Notification>,
    results_rx: Receiver<Notification>,
    frame: u64,
}

impl DashboardHandler {
    fn new(api: Arc<dyn PlantApi>, runtime: Handle, normalization: Normalization) -> Self {
        let state = {
            let _enter = runtime.enter();
            HumidityViewState::spawn(api.clone())
        };
        let (results_tx, results_rx) = mpsc::channel();

        Self {
            state,
            api,
            runtime,
            normalization,
            toggle: WateringToggle::new(),
            notification: None,
            results_tx,
            results_rx,
            frame: 0,
        }
    }

    /// Latest activation outcome wins; expired toasts are dropped.
    fn refresh_notification(&mut self, now: Instant) {
        while let Ok(notification) = self.results_rx.try_recv() {
            self.notification = Some(notification);
        }
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.notification = None;
        }
    }
}

impl DashboardSource for DashboardHandler {
    fn view_model(&mut self) -> DashboardViewModel {
        self.refresh_notification(Instant::now());
        self.frame = self.frame.wrapping_add(1);

        let snapshot = self.state.snapshot();
        build_dashboard_view_model(
            &snapshot,
            self.normalization,
            &self.toggle,
            self.notification.as_ref(),
            self.frame,
        )
    }

    fn press_toggle(&mut self) {
        let snapshot = self.state.snapshot();
        if snapshot.is_loading {
            debug!("toggle pressed while loading; ignored");
            return;
        }

        let humidity = current_humidity(&snapshot.records, self.normalization);
        match self.toggle.flip(humidity) {
            Ok(activation) => {
                info!(%activation, humidity, "watering toggled");
                let api = self.api.clone();
                let tx = self.results_tx.clone();
                self.runtime.spawn(async move {
                    let notification = send_activation(api.as_ref(), activation).await;
                    let _ = tx.send(notification);
                });
            }
            Err(rejection) => self.notification = Some(rejection),
        }
    }
}

pub fn handle(config: &Config, runtime: Handle) -> Result<()> {
    if !io::stdout().is_terminal() {
        bail!(
            "the dashboard needs an interactive terminal; try `{}` or `{}`",
            cmd::STATUS,
            cmd::HISTORY
        );
    }

    let api: Arc<dyn PlantApi> = connect(config)?;
    let mut handler = DashboardHandler::new(api, runtime, config.normalization());

    TuiRenderer::new().run(&mut handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantbender_runtime::NotificationLevel;
    use plantbender_testing::{MockApi, fixtures};
    use std::time::Duration;

    fn handler_with(api: MockApi) -> (tokio::runtime::Runtime, Arc<MockApi>, DashboardHandler) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let api = Arc::new(api);
        let handler = DashboardHandler::new(
            api.clone(),
            runtime.handle().clone(),
            Normalization::default(),
        );
        (runtime, api, handler)
    }

    fn wait_loaded(runtime: &tokio::runtime::Runtime, handler: &DashboardHandler) {
        runtime.block_on(handler.state.wait_until_loaded());
    }

    fn wait_for_notification(handler: &mut DashboardHandler) -> Notification {
        for _ in 0..200 {
            if let Ok(n) = handler.results_rx.recv_timeout(Duration::from_millis(10)) {
                return n;
            }
        }
        panic!("no activation result");
    }

    #[test]
    fn test_press_on_dry_soil_sends_start() {
        let records = fixtures::records_from(&fixtures::dry_history());
        let (runtime, api, mut handler) = handler_with(MockApi::with_records(records));
        wait_loaded(&runtime, &handler);

        handler.press_toggle();
        let notification = wait_for_notification(&mut handler);

        assert_eq!(notification.message, "Request successful with value: 1");
        assert_eq!(api.activations(), vec![plantbender_types::Activation::Start]);
        assert_eq!(handler.view_model().toggle.label, "Stop watering");
    }

    #[test]
    fn test_press_on_wet_soil_is_rejected_locally() {
        let records = fixtures::records_from(&fixtures::wet_history());
        let (runtime, api, mut handler) = handler_with(MockApi::with_records(records));
        wait_loaded(&runtime, &handler);

        handler.press_toggle();
        let vm = handler.view_model();

        assert_eq!(
            vm.notification.map(|n| n.level),
            Some(NotificationLevel::Warning)
        );
        assert!(api.activations().is_empty());
    }

    #[test]
    fn test_press_while_loading_is_ignored() {
        let (_runtime, api, mut handler) = handler_with(MockApi::with_records(vec![]).gated());

        handler.press_toggle();
        assert!(handler.view_model().notification.is_none());
        assert!(api.activations().is_empty());
        api.release();
    }

    #[test]
    fn test_notification_expires() {
        let (_runtime, _api, mut handler) = handler_with(MockApi::with_records(vec![]));
        let toast = Notification::error("Request failed").with_ttl(Duration::from_millis(5));
        let created = toast.created_at;
        handler.notification = Some(toast);

        handler.refresh_notification(created + Duration::from_millis(1));
        assert!(handler.notification.is_some());
        handler.refresh_notification(created + Duration::from_millis(5));
        assert!(handler.notification.is_none());
    }
}
