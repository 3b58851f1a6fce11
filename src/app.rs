//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::navigation::{menu, NavigationController};
use crate::specs::{DisplaySink, FetchState, LoaderConfig, LogDiagnostics, SpecsDisplay, SpecsLoader};
use crate::storage::settings::{load_settings, AppSettings};
use crate::system::host::LocalSpecsProvider;
use crate::ui::Layout;
use dioxus::prelude::*;

/// Global application state shared across components
#[derive(Clone, Copy)]
pub struct AppState {
    pub settings: Signal<AppSettings>,
    /// Menu tree and panels; written only through the controller
    pub navigation: Signal<NavigationController>,
    /// Display slots of the specs panel
    pub specs: Signal<SpecsDisplay>,
    pub fetch_state: Signal<FetchState>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let default_panel = menu::resolve_default_panel(&settings.default_panel);

        // A mismatch here is a wiring defect in the menu definition
        let navigation =
            NavigationController::initialize(menu::default_menu(), menu::panel_ids(), default_panel)
                .unwrap_or_else(|e| panic!("Sidebar menu does not match the panels: {}", e));

        tracing::info!("AppState initialized");
        Self {
            settings: Signal::new(settings),
            navigation: Signal::new(navigation),
            specs: Signal::new(SpecsDisplay::placeholder()),
            fetch_state: Signal::new(FetchState::Pending),
        }
    }
}

/// Display sink writing every slot in one signal update
struct SignalSink(Signal<SpecsDisplay>);

impl DisplaySink for SignalSink {
    fn present(&mut self, display: SpecsDisplay) {
        self.0.set(display);
    }
}

#[component]
pub fn App() -> Element {
    let app_state = use_context_provider(AppState::new);

    // Effects run after the first render, once the specs slots exist
    use_effect(move || {
        let config = LoaderConfig::from(&*app_state.settings.peek());
        let mut sink = SignalSink(app_state.specs);
        let mut fetch_state = app_state.fetch_state;

        spawn(async move {
            let mut loader = SpecsLoader::new(config);
            let settled = loader
                .load(&LocalSpecsProvider, &mut sink, &mut LogDiagnostics)
                .await
                .clone();
            fetch_state.set(settled);
        });
    });

    rsx! {
        Layout {}
    }
}
