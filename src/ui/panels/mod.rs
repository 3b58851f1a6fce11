pub mod settings;
pub mod specs;

use crate::app::AppState;
use crate::navigation::{menu, PanelId};
use crate::ui::panels::settings::SettingsPanel;
use crate::ui::panels::specs::{GraphicsPanel, SpecsPanel};
use dioxus::prelude::*;

/// Renders every panel; only the one the navigation marks visible is shown.
#[component]
pub fn PanelHost() -> Element {
    let navigation = use_context::<AppState>().navigation;
    let panels: Vec<(PanelId, bool)> = navigation
        .read()
        .panels()
        .iter()
        .map(|panel| (panel.id().clone(), panel.is_visible()))
        .collect();

    rsx! {
        for (id, visible) in panels {
            section {
                key: "{id}",
                class: if visible { "page active" } else { "page" },
                hidden: !visible,
                PanelBody { id: id.clone() }
            }
        }
    }
}

#[component]
fn PanelBody(id: PanelId) -> Element {
    match id.as_str() {
        menu::HOME => rsx! { HomePanel {} },
        menu::SPECS => rsx! { SpecsPanel {} },
        menu::GPU => rsx! { GraphicsPanel {} },
        menu::SETTINGS => rsx! { SettingsPanel {} },
        menu::ABOUT => rsx! { AboutPanel {} },
        other => {
            tracing::warn!("No view registered for panel {}", other);
            rsx! {}
        }
    }
}

#[component]
fn HomePanel() -> Element {
    let specs = use_context::<AppState>().specs;
    let os = specs.read().os.clone();
    let cpu = specs.read().cpu.clone();

    rsx! {
        h2 { "Welcome" }
        p { "Browse your computer's details from the menu on the left." }
        div {
            class: "spec-row",
            span { class: "spec-label", "Operating System" }
            span { "{os}" }
        }
        div {
            class: "spec-row",
            span { class: "spec-label", "Processor" }
            span { "{cpu}" }
        }
    }
}

#[component]
fn AboutPanel() -> Element {
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        h2 { "About" }
        p { "SpecsDesk {version}" }
        p { class: "status", "Shows the operating system, processor, memory, storage and graphics of this machine." }
    }
}
