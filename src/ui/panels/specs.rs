use dioxus::prelude::*;

use crate::app::AppState;
use crate::specs::{FetchState, SpecSlot};

#[component]
pub fn SpecsPanel() -> Element {
    let app_state = use_context::<AppState>();
    let display = app_state.specs.read().clone();
    let rows: Vec<(&'static str, String)> = SpecSlot::ALL
        .iter()
        .map(|&slot| (slot.label(), display.slot(slot).to_string()))
        .collect();

    let status = match &*app_state.fetch_state.read() {
        FetchState::Pending => "Collecting computer specs...",
        FetchState::Succeeded(_) => "",
        FetchState::Failed(_) => "Computer specs are unavailable right now.",
    };

    rsx! {
        h2 { "Computer Specs" }
        div {
            for (label, value) in rows {
                div {
                    key: "{label}",
                    class: "spec-row",
                    span { class: "spec-label", "{label}" }
                    span { "{value}" }
                }
            }
        }
        if !status.is_empty() {
            p { class: "status", "{status}" }
        }
    }
}

#[component]
pub fn GraphicsPanel() -> Element {
    let fetch_state = use_context::<AppState>().fetch_state;
    let state = fetch_state.read().clone();

    rsx! {
        h2 { "Graphics" }
        match state {
            FetchState::Pending => rsx! { p { class: "status", "Detecting graphics adapters..." } },
            FetchState::Failed(_) => rsx! { p { class: "status", "Graphics information is unavailable." } },
            FetchState::Succeeded(specs) if specs.gpu_names.is_empty() => rsx! {
                p { class: "status", "No dedicated graphics adapters reported." }
            },
            FetchState::Succeeded(specs) => {
                let directx = specs.directx_version.clone();
                rsx! {
                    ul {
                        for name in specs.gpu_names {
                            li { key: "{name}", "{name}" }
                        }
                    }
                    div {
                        class: "spec-row",
                        span { class: "spec-label", "DirectX" }
                        span { "{directx}" }
                    }
                }
            }
        }
    }
}
