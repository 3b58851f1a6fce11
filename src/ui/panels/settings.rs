use dioxus::prelude::*;

use crate::app::AppState;
use crate::navigation::menu;
use crate::storage::settings::{save_settings, AppSettings};

/// Apply an edit, clamp it and persist the result.
fn update_settings(mut settings: Signal<AppSettings>, edit: impl FnOnce(&mut AppSettings)) {
    let mut settings = settings.write();
    edit(&mut settings);
    settings.validate();
    if let Err(error) = save_settings(&settings) {
        tracing::error!("Failed to save settings: {}", error);
    }
}

#[component]
pub fn SettingsPanel() -> Element {
    let settings_signal = use_context::<AppState>().settings;
    let settings = settings_signal.read().clone();
    let timeout_secs = settings.fetch_timeout_secs;
    let attempts = settings.fetch_attempts;
    let backoff_ms = settings.retry_backoff_ms;
    let default_panel = settings.default_panel.clone();
    let panels: Vec<String> = menu::panel_ids()
        .into_iter()
        .map(|panel| panel.as_str().to_string())
        .collect();

    rsx! {
        h2 { "Settings" }

        div {
            class: "spec-row",
            label { class: "spec-label", "Specs request timeout" }
            span { "{timeout_secs} s" }
        }
        input {
            r#type: "range",
            min: "1",
            max: "120",
            value: "{timeout_secs}",
            oninput: move |e| {
                let value = e.value().parse::<u64>().unwrap_or(10);
                update_settings(settings_signal, |settings| settings.fetch_timeout_secs = value);
            },
        }

        div {
            class: "spec-row",
            label { class: "spec-label", "Attempts when the host does not answer" }
            span { "{attempts}" }
        }
        input {
            r#type: "range",
            min: "1",
            max: "5",
            value: "{attempts}",
            oninput: move |e| {
                let value = e.value().parse::<u32>().unwrap_or(2);
                update_settings(settings_signal, |settings| settings.fetch_attempts = value);
            },
        }

        div {
            class: "spec-row",
            label { class: "spec-label", "Pause between attempts" }
            span { "{backoff_ms} ms" }
        }
        input {
            r#type: "range",
            min: "0",
            max: "5000",
            step: "100",
            value: "{backoff_ms}",
            oninput: move |e| {
                let value = e.value().parse::<u64>().unwrap_or(500);
                update_settings(settings_signal, |settings| settings.retry_backoff_ms = value);
            },
        }

        div {
            class: "spec-row",
            label { class: "spec-label", "Start page" }
            select {
                value: "{default_panel}",
                onchange: move |e| {
                    let value = e.value();
                    update_settings(settings_signal, |settings| settings.default_panel = value);
                },
                for panel in panels {
                    option {
                        key: "{panel}",
                        value: "{panel}",
                        selected: panel == default_panel,
                        "{panel}"
                    }
                }
            }
        }

        p { class: "status", "Changes apply the next time SpecsDesk starts." }
    }
}
