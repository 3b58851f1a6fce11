//! UI components for SpecsDesk
//!
//! This module contains all user interface components built with Dioxus.

#![allow(non_snake_case)]

pub mod panels;
pub mod sidebar;

use crate::ui::panels::PanelHost;
use crate::ui::sidebar::Sidebar;
use dioxus::prelude::*;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #16161a; color: #e8e4df; }
.app-shell { display: flex; height: 100vh; }
.sidebar { width: 220px; flex: none; padding: 16px 8px; border-right: 1px solid #2a2a30; }
.sidebar-title { font-weight: 600; padding: 0 12px 16px; }
.sidebar ul { list-style: none; margin: 0; padding: 0; }
.menu-row { padding: 6px 12px; border-radius: 8px; cursor: pointer; color: #a8a4a0; }
.menu-row:hover { background: rgba(242,237,231,0.05); color: #e8e4df; }
.menu-row.active { background: rgba(242,237,231,0.08); color: #e8e4df; }
.chevron { display: inline-block; width: 14px; }
.content { flex: 1; overflow-y: auto; padding: 24px; }
.page { display: none; }
.page.active { display: block; }
.spec-row { display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #2a2a30; }
.spec-label { color: #a8a4a0; }
.status { font-size: 12px; color: #8a8680; margin-top: 12px; }
"#;

#[component]
pub fn Layout() -> Element {
    rsx! {
        style { "{STYLE}" }
        div {
            class: "app-shell",
            Sidebar {}
            main {
                class: "content",
                PanelHost {}
            }
        }
    }
}
