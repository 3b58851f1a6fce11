//! Sidebar menu definition

use crate::navigation::tree::{MenuNode, PanelId};

pub const HOME: &str = "home";
pub const SPECS: &str = "specs";
pub const GPU: &str = "gpu";
pub const SETTINGS: &str = "settings";
pub const ABOUT: &str = "about";

/// Panels in display order
pub fn panel_ids() -> Vec<PanelId> {
    [HOME, SPECS, GPU, SETTINGS, ABOUT]
        .into_iter()
        .map(PanelId::from)
        .collect()
}

pub fn default_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::leaf("home", "Home", HOME),
        MenuNode::submenu(
            "system",
            "System",
            vec![
                MenuNode::leaf("specs", "Computer Specs", SPECS),
                MenuNode::submenu(
                    "graphics",
                    "Graphics",
                    vec![MenuNode::leaf("gpu", "GPU", GPU)],
                ),
            ],
        )
        .expanded(true),
        MenuNode::leaf("settings", "Settings", SETTINGS),
        MenuNode::leaf("about", "About", ABOUT),
    ]
}

/// Resolve the configured default panel, falling back to home for unknown names.
pub fn resolve_default_panel(configured: &str) -> PanelId {
    let configured = PanelId::from(configured);
    if panel_ids().contains(&configured) {
        configured
    } else {
        tracing::warn!("Unknown default panel '{}', falling back to {}", configured, HOME);
        PanelId::from(HOME)
    }
}
