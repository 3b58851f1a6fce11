//! Sidebar navigation
//!
//! Tracks the selected menu item, expanded submenus and the visible content panel.

pub mod controller;
pub mod menu;
pub mod tree;

pub use controller::{Activation, NavigationController};
pub use tree::{ItemId, MenuItem, MenuNode, Panel, PanelId};

use thiserror::Error;

/// The menu markup and the navigation model disagree.
///
/// These are wiring defects, never runtime conditions to recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralMismatch {
    #[error("Menu item not found: {0}")]
    UnknownItem(ItemId),
    #[error("Menu item {item} references unknown panel {panel}")]
    UnknownPanel { item: ItemId, panel: PanelId },
    #[error("Duplicate menu item: {0}")]
    DuplicateItem(ItemId),
    #[error("Duplicate panel: {0}")]
    DuplicatePanel(PanelId),
    #[error("Default panel not found: {0}")]
    UnknownDefaultPanel(PanelId),
    #[error("Menu item {0} has neither children nor a panel")]
    InertItem(ItemId),
}
