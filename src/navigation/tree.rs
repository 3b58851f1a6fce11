//! Menu tree model
//!
//! Identity types plus the menu items and panels the navigation controller mutates.

use std::fmt;

/// Stable key of a menu item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a content panel
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declarative description of one menu entry, as written by the markup layer.
#[derive(Debug, Clone)]
pub struct MenuNode {
    pub id: ItemId,
    pub label: String,
    pub panel: Option<PanelId>,
    pub children: Vec<MenuNode>,
    /// Initial expansion of a submenu header
    pub expanded: bool,
}

impl MenuNode {
    /// A leaf that shows `panel` when activated
    pub fn leaf(id: &str, label: impl Into<String>, panel: &str) -> Self {
        Self {
            id: ItemId::from(id),
            label: label.into(),
            panel: Some(PanelId::from(panel)),
            children: Vec::new(),
            expanded: false,
        }
    }

    /// A submenu header that toggles open and closed
    pub fn submenu(id: &str, label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        Self {
            id: ItemId::from(id),
            label: label.into(),
            panel: None,
            children,
            expanded: false,
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn with_panel(mut self, panel: &str) -> Self {
        self.panel = Some(PanelId::from(panel));
        self
    }
}

/// A node of the initialized navigation tree
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub(crate) id: ItemId,
    pub(crate) label: String,
    pub(crate) panel: Option<PanelId>,
    pub(crate) children: Vec<ItemId>,
    pub(crate) parent: Option<ItemId>,
    pub(crate) depth: usize,
    pub(crate) expanded: bool,
    pub(crate) selected: bool,
}

impl MenuItem {
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn panel(&self) -> Option<&PanelId> {
        self.panel.as_ref()
    }

    pub fn children(&self) -> &[ItemId] {
        &self.children
    }

    pub fn parent(&self) -> Option<&ItemId> {
        self.parent.as_ref()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Submenu headers win over panels when an item carries both.
    pub fn is_submenu(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_submenu() && self.panel.is_some()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// A content view shown or hidden by navigation
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub(crate) id: PanelId,
    pub(crate) visible: bool,
}

impl Panel {
    pub fn id(&self) -> &PanelId {
        &self.id
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
