//! Navigation state machine
//!
//! Two independent axes: per-submenu expansion (a flip-flop per header) and the
//! single active leaf, which decides the one visible panel.

use std::collections::HashMap;

use crate::navigation::tree::{ItemId, MenuItem, MenuNode, Panel, PanelId};
use crate::navigation::StructuralMismatch;

/// Outcome of a contained activation. Only the activated item changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A submenu header flipped its expansion flag
    Toggled { item: ItemId, expanded: bool },
    /// A leaf became the active item and its panel the visible one
    Selected { item: ItemId, panel: PanelId },
}

/// Owns the menu tree and the panels.
///
/// Constructed once per session by [`NavigationController::initialize`]. There is one
/// value per registration and it cannot be cloned; re-initializing means dropping it
/// with [`teardown`] and building a new one.
///
/// [`teardown`]: NavigationController::teardown
#[derive(Debug)]
pub struct NavigationController {
    /// Depth-first order of the menu markup
    items: Vec<MenuItem>,
    index: HashMap<ItemId, usize>,
    roots: Vec<ItemId>,
    panels: Vec<Panel>,
    panel_index: HashMap<PanelId, usize>,
    default_panel: PanelId,
    selected: Option<usize>,
    visible: usize,
}

impl NavigationController {
    /// Build the tree, register one listener per interactive item and show the default panel.
    pub fn initialize(
        menu: Vec<MenuNode>,
        panels: Vec<PanelId>,
        default_panel: PanelId,
    ) -> Result<Self, StructuralMismatch> {
        let mut panel_index = HashMap::with_capacity(panels.len());
        let mut panel_list = Vec::with_capacity(panels.len());
        for id in panels {
            if panel_index.insert(id.clone(), panel_list.len()).is_some() {
                return Err(StructuralMismatch::DuplicatePanel(id));
            }
            panel_list.push(Panel { id, visible: false });
        }

        let visible = *panel_index
            .get(&default_panel)
            .ok_or_else(|| StructuralMismatch::UnknownDefaultPanel(default_panel.clone()))?;
        panel_list[visible].visible = true;

        let mut items = Vec::new();
        let mut index = HashMap::new();
        let roots = menu.iter().map(|node| node.id.clone()).collect();
        for node in menu {
            flatten(node, None, 0, &mut items, &mut index)?;
        }

        for item in &items {
            if item.is_submenu() {
                if item.panel.is_some() {
                    tracing::warn!(
                        "Menu item {} has both children and a panel; it acts as a submenu header",
                        item.id
                    );
                }
                continue;
            }
            match &item.panel {
                Some(panel) if !panel_index.contains_key(panel) => {
                    return Err(StructuralMismatch::UnknownPanel {
                        item: item.id.clone(),
                        panel: panel.clone(),
                    });
                }
                Some(_) => {}
                None => return Err(StructuralMismatch::InertItem(item.id.clone())),
            }
        }

        tracing::info!(
            "Navigation initialized: {} menu items, {} panels, default panel {}",
            items.len(),
            panel_list.len(),
            default_panel
        );

        Ok(Self {
            items,
            index,
            roots,
            panels: panel_list,
            panel_index,
            default_panel,
            selected: None,
            visible,
        })
    }

    /// Consume and drop the controller. A new one must be initialized to navigate again.
    pub fn teardown(self) {
        tracing::debug!("Navigation torn down ({} listeners released)", self.listener_count());
    }

    /// Handle a click on a menu item.
    ///
    /// The effect is contained to `id`: ancestors and siblings are never toggled.
    pub fn on_item_activated(&mut self, id: &ItemId) -> Result<Activation, StructuralMismatch> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| StructuralMismatch::UnknownItem(id.clone()))?;

        if self.items[position].is_submenu() {
            let item = &mut self.items[position];
            item.expanded = !item.expanded;
            tracing::debug!("Submenu {} expanded: {}", item.id, item.expanded);
            return Ok(Activation::Toggled {
                item: item.id.clone(),
                expanded: item.expanded,
            });
        }

        let panel = self.items[position]
            .panel
            .clone()
            .ok_or_else(|| StructuralMismatch::InertItem(id.clone()))?;
        let target = *self
            .panel_index
            .get(&panel)
            .ok_or_else(|| StructuralMismatch::UnknownPanel {
                item: id.clone(),
                panel: panel.clone(),
            })?;

        for item in &mut self.items {
            item.selected = false;
        }
        self.items[position].selected = true;
        self.selected = Some(position);

        for panel in &mut self.panels {
            panel.visible = false;
        }
        self.panels[target].visible = true;
        self.visible = target;

        tracing::debug!("Selected {} -> panel {}", id, panel);
        Ok(Activation::Selected {
            item: id.clone(),
            panel,
        })
    }

    pub fn item(&self, id: &ItemId) -> Option<&MenuItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    /// All items in depth-first menu order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn roots(&self) -> &[ItemId] {
        &self.roots
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.selected.map(|position| &self.items[position])
    }

    pub fn visible_panel(&self) -> &PanelId {
        &self.panels[self.visible].id
    }

    pub fn default_panel(&self) -> &PanelId {
        &self.default_panel
    }

    pub fn is_panel_visible(&self, id: &PanelId) -> bool {
        self.panel_index
            .get(id)
            .map(|&position| self.panels[position].visible)
            .unwrap_or(false)
    }

    /// Number of items that react to activation (headers and leaves)
    pub fn listener_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.is_submenu() || item.is_leaf())
            .count()
    }
}

fn flatten(
    node: MenuNode,
    parent: Option<&ItemId>,
    depth: usize,
    items: &mut Vec<MenuItem>,
    index: &mut HashMap<ItemId, usize>,
) -> Result<(), StructuralMismatch> {
    if index.contains_key(&node.id) {
        return Err(StructuralMismatch::DuplicateItem(node.id));
    }

    let position = items.len();
    index.insert(node.id.clone(), position);
    items.push(MenuItem {
        id: node.id.clone(),
        label: node.label,
        panel: node.panel,
        children: node.children.iter().map(|child| child.id.clone()).collect(),
        parent: parent.cloned(),
        depth,
        expanded: node.expanded,
        selected: false,
    });

    for child in node.children {
        flatten(child, Some(&node.id), depth + 1, items, index)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> ItemId {
        ItemId::from(value)
    }

    fn panel(value: &str) -> PanelId {
        PanelId::from(value)
    }

    fn sample() -> NavigationController {
        let menu = vec![
            MenuNode::leaf("home", "Home", "home"),
            MenuNode::submenu(
                "system",
                "System",
                vec![
                    MenuNode::leaf("specs", "Specs", "specs"),
                    MenuNode::submenu(
                        "graphics",
                        "Graphics",
                        vec![MenuNode::leaf("gpu", "GPU", "gpu")],
                    ),
                ],
            ),
            MenuNode::submenu(
                "help",
                "Help",
                vec![MenuNode::leaf("about", "About", "about")],
            ),
        ];
        let panels = ["home", "specs", "gpu", "about"]
            .into_iter()
            .map(PanelId::from)
            .collect();
        NavigationController::initialize(menu, panels, panel("home")).unwrap()
    }

    fn selected_count(nav: &NavigationController) -> usize {
        nav.items().iter().filter(|item| item.is_selected()).count()
    }

    fn visible_count(nav: &NavigationController) -> usize {
        nav.panels().iter().filter(|panel| panel.is_visible()).count()
    }

    fn snapshot(nav: &NavigationController) -> (Vec<MenuItem>, Vec<Panel>) {
        (nav.items().to_vec(), nav.panels().to_vec())
    }

    fn expansion(nav: &NavigationController) -> Vec<bool> {
        nav.items().iter().map(|item| item.is_expanded()).collect()
    }

    #[test]
    fn test_default_panel_visible_before_selection() {
        let nav = sample();
        assert_eq!(nav.visible_panel(), &panel("home"));
        assert_eq!(visible_count(&nav), 1);
        assert_eq!(selected_count(&nav), 0);
        assert!(nav.selected_item().is_none());
    }

    #[test]
    fn test_items_are_depth_first() {
        let nav = sample();
        let order: Vec<&str> = nav.items().iter().map(|item| item.id().as_str()).collect();
        assert_eq!(
            order,
            vec!["home", "system", "specs", "graphics", "gpu", "help", "about"]
        );
        assert_eq!(nav.roots(), &[id("home"), id("system"), id("help")]);
        assert_eq!(nav.item(&id("gpu")).unwrap().depth(), 2);
        assert_eq!(nav.item(&id("gpu")).unwrap().parent(), Some(&id("graphics")));
        assert_eq!(nav.listener_count(), 7);
    }

    #[test]
    fn test_leaf_activation_selects_and_shows_panel() {
        let mut nav = sample();
        let activation = nav.on_item_activated(&id("specs")).unwrap();

        assert_eq!(
            activation,
            Activation::Selected {
                item: id("specs"),
                panel: panel("specs")
            }
        );
        assert_eq!(nav.selected_item().unwrap().id(), &id("specs"));
        assert!(nav.is_panel_visible(&panel("specs")));
        assert!(!nav.is_panel_visible(&panel("home")));
    }

    #[test]
    fn test_single_selection_over_leaf_sequences() {
        let mut nav = sample();
        let leaves = ["home", "specs", "gpu", "about"];

        // Walk a long, irregular sequence of leaf clicks
        for step in 0..64usize {
            let leaf = leaves[(step * 7 + step / 3) % leaves.len()];
            nav.on_item_activated(&id(leaf)).unwrap();

            assert_eq!(selected_count(&nav), 1);
            assert_eq!(visible_count(&nav), 1);
            let selected = nav.selected_item().unwrap();
            assert_eq!(selected.id(), &id(leaf));
            assert_eq!(selected.panel(), Some(nav.visible_panel()));
        }
    }

    #[test]
    fn test_header_activation_keeps_selection_and_panel() {
        let mut nav = sample();
        nav.on_item_activated(&id("gpu")).unwrap();

        for header in ["system", "graphics", "help", "system"] {
            let activation = nav.on_item_activated(&id(header)).unwrap();
            assert!(matches!(activation, Activation::Toggled { .. }));
            assert_eq!(nav.selected_item().unwrap().id(), &id("gpu"));
            assert_eq!(nav.visible_panel(), &panel("gpu"));
            assert_eq!(visible_count(&nav), 1);
        }
    }

    #[test]
    fn test_reselecting_same_leaf_is_idempotent() {
        let mut nav = sample();
        nav.on_item_activated(&id("about")).unwrap();
        let once = snapshot(&nav);

        nav.on_item_activated(&id("about")).unwrap();
        assert_eq!(snapshot(&nav), once);
        assert_eq!(nav.visible_panel(), &panel("about"));
    }

    #[test]
    fn test_submenus_toggle_independently() {
        let mut nav = sample();
        let before = expansion(&nav);

        nav.on_item_activated(&id("system")).unwrap();
        assert!(nav.item(&id("system")).unwrap().is_expanded());
        assert!(!nav.item(&id("help")).unwrap().is_expanded());

        nav.on_item_activated(&id("help")).unwrap();
        nav.on_item_activated(&id("help")).unwrap();
        assert!(nav.item(&id("system")).unwrap().is_expanded());
        assert!(!nav.item(&id("help")).unwrap().is_expanded());

        nav.on_item_activated(&id("system")).unwrap();
        assert_eq!(expansion(&nav), before);
    }

    #[test]
    fn test_nested_header_activation_is_contained() {
        let mut nav = sample();
        nav.on_item_activated(&id("system")).unwrap();
        let outer_before = nav.item(&id("system")).unwrap().is_expanded();

        let activation = nav.on_item_activated(&id("graphics")).unwrap();

        assert_eq!(
            activation,
            Activation::Toggled {
                item: id("graphics"),
                expanded: true
            }
        );
        assert_eq!(nav.item(&id("system")).unwrap().is_expanded(), outer_before);
        assert!(!nav.item(&id("help")).unwrap().is_expanded());
        assert_eq!(selected_count(&nav), 0);
        assert_eq!(nav.visible_panel(), &panel("home"));
    }

    #[test]
    fn test_header_with_panel_acts_as_header() {
        let menu = vec![
            MenuNode::leaf("home", "Home", "home"),
            MenuNode::submenu("odd", "Odd", vec![MenuNode::leaf("child", "Child", "child")])
                .with_panel("odd"),
        ];
        let panels = vec![panel("home"), panel("child"), panel("odd")];
        let mut nav = NavigationController::initialize(menu, panels, panel("home")).unwrap();

        let activation = nav.on_item_activated(&id("odd")).unwrap();
        assert_eq!(
            activation,
            Activation::Toggled {
                item: id("odd"),
                expanded: true
            }
        );
        assert!(nav.selected_item().is_none());
        assert_eq!(nav.visible_panel(), &panel("home"));
    }

    #[test]
    fn test_unknown_item_is_rejected() {
        let mut nav = sample();
        nav.on_item_activated(&id("specs")).unwrap();
        let before = snapshot(&nav);

        let err = nav.on_item_activated(&id("missing")).unwrap_err();
        assert_eq!(err, StructuralMismatch::UnknownItem(id("missing")));
        assert_eq!(snapshot(&nav), before);
        assert_eq!(nav.selected_item().unwrap().id(), &id("specs"));
    }

    #[test]
    fn test_initialize_rejects_mismatched_markup() {
        let err = NavigationController::initialize(
            vec![MenuNode::leaf("home", "Home", "nowhere")],
            vec![panel("home")],
            panel("home"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            StructuralMismatch::UnknownPanel {
                item: id("home"),
                panel: panel("nowhere")
            }
        );

        let err = NavigationController::initialize(
            vec![
                MenuNode::leaf("home", "Home", "home"),
                MenuNode::submenu("sub", "Sub", vec![MenuNode::leaf("home", "Again", "home")]),
            ],
            vec![panel("home")],
            panel("home"),
        )
        .unwrap_err();
        assert_eq!(err, StructuralMismatch::DuplicateItem(id("home")));

        let err = NavigationController::initialize(
            vec![MenuNode::leaf("home", "Home", "home")],
            vec![panel("home"), panel("home")],
            panel("home"),
        )
        .unwrap_err();
        assert_eq!(err, StructuralMismatch::DuplicatePanel(panel("home")));

        let err = NavigationController::initialize(
            vec![MenuNode::leaf("home", "Home", "home")],
            vec![panel("home")],
            panel("specs"),
        )
        .unwrap_err();
        assert_eq!(err, StructuralMismatch::UnknownDefaultPanel(panel("specs")));

        let err = NavigationController::initialize(
            vec![MenuNode::submenu("empty", "Empty", Vec::new())],
            vec![panel("home")],
            panel("home"),
        )
        .unwrap_err();
        assert_eq!(err, StructuralMismatch::InertItem(id("empty")));
    }

    #[test]
    fn test_teardown_then_reinitialize() {
        let mut nav = sample();
        nav.on_item_activated(&id("gpu")).unwrap();
        nav.teardown();

        let nav = sample();
        assert!(nav.selected_item().is_none());
        assert_eq!(nav.visible_panel(), &panel("home"));
    }
}
