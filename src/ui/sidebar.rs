use dioxus::prelude::*;

use crate::app::AppState;
use crate::navigation::ItemId;

#[component]
pub fn Sidebar() -> Element {
    let navigation = use_context::<AppState>().navigation;
    let roots = navigation.read().roots().to_vec();

    rsx! {
        aside {
            class: "sidebar",
            div { class: "sidebar-title", "SpecsDesk" }
            nav {
                ul {
                    for id in roots {
                        MenuEntry { key: "{id}", id: id.clone() }
                    }
                }
            }
        }
    }
}

/// One menu row plus, for an expanded submenu header, its children.
#[component]
fn MenuEntry(id: ItemId) -> Element {
    let mut navigation = use_context::<AppState>().navigation;
    let Some(item) = navigation.read().item(&id).cloned() else {
        tracing::error!("Menu entry {} is not part of the navigation tree", id);
        return rsx! {};
    };

    let item_id = id.clone();
    let onclick = move |evt: MouseEvent| {
        // Rows nest inside their header's row; the click belongs to this item only
        evt.stop_propagation();
        let activation = navigation.write().on_item_activated(&item_id);
        match activation {
            Ok(activation) => tracing::debug!("Menu activation: {:?}", activation),
            Err(e) => panic!("Navigation wiring defect: {}", e),
        }
    };

    let label = item.label().to_string();
    let is_submenu = item.is_submenu();
    let show_children = is_submenu && item.is_expanded();
    let chevron = if item.is_expanded() { "▾" } else { "▸" };
    let indent = 12 + item.depth() * 14;
    let children = item.children().to_vec();
    let row_class = if item.is_selected() {
        "menu-row active"
    } else {
        "menu-row"
    };

    rsx! {
        li {
            onclick: onclick,
            div {
                class: row_class,
                style: "padding-left: {indent}px;",
                if is_submenu {
                    span { class: "chevron", "{chevron}" }
                }
                span { "{label}" }
            }
            if show_children {
                ul {
                    for child in children {
                        MenuEntry { key: "{child}", id: child.clone() }
                    }
                }
            }
        }
    }
}
