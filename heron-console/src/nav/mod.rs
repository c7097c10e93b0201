//! Role-scoped navigation
//!
//! The menu is static configuration: a two-level tree of [`NavItem`]s,
//! each tagged with the roles allowed to see it. [`visible_tree`] computes
//! the per-role subset at render time; nothing mutates the tree after
//! process start.

pub mod menu;

pub use menu::MAIN_MENU;

use shared::models::role::Role;

/// One menu entry in the static navigation configuration.
///
/// A node with children acts as an expander, not a direct link; a node
/// without children is a navigable leaf. Children carry their own
/// `allowed_roles`, independent of the parent's.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    /// Unique route identifier
    pub path: &'static str,
    pub label: &'static str,
    pub allowed_roles: &'static [Role],
    pub children: &'static [NavItem],
}

impl NavItem {
    /// Is this entry visible to `role`?
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

/// A navigation entry after role filtering, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleItem {
    pub path: &'static str,
    pub label: &'static str,
    /// True when the declared node has children: it renders as an
    /// expander even if role filtering left `children` empty.
    pub is_expander: bool,
    pub children: Vec<VisibleItem>,
}

/// Compute the subset of `tree` visible to `role`, preserving declared
/// order and hierarchy.
///
/// Inclusion of a parent does not imply inclusion of its children: each
/// level is filtered by its own `allowed_roles`. An expander whose
/// filtered child list is empty is still returned (the product decision
/// on hiding empty branches is open; current behavior renders them).
pub fn visible_tree(tree: &'static [NavItem], role: Role) -> Vec<VisibleItem> {
    tree.iter()
        .filter(|item| item.allows(role))
        .map(|item| VisibleItem {
            path: item.path,
            label: item.label,
            is_expander: !item.children.is_empty(),
            children: visible_tree(item.children, role),
        })
        .collect()
}

/// Is `item` the active entry for the current route?
///
/// True when the route equals the item's own path or any direct child's
/// path. Lookup is one level deep, matching the two-level menu shipped.
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    item.path == current_path || item.children.iter().any(|child| child.path == current_path)
}
