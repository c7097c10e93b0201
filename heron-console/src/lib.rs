//! Heron Console - embeddable front-end core
//!
//! The typed core a view host (desktop shell or web embedding) calls
//! into: role-based view authorization, role-scoped navigation, persisted
//! session state, and the [`Console`] facade that orchestrates
//! login, role resolution, and permission sync.

pub mod authz;
pub mod config;
pub mod console;
pub mod logger;
pub mod nav;
pub mod session;

pub use authz::PermissionIndex;
pub use config::ConsoleConfig;
pub use console::Console;
pub use nav::{NavItem, VisibleItem, is_active, visible_tree};
pub use session::{Session, SessionStore};

// Re-exports
pub use shared::models::role::Role;
pub use shared::types::Action;
