pub mod config;
pub mod error;

// Navigation core
pub mod layout;
pub mod policy;
pub mod role;
pub mod router;
pub mod screen;
pub mod session;
pub mod user;

// Presentation data
pub mod catalog;
pub mod menu;

pub use config::*;
pub use error::*;
pub use layout::{select_layout_variant, shell_plan, LayoutVariant, Narrow, ShellPlan, MOBILE_BREAKPOINT};
pub use policy::{Access, Fallback, ScreenRule};
pub use role::*;
pub use router::{resolve, DashboardKind, DashboardView, View};
pub use screen::*;
pub use session::*;
pub use user::*;
// catalog and menu are used through their module paths
// (shared_types::catalog::records_for, shared_types::menu::sidebar_sections).
