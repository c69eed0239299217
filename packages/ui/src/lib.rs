//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton, UserInfo};

mod route_guard;
pub use route_guard::{evaluate, AuthSkeleton, GuardOutcome, Redirect, RouteGuard, LOGIN_DESTINATION};

mod table_toolbar;
pub use table_toolbar::{TableToolbar, TableToolbarProps, ToolbarAction, TOOLBAR_HINT};

mod surface_summary;
pub use surface_summary::{SurfaceSummary, SURFACE_UNIT};

mod page_header;
pub use page_header::{HeaderAction, PageHeader, PageHeaderProps};

#[cfg(test)]
mod testing;
