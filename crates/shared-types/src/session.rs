use serde::{Deserialize, Serialize};

use crate::layout::MOBILE_BREAKPOINT;
use crate::role::Role;
use crate::router::{self, View};
use crate::screen::{Screen, ScreenKey};
use crate::user::UserData;

/// Who is signed in and what they are looking at.
///
/// Every transition is an unconditional assignment. `navigate` stores the
/// request as given; entitlement is decided by [`router::resolve`] at
/// render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Session {
    pub is_authenticated: bool,
    pub role: Role,
    pub user: UserData,
    pub current_screen: ScreenKey,
    pub sidebar_collapsed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `role` on its dashboard.
    pub fn login(&mut self, role: Role, user: UserData) {
        tracing::debug!(%role, user = %user.display_name(), "login");
        self.is_authenticated = true;
        self.role = role;
        self.user = user;
        self.current_screen = ScreenKey::Known(Screen::Dashboard);
    }

    /// Drop everything back to the signed-out defaults.
    pub fn logout(&mut self) {
        tracing::debug!(role = %self.role, screen = %self.current_screen, "logout");
        *self = Self::default();
    }

    pub fn navigate(&mut self, screen: impl Into<ScreenKey>) {
        let screen = screen.into();
        tracing::debug!(from = %self.current_screen, to = %screen, "navigate");
        self.current_screen = screen;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Narrow viewports force the sidebar closed. Widening never reopens it.
    pub fn on_resize(&mut self, width: u32) {
        if width < MOBILE_BREAKPOINT && !self.sidebar_collapsed {
            tracing::debug!(width, "collapsing sidebar for narrow viewport");
            self.sidebar_collapsed = true;
        }
    }

    /// The view the content area should show right now.
    pub fn view(&self) -> View {
        router::resolve(&self.current_screen, self.role, self.is_authenticated)
    }
}
