use dioxus::prelude::*;
use shared_types::{select_layout_variant, Role, ScreenKey, Session, UserData, View};

/// Session state shared across the whole app.
///
/// Wraps the plain [`Session`] value in a signal so every transition
/// re-renders the shell and the resolved view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub session: Signal<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::from_session(Session::new())
    }

    pub fn from_session(session: Session) -> Self {
        Self {
            session: Signal::new(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated
    }

    pub fn role(&self) -> Role {
        self.session.read().role
    }

    pub fn user(&self) -> UserData {
        self.session.read().user.clone()
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.session.read().sidebar_collapsed
    }

    /// What the content area should render right now.
    pub fn view(&self) -> View {
        self.session.read().view()
    }

    pub fn login(&mut self, role: Role, user: UserData) {
        self.session.write().login(role, user);
    }

    /// Replace the profile details without touching role or navigation.
    pub fn set_user(&mut self, user: UserData) {
        self.session.write().user = user;
    }

    pub fn logout(&mut self) {
        self.session.write().logout();
    }

    pub fn navigate(&mut self, screen: impl Into<ScreenKey>) {
        self.session.write().navigate(screen);
    }

    pub fn toggle_sidebar(&mut self) {
        self.session.write().toggle_sidebar();
    }

    /// Apply a viewport width. Writes only when the latch actually changes
    /// something, so views subscribed to the session are not re-run.
    pub fn on_resize(&mut self, width: u32) {
        let mut next = self.session.peek().clone();
        next.on_resize(width);
        if next != *self.session.peek() {
            self.session.set(next);
        }
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// The signed-in role. Reads as [`Role::default`] while signed out.
pub fn use_role() -> Role {
    use_session().role()
}

/// Window width in CSS pixels as of the last layout change; `None` until
/// the first report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub width: Signal<Option<u32>>,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::with_width(None)
    }

    pub fn with_width(width: Option<u32>) -> Self {
        Self {
            width: Signal::new(width),
        }
    }

    /// Record a reported width. Stores it only on the first report or when
    /// it moves `role` to a different layout variant. Returns whether it wrote.
    pub fn report(&mut self, role: Role, width: u32) -> bool {
        let changed = match *self.width.peek() {
            Some(prev) => select_layout_variant(role, prev) != select_layout_variant(role, width),
            None => true,
        };
        if changed {
            self.width.set(Some(width));
        }
        changed
    }
}

pub fn use_viewport() -> ViewportState {
    use_context::<ViewportState>()
}
