use shared_types::{resolve, Role, Screen, ScreenKey, Session, UserData, View};

/// Strings no screen is registered under.
pub const GARBAGE_KEYS: &[&str] = &[
    "",
    " ",
    "nope",
    "DASHBOARD",
    "grade-book",
    "../settings",
    "<script>",
    "dashboard ",
    "🙂",
];

/// Every registered screen as a request key.
pub fn all_known_keys() -> Vec<ScreenKey> {
    Screen::ALL.iter().copied().map(ScreenKey::from).collect()
}

/// Registered screens followed by the garbage keys.
pub fn all_keys() -> Vec<ScreenKey> {
    let mut keys = all_known_keys();
    keys.extend(GARBAGE_KEYS.iter().map(|k| ScreenKey::parse(k)));
    keys
}

/// A session signed in as `role` with a throwaway user.
pub fn signed_in(role: Role) -> Session {
    let mut session = Session::new();
    session.login(role, UserData::new(format!("Test {}", role.display_name())));
    session
}

/// Resolve a registered screen for a signed-in role.
pub fn resolve_as(role: Role, screen: Screen) -> View {
    resolve(&screen.into(), role, true)
}
