use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Viewports narrower than this many CSS pixels count as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// What a role sees below the breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Narrow {
    /// Compact header plus bottom tab bar.
    MobileShell,
    /// A notice asking the user to switch to a larger screen.
    DesktopRequired,
}

impl Narrow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Narrow::MobileShell => "mobile-shell",
            Narrow::DesktopRequired => "desktop-required",
        }
    }
}

/// The chrome the shell mounts for a role. The desktop shell (header plus
/// collapsible sidebar) is always mounted; `narrow` is mounted beside it and
/// the stylesheet shows one or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellPlan {
    pub role: Role,
    pub narrow: Narrow,
}

pub fn shell_plan(role: Role) -> ShellPlan {
    let narrow = if role.has_mobile_layout() {
        Narrow::MobileShell
    } else {
        Narrow::DesktopRequired
    };
    ShellPlan { role, narrow }
}

/// The single variant visible at a given width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutVariant {
    Desktop,
    Mobile,
    DesktopRequired,
}

impl LayoutVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutVariant::Desktop => "desktop",
            LayoutVariant::Mobile => "mobile",
            LayoutVariant::DesktopRequired => "desktop-required",
        }
    }
}

/// Pick one variant for a role and width, for targets that cannot rely on
/// a stylesheet to hide the other tree.
pub fn select_layout_variant(role: Role, viewport_width: u32) -> LayoutVariant {
    if viewport_width >= MOBILE_BREAKPOINT {
        return LayoutVariant::Desktop;
    }
    match shell_plan(role).narrow {
        Narrow::MobileShell => LayoutVariant::Mobile,
        Narrow::DesktopRequired => LayoutVariant::DesktopRequired,
    }
}
