//! Site chrome state: navigation links, theme and mobile menu.

use serde::{Deserialize, Serialize};

/// A top-level navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const HOME_PATH: &str = "/";
pub const UPLOAD_PATH: &str = "/upload";
pub const RESULTS_PATH: &str = "/results";
pub const SIGNUP_PATH: &str = "/signup";

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        href: HOME_PATH,
        label: "Home",
    },
    NavLink {
        href: UPLOAD_PATH,
        label: "Upload Paper",
    },
    NavLink {
        href: RESULTS_PATH,
        label: "Results",
    },
];

/// A link is highlighted only on its exact path.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

/// Colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// State after following a link from the drawer.
    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_exact_match() {
        assert!(is_active("/upload", UPLOAD_PATH));
        assert!(!is_active("/upload/extra", UPLOAD_PATH));
        assert!(!is_active("/upload", HOME_PATH));
    }

    #[test]
    fn test_nav_links_point_at_routed_pages() {
        let routed = [HOME_PATH, UPLOAD_PATH, RESULTS_PATH, SIGNUP_PATH];
        for link in NAV_LINKS {
            assert!(routed.contains(&link.href), "{} has no page", link.href);
        }
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(Theme::Light.toggled().is_dark());
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let menu = MenuState::default().toggled();
        assert!(menu.open);
        assert!(!menu.closed().open);
        assert!(!menu.toggled().open);
    }
}
