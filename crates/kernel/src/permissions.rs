//! Admin menu visibility by role.
//!
//! Read-only checks; authentication happens outside this crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role, ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Editor,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Editor => "editor",
            Role::Admin => "admin",
        }
    }

    /// Whether this role may see an entry requiring `minimum`.
    pub fn can_access(self, minimum: Role) -> bool {
        self >= minimum
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(Role::Guest),
            "editor" => Ok(Role::Editor),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// An entry of the administration menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminMenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub min_role: Role,
}

/// The full administration menu, in display order.
pub const ADMIN_MENU: &[AdminMenuItem] = &[
    item("admin-dashboard", "Dashboard", Role::Guest),
    item("admin-news", "News", Role::Editor),
    item("admin-intro", "School introduction", Role::Editor),
    item("admin-docs", "Documents", Role::Editor),
    item("admin-gallery", "Photo gallery", Role::Editor),
    item("admin-videos", "Video library", Role::Editor),
    item("admin-staff", "Staff", Role::Editor),
    item("admin-categories", "Post categories", Role::Admin),
    item("admin-users", "User accounts", Role::Admin),
    item("admin-menu", "Menu", Role::Admin),
    item("admin-blocks", "Blocks", Role::Admin),
    item("admin-settings", "Settings", Role::Admin),
];

const fn item(id: &'static str, label: &'static str, min_role: Role) -> AdminMenuItem {
    AdminMenuItem {
        id,
        label,
        min_role,
    }
}

/// Menu entries `role` may see.
pub fn visible_menu(role: Role) -> Vec<&'static AdminMenuItem> {
    ADMIN_MENU
        .iter()
        .filter(|entry| role.can_access(entry.min_role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(role: Role) -> Vec<&'static str> {
        visible_menu(role).iter().map(|e| e.id).collect()
    }

    #[test]
    fn admin_sees_everything() {
        assert_eq!(visible_menu(Role::Admin).len(), ADMIN_MENU.len());
    }

    #[test]
    fn editor_sees_editor_and_guest_entries() {
        let visible = ids(Role::Editor);
        assert!(visible.contains(&"admin-dashboard"));
        assert!(visible.contains(&"admin-news"));
        assert!(visible.contains(&"admin-staff"));
        assert!(!visible.contains(&"admin-blocks"));
        assert!(!visible.contains(&"admin-settings"));
        assert_eq!(visible.len(), 7);
    }

    #[test]
    fn guest_sees_dashboard_only() {
        assert_eq!(ids(Role::Guest), vec!["admin-dashboard"]);
    }

    #[test]
    fn parse_roles() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" editor ".parse::<Role>(), Ok(Role::Editor));
        assert!("owner".parse::<Role>().is_err());
    }
}
