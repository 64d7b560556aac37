//! Role-based permissions.
//!
//! Roles are resolved per request and passed explicitly to whatever needs
//! them; there is no global session. The permission table is static.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The role of the user making a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Organization administrator.
    Admin,
    /// Location or team manager.
    Manager,
    /// Regular staff member.
    Employee,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "employee" => Ok(Role::Employee),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
            Role::Employee => write!(f, "employee"),
        }
    }
}

/// An action gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Create recurring shifts for staff.
    ManageShifts,
    /// Compute and view weekly Groove Scores.
    ViewScores,
    /// Score with category weights other than the configured defaults.
    ConfigureWeights,
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Permission::ManageShifts => write!(f, "manage_shifts"),
            Permission::ViewScores => write!(f, "view_scores"),
            Permission::ConfigureWeights => write!(f, "configure_weights"),
        }
    }
}

/// Returns the permissions granted to `role`.
///
/// # Example
///
/// ```
/// use groove_engine::access::{Permission, Role, permissions_for};
///
/// assert!(permissions_for(Role::Manager).contains(&Permission::ManageShifts));
/// assert!(!permissions_for(Role::Employee).contains(&Permission::ManageShifts));
/// ```
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => &[
            Permission::ManageShifts,
            Permission::ViewScores,
            Permission::ConfigureWeights,
        ],
        Role::Manager => &[Permission::ManageShifts, Permission::ViewScores],
        Role::Employee => &[Permission::ViewScores],
    }
}

/// The identity a request is evaluated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    /// The caller's role.
    pub role: Role,
}

impl RequestContext {
    /// Creates a context for `role`.
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    /// Returns true if the caller's role grants `permission`.
    pub fn can(&self, permission: Permission) -> bool {
        permissions_for(self.role).contains(&permission)
    }
}
