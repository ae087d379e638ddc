//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::CacheEntity;

/// Role of a platform user.
///
/// An unrecognized wire value deserializes to `Unknown` instead of failing
/// the whole collection fetch; the consistency validator reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Superadmin,
    Admin,
    #[default]
    Investor,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Returns the string representation of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Superadmin => "SUPERADMIN",
            UserRole::Admin => "ADMIN",
            UserRole::Investor => "INVESTOR",
            UserRole::Unknown => "UNKNOWN",
        }
    }

    /// True for the three roles the platform defines.
    pub fn is_known(&self) -> bool {
        !matches!(self, UserRole::Unknown)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain model representing a platform user.
///
/// `company_id` is the sub-company scope an admin operates under. Role and
/// scope are mirrored as independent fields so an inconsistent pairing coming
/// from the server stays representable and reportable.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub role: UserRole,
    /// Sub-company scope; required for admins, absent for other roles.
    pub company_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CacheEntity for User {
    fn id(&self) -> &str {
        &self.id
    }
}
