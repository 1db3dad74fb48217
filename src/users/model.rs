use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    ContractingOfficer,
    Vendor,
}

/// Registration/verification state with the payment system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FmsStatus {
    #[serde(rename = "fms_accepted")]
    Accepted,
    #[serde(rename = "fms_pending")]
    Pending,
    #[serde(rename = "fms_rejected")]
    Rejected,
}

/// Registered account read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: Role,
    pub fms_status: FmsStatus,
    pub duns_number: String,
    pub fms_number: String,
    pub is_mwbe: bool,
    pub is_small_business: bool,
}

/// The viewing identity, resolved once at the boundary.
/// Guests are a distinct variant, not a persisted account; contracting
/// officers enter as `Vendor` (they are neither admins nor guests).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Viewer {
    Guest,
    Admin(User),
    Vendor(User),
}

impl Viewer {
    pub fn is_admin(&self) -> bool {
        matches!(self, Viewer::Admin(_))
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Viewer::Guest)
    }

    /// The signed-in account behind this viewer, if any.
    pub fn account(&self) -> Option<&User> {
        match self {
            Viewer::Guest => None,
            Viewer::Admin(user) | Viewer::Vendor(user) => Some(user),
        }
    }
}
