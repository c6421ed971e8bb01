//! Identity entity - the stored mapping from email to marketplace role.
//!
//! Credentials only carry the email. Every authorization decision re-reads
//! this record, so role and status edits apply on the caller's next request.

use crate::{CoreError, Result as CoreErrorResult, Role, SellerStatus};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Unique key of the record
    pub email: String,
    pub name: Option<String>,
    /// `None` until the user picks a role
    pub role: Option<Role>,
    /// Only meaningful for sellers
    pub status: Option<SellerStatus>,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Build a record for a self-registration call.
    ///
    /// Sellers start out `pending`. Admin identities cannot be self-registered.
    #[track_caller]
    pub fn register(email: &str, name: Option<String>, role: Option<Role>) -> CoreErrorResult<Self> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::Validation {
                message: format!("'{}' is not a valid email address", email),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if role == Some(Role::Admin) {
            return Err(CoreError::Validation {
                message: "Admin accounts cannot be self-registered".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self::new(email.to_string(), name, role))
    }

    /// Build an admin record (startup bootstrap only)
    pub fn admin(email: &str) -> Self {
        Self::new(email.trim().to_string(), None, Some(Role::Admin))
    }

    fn new(email: String, name: Option<String>, role: Option<Role>) -> Self {
        let status = (role == Some(Role::Seller)).then_some(SellerStatus::Pending);
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            role,
            status,
            created_at: Utc::now(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }

    pub fn is_verified_seller(&self) -> bool {
        self.has_role(Role::Seller) && self.status == Some(SellerStatus::Verified)
    }
}
