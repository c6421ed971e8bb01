//! Request gates, applied as route layers ahead of the handlers.
//!
//! Each gate adapts one decision from `st_auth::gates` to axum middleware.
//! [`GateChain`] fixes their order: credential, role, ownership, record owner.

pub mod gate_chain;
pub mod require_credential;
pub mod require_ownership;
pub mod require_record_owner;
pub mod require_role;

pub use gate_chain::GateChain;
pub use require_credential::require_credential;
pub use require_ownership::{OwnerSource, OwnershipGate, require_ownership};
pub use require_record_owner::{RecordOwnerGate, require_record_owner};
pub use require_role::{RoleGate, require_role};
