//! Authorization decisions. Each gate either approves continuation or
//! returns the error that short-circuits the request.

use crate::{
    AuthError, CallerContext, CredentialService, IdentityStore, OwnedResource, RecordOwnerStore,
    Result as AuthErrorResult,
};

use st_core::{Identity, Role};

use std::panic::Location;

use error_location::ErrorLocation;

/// Verify the `Authorization` header and bind the caller
pub fn require_credential(
    credentials: &CredentialService,
    header: Option<&str>,
) -> AuthErrorResult<CallerContext> {
    credentials.verify(header).inspect_err(|e| {
        if e.is_invalid_credential() {
            log::warn!("Credential rejected: {}", e);
        } else {
            log::debug!("Credential rejected: {}", e);
        }
    })
}

/// Re-read the caller's identity and require `role`. Returns the loaded
/// identity.
pub async fn require_role(
    store: &dyn IdentityStore,
    caller: &CallerContext,
    role: Role,
) -> AuthErrorResult<Identity> {
    let identity = store.find_identity(caller.email()).await?;

    match identity {
        Some(identity) if identity.has_role(role) => Ok(identity),
        other => {
            let actual = other.and_then(|i| i.role);
            log::warn!(
                "Role {} required for {}, found {:?}",
                role,
                caller.email(),
                actual
            );
            Err(AuthError::RoleMismatch {
                email: caller.email().to_string(),
                required: role,
                actual,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

/// Require the request-supplied `field` to name the caller
#[track_caller]
pub fn require_ownership(
    caller: &CallerContext,
    field: &str,
    value: Option<&str>,
) -> AuthErrorResult<()> {
    match value {
        Some(value) if value == caller.email() => Ok(()),
        _ => {
            log::warn!("{} does not own {} {:?}", caller.email(), field, value);
            Err(AuthError::OwnershipMismatch {
                field: field.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

/// Require the stored owner of record `id` to be the caller. A record that
/// does not exist passes; the handler then reports a zero count.
pub async fn require_record_owner(
    store: &dyn RecordOwnerStore,
    caller: &CallerContext,
    resource: OwnedResource,
    id: &str,
) -> AuthErrorResult<()> {
    match store.find_owner(resource, id).await? {
        None => Ok(()),
        Some(owner) if owner == caller.email() => Ok(()),
        Some(_) => {
            log::warn!(
                "{} attempted to modify {:?} {} owned by another identity",
                caller.email(),
                resource,
                id
            );
            Err(AuthError::OwnershipMismatch {
                field: resource.owner_field().to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
