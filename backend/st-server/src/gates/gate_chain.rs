use crate::AppState;
use crate::gates::{
    OwnerSource, OwnershipGate, RecordOwnerGate, RoleGate, require_credential, require_ownership,
    require_record_owner, require_role,
};

use st_auth::OwnedResource;
use st_core::Role;

use axum::{middleware::from_fn_with_state, routing::MethodRouter};

/// Declares the gates in front of one route.
///
/// The credential gate is always present and always outermost. The other
/// stages run in a fixed order regardless of the order they are declared in.
///
/// ```ignore
/// GateChain::new(&state)
///     .role(Role::Buyer)
///     .owner_in_query("email")
///     .guard(get(bookings::list_bookings))
/// ```
pub struct GateChain {
    state: AppState,
    role: Option<Role>,
    ownership: Option<OwnerSource>,
    record_owner: Option<OwnedResource>,
}

impl GateChain {
    pub fn new(state: &AppState) -> Self {
        Self {
            state: state.clone(),
            role: None,
            ownership: None,
            record_owner: None,
        }
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn owner_in_query(mut self, field: &'static str) -> Self {
        self.ownership = Some(OwnerSource::Query(field));
        self
    }

    pub fn owner_in_body(mut self, field: &'static str) -> Self {
        self.ownership = Some(OwnerSource::Body(field));
        self
    }

    pub fn record_owner(mut self, resource: OwnedResource) -> Self {
        self.record_owner = Some(resource);
        self
    }

    /// Apply `stage` only while record ownership is enforced
    pub fn when_enforcing(self, stage: impl FnOnce(Self) -> Self) -> Self {
        if self.state.enforce_record_ownership {
            stage(self)
        } else {
            self
        }
    }

    /// Wrap `route` in the declared gates. Layers added last run first, so
    /// the innermost stage is applied first.
    pub fn guard(self, mut route: MethodRouter<AppState>) -> MethodRouter<AppState> {
        if let Some(resource) = self.record_owner {
            let gate = RecordOwnerGate {
                owners: self.state.owners.clone(),
                resource,
            };
            route = route.route_layer(from_fn_with_state(gate, require_record_owner));
        }

        if let Some(source) = self.ownership {
            route = route.route_layer(from_fn_with_state(
                OwnershipGate { source },
                require_ownership,
            ));
        }

        if let Some(role) = self.role {
            let gate = RoleGate {
                identities: self.state.identities.clone(),
                role,
            };
            route = route.route_layer(from_fn_with_state(gate, require_role));
        }

        route.route_layer(from_fn_with_state(self.state, require_credential))
    }
}
