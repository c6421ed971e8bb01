use serde::Deserialize;

/// `?email=` filter shared by the buyer-owned collections
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}
