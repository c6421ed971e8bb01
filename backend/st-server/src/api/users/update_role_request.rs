use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    /// `null` clears the role
    pub role: Option<String>,
}
