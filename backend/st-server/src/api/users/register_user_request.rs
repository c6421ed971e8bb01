use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub name: Option<String>,
    /// "Buyer" or "Seller"; Admin is rejected
    pub role: Option<String>,
}
