use crate::{ConfigError, ConfigErrorResult, DEFAULT_ENFORCE_RECORD_OWNERSHIP, MIN_JWT_SECRET_LENGTH};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret shared by issuance and verification
    pub jwt_secret: Option<String>,
    /// Check the stored owner on product and booking mutations
    pub enforce_record_ownership: bool,
    /// Email ensured as an Admin identity at startup
    pub bootstrap_admin_email: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            enforce_record_ownership: DEFAULT_ENFORCE_RECORD_OWNERSHIP,
            bootstrap_admin_email: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(secret) = &self.jwt_secret else {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required (set ST_AUTH_JWT_SECRET)",
            ));
        };

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if let Some(email) = &self.bootstrap_admin_email
            && !email.contains('@')
        {
            return Err(ConfigError::auth(format!(
                "auth.bootstrap_admin_email '{}' is not an email address",
                email
            )));
        }

        Ok(())
    }

    /// Signing secret bytes. Only meaningful after `validate()`.
    pub fn secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_deref().unwrap_or_default().as_bytes()
    }
}
