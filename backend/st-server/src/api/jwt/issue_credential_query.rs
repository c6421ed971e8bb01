use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct IssueCredentialQuery {
    pub email: Option<String>,
}
