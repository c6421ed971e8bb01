pub mod issue_credential_query;
pub mod jwt;
pub mod token_response;
