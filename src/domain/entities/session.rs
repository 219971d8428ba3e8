use serde::{Deserialize, Serialize};

/// Claims carried by a session token. Issued by the external identity
/// provider; this service only verifies and reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}
