use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};

use crate::entities::session::SessionClaims;
use crate::errors::SessionError;
use crate::settings::{AppConfig, SessionKeys};

const SESSION_ALGORITHM: Algorithm = Algorithm::HS512;

/// Verifies session tokens minted by the external identity provider. The
/// provider and this service share `session_secret`; credential checks and
/// session issuance live entirely with the provider.
#[derive(Clone)]
pub struct SessionService {
    keys: SessionKeys,
}

impl SessionService {
    pub fn new(config: &AppConfig) -> Self {
        SessionService {
            keys: SessionKeys::from(config),
        }
    }

    pub fn decode(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let mut validation = Validation::new(SESSION_ALGORITHM);
        validation.validate_exp = true;

        let data = decode::<SessionClaims>(token, &self.keys.decoding, &validation)?;
        Ok(data.claims)
    }

    /// Mints a token with the shared secret. Production tokens come from
    /// the identity provider; this stays for diagnostics and test setup.
    pub fn issue(&self, user_id: &str, email: &str, ttl: Duration) -> Result<String, SessionError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + ttl).timestamp() as usize,
        };

        encode(&Header::new(SESSION_ALGORITHM), &claims, &self.keys.encoding)
            .map_err(|_| SessionError::TokenCreation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppEnvironment;

    fn test_config(secret: &str) -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            database_url: "postgres://127.0.0.1:5432/portfolio_test".into(),
            cors_allowed_origins: vec!["*".into()],
            session_secret: secret.into(),
        }
    }

    fn service() -> SessionService {
        SessionService::new(&test_config("a_session_secret_that_is_long_enough_0123"))
    }

    #[test]
    fn decodes_its_own_tokens() {
        let sessions = service();
        let token = sessions.issue("user-1", "dev@example.com", Duration::minutes(5)).unwrap();

        let claims = sessions.decode(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "dev@example.com");
    }

    #[test]
    fn rejects_expired_tokens() {
        let sessions = service();
        let token = sessions.issue("user-1", "dev@example.com", Duration::minutes(-10)).unwrap();

        assert!(matches!(sessions.decode(&token), Err(SessionError::SessionExpired)));
    }

    #[test]
    fn rejects_tokens_signed_with_another_secret() {
        let other = SessionService::new(&test_config("a_different_secret_that_is_long_enough_45"));
        let token = other.issue("user-1", "dev@example.com", Duration::minutes(5)).unwrap();

        assert!(matches!(service().decode(&token), Err(SessionError::InvalidToken)));
    }

    #[test]
    fn rejects_garbage_tokens() {
        assert!(service().decode("not.a.token").is_err());
    }
}
