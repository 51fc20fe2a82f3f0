//! Credentials attached to outgoing calls.
//!
//! Credential discovery is owned by the caller: a [`CredentialsProvider`]
//! stands in for the platform's application-default lookup and is consulted
//! only when no explicit [`Credentials`] are supplied.

use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// OAuth scopes requested for Pub/Sub.
pub const AUTH_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/pubsub",
];

/// Source of the `authorization` metadata for each call.
pub trait Credentials: Send + Sync + fmt::Debug {
    /// Value of the `authorization` header, or `None` to send no header.
    fn authorization_header(&self) -> Result<Option<String>>;
}

/// Resolves credentials when the caller supplied none.
pub trait CredentialsProvider: Send + Sync + fmt::Debug {
    /// Obtain default credentials for `scopes`.
    fn default_credentials(&self, scopes: &[&str]) -> Result<Arc<dyn Credentials>>;
}

/// Sends no authorization header. Suitable for local emulators.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl Credentials for Anonymous {
    fn authorization_header(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// A pre-fetched OAuth2 access token sent as a bearer token.
#[derive(Clone)]
pub struct AccessToken {
    token: String,
}

impl AccessToken {
    /// Wrap an access token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::Credentials("access token is empty".to_string()));
        }
        Ok(Self { token })
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken").field("token", &"<redacted>").finish()
    }
}

impl Credentials for AccessToken {
    fn authorization_header(&self) -> Result<Option<String>> {
        Ok(Some(format!("Bearer {}", self.token)))
    }
}

/// Provider that always resolves to [`Anonymous`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousProvider;

impl CredentialsProvider for AnonymousProvider {
    fn default_credentials(&self, _scopes: &[&str]) -> Result<Arc<dyn Credentials>> {
        Ok(Arc::new(Anonymous))
    }
}

/// Use `credentials` when given, otherwise ask `provider` for defaults.
pub fn resolve(
    credentials: Option<Arc<dyn Credentials>>,
    provider: Option<&Arc<dyn CredentialsProvider>>,
) -> Result<Arc<dyn Credentials>> {
    match (credentials, provider) {
        (Some(credentials), _) => Ok(credentials),
        (None, Some(provider)) => provider.default_credentials(AUTH_SCOPES),
        (None, None) => AnonymousProvider.default_credentials(AUTH_SCOPES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingProvider {
        scopes: Mutex<Vec<String>>,
    }

    impl CredentialsProvider for RecordingProvider {
        fn default_credentials(&self, scopes: &[&str]) -> Result<Arc<dyn Credentials>> {
            let mut seen = self.scopes.lock().unwrap();
            seen.extend(scopes.iter().map(|s| s.to_string()));
            Ok(Arc::new(AccessToken::new("adc-token")?))
        }
    }

    #[test]
    fn test_access_token_header() {
        let token = AccessToken::new("abc").unwrap();
        assert_eq!(token.authorization_header().unwrap().as_deref(), Some("Bearer abc"));
        assert!(!format!("{:?}", token).contains("abc"));
    }

    #[test]
    fn test_empty_access_token_rejected() {
        assert!(matches!(AccessToken::new("  "), Err(Error::Credentials(_))));
    }

    #[test]
    fn test_resolve_prefers_explicit_credentials() {
        let provider: Arc<dyn CredentialsProvider> = Arc::new(RecordingProvider::default());
        let explicit: Arc<dyn Credentials> = Arc::new(AccessToken::new("explicit").unwrap());

        let resolved = resolve(Some(explicit), Some(&provider)).unwrap();
        assert_eq!(
            resolved.authorization_header().unwrap().as_deref(),
            Some("Bearer explicit")
        );
    }

    #[test]
    fn test_resolve_requests_pubsub_scopes() {
        let recording = Arc::new(RecordingProvider::default());
        let provider: Arc<dyn CredentialsProvider> = recording.clone();

        let resolved = resolve(None, Some(&provider)).unwrap();
        assert_eq!(
            resolved.authorization_header().unwrap().as_deref(),
            Some("Bearer adc-token")
        );
        assert_eq!(
            *recording.scopes.lock().unwrap(),
            vec![
                "https://www.googleapis.com/auth/cloud-platform".to_string(),
                "https://www.googleapis.com/auth/pubsub".to_string(),
            ]
        );
    }

    #[test]
    fn test_resolve_defaults_to_anonymous() {
        let resolved = resolve(None, None).unwrap();
        assert!(resolved.authorization_header().unwrap().is_none());
    }
}
