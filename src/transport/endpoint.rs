//! Endpoint naming rules: default hosts, mTLS host derivation and port
//! normalization.

use crate::error::{Error, Result};

/// Default Pub/Sub API host.
pub const DEFAULT_ENDPOINT: &str = "pubsub.googleapis.com";

/// Default Pub/Sub API host for mutual TLS.
pub const DEFAULT_MTLS_ENDPOINT: &str = "pubsub.mtls.googleapis.com";

/// Port appended to hosts that do not name one.
pub const DEFAULT_SECURE_PORT: u16 = 443;

const GOOGLE_DOMAIN: &str = ".googleapis.com";
const MTLS_LABEL: &str = ".mtls";
const SANDBOX_LABEL: &str = ".sandbox";

/// Convert an API host into its mutual TLS variant.
///
/// `name.googleapis.com` becomes `name.mtls.googleapis.com` and
/// `name.sandbox.googleapis.com` becomes `name.mtls.sandbox.googleapis.com`.
/// Hosts that already carry `.mtls`, or whose labels after the first one are
/// not `[.sandbox].googleapis.com`, are returned unchanged. Anything after the
/// domain (a port, for example) is kept.
pub fn derive_mtls_host(host: &str) -> String {
    let Some(dot) = host.find('.') else {
        return host.to_string();
    };
    if dot == 0 {
        return host.to_string();
    }

    let rest = &host[dot..];
    if rest.starts_with(MTLS_LABEL) {
        return host.to_string();
    }
    let (sandbox, rest) = match rest.strip_prefix(SANDBOX_LABEL) {
        Some(rest) => (true, rest),
        None => (false, rest),
    };
    if !rest.starts_with(GOOGLE_DOMAIN) {
        return host.to_string();
    }

    if sandbox {
        host.replace("sandbox.googleapis.com", "mtls.sandbox.googleapis.com")
    } else {
        host.replace(GOOGLE_DOMAIN, ".mtls.googleapis.com")
    }
}

/// Append the default secure port to a host that names none.
pub fn normalize_host(host: &str) -> String {
    if host.contains(':') {
        host.to_string()
    } else {
        format!("{}:{}", host, DEFAULT_SECURE_PORT)
    }
}

/// Wire scheme of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// TLS (the default for bare hosts).
    Https,
    /// Plaintext, used for local emulators.
    Http,
}

/// A host with its scheme split off and its port normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAddress {
    /// Wire scheme.
    pub scheme: Scheme,
    /// `host:port`.
    pub host: String,
}

impl ServiceAddress {
    /// Parse `host`, `host:port`, `https://host[:port]` or `http://host[:port]`.
    pub fn parse(endpoint: &str) -> Result<Self> {
        let (scheme, rest) = if let Some(rest) = endpoint.strip_prefix("https://") {
            (Scheme::Https, rest)
        } else if let Some(rest) = endpoint.strip_prefix("http://") {
            (Scheme::Http, rest)
        } else {
            (Scheme::Https, endpoint)
        };
        let rest = rest.trim_end_matches('/');
        if rest.is_empty() || rest.contains('/') {
            return Err(Error::Config(format!("Invalid endpoint: {}", endpoint)));
        }

        Ok(Self {
            scheme,
            host: normalize_host(rest),
        })
    }

    /// The host name without its port.
    pub fn domain(&self) -> &str {
        match self.host.rsplit_once(':') {
            Some((domain, _)) => domain,
            None => &self.host,
        }
    }

    /// URI handed to the channel builder.
    pub fn uri(&self) -> String {
        match self.scheme {
            Scheme::Https => format!("https://{}", self.host),
            Scheme::Http => format!("http://{}", self.host),
        }
    }
}
