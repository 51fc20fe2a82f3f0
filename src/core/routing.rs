//! Request routing header.
//!
//! Requests that name a resource carry it in the `x-goog-request-params`
//! metadata entry so the frontend can route the call without decoding the
//! body.

/// Metadata key of the routing header.
pub const ROUTING_HEADER_KEY: &str = "x-goog-request-params";

/// Build the routing metadata pair for `params`.
///
/// Values are URL-encoded with `/` left intact, and pairs are joined with `&`.
pub fn routing_header(params: &[(&str, &str)]) -> (String, String) {
    let value = params
        .iter()
        .map(|(field, value)| format!("{}={}", field, encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    (ROUTING_HEADER_KEY.to_string(), value)
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).replace("%2F", "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_header_keeps_slashes() {
        let (key, value) = routing_header(&[("topic", "projects/squid/topics/clam")]);
        assert_eq!(key, "x-goog-request-params");
        assert_eq!(value, "topic=projects/squid/topics/clam");
    }

    #[test]
    fn test_routing_header_encodes_reserved_characters() {
        let (_, value) = routing_header(&[("subscription", "projects/p/subscriptions/a b&c")]);
        assert_eq!(value, "subscription=projects/p/subscriptions/a%20b%26c");
    }

    #[test]
    fn test_routing_header_joins_params() {
        let (_, value) = routing_header(&[("project", "projects/p"), ("topic", "t")]);
        assert_eq!(value, "project=projects/p&topic=t");
    }
}
