//! Google Cloud Pub/Sub v1 clients.
//!
//! - [`PublisherClient`]: topics, publishing, topic listings
//! - [`SubscriberClient`]: subscriptions, pulling and acking, snapshots
//! - paged listings through [`pagers`]
//! - resource path helpers in [`types`]

/// Generated Protocol Buffer messages for the `google.pubsub.v1` package.
#[allow(clippy::all, unused_imports, dead_code, missing_docs, deprecated)]
pub mod proto {
    include!("generated/google.pubsub.v1.rs");
}

pub mod pagers;
pub mod publisher;
pub mod subscriber;
pub mod types;

pub use publisher::PublisherClient;
pub use subscriber::SubscriberClient;
pub use types::*;
