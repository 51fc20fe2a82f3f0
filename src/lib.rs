//! # pubsub-gapic - Google Cloud Pub/Sub client
//!
//! Typed Publisher and Subscriber clients for the Pub/Sub v1 gRPC API.
//!
//! Each remote method is reached through a request builder: pass a complete
//! request message, or set the commonly used fields individually, then
//! `send().await`. Calls carry a routing header and a client info header,
//! honor a per-call retry policy and timeout, and list methods return a
//! lazy [`pubsub::pagers::Pager`].
//!
//! ```no_run
//! use pubsub_gapic::{ClientOptions, PublisherClient};
//!
//! # async fn run() -> pubsub_gapic::Result<()> {
//! let client = PublisherClient::new(ClientOptions::default())?;
//! let topic = client
//!     .get_topic()
//!     .topic(PublisherClient::topic_path("my-project", "my-topic"))
//!     .send()
//!     .await?;
//! println!("{}", topic.name);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod metrics;
pub mod pubsub;
pub mod transport;

pub use config::ClientOptions;
pub use core::{CallOptions, RetryPolicy};
pub use error::{Error, Result};
pub use pubsub::{PublisherClient, SubscriberClient};
