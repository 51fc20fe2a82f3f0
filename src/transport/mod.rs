//! Transport abstraction for the Publisher and Subscriber services.
//!
//! A transport exposes one async method per remote operation and owns its
//! channel. Concrete transports are registered under a label; `"grpc"` is
//! registered first and is the default.

use crate::auth::{Credentials, CredentialsProvider};
use crate::config::ClientOptions;
use crate::error::{Error, Result, ValidationError};
use crate::pubsub::proto;
use crate::transport::endpoint::{DEFAULT_ENDPOINT, DEFAULT_MTLS_ENDPOINT};
use crate::transport::mtls::ClientCertSource;
use async_trait::async_trait;
use futures::stream::BoxStream;
use once_cell::sync::Lazy;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tonic::Status;
use tracing::info;

pub mod endpoint;
pub mod grpc;
pub mod mtls;

/// Result of one transport call.
pub type RpcResult<T> = std::result::Result<tonic::Response<T>, Status>;

/// Outbound half of a streaming pull.
pub type StreamingPullRequests = BoxStream<'static, proto::StreamingPullRequest>;

/// Inbound half of a streaming pull.
pub type StreamingPullResponses =
    BoxStream<'static, std::result::Result<proto::StreamingPullResponse, Status>>;

/// Publisher service operations.
#[async_trait]
pub trait PublisherTransport: Send + Sync + fmt::Debug {
    /// Label this transport is registered under.
    fn kind(&self) -> &'static str;

    /// `host:port` the transport talks to.
    fn host(&self) -> &str;

    /// Whether the channel uses mutual TLS.
    fn is_mtls(&self) -> bool {
        false
    }

    /// Certificate source the channel was configured with.
    fn client_cert_source(&self) -> Option<&ClientCertSource> {
        None
    }

    /// Create a topic.
    async fn create_topic(&self, request: tonic::Request<proto::Topic>) -> RpcResult<proto::Topic>;

    /// Update a topic.
    async fn update_topic(
        &self,
        request: tonic::Request<proto::UpdateTopicRequest>,
    ) -> RpcResult<proto::Topic>;

    /// Publish messages.
    async fn publish(
        &self,
        request: tonic::Request<proto::PublishRequest>,
    ) -> RpcResult<proto::PublishResponse>;

    /// Get a topic.
    async fn get_topic(
        &self,
        request: tonic::Request<proto::GetTopicRequest>,
    ) -> RpcResult<proto::Topic>;

    /// List one page of topics.
    async fn list_topics(
        &self,
        request: tonic::Request<proto::ListTopicsRequest>,
    ) -> RpcResult<proto::ListTopicsResponse>;

    /// List one page of a topic's subscription names.
    async fn list_topic_subscriptions(
        &self,
        request: tonic::Request<proto::ListTopicSubscriptionsRequest>,
    ) -> RpcResult<proto::ListTopicSubscriptionsResponse>;

    /// List one page of a topic's snapshot names.
    async fn list_topic_snapshots(
        &self,
        request: tonic::Request<proto::ListTopicSnapshotsRequest>,
    ) -> RpcResult<proto::ListTopicSnapshotsResponse>;

    /// Delete a topic.
    async fn delete_topic(&self, request: tonic::Request<proto::DeleteTopicRequest>)
        -> RpcResult<()>;

    /// Detach a subscription from its topic.
    async fn detach_subscription(
        &self,
        request: tonic::Request<proto::DetachSubscriptionRequest>,
    ) -> RpcResult<proto::DetachSubscriptionResponse>;
}

/// Subscriber service operations.
#[async_trait]
pub trait SubscriberTransport: Send + Sync + fmt::Debug {
    /// Label this transport is registered under.
    fn kind(&self) -> &'static str;

    /// `host:port` the transport talks to.
    fn host(&self) -> &str;

    /// Whether the channel uses mutual TLS.
    fn is_mtls(&self) -> bool {
        false
    }

    /// Certificate source the channel was configured with.
    fn client_cert_source(&self) -> Option<&ClientCertSource> {
        None
    }

    /// Create a subscription.
    async fn create_subscription(
        &self,
        request: tonic::Request<proto::Subscription>,
    ) -> RpcResult<proto::Subscription>;

    /// Get a subscription.
    async fn get_subscription(
        &self,
        request: tonic::Request<proto::GetSubscriptionRequest>,
    ) -> RpcResult<proto::Subscription>;

    /// Update a subscription.
    async fn update_subscription(
        &self,
        request: tonic::Request<proto::UpdateSubscriptionRequest>,
    ) -> RpcResult<proto::Subscription>;

    /// List one page of subscriptions.
    async fn list_subscriptions(
        &self,
        request: tonic::Request<proto::ListSubscriptionsRequest>,
    ) -> RpcResult<proto::ListSubscriptionsResponse>;

    /// Delete a subscription.
    async fn delete_subscription(
        &self,
        request: tonic::Request<proto::DeleteSubscriptionRequest>,
    ) -> RpcResult<()>;

    /// Change the ack deadline of delivered messages.
    async fn modify_ack_deadline(
        &self,
        request: tonic::Request<proto::ModifyAckDeadlineRequest>,
    ) -> RpcResult<()>;

    /// Acknowledge delivered messages.
    async fn acknowledge(&self, request: tonic::Request<proto::AcknowledgeRequest>)
        -> RpcResult<()>;

    /// Pull messages.
    async fn pull(
        &self,
        request: tonic::Request<proto::PullRequest>,
    ) -> RpcResult<proto::PullResponse>;

    /// Open a bidirectional streaming pull.
    async fn streaming_pull(
        &self,
        request: tonic::Request<StreamingPullRequests>,
    ) -> RpcResult<StreamingPullResponses>;

    /// Change a subscription's push configuration.
    async fn modify_push_config(
        &self,
        request: tonic::Request<proto::ModifyPushConfigRequest>,
    ) -> RpcResult<()>;

    /// Get a snapshot.
    async fn get_snapshot(
        &self,
        request: tonic::Request<proto::GetSnapshotRequest>,
    ) -> RpcResult<proto::Snapshot>;

    /// List one page of snapshots.
    async fn list_snapshots(
        &self,
        request: tonic::Request<proto::ListSnapshotsRequest>,
    ) -> RpcResult<proto::ListSnapshotsResponse>;

    /// Create a snapshot.
    async fn create_snapshot(
        &self,
        request: tonic::Request<proto::CreateSnapshotRequest>,
    ) -> RpcResult<proto::Snapshot>;

    /// Update a snapshot.
    async fn update_snapshot(
        &self,
        request: tonic::Request<proto::UpdateSnapshotRequest>,
    ) -> RpcResult<proto::Snapshot>;

    /// Delete a snapshot.
    async fn delete_snapshot(
        &self,
        request: tonic::Request<proto::DeleteSnapshotRequest>,
    ) -> RpcResult<()>;

    /// Seek a subscription to a time or snapshot.
    async fn seek(&self, request: tonic::Request<proto::SeekRequest>)
        -> RpcResult<proto::SeekResponse>;
}

/// Everything a registered factory needs to build a transport.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Plain endpoint, `host` or `host:port`.
    pub host: String,
    /// Explicit credentials.
    pub credentials: Option<Arc<dyn Credentials>>,
    /// Consulted when `credentials` is `None`.
    pub credentials_provider: Option<Arc<dyn CredentialsProvider>>,
    /// When set, a mutual TLS channel to this endpoint replaces `host`.
    pub api_mtls_endpoint: Option<String>,
    /// Certificate for mutual TLS; the system default is used when `None`.
    /// Ignored without `api_mtls_endpoint`.
    pub client_cert_source: Option<ClientCertSource>,
    /// Context aware metadata file naming the system default certificate
    /// source; `~/.secureConnect/context_aware_metadata.json` when `None`.
    pub cert_metadata_path: Option<PathBuf>,
}

impl TransportConfig {
    /// Plain configuration for `host`.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }
}

/// Builds a transport from its configuration.
pub type TransportFactory<T> = fn(TransportConfig) -> Result<Arc<T>>;

/// How a client obtains its transport.
pub enum TransportSelection<T: ?Sized> {
    /// The first registered transport.
    Default,
    /// The transport registered under a label.
    Label(String),
    /// A ready-made transport, used as is.
    Instance(Arc<T>),
}

impl<T: ?Sized> Default for TransportSelection<T> {
    fn default() -> Self {
        TransportSelection::Default
    }
}

impl<T: ?Sized> From<Arc<T>> for TransportSelection<T> {
    fn from(transport: Arc<T>) -> Self {
        TransportSelection::Instance(transport)
    }
}

impl<T: ?Sized> From<&str> for TransportSelection<T> {
    fn from(label: &str) -> Self {
        TransportSelection::Label(label.to_string())
    }
}

impl<T: ?Sized> fmt::Debug for TransportSelection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportSelection::Default => f.write_str("Default"),
            TransportSelection::Label(label) => f.debug_tuple("Label").field(label).finish(),
            TransportSelection::Instance(_) => f.write_str("Instance(..)"),
        }
    }
}

/// Label of the default transport.
pub const DEFAULT_TRANSPORT: &str = "grpc";

static PUBLISHER_TRANSPORTS: Lazy<Vec<(&'static str, TransportFactory<dyn PublisherTransport>)>> =
    Lazy::new(|| {
        vec![(
            DEFAULT_TRANSPORT,
            grpc::PublisherGrpcTransport::factory as TransportFactory<dyn PublisherTransport>,
        )]
    });

static SUBSCRIBER_TRANSPORTS: Lazy<
    Vec<(&'static str, TransportFactory<dyn SubscriberTransport>)>,
> = Lazy::new(|| {
    vec![(
        DEFAULT_TRANSPORT,
        grpc::SubscriberGrpcTransport::factory as TransportFactory<dyn SubscriberTransport>,
    )]
});

fn lookup<T: ?Sized>(
    registry: &[(&'static str, TransportFactory<T>)],
    label: Option<&str>,
) -> Result<TransportFactory<T>> {
    let found = match label {
        Some(label) => registry.iter().find(|(name, _)| *name == label),
        None => registry.first(),
    };
    found.map(|(_, factory)| *factory).ok_or_else(|| {
        Error::Config(format!(
            "Unknown transport {:?}; registered: {:?}",
            label.unwrap_or_default(),
            registry.iter().map(|(name, _)| *name).collect::<Vec<_>>()
        ))
    })
}

/// Factory for the publisher transport registered under `label`, or the
/// first registered one.
pub fn publisher_factory(label: Option<&str>) -> Result<TransportFactory<dyn PublisherTransport>> {
    lookup(&PUBLISHER_TRANSPORTS, label)
}

/// Factory for the subscriber transport registered under `label`, or the
/// first registered one.
pub fn subscriber_factory(
    label: Option<&str>,
) -> Result<TransportFactory<dyn SubscriberTransport>> {
    lookup(&SUBSCRIBER_TRANSPORTS, label)
}

/// Registered publisher transport labels, default first.
pub fn publisher_transports() -> Vec<&'static str> {
    PUBLISHER_TRANSPORTS.iter().map(|(name, _)| *name).collect()
}

/// Registered subscriber transport labels, default first.
pub fn subscriber_transports() -> Vec<&'static str> {
    SUBSCRIBER_TRANSPORTS.iter().map(|(name, _)| *name).collect()
}

/// Pick the transport for a new client.
///
/// A ready-made instance is used as is and cannot be combined with
/// credentials. Otherwise the registered factory is called: against the
/// default endpoint when `options` override neither endpoint nor
/// certificate, else against the override endpoint, with mutual TLS when a
/// certificate source is present.
pub fn select_transport<T: ?Sized>(
    credentials: Option<Arc<dyn Credentials>>,
    selection: TransportSelection<T>,
    options: &ClientOptions,
    factory: fn(Option<&str>) -> Result<TransportFactory<T>>,
) -> Result<Arc<T>> {
    let label = match selection {
        TransportSelection::Instance(transport) => {
            if credentials.is_some() {
                return Err(ValidationError::TransportAndCredentials.into());
            }
            info!("Using caller-supplied transport");
            return Ok(transport);
        }
        TransportSelection::Label(label) => Some(label),
        TransportSelection::Default => None,
    };
    let factory = factory(label.as_deref())?;

    let mut config = TransportConfig {
        host: DEFAULT_ENDPOINT.to_string(),
        credentials,
        credentials_provider: options.credentials_provider.clone(),
        api_mtls_endpoint: None,
        client_cert_source: None,
        cert_metadata_path: None,
    };

    if !options.is_endpoint_default() {
        if let Some(source) = &options.client_cert_source {
            config.api_mtls_endpoint = Some(
                options
                    .api_endpoint
                    .clone()
                    .unwrap_or_else(|| DEFAULT_MTLS_ENDPOINT.to_string()),
            );
            config.client_cert_source = Some(source.clone());
        }
        if let Some(endpoint) = &options.api_endpoint {
            config.host = endpoint.clone();
        }
    }

    factory(config)
}
