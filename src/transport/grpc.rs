//! gRPC transports built on tonic.
//!
//! [`GrpcChannel`] owns the connection shared by every method of one
//! transport. The tonic channel itself is created on first use and cached;
//! each method's stub is created on first call and cached by method name.

use crate::auth::{self, Credentials};
use crate::error::{Error, Result};
use crate::pubsub::proto;
use crate::transport::endpoint::{normalize_host, Scheme, ServiceAddress};
use crate::transport::mtls::{
    client_cert_source_from_metadata, default_client_cert_source, ClientCertSource,
};
use crate::transport::{
    PublisherTransport, RpcResult, StreamingPullRequests, StreamingPullResponses,
    SubscriberTransport, TransportConfig, DEFAULT_TRANSPORT,
};
use async_trait::async_trait;
use futures::StreamExt;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::metadata::AsciiMetadataValue;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint, Identity};
use tonic::Status;
use tracing::{debug, info};

/// A bound method: the client over the shared channel plus its wire path.
#[derive(Debug, Clone)]
struct Stub {
    grpc: Grpc<Channel>,
    path: PathAndQuery,
}

/// Connection state shared by the methods of one transport.
pub struct GrpcChannel {
    host: String,
    mtls: bool,
    client_cert_source: Option<ClientCertSource>,
    credentials: Option<Arc<dyn Credentials>>,
    endpoint: Option<Endpoint>,
    channel: OnceCell<Channel>,
    stubs: Mutex<HashMap<&'static str, Stub>>,
}

impl GrpcChannel {
    /// Resolve credentials and endpoint for a new channel.
    ///
    /// With `api_mtls_endpoint` set, the certificate is taken from
    /// `client_cert_source` or, failing that, the system default source.
    /// Having neither is an error, as is certificate material TLS cannot
    /// use. The connection itself is opened on first use.
    pub fn new(config: TransportConfig) -> Result<Self> {
        let TransportConfig {
            host,
            credentials,
            credentials_provider,
            api_mtls_endpoint,
            client_cert_source,
            cert_metadata_path,
        } = config;

        let (target, identity, client_cert_source) = match api_mtls_endpoint {
            Some(mtls_endpoint) => {
                let source = match client_cert_source {
                    Some(source) => source,
                    None => match cert_metadata_path {
                        Some(path) => client_cert_source_from_metadata(&path)?,
                        None => default_client_cert_source()?,
                    }
                    .ok_or_else(|| {
                        Error::MutualTls(
                            "no client certificate source was given and no system default is configured"
                                .to_string(),
                        )
                    })?,
                };
                let bundle = source.load().map_err(|e| {
                    Error::MutualTls(format!("client certificate callback failed: {}", e))
                })?;
                (mtls_endpoint, Some(bundle), Some(source))
            }
            None => (host, None, None),
        };

        let address = ServiceAddress::parse(&target)?;
        let mtls = identity.is_some();
        if mtls && address.scheme == Scheme::Http {
            return Err(Error::MutualTls(format!(
                "mutual TLS needs a secure endpoint, got {}",
                target
            )));
        }

        let credentials = auth::resolve(credentials, credentials_provider.as_ref())?;
        let mut endpoint = Endpoint::from_shared(address.uri())?;
        if address.scheme == Scheme::Https {
            let tls = ClientTlsConfig::new()
                .with_native_roots()
                .domain_name(address.domain());
            endpoint = match identity {
                Some(bundle) => endpoint
                    .tls_config(tls.identity(Identity::from_pem(bundle.cert_pem, bundle.key_pem)))
                    .map_err(|e| Error::MutualTls(format!("client certificate rejected: {}", e)))?,
                None => endpoint.tls_config(tls)?,
            };
        }

        info!("gRPC transport for {} (mtls: {})", address.host, mtls);
        Ok(Self {
            host: address.host.clone(),
            mtls,
            client_cert_source,
            credentials: Some(credentials),
            endpoint: Some(endpoint),
            channel: OnceCell::new(),
            stubs: Mutex::new(HashMap::new()),
        })
    }

    /// Adopt an existing channel. Credentials are not consulted; whatever
    /// authorization the channel needs must already be part of it.
    pub fn from_channel(host: &str, channel: Channel) -> Self {
        info!("gRPC transport adopting an existing channel for {}", host);
        Self {
            host: normalize_host(host),
            mtls: false,
            client_cert_source: None,
            credentials: None,
            endpoint: None,
            channel: OnceCell::with_value(channel),
            stubs: Mutex::new(HashMap::new()),
        }
    }

    /// `host:port` of the service.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Whether the channel uses a client certificate.
    pub fn is_mtls(&self) -> bool {
        self.mtls
    }

    /// Certificate source used for mutual TLS.
    pub fn client_cert_source(&self) -> Option<&ClientCertSource> {
        self.client_cert_source.as_ref()
    }

    /// Credentials attached to each call; `None` for an adopted channel.
    pub fn credentials(&self) -> Option<&Arc<dyn Credentials>> {
        self.credentials.as_ref()
    }

    /// Whether the channel was supplied by the caller.
    pub fn is_adopted(&self) -> bool {
        self.endpoint.is_none()
    }

    /// The channel, created on first access.
    pub fn channel(&self) -> Result<Channel> {
        self.channel
            .get_or_try_init(|| -> Result<Channel> {
                let endpoint = self
                    .endpoint
                    .as_ref()
                    .ok_or_else(|| Error::Internal("channel has no endpoint".to_string()))?;
                debug!("Creating channel to {}", endpoint.uri());
                Ok(endpoint.connect_lazy())
            })
            .cloned()
    }

    /// Number of methods bound so far.
    pub fn bound_methods(&self) -> usize {
        self.stubs.lock().map(|stubs| stubs.len()).unwrap_or_default()
    }

    fn stub(&self, name: &'static str, path: &'static str) -> std::result::Result<Stub, Status> {
        let mut stubs = self
            .stubs
            .lock()
            .map_err(|_| Status::internal("stub cache lock poisoned"))?;
        if let Some(stub) = stubs.get(name) {
            return Ok(stub.clone());
        }

        let channel = self
            .channel()
            .map_err(|e| Status::failed_precondition(format!("channel setup failed: {}", e)))?;
        let stub = Stub {
            grpc: Grpc::new(channel),
            path: PathAndQuery::from_static(path),
        };
        stubs.insert(name, stub.clone());
        Ok(stub)
    }

    fn authorize<T>(&self, mut request: tonic::Request<T>) -> std::result::Result<tonic::Request<T>, Status> {
        let Some(credentials) = &self.credentials else {
            return Ok(request);
        };
        let header = credentials
            .authorization_header()
            .map_err(|e| Status::unauthenticated(e.to_string()))?;
        if let Some(header) = header {
            let value = AsciiMetadataValue::try_from(header.as_str())
                .map_err(|_| Status::unauthenticated("authorization header is not valid metadata"))?;
            request.metadata_mut().insert("authorization", value);
        }
        Ok(request)
    }

    async fn ready(&self, name: &'static str, path: &'static str) -> std::result::Result<Stub, Status> {
        let mut stub = self.stub(name, path)?;
        stub.grpc
            .ready()
            .await
            .map_err(|e| Status::unavailable(format!("Service was not ready: {}", e)))?;
        Ok(stub)
    }

    /// Issue a unary call on the method `name`.
    pub async fn unary<Req, Resp>(
        &self,
        name: &'static str,
        path: &'static str,
        request: tonic::Request<Req>,
    ) -> RpcResult<Resp>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let request = self.authorize(request)?;
        let mut stub = self.ready(name, path).await?;
        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        stub.grpc.unary(request, stub.path.clone(), codec).await
    }

    /// Open a bidirectional stream on the method `name`.
    pub async fn streaming<Req, Resp>(
        &self,
        name: &'static str,
        path: &'static str,
        request: tonic::Request<futures::stream::BoxStream<'static, Req>>,
    ) -> RpcResult<futures::stream::BoxStream<'static, std::result::Result<Resp, Status>>>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let request = self.authorize(request)?;
        let mut stub = self.ready(name, path).await?;
        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        let response = stub.grpc.streaming(request, stub.path.clone(), codec).await?;
        Ok(response.map(|stream| stream.boxed()))
    }
}

impl fmt::Debug for GrpcChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrpcChannel")
            .field("host", &self.host)
            .field("mtls", &self.mtls)
            .field("adopted", &self.is_adopted())
            .field("connected", &self.channel.get().is_some())
            .finish()
    }
}

macro_rules! unary {
    ($self:ident, $service:literal, $name:literal, $request:ident) => {
        $self
            .channel
            .unary($name, concat!("/google.pubsub.v1.", $service, "/", $name), $request)
            .await
    };
}

/// Publisher transport over gRPC.
#[derive(Debug)]
pub struct PublisherGrpcTransport {
    channel: GrpcChannel,
}

impl PublisherGrpcTransport {
    /// Build a transport from `config`.
    pub fn new(config: TransportConfig) -> Result<Self> {
        Ok(Self {
            channel: GrpcChannel::new(config)?,
        })
    }

    /// Use an existing channel; credentials are ignored.
    pub fn with_channel(host: &str, channel: Channel) -> Self {
        Self {
            channel: GrpcChannel::from_channel(host, channel),
        }
    }

    /// Registry entry point.
    pub fn factory(config: TransportConfig) -> Result<Arc<dyn PublisherTransport>> {
        Ok(Arc::new(Self::new(config)?))
    }

    /// The underlying channel.
    pub fn grpc_channel(&self) -> &GrpcChannel {
        &self.channel
    }
}

#[async_trait]
impl PublisherTransport for PublisherGrpcTransport {
    fn kind(&self) -> &'static str {
        DEFAULT_TRANSPORT
    }

    fn host(&self) -> &str {
        self.channel.host()
    }

    fn is_mtls(&self) -> bool {
        self.channel.is_mtls()
    }

    fn client_cert_source(&self) -> Option<&ClientCertSource> {
        self.channel.client_cert_source()
    }

    async fn create_topic(&self, request: tonic::Request<proto::Topic>) -> RpcResult<proto::Topic> {
        unary!(self, "Publisher", "CreateTopic", request)
    }

    async fn update_topic(
        &self,
        request: tonic::Request<proto::UpdateTopicRequest>,
    ) -> RpcResult<proto::Topic> {
        unary!(self, "Publisher", "UpdateTopic", request)
    }

    async fn publish(
        &self,
        request: tonic::Request<proto::PublishRequest>,
    ) -> RpcResult<proto::PublishResponse> {
        unary!(self, "Publisher", "Publish", request)
    }

    async fn get_topic(
        &self,
        request: tonic::Request<proto::GetTopicRequest>,
    ) -> RpcResult<proto::Topic> {
        unary!(self, "Publisher", "GetTopic", request)
    }

    async fn list_topics(
        &self,
        request: tonic::Request<proto::ListTopicsRequest>,
    ) -> RpcResult<proto::ListTopicsResponse> {
        unary!(self, "Publisher", "ListTopics", request)
    }

    async fn list_topic_subscriptions(
        &self,
        request: tonic::Request<proto::ListTopicSubscriptionsRequest>,
    ) -> RpcResult<proto::ListTopicSubscriptionsResponse> {
        unary!(self, "Publisher", "ListTopicSubscriptions", request)
    }

    async fn list_topic_snapshots(
        &self,
        request: tonic::Request<proto::ListTopicSnapshotsRequest>,
    ) -> RpcResult<proto::ListTopicSnapshotsResponse> {
        unary!(self, "Publisher", "ListTopicSnapshots", request)
    }

    async fn delete_topic(
        &self,
        request: tonic::Request<proto::DeleteTopicRequest>,
    ) -> RpcResult<()> {
        unary!(self, "Publisher", "DeleteTopic", request)
    }

    async fn detach_subscription(
        &self,
        request: tonic::Request<proto::DetachSubscriptionRequest>,
    ) -> RpcResult<proto::DetachSubscriptionResponse> {
        unary!(self, "Publisher", "DetachSubscription", request)
    }
}

/// Subscriber transport over gRPC.
#[derive(Debug)]
pub struct SubscriberGrpcTransport {
    channel: GrpcChannel,
}

impl SubscriberGrpcTransport {
    /// Build a transport from `config`.
    pub fn new(config: TransportConfig) -> Result<Self> {
        Ok(Self {
            channel: GrpcChannel::new(config)?,
        })
    }

    /// Use an existing channel; credentials are ignored.
    pub fn with_channel(host: &str, channel: Channel) -> Self {
        Self {
            channel: GrpcChannel::from_channel(host, channel),
        }
    }

    /// Registry entry point.
    pub fn factory(config: TransportConfig) -> Result<Arc<dyn SubscriberTransport>> {
        Ok(Arc::new(Self::new(config)?))
    }

    /// The underlying channel.
    pub fn grpc_channel(&self) -> &GrpcChannel {
        &self.channel
    }
}

#[async_trait]
impl SubscriberTransport for SubscriberGrpcTransport {
    fn kind(&self) -> &'static str {
        DEFAULT_TRANSPORT
    }

    fn host(&self) -> &str {
        self.channel.host()
    }

    fn is_mtls(&self) -> bool {
        self.channel.is_mtls()
    }

    fn client_cert_source(&self) -> Option<&ClientCertSource> {
        self.channel.client_cert_source()
    }

    async fn create_subscription(
        &self,
        request: tonic::Request<proto::Subscription>,
    ) -> RpcResult<proto::Subscription> {
        unary!(self, "Subscriber", "CreateSubscription", request)
    }

    async fn get_subscription(
        &self,
        request: tonic::Request<proto::GetSubscriptionRequest>,
    ) -> RpcResult<proto::Subscription> {
        unary!(self, "Subscriber", "GetSubscription", request)
    }

    async fn update_subscription(
        &self,
        request: tonic::Request<proto::UpdateSubscriptionRequest>,
    ) -> RpcResult<proto::Subscription> {
        unary!(self, "Subscriber", "UpdateSubscription", request)
    }

    async fn list_subscriptions(
        &self,
        request: tonic::Request<proto::ListSubscriptionsRequest>,
    ) -> RpcResult<proto::ListSubscriptionsResponse> {
        unary!(self, "Subscriber", "ListSubscriptions", request)
    }

    async fn delete_subscription(
        &self,
        request: tonic::Request<proto::DeleteSubscriptionRequest>,
    ) -> RpcResult<()> {
        unary!(self, "Subscriber", "DeleteSubscription", request)
    }

    async fn modify_ack_deadline(
        &self,
        request: tonic::Request<proto::ModifyAckDeadlineRequest>,
    ) -> RpcResult<()> {
        unary!(self, "Subscriber", "ModifyAckDeadline", request)
    }

    async fn acknowledge(
        &self,
        request: tonic::Request<proto::AcknowledgeRequest>,
    ) -> RpcResult<()> {
        unary!(self, "Subscriber", "Acknowledge", request)
    }

    async fn pull(
        &self,
        request: tonic::Request<proto::PullRequest>,
    ) -> RpcResult<proto::PullResponse> {
        unary!(self, "Subscriber", "Pull", request)
    }

    async fn streaming_pull(
        &self,
        request: tonic::Request<StreamingPullRequests>,
    ) -> RpcResult<StreamingPullResponses> {
        self.channel
            .streaming(
                "StreamingPull",
                "/google.pubsub.v1.Subscriber/StreamingPull",
                request,
            )
            .await
    }

    async fn modify_push_config(
        &self,
        request: tonic::Request<proto::ModifyPushConfigRequest>,
    ) -> RpcResult<()> {
        unary!(self, "Subscriber", "ModifyPushConfig", request)
    }

    async fn get_snapshot(
        &self,
        request: tonic::Request<proto::GetSnapshotRequest>,
    ) -> RpcResult<proto::Snapshot> {
        unary!(self, "Subscriber", "GetSnapshot", request)
    }

    async fn list_snapshots(
        &self,
        request: tonic::Request<proto::ListSnapshotsRequest>,
    ) -> RpcResult<proto::ListSnapshotsResponse> {
        unary!(self, "Subscriber", "ListSnapshots", request)
    }

    async fn create_snapshot(
        &self,
        request: tonic::Request<proto::CreateSnapshotRequest>,
    ) -> RpcResult<proto::Snapshot> {
        unary!(self, "Subscriber", "CreateSnapshot", request)
    }

    async fn update_snapshot(
        &self,
        request: tonic::Request<proto::UpdateSnapshotRequest>,
    ) -> RpcResult<proto::Snapshot> {
        unary!(self, "Subscriber", "UpdateSnapshot", request)
    }

    async fn delete_snapshot(
        &self,
        request: tonic::Request<proto::DeleteSnapshotRequest>,
    ) -> RpcResult<()> {
        unary!(self, "Subscriber", "DeleteSnapshot", request)
    }

    async fn seek(
        &self,
        request: tonic::Request<proto::SeekRequest>,
    ) -> RpcResult<proto::SeekResponse> {
        unary!(self, "Subscriber", "Seek", request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AccessToken, CredentialsProvider};
    use crate::transport::endpoint::DEFAULT_MTLS_ENDPOINT;
    use crate::transport::mtls::CertificateBundle;
    use std::sync::atomic::{AtomicU32, Ordering};

    const CLIENT_CERT: &str = include_str!("../../tests/fixtures/client.pem");
    const CLIENT_KEY: &str = include_str!("../../tests/fixtures/client.key");

    #[derive(Debug, Default)]
    struct CountingProvider {
        calls: AtomicU32,
    }

    impl CredentialsProvider for CountingProvider {
        fn default_credentials(&self, _scopes: &[&str]) -> Result<Arc<dyn Credentials>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(auth::Anonymous))
        }
    }

    #[test]
    fn test_host_gets_default_port() {
        let channel = GrpcChannel::new(TransportConfig::new("pubsub.googleapis.com")).unwrap();
        assert_eq!(channel.host(), "pubsub.googleapis.com:443");
        assert!(!channel.is_mtls());

        let channel = GrpcChannel::new(TransportConfig::new("pubsub.googleapis.com:8000")).unwrap();
        assert_eq!(channel.host(), "pubsub.googleapis.com:8000");
    }

    #[test]
    fn test_plaintext_emulator_endpoint() {
        let channel = GrpcChannel::new(TransportConfig::new("http://localhost:8085")).unwrap();
        assert_eq!(channel.host(), "localhost:8085");
        assert!(!channel.is_adopted());
    }

    #[test]
    fn test_provider_consulted_without_credentials() {
        let provider = Arc::new(CountingProvider::default());
        let config = TransportConfig {
            credentials_provider: Some(provider.clone()),
            ..TransportConfig::new("squid.clam.whelk")
        };
        GrpcChannel::new(config).unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

        let config = TransportConfig {
            credentials: Some(Arc::new(AccessToken::new("t").unwrap())),
            credentials_provider: Some(provider.clone()),
            ..TransportConfig::new("squid.clam.whelk")
        };
        let channel = GrpcChannel::new(config).unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert!(channel.credentials().is_some());
    }

    #[test]
    fn test_mtls_uses_callback_and_mtls_host() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let source = ClientCertSource::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(CertificateBundle {
                cert_pem: CLIENT_CERT.as_bytes().to_vec(),
                key_pem: CLIENT_KEY.as_bytes().to_vec(),
            })
        });
        let config = TransportConfig {
            api_mtls_endpoint: Some(DEFAULT_MTLS_ENDPOINT.to_string()),
            client_cert_source: Some(source.clone()),
            ..TransportConfig::new("pubsub.googleapis.com")
        };

        let channel = GrpcChannel::new(config).unwrap();
        assert_eq!(channel.host(), "pubsub.mtls.googleapis.com:443");
        assert!(channel.is_mtls());
        assert!(channel.client_cert_source().unwrap().same_source(&source));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_mtls_callback_failure() {
        let source = ClientCertSource::new(|| Err(Error::Internal("no cert".to_string())));
        let config = TransportConfig {
            api_mtls_endpoint: Some("squid.clam.whelk".to_string()),
            client_cert_source: Some(source),
            ..Default::default()
        };
        assert!(matches!(GrpcChannel::new(config), Err(Error::MutualTls(_))));
    }

    #[test]
    fn test_mtls_rejects_unusable_certificate() {
        let config = TransportConfig {
            api_mtls_endpoint: Some(DEFAULT_MTLS_ENDPOINT.to_string()),
            client_cert_source: Some(ClientCertSource::from_pem("not a certificate", "not a key")),
            ..TransportConfig::new("pubsub.googleapis.com")
        };
        assert!(matches!(GrpcChannel::new(config), Err(Error::MutualTls(_))));

        let config = TransportConfig {
            api_mtls_endpoint: Some(DEFAULT_MTLS_ENDPOINT.to_string()),
            client_cert_source: Some(ClientCertSource::from_pem(CLIENT_CERT, "not a key")),
            ..TransportConfig::new("pubsub.googleapis.com")
        };
        assert!(matches!(GrpcChannel::new(config), Err(Error::MutualTls(_))));
    }

    #[test]
    fn test_mtls_without_any_cert_source() {
        let config = TransportConfig {
            api_mtls_endpoint: Some(DEFAULT_MTLS_ENDPOINT.to_string()),
            cert_metadata_path: Some(
                std::env::temp_dir().join("pubsub-gapic-no-device-cert/context_aware_metadata.json"),
            ),
            ..TransportConfig::new("pubsub.googleapis.com")
        };
        let err = GrpcChannel::new(config).unwrap_err();
        assert!(matches!(err, Error::MutualTls(_)));
        assert!(err.to_string().contains("no system default"));
    }

    #[cfg(unix)]
    #[test]
    fn test_mtls_falls_back_to_device_cert_source() {
        let dir = std::env::temp_dir().join(format!("pubsub-gapic-device-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let bundle_path = dir.join("bundle.pem");
        std::fs::write(&bundle_path, format!("{}{}", CLIENT_CERT, CLIENT_KEY)).unwrap();
        let metadata_path = dir.join("context_aware_metadata.json");
        let metadata = serde_json::json!({
            "cert_provider_command": ["cat", bundle_path.to_string_lossy()],
        });
        std::fs::write(&metadata_path, metadata.to_string()).unwrap();

        let config = TransportConfig {
            api_mtls_endpoint: Some(DEFAULT_MTLS_ENDPOINT.to_string()),
            cert_metadata_path: Some(metadata_path),
            ..TransportConfig::new("pubsub.googleapis.com")
        };
        let channel = GrpcChannel::new(config).unwrap();
        assert!(channel.is_mtls());
        assert!(channel.client_cert_source().is_some());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_mtls_rejects_plaintext_endpoint() {
        let config = TransportConfig {
            api_mtls_endpoint: Some("http://localhost:8085".to_string()),
            client_cert_source: Some(ClientCertSource::from_pem("cert", "key")),
            ..Default::default()
        };
        assert!(matches!(GrpcChannel::new(config), Err(Error::MutualTls(_))));
    }

    #[test]
    fn test_cert_source_ignored_without_mtls_endpoint() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let source = ClientCertSource::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(CertificateBundle {
                cert_pem: vec![],
                key_pem: vec![],
            })
        });
        let config = TransportConfig {
            client_cert_source: Some(source),
            ..TransportConfig::new("squid.clam.whelk")
        };
        let channel = GrpcChannel::new(config).unwrap();
        assert!(!channel.is_mtls());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_adopted_channel_skips_credentials() {
        let channel = Endpoint::from_static("http://localhost:1").connect_lazy();
        let transport = PublisherGrpcTransport::with_channel("squid.clam.whelk", channel);

        assert_eq!(transport.host(), "squid.clam.whelk:443");
        assert!(transport.grpc_channel().is_adopted());
        assert!(transport.grpc_channel().credentials().is_none());
    }

    #[tokio::test]
    async fn test_channel_and_stubs_are_cached() {
        let transport = SubscriberGrpcTransport::new(TransportConfig::new("http://localhost:1")).unwrap();
        let channel = transport.grpc_channel();
        assert!(format!("{:?}", channel).contains("connected: false"));

        channel.stub("Pull", "/google.pubsub.v1.Subscriber/Pull").unwrap();
        channel.stub("Pull", "/google.pubsub.v1.Subscriber/Pull").unwrap();
        channel.stub("Seek", "/google.pubsub.v1.Subscriber/Seek").unwrap();

        assert_eq!(channel.bound_methods(), 2);
        assert!(format!("{:?}", channel).contains("connected: true"));
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = GrpcChannel::new(TransportConfig::new("https://"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
