//! Integration tests for the client facades over a recording transport.

use async_trait::async_trait;
use futures::StreamExt;
use pubsub_gapic::auth::{AccessToken, Credentials};
use pubsub_gapic::pubsub::proto;
use pubsub_gapic::transport::mtls::ClientCertSource;
use pubsub_gapic::transport::{
    PublisherTransport, RpcResult, StreamingPullRequests, StreamingPullResponses,
    SubscriberTransport, TransportSelection,
};
use pubsub_gapic::{ClientOptions, Error, PublisherClient, RetryPolicy, SubscriberClient};
use std::any::Any;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tonic::metadata::KeyAndValueRef;
use tonic::{Code, Status};

type Reply = Result<Box<dyn Any + Send>, Status>;

/// One call seen by the transport.
struct RecordedCall {
    method: &'static str,
    metadata: Vec<(String, String)>,
    request: Box<dyn Any + Send>,
}

impl RecordedCall {
    fn header(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn request<T: 'static>(&self) -> &T {
        self.request.downcast_ref::<T>().expect("unexpected request type")
    }
}

/// Records every request with its metadata and replays queued replies.
/// Methods with nothing queued answer with the default response.
#[derive(Default)]
struct MockTransport {
    calls: Mutex<Vec<RecordedCall>>,
    replies: Mutex<HashMap<&'static str, VecDeque<Reply>>>,
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport").finish_non_exhaustive()
    }
}

impl MockTransport {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn queue<T: Send + 'static>(&self, method: &'static str, response: T) {
        self.push(method, Ok(Box::new(response)));
    }

    fn queue_error(&self, method: &'static str, status: Status) {
        self.push(method, Err(status));
    }

    fn push(&self, method: &'static str, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .entry(method)
            .or_default()
            .push_back(reply);
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn with_calls<R>(&self, f: impl FnOnce(&[RecordedCall]) -> R) -> R {
        f(&self.calls.lock().unwrap())
    }

    fn record<Req: Send + 'static>(&self, method: &'static str, request: tonic::Request<Req>) {
        let metadata = request
            .metadata()
            .iter()
            .filter_map(|entry| match entry {
                KeyAndValueRef::Ascii(key, value) => Some((
                    key.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )),
                KeyAndValueRef::Binary(..) => None,
            })
            .collect();
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            metadata,
            request: Box::new(request.into_inner()),
        });
    }

    fn reply<Req, Resp>(&self, method: &'static str, request: tonic::Request<Req>) -> RpcResult<Resp>
    where
        Req: Send + 'static,
        Resp: Default + Send + 'static,
    {
        self.record(method, request);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .get_mut(method)
            .and_then(VecDeque::pop_front);
        match reply {
            Some(Ok(response)) => Ok(tonic::Response::new(
                *response.downcast::<Resp>().expect("unexpected response type"),
            )),
            Some(Err(status)) => Err(status),
            None => Ok(tonic::Response::new(Resp::default())),
        }
    }
}

#[async_trait]
impl PublisherTransport for MockTransport {
    fn kind(&self) -> &'static str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock.googleapis.com:443"
    }

    async fn create_topic(&self, request: tonic::Request<proto::Topic>) -> RpcResult<proto::Topic> {
        self.reply("CreateTopic", request)
    }

    async fn update_topic(
        &self,
        request: tonic::Request<proto::UpdateTopicRequest>,
    ) -> RpcResult<proto::Topic> {
        self.reply("UpdateTopic", request)
    }

    async fn publish(
        &self,
        request: tonic::Request<proto::PublishRequest>,
    ) -> RpcResult<proto::PublishResponse> {
        self.reply("Publish", request)
    }

    async fn get_topic(
        &self,
        request: tonic::Request<proto::GetTopicRequest>,
    ) -> RpcResult<proto::Topic> {
        self.reply("GetTopic", request)
    }

    async fn list_topics(
        &self,
        request: tonic::Request<proto::ListTopicsRequest>,
    ) -> RpcResult<proto::ListTopicsResponse> {
        self.reply("ListTopics", request)
    }

    async fn list_topic_subscriptions(
        &self,
        request: tonic::Request<proto::ListTopicSubscriptionsRequest>,
    ) -> RpcResult<proto::ListTopicSubscriptionsResponse> {
        self.reply("ListTopicSubscriptions", request)
    }

    async fn list_topic_snapshots(
        &self,
        request: tonic::Request<proto::ListTopicSnapshotsRequest>,
    ) -> RpcResult<proto::ListTopicSnapshotsResponse> {
        self.reply("ListTopicSnapshots", request)
    }

    async fn delete_topic(&self, request: tonic::Request<proto::DeleteTopicRequest>) -> RpcResult<()> {
        self.reply("DeleteTopic", request)
    }

    async fn detach_subscription(
        &self,
        request: tonic::Request<proto::DetachSubscriptionRequest>,
    ) -> RpcResult<proto::DetachSubscriptionResponse> {
        self.reply("DetachSubscription", request)
    }
}

#[async_trait]
impl SubscriberTransport for MockTransport {
    fn kind(&self) -> &'static str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock.googleapis.com:443"
    }

    async fn create_subscription(
        &self,
        request: tonic::Request<proto::Subscription>,
    ) -> RpcResult<proto::Subscription> {
        self.reply("CreateSubscription", request)
    }

    async fn get_subscription(
        &self,
        request: tonic::Request<proto::GetSubscriptionRequest>,
    ) -> RpcResult<proto::Subscription> {
        self.reply("GetSubscription", request)
    }

    async fn update_subscription(
        &self,
        request: tonic::Request<proto::UpdateSubscriptionRequest>,
    ) -> RpcResult<proto::Subscription> {
        self.reply("UpdateSubscription", request)
    }

    async fn list_subscriptions(
        &self,
        request: tonic::Request<proto::ListSubscriptionsRequest>,
    ) -> RpcResult<proto::ListSubscriptionsResponse> {
        self.reply("ListSubscriptions", request)
    }

    async fn delete_subscription(
        &self,
        request: tonic::Request<proto::DeleteSubscriptionRequest>,
    ) -> RpcResult<()> {
        self.reply("DeleteSubscription", request)
    }

    async fn modify_ack_deadline(
        &self,
        request: tonic::Request<proto::ModifyAckDeadlineRequest>,
    ) -> RpcResult<()> {
        self.reply("ModifyAckDeadline", request)
    }

    async fn acknowledge(&self, request: tonic::Request<proto::AcknowledgeRequest>) -> RpcResult<()> {
        self.reply("Acknowledge", request)
    }

    async fn pull(
        &self,
        request: tonic::Request<proto::PullRequest>,
    ) -> RpcResult<proto::PullResponse> {
        self.reply("Pull", request)
    }

    async fn streaming_pull(
        &self,
        request: tonic::Request<StreamingPullRequests>,
    ) -> RpcResult<StreamingPullResponses> {
        let metadata_only = tonic::Request::from_parts(
            request.metadata().clone(),
            Default::default(),
            (),
        );
        self.record("StreamingPull", metadata_only);

        let requests: Vec<proto::StreamingPullRequest> = request.into_inner().collect().await;
        let responses = requests.into_iter().map(|r| {
            Ok(proto::StreamingPullResponse {
                received_messages: vec![proto::ReceivedMessage {
                    ack_id: format!("ack-for-{}", r.subscription),
                    message: None,
                    delivery_attempt: 0,
                }],
            })
        });
        Ok(tonic::Response::new(futures::stream::iter(responses).boxed()))
    }

    async fn modify_push_config(
        &self,
        request: tonic::Request<proto::ModifyPushConfigRequest>,
    ) -> RpcResult<()> {
        self.reply("ModifyPushConfig", request)
    }

    async fn get_snapshot(
        &self,
        request: tonic::Request<proto::GetSnapshotRequest>,
    ) -> RpcResult<proto::Snapshot> {
        self.reply("GetSnapshot", request)
    }

    async fn list_snapshots(
        &self,
        request: tonic::Request<proto::ListSnapshotsRequest>,
    ) -> RpcResult<proto::ListSnapshotsResponse> {
        self.reply("ListSnapshots", request)
    }

    async fn create_snapshot(
        &self,
        request: tonic::Request<proto::CreateSnapshotRequest>,
    ) -> RpcResult<proto::Snapshot> {
        self.reply("CreateSnapshot", request)
    }

    async fn update_snapshot(
        &self,
        request: tonic::Request<proto::UpdateSnapshotRequest>,
    ) -> RpcResult<proto::Snapshot> {
        self.reply("UpdateSnapshot", request)
    }

    async fn delete_snapshot(&self, request: tonic::Request<proto::DeleteSnapshotRequest>) -> RpcResult<()> {
        self.reply("DeleteSnapshot", request)
    }

    async fn seek(&self, request: tonic::Request<proto::SeekRequest>) -> RpcResult<proto::SeekResponse> {
        self.reply("Seek", request)
    }
}

fn publisher(mock: &Arc<MockTransport>) -> PublisherClient {
    PublisherClient::from_transport(mock.clone(), ClientOptions::default())
}

fn subscriber(mock: &Arc<MockTransport>) -> SubscriberClient {
    SubscriberClient::from_transport(mock.clone(), ClientOptions::default())
}

fn topics_page(count: usize, token: &str) -> proto::ListTopicsResponse {
    proto::ListTopicsResponse {
        topics: (0..count)
            .map(|i| proto::Topic {
                name: format!("projects/p/topics/{}-{}", token, i),
                ..Default::default()
            })
            .collect(),
        next_page_token: token.to_string(),
    }
}

/// Queue the 3/0/1/2 listing used by the pager tests.
fn queue_four_pages(mock: &MockTransport) {
    mock.queue("ListTopics", topics_page(3, "abc"));
    mock.queue("ListTopics", topics_page(0, "def"));
    mock.queue("ListTopics", topics_page(1, "ghi"));
    mock.queue("ListTopics", topics_page(2, ""));
}

/// A full request plus a flattened field is rejected before any call.
#[tokio::test]
async fn test_request_and_fields_are_mutually_exclusive() {
    let mock = MockTransport::new();
    let client = publisher(&mock);

    let err = client
        .get_topic()
        .with_request(proto::GetTopicRequest {
            topic: "projects/squid/topics/clam".to_string(),
        })
        .topic("projects/squid/topics/clam")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_caller_misuse());
    assert!(err.to_string().contains("GetTopic"));

    let err = subscriber(&mock)
        .acknowledge()
        .with_request(proto::AcknowledgeRequest::default())
        .ack_ids(["a"])
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_flattened_fields_build_the_request() {
    let mock = MockTransport::new();
    let expected = proto::Topic {
        name: "projects/squid/topics/clam".to_string(),
        ..Default::default()
    };
    mock.queue("GetTopic", expected.clone());

    let topic = publisher(&mock)
        .get_topic()
        .topic("projects/squid/topics/clam")
        .send()
        .await
        .unwrap();
    assert_eq!(topic, expected);

    mock.with_calls(|calls| {
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "GetTopic");
        assert_eq!(
            calls[0].request::<proto::GetTopicRequest>().topic,
            "projects/squid/topics/clam"
        );
    });
}

#[tokio::test]
async fn test_full_request_is_sent_unchanged() {
    let mock = MockTransport::new();
    let request = proto::ModifyAckDeadlineRequest {
        subscription: "projects/p/subscriptions/s".to_string(),
        ack_ids: vec!["a".to_string(), "b".to_string()],
        ack_deadline_seconds: 42,
    };

    subscriber(&mock)
        .modify_ack_deadline()
        .with_request(request.clone())
        .send()
        .await
        .unwrap();

    mock.with_calls(|calls| {
        assert_eq!(calls[0].request::<proto::ModifyAckDeadlineRequest>(), &request);
    });
}

#[tokio::test]
async fn test_routing_header_is_sent() {
    let mock = MockTransport::new();

    publisher(&mock)
        .get_topic()
        .topic("projects/squid/topics/clam")
        .send()
        .await
        .unwrap();
    subscriber(&mock)
        .update_subscription()
        .with_request(proto::UpdateSubscriptionRequest {
            subscription: Some(proto::Subscription {
                name: "projects/p/subscriptions/s".to_string(),
                ..Default::default()
            }),
            update_mask: None,
        })
        .send()
        .await
        .unwrap();

    mock.with_calls(|calls| {
        assert_eq!(
            calls[0].header("x-goog-request-params"),
            Some("topic=projects/squid/topics/clam")
        );
        assert_eq!(
            calls[1].header("x-goog-request-params"),
            Some("subscription.name=projects/p/subscriptions/s")
        );
    });
}

#[tokio::test]
async fn test_metadata_order() {
    let mock = MockTransport::new();

    publisher(&mock)
        .delete_topic()
        .topic("projects/p/topics/t")
        .with_metadata("x-custom", "1")
        .send()
        .await
        .unwrap();

    mock.with_calls(|calls| {
        let keys: Vec<&str> = calls[0].metadata.iter().map(|(k, _)| k.as_str()).collect();
        let custom = keys.iter().position(|k| *k == "x-custom").unwrap();
        let routing = keys.iter().position(|k| *k == "x-goog-request-params").unwrap();
        let info = keys.iter().position(|k| *k == "x-goog-api-client").unwrap();
        assert!(custom < routing);
        assert!(routing < info);
        assert!(calls[0].header("x-goog-api-client").unwrap().contains("gapic/"));
    });
}

#[tokio::test]
async fn test_list_topics_pager_flattens_items() {
    let mock = MockTransport::new();
    queue_four_pages(&mock);

    let pager = publisher(&mock)
        .list_topics()
        .project("projects/p")
        .send()
        .await
        .unwrap();
    assert_eq!(pager.current_page().topics.len(), 3);
    assert_eq!(mock.call_count(), 1);

    let topics = pager.collect_items().await.unwrap();
    assert_eq!(topics.len(), 6);
    assert_eq!(topics[0].name, "projects/p/topics/abc-0");
    assert_eq!(topics[5].name, "projects/p/topics/-1");

    mock.with_calls(|calls| {
        let tokens: Vec<&str> = calls
            .iter()
            .map(|c| c.request::<proto::ListTopicsRequest>().page_token.as_str())
            .collect();
        assert_eq!(tokens, vec!["", "abc", "def", "ghi"]);
        for call in calls {
            assert_eq!(call.request::<proto::ListTopicsRequest>().project, "projects/p");
            assert_eq!(call.header("x-goog-request-params"), Some("project=projects/p"));
        }
    });
}

#[tokio::test]
async fn test_list_topics_pager_yields_pages() {
    let mock = MockTransport::new();
    queue_four_pages(&mock);

    let pager = publisher(&mock)
        .list_topics()
        .project("projects/p")
        .send()
        .await
        .unwrap();

    let pages: Vec<proto::ListTopicsResponse> = pager
        .pages()
        .map(|page| page.unwrap())
        .collect()
        .await;
    let tokens: Vec<&str> = pages.iter().map(|p| p.next_page_token.as_str()).collect();
    assert_eq!(tokens, vec!["abc", "def", "ghi", ""]);
}

#[tokio::test]
async fn test_pager_reports_fetch_errors() {
    let mock = MockTransport::new();
    mock.queue(
        "ListSubscriptions",
        proto::ListSubscriptionsResponse {
            subscriptions: vec![proto::Subscription::default()],
            next_page_token: "more".to_string(),
        },
    );
    mock.queue_error("ListSubscriptions", Status::permission_denied("no"));

    let mut pager = subscriber(&mock)
        .list_subscriptions()
        .project("projects/p")
        .with_retry(RetryPolicy::disabled())
        .send()
        .await
        .unwrap();

    assert!(pager.next().await.unwrap().is_some());
    let err = pager.next().await.unwrap_err();
    assert_eq!(err.code(), Some(Code::PermissionDenied));
    assert!(pager.next().await.unwrap().is_none());
    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn test_error_status_is_propagated() {
    let mock = MockTransport::new();
    mock.queue_error("GetSnapshot", Status::not_found("no such snapshot"));

    let err = subscriber(&mock)
        .get_snapshot()
        .snapshot("projects/p/snapshots/s")
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::NotFound));
    assert_eq!(err.status().unwrap().message(), "no such snapshot");
}

#[tokio::test(start_paused = true)]
async fn test_unavailable_is_retried() {
    let mock = MockTransport::new();
    mock.queue_error("Publish", Status::unavailable("busy"));
    mock.queue(
        "Publish",
        proto::PublishResponse {
            message_ids: vec!["1".to_string()],
        },
    );

    let response = publisher(&mock)
        .publish()
        .topic("projects/p/topics/t")
        .messages([proto::PubsubMessage {
            data: b"hello".to_vec(),
            ..Default::default()
        }])
        .send()
        .await
        .unwrap();
    assert_eq!(response.message_ids, vec!["1".to_string()]);
    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn test_disabled_retry_fails_fast() {
    let mock = MockTransport::new();
    mock.queue_error("Pull", Status::unavailable("busy"));

    let err = subscriber(&mock)
        .pull()
        .subscription("projects/p/subscriptions/s")
        .max_messages(5)
        .with_retry(RetryPolicy::disabled())
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::Unavailable));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_timeout_is_sent_as_grpc_timeout() {
    let mock = MockTransport::new();

    subscriber(&mock)
        .seek()
        .with_request(proto::SeekRequest {
            subscription: "projects/p/subscriptions/s".to_string(),
            target: Some(proto::seek_request::Target::Snapshot(
                "projects/p/snapshots/snap".to_string(),
            )),
        })
        .with_timeout(Duration::from_secs(30))
        .send()
        .await
        .unwrap();

    mock.with_calls(|calls| {
        assert!(calls[0].header("grpc-timeout").is_some());
        assert_eq!(
            calls[0].header("x-goog-request-params"),
            Some("subscription=projects/p/subscriptions/s")
        );
    });
}

#[tokio::test]
async fn test_streaming_pull_has_no_routing_header() {
    let mock = MockTransport::new();
    let requests = futures::stream::iter(vec![proto::StreamingPullRequest {
        subscription: "projects/p/subscriptions/s".to_string(),
        stream_ack_deadline_seconds: 10,
        ..Default::default()
    }]);

    let responses: Vec<_> = subscriber(&mock)
        .streaming_pull(requests, Default::default())
        .await
        .unwrap()
        .collect()
        .await;
    assert_eq!(responses.len(), 1);
    assert_eq!(
        responses[0].as_ref().unwrap().received_messages[0].ack_id,
        "ack-for-projects/p/subscriptions/s"
    );

    mock.with_calls(|calls| {
        assert_eq!(calls[0].method, "StreamingPull");
        assert!(calls[0].header("x-goog-request-params").is_none());
        assert!(calls[0].header("x-goog-api-client").is_some());
    });
}

#[test]
fn test_default_transport_selection() {
    let client = PublisherClient::new(ClientOptions::default()).unwrap();
    assert_eq!(client.transport().kind(), "grpc");
    assert_eq!(client.transport().host(), "pubsub.googleapis.com:443");
    assert!(!client.transport().is_mtls());
}

#[test]
fn test_custom_endpoint_without_certificate() {
    let options = ClientOptions::default().with_api_endpoint("squid.clam.whelk");
    let client = SubscriberClient::new(options).unwrap();
    assert_eq!(client.transport().host(), "squid.clam.whelk:443");
    assert!(!client.transport().is_mtls());
    assert!(client.transport().client_cert_source().is_none());
}

#[test]
fn test_certificate_source_selects_mtls_endpoint() {
    let source = ClientCertSource::from_pem(
        include_str!("fixtures/client.pem"),
        include_str!("fixtures/client.key"),
    );
    let options = ClientOptions::default().with_client_cert_source(source.clone());
    let client = PublisherClient::new(options).unwrap();

    assert!(client.transport().is_mtls());
    assert_eq!(client.transport().host(), "pubsub.mtls.googleapis.com:443");
    assert!(client
        .transport()
        .client_cert_source()
        .unwrap()
        .same_source(&source));
}

#[test]
fn test_unusable_certificate_fails_construction() {
    let source = ClientCertSource::from_pem("not a certificate", "not a key");
    let options = ClientOptions::default().with_client_cert_source(source);

    let err = PublisherClient::new(options.clone()).unwrap_err();
    assert!(matches!(err, Error::MutualTls(_)));
    assert!(!err.is_caller_misuse());
    assert!(matches!(SubscriberClient::new(options), Err(Error::MutualTls(_))));
}

#[test]
fn test_transport_instance_and_credentials_conflict() {
    let mock = MockTransport::new();
    let credentials: Arc<dyn Credentials> = Arc::new(AccessToken::new("token").unwrap());

    let err = PublisherClient::build(
        Some(credentials),
        TransportSelection::Instance(mock.clone() as Arc<dyn PublisherTransport>),
        ClientOptions::default(),
    )
    .unwrap_err();
    assert!(err.is_caller_misuse());

    let client = PublisherClient::build(
        None,
        TransportSelection::Instance(mock as Arc<dyn PublisherTransport>),
        ClientOptions::default(),
    )
    .unwrap();
    assert_eq!(client.transport().kind(), "mock");
}

#[test]
fn test_unknown_transport_label() {
    let err = SubscriberClient::build(
        None,
        TransportSelection::Label("carrier-pigeon".to_string()),
        ClientOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(SubscriberClient::get_transport_class(Some("grpc")).is_ok());
}

#[tokio::test]
async fn test_explicit_channel() {
    let channel = tonic::transport::Endpoint::from_static("https://squid.clam.whelk").connect_lazy();
    let transport =
        pubsub_gapic::transport::grpc::SubscriberGrpcTransport::with_channel("squid.clam.whelk", channel);
    let client = SubscriberClient::build(
        None,
        TransportSelection::Instance(Arc::new(transport) as Arc<dyn SubscriberTransport>),
        ClientOptions::default(),
    )
    .unwrap();
    assert_eq!(client.transport().kind(), "grpc");
    assert_eq!(client.transport().host(), "squid.clam.whelk:443");
}
