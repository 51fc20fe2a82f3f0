//! Subscriber client.
//!
//! Same calling convention as the publisher: a method returns a
//! [`RequestBuilder`], fields are set through setters or a whole request,
//! and `send().await` performs the call. `streaming_pull` is the exception;
//! it takes a request stream and hands back the response stream.

use crate::auth::Credentials;
use crate::config::ClientOptions;
use crate::core::call::{build_request, CallOptions};
use crate::core::operation::{
    into_pager, into_response, into_unit, rpc_operation, Dispatcher, Operation, RequestBuilder,
};
use crate::error::{Error, Result};
use crate::metrics::get_metrics;
use crate::pubsub::pagers::{ListSnapshotsPager, ListSubscriptionsPager};
use crate::pubsub::proto;
use crate::pubsub::types::{self, PathParts};
use crate::transport::{
    endpoint, select_transport, subscriber_factory, StreamingPullResponses, SubscriberTransport,
    TransportFactory, TransportSelection,
};
use futures::{Stream, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

rpc_operation! {
    /// `CreateSubscription`
    CreateSubscription {
        transport: dyn SubscriberTransport,
        call: create_subscription,
        request: proto::Subscription,
        response: proto::Subscription,
        output: proto::Subscription = into_response,
        routing: "name" => |r| r.name.clone(),
    }
}

rpc_operation! {
    /// `GetSubscription`
    GetSubscription {
        transport: dyn SubscriberTransport,
        call: get_subscription,
        request: proto::GetSubscriptionRequest,
        response: proto::Subscription,
        output: proto::Subscription = into_response,
        routing: "subscription" => |r| r.subscription.clone(),
    }
}

rpc_operation! {
    /// `UpdateSubscription`
    UpdateSubscription {
        transport: dyn SubscriberTransport,
        call: update_subscription,
        request: proto::UpdateSubscriptionRequest,
        response: proto::Subscription,
        output: proto::Subscription = into_response,
        routing: "subscription.name" => |r| {
            r.subscription.as_ref().map(|s| s.name.clone()).unwrap_or_default()
        },
    }
}

rpc_operation! {
    /// `ListSubscriptions`
    ListSubscriptions {
        transport: dyn SubscriberTransport,
        call: list_subscriptions,
        request: proto::ListSubscriptionsRequest,
        response: proto::ListSubscriptionsResponse,
        output: ListSubscriptionsPager = into_pager,
        routing: "project" => |r| r.project.clone(),
    }
}

rpc_operation! {
    /// `DeleteSubscription`
    DeleteSubscription {
        transport: dyn SubscriberTransport,
        call: delete_subscription,
        request: proto::DeleteSubscriptionRequest,
        response: (),
        output: () = into_unit,
        routing: "subscription" => |r| r.subscription.clone(),
    }
}

rpc_operation! {
    /// `ModifyAckDeadline`
    ModifyAckDeadline {
        transport: dyn SubscriberTransport,
        call: modify_ack_deadline,
        request: proto::ModifyAckDeadlineRequest,
        response: (),
        output: () = into_unit,
        routing: "subscription" => |r| r.subscription.clone(),
    }
}

rpc_operation! {
    /// `Acknowledge`
    Acknowledge {
        transport: dyn SubscriberTransport,
        call: acknowledge,
        request: proto::AcknowledgeRequest,
        response: (),
        output: () = into_unit,
        routing: "subscription" => |r| r.subscription.clone(),
    }
}

rpc_operation! {
    /// `Pull`
    Pull {
        transport: dyn SubscriberTransport,
        call: pull,
        request: proto::PullRequest,
        response: proto::PullResponse,
        output: proto::PullResponse = into_response,
        routing: "subscription" => |r| r.subscription.clone(),
    }
}

rpc_operation! {
    /// `ModifyPushConfig`
    ModifyPushConfig {
        transport: dyn SubscriberTransport,
        call: modify_push_config,
        request: proto::ModifyPushConfigRequest,
        response: (),
        output: () = into_unit,
        routing: "subscription" => |r| r.subscription.clone(),
    }
}

rpc_operation! {
    /// `GetSnapshot`
    GetSnapshot {
        transport: dyn SubscriberTransport,
        call: get_snapshot,
        request: proto::GetSnapshotRequest,
        response: proto::Snapshot,
        output: proto::Snapshot = into_response,
        routing: "snapshot" => |r| r.snapshot.clone(),
    }
}

rpc_operation! {
    /// `ListSnapshots`
    ListSnapshots {
        transport: dyn SubscriberTransport,
        call: list_snapshots,
        request: proto::ListSnapshotsRequest,
        response: proto::ListSnapshotsResponse,
        output: ListSnapshotsPager = into_pager,
        routing: "project" => |r| r.project.clone(),
    }
}

rpc_operation! {
    /// `CreateSnapshot`
    CreateSnapshot {
        transport: dyn SubscriberTransport,
        call: create_snapshot,
        request: proto::CreateSnapshotRequest,
        response: proto::Snapshot,
        output: proto::Snapshot = into_response,
        routing: "name" => |r| r.name.clone(),
    }
}

rpc_operation! {
    /// `UpdateSnapshot`
    UpdateSnapshot {
        transport: dyn SubscriberTransport,
        call: update_snapshot,
        request: proto::UpdateSnapshotRequest,
        response: proto::Snapshot,
        output: proto::Snapshot = into_response,
        routing: "snapshot.name" => |r| {
            r.snapshot.as_ref().map(|s| s.name.clone()).unwrap_or_default()
        },
    }
}

rpc_operation! {
    /// `DeleteSnapshot`
    DeleteSnapshot {
        transport: dyn SubscriberTransport,
        call: delete_snapshot,
        request: proto::DeleteSnapshotRequest,
        response: (),
        output: () = into_unit,
        routing: "snapshot" => |r| r.snapshot.clone(),
    }
}

rpc_operation! {
    /// `Seek`
    Seek {
        transport: dyn SubscriberTransport,
        call: seek,
        request: proto::SeekRequest,
        response: proto::SeekResponse,
        output: proto::SeekResponse = into_response,
        routing: "subscription" => |r| r.subscription.clone(),
    }
}

const STREAMING_PULL: &str = "StreamingPull";

/// Client for the Pub/Sub Subscriber service.
#[derive(Debug, Clone)]
pub struct SubscriberClient {
    transport: Arc<dyn SubscriberTransport>,
    dispatcher: Dispatcher,
}

impl SubscriberClient {
    /// Default API endpoint.
    pub const DEFAULT_ENDPOINT: &'static str = endpoint::DEFAULT_ENDPOINT;

    /// Default mutual TLS endpoint.
    pub const DEFAULT_MTLS_ENDPOINT: &'static str = endpoint::DEFAULT_MTLS_ENDPOINT;

    /// Client over the default transport.
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::build(None, TransportSelection::Default, options)
    }

    /// Client over a ready-made transport.
    pub fn from_transport(transport: Arc<dyn SubscriberTransport>, options: ClientOptions) -> Self {
        Self {
            transport,
            dispatcher: Dispatcher::from_options(&options),
        }
    }

    /// Client with every construction input spelled out.
    ///
    /// Fails when both a transport instance and `credentials` are given.
    pub fn build(
        credentials: Option<Arc<dyn Credentials>>,
        transport: TransportSelection<dyn SubscriberTransport>,
        options: ClientOptions,
    ) -> Result<Self> {
        let transport = select_transport(credentials, transport, &options, subscriber_factory)?;
        info!(
            "Subscriber client using {} transport to {} (mtls: {})",
            transport.kind(),
            transport.host(),
            transport.is_mtls()
        );
        Ok(Self::from_transport(transport, options))
    }

    /// Factory registered under `label`, or the default one.
    pub fn get_transport_class(
        label: Option<&str>,
    ) -> Result<TransportFactory<dyn SubscriberTransport>> {
        subscriber_factory(label)
    }

    /// The bound transport.
    pub fn transport(&self) -> &Arc<dyn SubscriberTransport> {
        &self.transport
    }

    /// `projects/{project}/subscriptions/{subscription}`
    pub fn subscription_path(project: &str, subscription: &str) -> String {
        types::subscription_path(project, subscription)
    }

    /// Split a subscription path; `None` when malformed.
    pub fn parse_subscription_path(path: &str) -> Option<PathParts> {
        types::parse_subscription_path(path)
    }

    /// `projects/{project}/snapshots/{snapshot}`
    pub fn snapshot_path(project: &str, snapshot: &str) -> String {
        types::snapshot_path(project, snapshot)
    }

    /// Split a snapshot path; `None` when malformed.
    pub fn parse_snapshot_path(path: &str) -> Option<PathParts> {
        types::parse_snapshot_path(path)
    }

    fn call<O>(&self) -> RequestBuilder<O>
    where
        O: Operation<Transport = dyn SubscriberTransport>,
    {
        self.dispatcher.builder(self.transport.clone())
    }

    /// Create a subscription to a topic.
    pub fn create_subscription(&self) -> RequestBuilder<CreateSubscription> {
        self.call()
    }

    /// Get a subscription.
    pub fn get_subscription(&self) -> RequestBuilder<GetSubscription> {
        self.call()
    }

    /// Update a subscription's mutable fields.
    pub fn update_subscription(&self) -> RequestBuilder<UpdateSubscription> {
        self.call()
    }

    /// List a project's subscriptions.
    pub fn list_subscriptions(&self) -> RequestBuilder<ListSubscriptions> {
        self.call()
    }

    /// Delete a subscription.
    pub fn delete_subscription(&self) -> RequestBuilder<DeleteSubscription> {
        self.call()
    }

    /// Change the ack deadline of received messages.
    pub fn modify_ack_deadline(&self) -> RequestBuilder<ModifyAckDeadline> {
        self.call()
    }

    /// Acknowledge received messages.
    pub fn acknowledge(&self) -> RequestBuilder<Acknowledge> {
        self.call()
    }

    /// Pull messages.
    pub fn pull(&self) -> RequestBuilder<Pull> {
        self.call()
    }

    /// Change a subscription's push configuration.
    pub fn modify_push_config(&self) -> RequestBuilder<ModifyPushConfig> {
        self.call()
    }

    /// Get a snapshot.
    pub fn get_snapshot(&self) -> RequestBuilder<GetSnapshot> {
        self.call()
    }

    /// List a project's snapshots.
    pub fn list_snapshots(&self) -> RequestBuilder<ListSnapshots> {
        self.call()
    }

    /// Snapshot a subscription's backlog.
    pub fn create_snapshot(&self) -> RequestBuilder<CreateSnapshot> {
        self.call()
    }

    /// Update a snapshot's mutable fields.
    pub fn update_snapshot(&self) -> RequestBuilder<UpdateSnapshot> {
        self.call()
    }

    /// Delete a snapshot.
    pub fn delete_snapshot(&self) -> RequestBuilder<DeleteSnapshot> {
        self.call()
    }

    /// Seek a subscription to a time or a snapshot.
    pub fn seek(&self) -> RequestBuilder<Seek> {
        self.call()
    }

    /// Open a bidirectional pull stream.
    ///
    /// The call is attempted once. A timeout in `options` bounds the whole
    /// stream; errors after the stream is open arrive as stream items.
    pub async fn streaming_pull<S>(
        &self,
        requests: S,
        options: CallOptions,
    ) -> Result<StreamingPullResponses>
    where
        S: Stream<Item = proto::StreamingPullRequest> + Send + 'static,
    {
        let context = self.dispatcher.context(STREAMING_PULL, options, None);
        let request = build_request(requests.boxed(), &context.metadata, context.timeout)?;
        debug!("Opening StreamingPull");

        let started = Instant::now();
        let result = self.transport.streaming_pull(request).await;
        let code = match &result {
            Ok(_) => tonic::Code::Ok,
            Err(status) => status.code(),
        };
        get_metrics().observe_call(STREAMING_PULL, code, started.elapsed().as_secs_f64());

        result.map(tonic::Response::into_inner).map_err(Error::Rpc)
    }
}

impl RequestBuilder<CreateSubscription> {
    /// Subscription name.
    pub fn name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.identifier(move |r| r.name = name)
    }

    /// Topic to subscribe to.
    pub fn topic(self, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        self.identifier(move |r| r.topic = topic)
    }

    /// Push delivery settings; absent means pull delivery.
    pub fn push_config(self, push_config: proto::PushConfig) -> Self {
        self.parameter(move |r| r.push_config = Some(push_config))
    }

    /// Seconds a subscriber has to acknowledge a message.
    pub fn ack_deadline_seconds(self, seconds: i32) -> Self {
        self.parameter(move |r| r.ack_deadline_seconds = seconds)
    }
}

impl RequestBuilder<GetSubscription> {
    /// Subscription name.
    pub fn subscription(self, subscription: impl Into<String>) -> Self {
        let subscription = subscription.into();
        self.identifier(move |r| r.subscription = subscription)
    }
}

impl RequestBuilder<ListSubscriptions> {
    /// Project, `projects/{project}`.
    pub fn project(self, project: impl Into<String>) -> Self {
        let project = project.into();
        self.identifier(move |r| r.project = project)
    }
}

impl RequestBuilder<DeleteSubscription> {
    /// Subscription name.
    pub fn subscription(self, subscription: impl Into<String>) -> Self {
        let subscription = subscription.into();
        self.identifier(move |r| r.subscription = subscription)
    }
}

impl RequestBuilder<ModifyAckDeadline> {
    /// Subscription name.
    pub fn subscription(self, subscription: impl Into<String>) -> Self {
        let subscription = subscription.into();
        self.identifier(move |r| r.subscription = subscription)
    }

    /// Ack IDs to modify.
    pub fn ack_ids<I, S>(self, ack_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ack_ids: Vec<String> = ack_ids.into_iter().map(Into::into).collect();
        self.parameter(move |r| r.ack_ids = ack_ids)
    }

    /// New deadline; 0 makes the messages immediately available again.
    pub fn ack_deadline_seconds(self, seconds: i32) -> Self {
        self.parameter(move |r| r.ack_deadline_seconds = seconds)
    }
}

impl RequestBuilder<Acknowledge> {
    /// Subscription name.
    pub fn subscription(self, subscription: impl Into<String>) -> Self {
        let subscription = subscription.into();
        self.identifier(move |r| r.subscription = subscription)
    }

    /// Ack IDs to acknowledge.
    pub fn ack_ids<I, S>(self, ack_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ack_ids: Vec<String> = ack_ids.into_iter().map(Into::into).collect();
        self.parameter(move |r| r.ack_ids = ack_ids)
    }
}

impl RequestBuilder<Pull> {
    /// Subscription name.
    pub fn subscription(self, subscription: impl Into<String>) -> Self {
        let subscription = subscription.into();
        self.identifier(move |r| r.subscription = subscription)
    }

    /// Return at once when no messages are available.
    #[allow(deprecated)]
    pub fn return_immediately(self, return_immediately: bool) -> Self {
        self.parameter(move |r| r.return_immediately = return_immediately)
    }

    /// Upper bound on messages returned.
    pub fn max_messages(self, max_messages: i32) -> Self {
        self.parameter(move |r| r.max_messages = max_messages)
    }
}

impl RequestBuilder<ModifyPushConfig> {
    /// Subscription name.
    pub fn subscription(self, subscription: impl Into<String>) -> Self {
        let subscription = subscription.into();
        self.identifier(move |r| r.subscription = subscription)
    }

    /// New push configuration; an empty one switches to pull delivery.
    pub fn push_config(self, push_config: proto::PushConfig) -> Self {
        self.parameter(move |r| r.push_config = Some(push_config))
    }
}

impl RequestBuilder<GetSnapshot> {
    /// Snapshot name.
    pub fn snapshot(self, snapshot: impl Into<String>) -> Self {
        let snapshot = snapshot.into();
        self.identifier(move |r| r.snapshot = snapshot)
    }
}

impl RequestBuilder<ListSnapshots> {
    /// Project, `projects/{project}`.
    pub fn project(self, project: impl Into<String>) -> Self {
        let project = project.into();
        self.identifier(move |r| r.project = project)
    }
}

impl RequestBuilder<CreateSnapshot> {
    /// Snapshot name.
    pub fn name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.identifier(move |r| r.name = name)
    }

    /// Subscription whose backlog is captured.
    pub fn subscription(self, subscription: impl Into<String>) -> Self {
        let subscription = subscription.into();
        self.identifier(move |r| r.subscription = subscription)
    }
}

impl RequestBuilder<DeleteSnapshot> {
    /// Snapshot name.
    pub fn snapshot(self, snapshot: impl Into<String>) -> Self {
        let snapshot = snapshot.into();
        self.identifier(move |r| r.snapshot = snapshot)
    }
}
