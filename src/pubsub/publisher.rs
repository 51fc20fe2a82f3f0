//! Publisher client.
//!
//! Every method returns a [`RequestBuilder`]: set individual fields with the
//! method-specific setters, or pass a whole request with `with_request`,
//! then `send().await`. The supported methods:
//! - CreateTopic
//! - UpdateTopic
//! - Publish
//! - GetTopic
//! - ListTopics (paged)
//! - ListTopicSubscriptions (paged)
//! - ListTopicSnapshots (paged)
//! - DeleteTopic
//! - DetachSubscription

use crate::auth::Credentials;
use crate::config::ClientOptions;
use crate::core::operation::{
    into_pager, into_response, into_unit, rpc_operation, Dispatcher, RequestBuilder,
};
use crate::error::Result;
use crate::pubsub::pagers::{ListTopicSnapshotsPager, ListTopicSubscriptionsPager, ListTopicsPager};
use crate::pubsub::proto;
use crate::pubsub::types::{self, PathParts};
use crate::transport::{
    endpoint, publisher_factory, select_transport, PublisherTransport, TransportFactory,
    TransportSelection,
};
use std::sync::Arc;
use tracing::info;

rpc_operation! {
    /// `CreateTopic`
    CreateTopic {
        transport: dyn PublisherTransport,
        call: create_topic,
        request: proto::Topic,
        response: proto::Topic,
        output: proto::Topic = into_response,
        routing: "name" => |r| r.name.clone(),
    }
}

rpc_operation! {
    /// `UpdateTopic`
    UpdateTopic {
        transport: dyn PublisherTransport,
        call: update_topic,
        request: proto::UpdateTopicRequest,
        response: proto::Topic,
        output: proto::Topic = into_response,
        routing: "topic.name" => |r| r.topic.as_ref().map(|t| t.name.clone()).unwrap_or_default(),
    }
}

rpc_operation! {
    /// `Publish`
    Publish {
        transport: dyn PublisherTransport,
        call: publish,
        request: proto::PublishRequest,
        response: proto::PublishResponse,
        output: proto::PublishResponse = into_response,
        routing: "topic" => |r| r.topic.clone(),
    }
}

rpc_operation! {
    /// `GetTopic`
    GetTopic {
        transport: dyn PublisherTransport,
        call: get_topic,
        request: proto::GetTopicRequest,
        response: proto::Topic,
        output: proto::Topic = into_response,
        routing: "topic" => |r| r.topic.clone(),
    }
}

rpc_operation! {
    /// `ListTopics`
    ListTopics {
        transport: dyn PublisherTransport,
        call: list_topics,
        request: proto::ListTopicsRequest,
        response: proto::ListTopicsResponse,
        output: ListTopicsPager = into_pager,
        routing: "project" => |r| r.project.clone(),
    }
}

rpc_operation! {
    /// `ListTopicSubscriptions`
    ListTopicSubscriptions {
        transport: dyn PublisherTransport,
        call: list_topic_subscriptions,
        request: proto::ListTopicSubscriptionsRequest,
        response: proto::ListTopicSubscriptionsResponse,
        output: ListTopicSubscriptionsPager = into_pager,
        routing: "topic" => |r| r.topic.clone(),
    }
}

rpc_operation! {
    /// `ListTopicSnapshots`
    ListTopicSnapshots {
        transport: dyn PublisherTransport,
        call: list_topic_snapshots,
        request: proto::ListTopicSnapshotsRequest,
        response: proto::ListTopicSnapshotsResponse,
        output: ListTopicSnapshotsPager = into_pager,
        routing: "topic" => |r| r.topic.clone(),
    }
}

rpc_operation! {
    /// `DeleteTopic`
    DeleteTopic {
        transport: dyn PublisherTransport,
        call: delete_topic,
        request: proto::DeleteTopicRequest,
        response: (),
        output: () = into_unit,
        routing: "topic" => |r| r.topic.clone(),
    }
}

rpc_operation! {
    /// `DetachSubscription`
    DetachSubscription {
        transport: dyn PublisherTransport,
        call: detach_subscription,
        request: proto::DetachSubscriptionRequest,
        response: proto::DetachSubscriptionResponse,
        output: proto::DetachSubscriptionResponse = into_response,
        routing: "subscription" => |r| r.subscription.clone(),
    }
}

/// Client for the Pub/Sub Publisher service.
#[derive(Debug, Clone)]
pub struct PublisherClient {
    transport: Arc<dyn PublisherTransport>,
    dispatcher: Dispatcher,
}

impl PublisherClient {
    /// Default API endpoint.
    pub const DEFAULT_ENDPOINT: &'static str = endpoint::DEFAULT_ENDPOINT;

    /// Default mutual TLS endpoint.
    pub const DEFAULT_MTLS_ENDPOINT: &'static str = endpoint::DEFAULT_MTLS_ENDPOINT;

    /// Client over the default transport, resolving credentials through the
    /// options' provider.
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::build(None, TransportSelection::Default, options)
    }

    /// Client over a ready-made transport.
    pub fn from_transport(transport: Arc<dyn PublisherTransport>, options: ClientOptions) -> Self {
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
        transport: TransportSelection<dyn PublisherTransport>,
        options: ClientOptions,
    ) -> Result<Self> {
        let transport = select_transport(credentials, transport, &options, publisher_factory)?;
        info!(
            "Publisher client using {} transport to {} (mtls: {})",
            transport.kind(),
            transport.host(),
            transport.is_mtls()
        );
        Ok(Self::from_transport(transport, options))
    }

    /// Factory registered under `label`, or the default one.
    pub fn get_transport_class(
        label: Option<&str>,
    ) -> Result<TransportFactory<dyn PublisherTransport>> {
        publisher_factory(label)
    }

    /// The bound transport.
    pub fn transport(&self) -> &Arc<dyn PublisherTransport> {
        &self.transport
    }

    /// `projects/{project}/topics/{topic}`
    pub fn topic_path(project: &str, topic: &str) -> String {
        types::topic_path(project, topic)
    }

    /// Split a topic path; `None` when malformed.
    pub fn parse_topic_path(path: &str) -> Option<PathParts> {
        types::parse_topic_path(path)
    }

    fn call<O>(&self) -> RequestBuilder<O>
    where
        O: crate::core::operation::Operation<Transport = dyn PublisherTransport>,
    {
        self.dispatcher.builder(self.transport.clone())
    }

    /// Create a topic.
    pub fn create_topic(&self) -> RequestBuilder<CreateTopic> {
        self.call()
    }

    /// Update a topic's mutable fields.
    pub fn update_topic(&self) -> RequestBuilder<UpdateTopic> {
        self.call()
    }

    /// Publish messages to a topic.
    pub fn publish(&self) -> RequestBuilder<Publish> {
        self.call()
    }

    /// Get a topic.
    pub fn get_topic(&self) -> RequestBuilder<GetTopic> {
        self.call()
    }

    /// List a project's topics.
    pub fn list_topics(&self) -> RequestBuilder<ListTopics> {
        self.call()
    }

    /// List the names of a topic's subscriptions.
    pub fn list_topic_subscriptions(&self) -> RequestBuilder<ListTopicSubscriptions> {
        self.call()
    }

    /// List the names of a topic's snapshots.
    pub fn list_topic_snapshots(&self) -> RequestBuilder<ListTopicSnapshots> {
        self.call()
    }

    /// Delete a topic. Its subscriptions survive with their topic field
    /// set to `_deleted-topic_`.
    pub fn delete_topic(&self) -> RequestBuilder<DeleteTopic> {
        self.call()
    }

    /// Detach a subscription from its topic.
    pub fn detach_subscription(&self) -> RequestBuilder<DetachSubscription> {
        self.call()
    }
}

impl RequestBuilder<CreateTopic> {
    /// Topic name, `projects/{project}/topics/{topic}`.
    pub fn name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.identifier(move |r| r.name = name)
    }
}

impl RequestBuilder<Publish> {
    /// Destination topic.
    pub fn topic(self, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        self.identifier(move |r| r.topic = topic)
    }

    /// Messages to publish.
    pub fn messages(self, messages: impl IntoIterator<Item = proto::PubsubMessage>) -> Self {
        let messages: Vec<_> = messages.into_iter().collect();
        self.parameter(move |r| r.messages = messages)
    }
}

impl RequestBuilder<GetTopic> {
    /// Topic name.
    pub fn topic(self, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        self.identifier(move |r| r.topic = topic)
    }
}

impl RequestBuilder<ListTopics> {
    /// Project, `projects/{project}`.
    pub fn project(self, project: impl Into<String>) -> Self {
        let project = project.into();
        self.identifier(move |r| r.project = project)
    }
}

impl RequestBuilder<ListTopicSubscriptions> {
    /// Topic name.
    pub fn topic(self, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        self.identifier(move |r| r.topic = topic)
    }
}

impl RequestBuilder<ListTopicSnapshots> {
    /// Topic name.
    pub fn topic(self, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        self.identifier(move |r| r.topic = topic)
    }
}

impl RequestBuilder<DeleteTopic> {
    /// Topic name.
    pub fn topic(self, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        self.identifier(move |r| r.topic = topic)
    }
}

impl RequestBuilder<DetachSubscription> {
    /// Subscription name.
    pub fn subscription(self, subscription: impl Into<String>) -> Self {
        let subscription = subscription.into();
        self.identifier(move |r| r.subscription = subscription)
    }
}
