// Commands module
use crate::auth::{AccessToken, Credentials};
use crate::cli::{output::*, Commands, GlobalArgs, SubscriptionCommands, TopicCommands};
use crate::config::{ClientConfig, ClientOptions};
use crate::pubsub::{proto, types, PublisherClient, SubscriberClient};
use crate::transport::mtls::{client_cert_source_from_metadata, default_metadata_path};
use crate::transport::TransportSelection;
use anyhow::Context;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tabled::Tabled;
use tracing::info;

/// Topic row
#[derive(Debug, Serialize, Tabled)]
struct TopicRow {
    name: String,
    labels: String,
    kms_key_name: String,
}

impl From<proto::Topic> for TopicRow {
    fn from(topic: proto::Topic) -> Self {
        Self {
            name: topic.name,
            labels: display_labels(&topic.labels),
            kms_key_name: display_empty(topic.kms_key_name),
        }
    }
}

/// Subscription row
#[derive(Debug, Serialize, Tabled)]
struct SubscriptionRow {
    name: String,
    topic: String,
    ack_deadline_seconds: i32,
    #[tabled(display_with = "display_option")]
    push_endpoint: Option<String>,
}

impl From<proto::Subscription> for SubscriptionRow {
    fn from(subscription: proto::Subscription) -> Self {
        Self {
            name: subscription.name,
            topic: subscription.topic,
            ack_deadline_seconds: subscription.ack_deadline_seconds,
            push_endpoint: subscription
                .push_config
                .map(|config| config.push_endpoint)
                .filter(|endpoint| !endpoint.is_empty()),
        }
    }
}

/// Pulled message row
#[derive(Debug, Serialize, Tabled)]
struct MessageRow {
    ack_id: String,
    message_id: String,
    data: String,
    #[tabled(display_with = "display_option")]
    publish_time: Option<String>,
}

impl From<proto::ReceivedMessage> for MessageRow {
    fn from(received: proto::ReceivedMessage) -> Self {
        let message = received.message.unwrap_or_default();
        Self {
            ack_id: received.ack_id,
            message_id: message.message_id,
            data: String::from_utf8_lossy(&message.data).into_owned(),
            publish_time: message.publish_time.as_ref().and_then(display_timestamp),
        }
    }
}

/// Display function for Option types in tables
fn display_option<T: std::fmt::Display>(option: &Option<T>) -> String {
    option.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn display_empty(value: String) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value
    }
}

fn display_labels(labels: &HashMap<String, String>) -> String {
    let mut pairs: Vec<String> = labels.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    pairs.sort();
    display_empty(pairs.join(","))
}

fn display_timestamp(ts: &prost_types::Timestamp) -> Option<String> {
    let nanos = u32::try_from(ts.nanos).ok()?;
    chrono::DateTime::from_timestamp(ts.seconds, nanos).map(|t| t.to_rfc3339())
}

/// Parse an RFC 3339 timestamp into its protobuf form.
pub fn parse_timestamp(value: &str) -> anyhow::Result<prost_types::Timestamp> {
    let time = chrono::DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid RFC 3339 timestamp '{}'", value))?;
    Ok(prost_types::Timestamp {
        seconds: time.timestamp(),
        nanos: time.timestamp_subsec_nanos() as i32,
    })
}

/// Client settings resolved from the config file and command line flags.
#[derive(Debug)]
pub struct Connection {
    options: ClientOptions,
    credentials: Option<Arc<dyn Credentials>>,
    transport: Option<String>,
}

impl Connection {
    /// Merge `--config` with the flags; flags win. Without an explicit
    /// client certificate, the device certificate is used when one is
    /// configured.
    pub fn resolve(global: &GlobalArgs) -> anyhow::Result<Self> {
        Self::resolve_with(global, default_metadata_path())
    }

    /// Like [`Connection::resolve`], looking for the device certificate
    /// through the context aware metadata file at `cert_metadata`.
    pub fn resolve_with(
        global: &GlobalArgs,
        cert_metadata: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        let mut config = match &global.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ClientConfig::default(),
        };
        if let Some(endpoint) = &global.endpoint {
            config.api_endpoint = Some(endpoint.clone());
        }
        if let Some(cert) = &global.cert {
            config.client_cert_path = Some(cert.clone());
        }
        if let Some(key) = &global.key {
            config.client_key_path = Some(key.clone());
        }
        config.validate()?;

        let credentials = match &global.token {
            Some(token) => Some(Arc::new(AccessToken::new(token.clone())?) as Arc<dyn Credentials>),
            None => None,
        };

        let mut options = config.client_options();
        if options.client_cert_source.is_some() {
            info!("Using the client certificate from the command line or config for mutual TLS");
        } else {
            let device_source = match &cert_metadata {
                Some(path) => client_cert_source_from_metadata(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => None,
            };
            match device_source {
                Some(source) => {
                    info!("Default client cert source found; using it for mutual TLS");
                    options = options.with_client_cert_source(source);
                }
                None => info!("No default client cert source; mutual TLS is off"),
            }
        }

        Ok(Self {
            options,
            credentials,
            transport: config.transport,
        })
    }

    fn selection<T: ?Sized>(&self) -> TransportSelection<T> {
        match &self.transport {
            Some(label) => TransportSelection::Label(label.clone()),
            None => TransportSelection::Default,
        }
    }

    /// Publisher client for these settings.
    pub fn publisher(&self) -> anyhow::Result<PublisherClient> {
        PublisherClient::build(self.credentials.clone(), self.selection(), self.options.clone())
            .context("Failed to create publisher client")
    }

    /// Subscriber client for these settings.
    pub fn subscriber(&self) -> anyhow::Result<SubscriberClient> {
        SubscriberClient::build(self.credentials.clone(), self.selection(), self.options.clone())
            .context("Failed to create subscriber client")
    }
}

/// Execute a CLI command
pub async fn execute_command(global: GlobalArgs, command: Commands) -> anyhow::Result<()> {
    let connection = Connection::resolve(&global)?;
    let format = OutputFormat::parse(&global.format);

    match command {
        Commands::Topics(topic_cmd) => execute_topic_command(&connection, topic_cmd, format).await,
        Commands::Publish { topic, data } => {
            let response = connection
                .publisher()?
                .publish()
                .topic(topic.clone())
                .messages([proto::PubsubMessage {
                    data: data.into_bytes(),
                    ..Default::default()
                }])
                .send()
                .await
                .context("Publish failed")?;
            for id in response.message_ids {
                print_success(&format!("Published message {} to '{}'", id, topic));
            }
            Ok(())
        }
        Commands::Subscriptions(SubscriptionCommands::List { project }) => {
            let subscriptions = connection
                .subscriber()?
                .list_subscriptions()
                .project(types::project_path(&project))
                .send()
                .await
                .context("ListSubscriptions failed")?
                .collect_items()
                .await
                .context("ListSubscriptions failed")?;
            let rows: Vec<SubscriptionRow> = subscriptions.into_iter().map(Into::into).collect();
            print_listing(&rows, format, &format!("No subscriptions in project '{}'", project))
        }
        Commands::Pull { subscription, max } => {
            let response = connection
                .subscriber()?
                .pull()
                .subscription(subscription.clone())
                .max_messages(max)
                .send()
                .await
                .context("Pull failed")?;
            let rows: Vec<MessageRow> = response.received_messages.into_iter().map(Into::into).collect();
            print_listing(&rows, format, &format!("No messages received from '{}'", subscription))
        }
        Commands::Ack {
            subscription,
            ack_ids,
        } => {
            let count = ack_ids.len();
            connection
                .subscriber()?
                .acknowledge()
                .subscription(subscription.clone())
                .ack_ids(ack_ids)
                .send()
                .await
                .context("Acknowledge failed")?;
            print_success(&format!("Acknowledged {} message(s) on '{}'", count, subscription));
            Ok(())
        }
        Commands::Seek {
            subscription,
            time,
            snapshot,
        } => {
            let target = match (time, snapshot) {
                (Some(time), _) => proto::seek_request::Target::Time(parse_timestamp(&time)?),
                (None, Some(snapshot)) => proto::seek_request::Target::Snapshot(snapshot),
                (None, None) => anyhow::bail!("Seek needs --time or --snapshot"),
            };
            connection
                .subscriber()?
                .seek()
                .with_request(proto::SeekRequest {
                    subscription: subscription.clone(),
                    target: Some(target),
                })
                .send()
                .await
                .context("Seek failed")?;
            print_success(&format!("Seeked '{}'", subscription));
            Ok(())
        }
    }
}

async fn execute_topic_command(
    connection: &Connection,
    command: TopicCommands,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let client = connection.publisher()?;
    match command {
        TopicCommands::List { project } => {
            let topics = client
                .list_topics()
                .project(types::project_path(&project))
                .send()
                .await
                .context("ListTopics failed")?
                .collect_items()
                .await
                .context("ListTopics failed")?;
            let rows: Vec<TopicRow> = topics.into_iter().map(Into::into).collect();
            print_listing(&rows, format, &format!("No topics in project '{}'", project))
        }
        TopicCommands::Create { topic } => {
            let created = client
                .create_topic()
                .name(topic.clone())
                .send()
                .await
                .context("CreateTopic failed")?;
            print_success(&format!("Topic '{}' created successfully", topic));
            print_resource(&TopicRow::from(created), format)
        }
        TopicCommands::Get { topic } => {
            let topic = client
                .get_topic()
                .topic(topic)
                .send()
                .await
                .context("GetTopic failed")?;
            print_resource(&TopicRow::from(topic), format)
        }
        TopicCommands::Delete { topic } => {
            client
                .delete_topic()
                .topic(topic.clone())
                .send()
                .await
                .context("DeleteTopic failed")?;
            print_success(&format!("Topic '{}' deleted successfully", topic));
            Ok(())
        }
    }
}
