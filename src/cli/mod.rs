// CLI module for pubsub-gapic
/// Command execution handlers
pub mod commands;
/// Output formatting utilities
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for pubsub-gapic
#[derive(Parser)]
#[command(name = "pubsub-gapic")]
#[command(author, version, about = "Google Cloud Pub/Sub command line client", long_about = None)]
pub struct Cli {
    /// Connection settings shared by every command
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Connection settings
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// API endpoint (host[:port], or http://host:port for an emulator)
    #[arg(long, global = true, env = "PUBSUB_ENDPOINT")]
    pub endpoint: Option<String>,

    /// PEM client certificate for mutual TLS
    #[arg(long, global = true, requires = "key")]
    pub cert: Option<PathBuf>,

    /// PEM client key for mutual TLS
    #[arg(long, global = true, requires = "cert")]
    pub key: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, global = true, env = "PUBSUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// OAuth2 access token sent as a bearer token
    #[arg(long, global = true, env = "PUBSUB_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format (table | json)
    #[arg(long, short, global = true, default_value = "table")]
    pub format: String,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Topic management commands
    #[command(subcommand)]
    Topics(TopicCommands),

    /// Publish one message
    Publish {
        /// Topic path, projects/{project}/topics/{topic}
        topic: String,

        /// Message payload
        data: String,
    },

    /// Subscription management commands
    #[command(subcommand)]
    Subscriptions(SubscriptionCommands),

    /// Pull messages from a subscription
    Pull {
        /// Subscription path
        subscription: String,

        /// Maximum number of messages
        #[arg(long, default_value = "10")]
        max: i32,
    },

    /// Acknowledge messages
    Ack {
        /// Subscription path
        subscription: String,

        /// Ack IDs
        #[arg(required = true)]
        ack_ids: Vec<String>,
    },

    /// Seek a subscription to a time or a snapshot
    Seek {
        /// Subscription path
        subscription: String,

        /// RFC 3339 timestamp
        #[arg(long, conflicts_with = "snapshot", required_unless_present = "snapshot")]
        time: Option<String>,

        /// Snapshot path
        #[arg(long)]
        snapshot: Option<String>,
    },
}

/// Topic management subcommands
#[derive(Subcommand)]
pub enum TopicCommands {
    /// List a project's topics
    List {
        /// Project ID
        #[arg(long)]
        project: String,
    },

    /// Create a topic
    Create {
        /// Topic path
        topic: String,
    },

    /// Show a topic
    Get {
        /// Topic path
        topic: String,
    },

    /// Delete a topic
    Delete {
        /// Topic path
        topic: String,
    },
}

/// Subscription management subcommands
#[derive(Subcommand)]
pub enum SubscriptionCommands {
    /// List a project's subscriptions
    List {
        /// Project ID
        #[arg(long)]
        project: String,
    },
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
