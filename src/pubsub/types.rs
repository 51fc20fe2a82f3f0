//! Resource names and path helpers.

use std::fmt;

/// A parsed Pub/Sub resource name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceName {
    /// `projects/{project}/topics/{topic}`
    Topic {
        /// Project ID
        project: String,
        /// Topic ID
        topic: String,
    },
    /// `projects/{project}/subscriptions/{subscription}`
    Subscription {
        /// Project ID
        project: String,
        /// Subscription ID
        subscription: String,
    },
    /// `projects/{project}/snapshots/{snapshot}`
    Snapshot {
        /// Project ID
        project: String,
        /// Snapshot ID
        snapshot: String,
    },
}

impl ResourceName {
    /// Parse any of the three resource kinds. Malformed input yields `None`.
    pub fn parse(name: &str) -> Option<Self> {
        let (project, collection, id) = split_path(name)?;
        match collection {
            "topics" => Some(ResourceName::Topic {
                project: project.to_string(),
                topic: id.to_string(),
            }),
            "subscriptions" => Some(ResourceName::Subscription {
                project: project.to_string(),
                subscription: id.to_string(),
            }),
            "snapshots" => Some(ResourceName::Snapshot {
                project: project.to_string(),
                snapshot: id.to_string(),
            }),
            _ => None,
        }
    }

    /// The project ID.
    pub fn project(&self) -> &str {
        match self {
            ResourceName::Topic { project, .. }
            | ResourceName::Subscription { project, .. }
            | ResourceName::Snapshot { project, .. } => project,
        }
    }

    /// The topic, subscription or snapshot ID.
    pub fn resource_id(&self) -> &str {
        match self {
            ResourceName::Topic { topic, .. } => topic,
            ResourceName::Subscription { subscription, .. } => subscription,
            ResourceName::Snapshot { snapshot, .. } => snapshot,
        }
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceName::Topic { project, topic } => {
                write!(f, "projects/{}/topics/{}", project, topic)
            }
            ResourceName::Subscription {
                project,
                subscription,
            } => {
                write!(f, "projects/{}/subscriptions/{}", project, subscription)
            }
            ResourceName::Snapshot { project, snapshot } => {
                write!(f, "projects/{}/snapshots/{}", project, snapshot)
            }
        }
    }
}

/// A project and resource ID pair recovered from a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathParts {
    /// Project ID
    pub project: String,
    /// Resource ID
    pub id: String,
}

// Exactly `projects/{a}/{collection}/{b}` with non-empty, slash-free segments.
fn split_path(path: &str) -> Option<(&str, &str, &str)> {
    let mut segments = path.split('/');
    let (Some("projects"), Some(project), Some(collection), Some(id), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };
    if project.is_empty() || id.is_empty() {
        return None;
    }
    Some((project, collection, id))
}

fn parse_kind(path: &str, kind: &str) -> Option<PathParts> {
    let (project, collection, id) = split_path(path)?;
    (collection == kind).then(|| PathParts {
        project: project.to_string(),
        id: id.to_string(),
    })
}

/// `projects/{project}`
pub fn project_path(project: &str) -> String {
    format!("projects/{}", project)
}

/// `projects/{project}/topics/{topic}`
pub fn topic_path(project: &str, topic: &str) -> String {
    format!("projects/{}/topics/{}", project, topic)
}

/// `projects/{project}/subscriptions/{subscription}`
pub fn subscription_path(project: &str, subscription: &str) -> String {
    format!("projects/{}/subscriptions/{}", project, subscription)
}

/// `projects/{project}/snapshots/{snapshot}`
pub fn snapshot_path(project: &str, snapshot: &str) -> String {
    format!("projects/{}/snapshots/{}", project, snapshot)
}

/// Inverse of [`topic_path`].
pub fn parse_topic_path(path: &str) -> Option<PathParts> {
    parse_kind(path, "topics")
}

/// Inverse of [`subscription_path`].
pub fn parse_subscription_path(path: &str) -> Option<PathParts> {
    parse_kind(path, "subscriptions")
}

/// Inverse of [`snapshot_path`].
pub fn parse_snapshot_path(path: &str) -> Option<PathParts> {
    parse_kind(path, "snapshots")
}

/// Inverse of [`project_path`].
pub fn parse_project_path(path: &str) -> Option<String> {
    let project = path.strip_prefix("projects/")?;
    (!project.is_empty() && !project.contains('/')).then(|| project.to_string())
}
