//! Per-call policies and the retry/timeout driven invocation loop.

use crate::config::ClientInfo;
use crate::core::retry::RetryPolicy;
use crate::core::routing::routing_header;
use crate::error::{Error, Result, ValidationError};
use crate::metrics::get_metrics;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tonic::metadata::{AsciiMetadataKey, AsciiMetadataValue};
use tonic::{Code, Status};
use tracing::{debug, warn};

/// Cross-cutting policies for one call.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Retry policy; `None` uses the client default.
    pub retry: Option<RetryPolicy>,
    /// Overall deadline covering every attempt; `None` means no client deadline.
    pub timeout: Option<Duration>,
    /// Metadata sent ahead of the library's own entries.
    pub metadata: Vec<(String, String)>,
}

impl CallOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `retry` for this call.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Fail the call once `timeout` has elapsed.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Append a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }
}

/// Policies resolved for one call: what `CallOptions` asked for plus the
/// client defaults, the routing header and the client info header.
#[derive(Debug, Clone)]
pub struct CallContext {
    /// RPC method name, e.g. `GetTopic`.
    pub method: &'static str,
    /// Effective retry policy.
    pub retry: RetryPolicy,
    /// Overall deadline.
    pub timeout: Option<Duration>,
    /// Ordered metadata: caller entries, then routing, then client info.
    pub metadata: Vec<(String, String)>,
}

impl CallContext {
    /// Resolve `options` against the client defaults.
    pub fn new(
        method: &'static str,
        options: CallOptions,
        default_retry: &RetryPolicy,
        client_info: &ClientInfo,
        routing: Option<(&'static str, String)>,
    ) -> Self {
        let mut metadata = options.metadata;
        if let Some((field, value)) = routing {
            metadata.push(routing_header(&[(field, value.as_str())]));
        }
        metadata.push(client_info.metadata());

        Self {
            method,
            retry: options.retry.unwrap_or_else(|| default_retry.clone()),
            timeout: options.timeout,
            metadata,
        }
    }
}

/// Wrap `message` in a request carrying `metadata` and an optional gRPC timeout.
pub fn build_request<T>(
    message: T,
    metadata: &[(String, String)],
    timeout: Option<Duration>,
) -> Result<tonic::Request<T>> {
    let mut request = tonic::Request::new(message);
    for (key, value) in metadata {
        let name = AsciiMetadataKey::from_bytes(key.to_ascii_lowercase().as_bytes()).map_err(|e| {
            ValidationError::InvalidMetadata {
                key: key.clone(),
                reason: e.to_string(),
            }
        })?;
        let value = AsciiMetadataValue::try_from(value.as_str()).map_err(|e| {
            ValidationError::InvalidMetadata {
                key: key.clone(),
                reason: e.to_string(),
            }
        })?;
        request.metadata_mut().append(name, value);
    }
    if let Some(timeout) = timeout {
        request.set_timeout(timeout);
    }
    Ok(request)
}

/// Run `call` under the retry policy and deadline in `context`.
///
/// Every attempt gets a fresh request built from a clone of `message`. A
/// failed attempt is retried only when the policy says so; otherwise its
/// status is returned unchanged.
pub async fn invoke<Req, Resp, F, Fut>(context: &CallContext, message: &Req, mut call: F) -> Result<Resp>
where
    Req: Clone,
    F: FnMut(tonic::Request<Req>) -> Fut,
    Fut: Future<Output = std::result::Result<tonic::Response<Resp>, Status>>,
{
    // Surface bad metadata before anything goes on the wire.
    build_request((), &context.metadata, None)?;

    let started = Instant::now();
    let attempts = attempt_loop(context, message, &mut call, started);

    let result = match context.timeout {
        Some(timeout) => match tokio::time::timeout(timeout, attempts).await {
            Ok(result) => result,
            Err(_) => Err(Error::DeadlineExceeded(timeout)),
        },
        None => attempts.await,
    };

    let code = match &result {
        Ok(_) => Code::Ok,
        Err(e) => e.code().unwrap_or(Code::Unknown),
    };
    get_metrics().observe_call(context.method, code, started.elapsed().as_secs_f64());

    result
}

async fn attempt_loop<Req, Resp, F, Fut>(
    context: &CallContext,
    message: &Req,
    call: &mut F,
    started: Instant,
) -> Result<Resp>
where
    Req: Clone,
    F: FnMut(tonic::Request<Req>) -> Fut,
    Fut: Future<Output = std::result::Result<tonic::Response<Resp>, Status>>,
{
    let mut attempt: u32 = 0;
    loop {
        let remaining = context.timeout.map(|t| t.saturating_sub(started.elapsed()));
        let request = build_request(message.clone(), &context.metadata, remaining)?;
        debug!("{}: attempt {}", context.method, attempt + 1);

        let status = match call(request).await {
            Ok(response) => return Ok(response.into_inner()),
            Err(status) => status,
        };

        match context.retry.next_delay(status.code(), attempt, started.elapsed()) {
            Some(delay) => {
                warn!(
                    "{}: attempt {} failed with {:?}, retrying in {:?}",
                    context.method,
                    attempt + 1,
                    status.code(),
                    delay
                );
                get_metrics()
                    .rpc_retries_total
                    .with_label_values(&[context.method])
                    .inc();
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            None => return Err(Error::Rpc(status)),
        }
    }
}
