//! Request construction and dispatch shared by every facade method.
//!
//! Each remote method is a zero-sized type implementing [`Operation`]. The
//! facade hands out a [`RequestBuilder`] for it; the builder accepts either a
//! complete request or individual field overrides (never both), resolves the
//! call policies and dispatches through the bound transport.

use crate::config::{ClientInfo, ClientOptions};
use crate::core::call::{invoke, CallContext, CallOptions};
use crate::core::retry::RetryPolicy;
use crate::error::{Result, ValidationError};
use crate::metrics::get_metrics;
use crate::pubsub::pagers::{PageFn, PageRequest, PageResponse, Pager};
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tonic::Status;

/// Shorthand for what a transport method resolves to.
pub type RpcFuture<'a, T> = BoxFuture<'a, std::result::Result<tonic::Response<T>, Status>>;

/// One remote method: its wire shapes, routing field and facade output.
pub trait Operation: Sized + Send + Sync + 'static {
    /// Transport trait object the method is bound to.
    type Transport: ?Sized + Send + Sync + 'static;
    /// Request message.
    type Request: Clone + Default + fmt::Debug + Send + Sync + 'static;
    /// Response message.
    type Response: Send + 'static;
    /// What the facade returns to the caller.
    type Output;

    /// RPC method name as it appears on the wire.
    const NAME: &'static str;

    /// The `(field, value)` pair used for the routing header, if the request
    /// carries a resource name.
    fn routing(_request: &Self::Request) -> Option<(&'static str, String)> {
        None
    }

    /// Invoke the transport.
    fn dispatch(
        transport: &Self::Transport,
        request: tonic::Request<Self::Request>,
    ) -> RpcFuture<'_, Self::Response>;

    /// Shape the response for the caller.
    fn output(method: BoundMethod<Self>, request: Self::Request, response: Self::Response)
        -> Self::Output;
}

/// Client-wide call defaults.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    client_info: ClientInfo,
    default_retry: RetryPolicy,
}

impl Dispatcher {
    /// Defaults applied to every call.
    pub fn new(client_info: ClientInfo, default_retry: RetryPolicy) -> Self {
        Self {
            client_info,
            default_retry,
        }
    }

    /// Defaults taken from client options; the library retry policy when
    /// the options carry none.
    pub fn from_options(options: &ClientOptions) -> Self {
        Self::new(
            options.client_info.clone(),
            options.default_retry.clone().unwrap_or_default(),
        )
    }

    /// Version information sent with each call.
    pub fn client_info(&self) -> &ClientInfo {
        &self.client_info
    }

    /// Retry policy used when a call sets none.
    pub fn default_retry(&self) -> &RetryPolicy {
        &self.default_retry
    }

    /// Resolve the policies for one call.
    pub fn context(
        &self,
        method: &'static str,
        options: CallOptions,
        routing: Option<(&'static str, String)>,
    ) -> CallContext {
        CallContext::new(method, options, &self.default_retry, &self.client_info, routing)
    }

    /// Start building a call to `O` over `transport`.
    pub fn builder<O: Operation>(&self, transport: Arc<O::Transport>) -> RequestBuilder<O> {
        RequestBuilder {
            transport,
            dispatcher: self.clone(),
            request: None,
            identifiers: Vec::new(),
            parameters: Vec::new(),
            options: CallOptions::default(),
        }
    }
}

type FieldOverride<R> = Box<dyn FnOnce(&mut R) + Send>;

/// A pending call to one remote method.
///
/// Either pass a complete request with [`RequestBuilder::with_request`] or
/// set individual fields through the method-specific setters. Supplying both
/// fails with [`ValidationError::RequestAndFields`] before anything is sent.
#[must_use = "a request does nothing until `send` is awaited"]
pub struct RequestBuilder<O: Operation> {
    transport: Arc<O::Transport>,
    dispatcher: Dispatcher,
    request: Option<O::Request>,
    identifiers: Vec<FieldOverride<O::Request>>,
    parameters: Vec<FieldOverride<O::Request>>,
    options: CallOptions,
}

impl<O: Operation> RequestBuilder<O> {
    /// Send `request` as is.
    pub fn with_request(mut self, request: O::Request) -> Self {
        self.request = Some(request);
        self
    }

    /// Override the client's retry policy for this call.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.options.retry = Some(retry);
        self
    }

    /// Fail the call once `timeout` has elapsed, retries included.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    /// Send an extra metadata entry ahead of the library's own.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.metadata.push((key.into(), value.into()));
        self
    }

    /// Replace all call options at once.
    pub fn with_options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a resource-identifying field. Applied before behavioural fields.
    pub(crate) fn identifier<F>(mut self, apply: F) -> Self
    where
        F: FnOnce(&mut O::Request) + Send + 'static,
    {
        self.identifiers.push(Box::new(apply));
        self
    }

    /// Set a behavioural field.
    pub(crate) fn parameter<F>(mut self, apply: F) -> Self
    where
        F: FnOnce(&mut O::Request) + Send + 'static,
    {
        self.parameters.push(Box::new(apply));
        self
    }

    /// Whether any individual field was set.
    pub fn has_field_overrides(&self) -> bool {
        !self.identifiers.is_empty() || !self.parameters.is_empty()
    }

    /// Build the canonical request without sending it.
    pub fn build(self) -> Result<O::Request> {
        self.into_parts().map(|(_, _, request, _)| request)
    }

    #[allow(clippy::type_complexity)]
    fn into_parts(self) -> Result<(Arc<O::Transport>, Dispatcher, O::Request, CallOptions)> {
        if self.request.is_some() && self.has_field_overrides() {
            return Err(ValidationError::RequestAndFields { method: O::NAME }.into());
        }

        let mut request = self.request.unwrap_or_default();
        for apply in self.identifiers.into_iter().chain(self.parameters) {
            apply(&mut request);
        }
        Ok((self.transport, self.dispatcher, request, self.options))
    }

    /// Validate, build and dispatch the call.
    pub async fn send(self) -> Result<O::Output> {
        let (transport, dispatcher, request, options) = self.into_parts()?;
        let context = dispatcher.context(O::NAME, options, O::routing(&request));
        let method = BoundMethod { transport, context };

        let response = method.call(&request).await?;
        Ok(O::output(method, request, response))
    }
}

impl<O: Operation> fmt::Debug for RequestBuilder<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("method", &O::NAME)
            .field("request", &self.request)
            .field("field_overrides", &(self.identifiers.len() + self.parameters.len()))
            .field("options", &self.options)
            .finish()
    }
}

/// A transport method together with the policies of the call that produced it.
///
/// Pagers hold one to fetch follow-up pages under the same retry, timeout
/// and metadata as the first page.
pub struct BoundMethod<O: Operation> {
    transport: Arc<O::Transport>,
    context: CallContext,
}

impl<O: Operation> Clone for BoundMethod<O> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            context: self.context.clone(),
        }
    }
}

impl<O: Operation> BoundMethod<O> {
    /// Resolved policies.
    pub fn context(&self) -> &CallContext {
        &self.context
    }

    /// Invoke the method once under its policies.
    pub async fn call(&self, request: &O::Request) -> Result<O::Response> {
        let transport = &*self.transport;
        invoke(&self.context, request, |attempt| O::dispatch(transport, attempt)).await
    }

    /// Turn the method into a page fetcher.
    pub fn into_page_fn(self) -> PageFn<O::Request, O::Response> {
        let method = Arc::new(self);
        Arc::new(move |request: O::Request| {
            let method = method.clone();
            Box::pin(async move {
                get_metrics()
                    .pages_fetched_total
                    .with_label_values(&[O::NAME])
                    .inc();
                method.call(&request).await
            }) as BoxFuture<'static, Result<O::Response>>
        })
    }
}

impl<O: Operation> fmt::Debug for BoundMethod<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundMethod")
            .field("method", &O::NAME)
            .field("context", &self.context)
            .finish()
    }
}

/// Hand the response to the caller unchanged.
pub fn into_response<O: Operation>(
    _method: BoundMethod<O>,
    _request: O::Request,
    response: O::Response,
) -> O::Response {
    response
}

/// Drop the (empty) response.
pub fn into_unit<O: Operation>(_method: BoundMethod<O>, _request: O::Request, _response: O::Response) {}

/// Wrap the first page in a pager that fetches the rest on demand.
pub fn into_pager<O>(
    method: BoundMethod<O>,
    request: O::Request,
    response: O::Response,
) -> Pager<O::Request, O::Response>
where
    O: Operation,
    O::Request: PageRequest,
    O::Response: PageResponse,
{
    Pager::new(method.into_page_fn(), request, response)
}

/// Declare a zero-sized [`Operation`] for one RPC.
macro_rules! rpc_operation {
    (
        $(#[$meta:meta])*
        $op:ident {
            transport: $transport:ty,
            call: $call:ident,
            request: $request:ty,
            response: $response:ty,
            output: $output:ty = $shape:path,
            routing: $($field:literal => |$r:ident| $value:expr)?,
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $op;

        impl $crate::core::operation::Operation for $op {
            type Transport = $transport;
            type Request = $request;
            type Response = $response;
            type Output = $output;

            const NAME: &'static str = stringify!($op);

            $(
                fn routing($r: &$request) -> Option<(&'static str, String)> {
                    Some(($field, $value))
                }
            )?

            fn dispatch(
                transport: &Self::Transport,
                request: tonic::Request<Self::Request>,
            ) -> $crate::core::operation::RpcFuture<'_, Self::Response> {
                transport.$call(request)
            }

            fn output(
                method: $crate::core::operation::BoundMethod<Self>,
                request: $request,
                response: $response,
            ) -> $output {
                $shape(method, request, response)
            }
        }
    };
}

pub(crate) use rpc_operation;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug, Default)]
    struct Echo {
        calls: AtomicU32,
    }

    impl Echo {
        fn echo(&self, request: tonic::Request<String>) -> RpcFuture<'_, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let routing = request
                .metadata()
                .get("x-goog-request-params")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let body = request.into_inner();
            Box::pin(async move { Ok(tonic::Response::new(format!("{}|{}", body, routing))) })
        }
    }

    struct EchoOp;

    impl Operation for EchoOp {
        type Transport = Echo;
        type Request = String;
        type Response = String;
        type Output = String;
        const NAME: &'static str = "Echo";

        fn routing(request: &String) -> Option<(&'static str, String)> {
            Some(("name", request.clone()))
        }

        fn dispatch(transport: &Echo, request: tonic::Request<String>) -> RpcFuture<'_, String> {
            transport.echo(request)
        }

        fn output(_method: BoundMethod<Self>, _request: String, response: String) -> String {
            response
        }
    }

    fn builder(echo: &Arc<Echo>) -> RequestBuilder<EchoOp> {
        Dispatcher::default().builder::<EchoOp>(echo.clone())
    }

    #[tokio::test]
    async fn test_request_and_fields_rejected_without_dispatch() {
        let echo = Arc::new(Echo::default());
        let result = builder(&echo)
            .with_request("req".to_string())
            .identifier(|r: &mut String| r.push_str("x"))
            .send()
            .await;

        assert!(matches!(
            result,
            Err(Error::InvalidArgument(ValidationError::RequestAndFields { method: "Echo" }))
        ));
        assert_eq!(echo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_identifiers_apply_before_parameters() {
        let echo = Arc::new(Echo::default());
        let request = builder(&echo)
            .parameter(|r: &mut String| r.push_str("-param"))
            .identifier(|r: &mut String| r.push_str("id"))
            .build()
            .unwrap();
        assert_eq!(request, "id-param");
    }

    #[tokio::test]
    async fn test_send_attaches_routing_header() {
        let echo = Arc::new(Echo::default());
        let response = builder(&echo)
            .identifier(|r: &mut String| r.push_str("projects/p/topics/t"))
            .send()
            .await
            .unwrap();

        assert_eq!(response, "projects/p/topics/t|name=projects/p/topics/t");
        assert_eq!(echo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_builder_sends_default_request() {
        let echo = Arc::new(Echo::default());
        let response = builder(&echo).send().await.unwrap();
        assert_eq!(response, "|name=");
    }
}
