//! Transport primitives for the provider calls.
//!
//! The broker never owns connection pooling, TLS, or timeouts. Callers supply an
//! [`IdentityHttpClient`] (usually [`ReqwestHttpClient`] wrapping their shared
//! [`ReqwestClient`]) and the broker asks it for a short-lived [`AsyncHttpClient`] handle per
//! exchange.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
use oauth2::{AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, ExchangeStage, TransportError},
};

/// Abstraction over HTTP transports capable of executing the token and identity requests.
///
/// Implementations must be `Send + Sync + 'static` so one client can be shared behind an `Arc`
/// by many brokers and concurrent exchanges. The handles they return must own whatever state
/// the request needs so the request futures stay `Send` for the whole call.
pub trait IdentityHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// [`AsyncHttpClient`] handle used for a single exchange.
	type Handle: for<'c> AsyncHttpClient<
			'c,
			Error = HttpClientError<Self::TransportError>,
			Future: 'c + Send,
		>
		+ 'static
		+ Send
		+ Sync;

	/// Builds a handle for the next exchange.
	fn handle(&self) -> Self::Handle;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// GitHub's REST API rejects requests without a `User-Agent`; configure one on the wrapped
/// client ([`ReqwestHttpClient::build_default`] does).
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// `User-Agent` sent by clients built through [`ReqwestHttpClient::build_default`].
	pub const USER_AGENT: &'static str = concat!("identity-broker/", env!("CARGO_PKG_VERSION"));

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client with the crate's `User-Agent` and reqwest's other defaults.
	pub fn build_default() -> Result<Self> {
		let client = ReqwestClient::builder()
			.user_agent(Self::USER_AGENT)
			.build()
			.map_err(ConfigError::from)?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl IdentityHttpClient for ReqwestHttpClient {
	type Handle = ReqwestHandle;
	type TransportError = ReqwestError;

	fn handle(&self) -> Self::Handle {
		ReqwestHandle(self.0.clone())
	}
}

/// [`AsyncHttpClient`] adapter returned by [`ReqwestHttpClient::handle`].
///
/// Reads the whole body before returning; a connection dropped mid-body surfaces as a transport
/// error, never as a truncated response.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHandle(ReqwestClient);
#[cfg(feature = "reqwest")]
impl<'c> AsyncHttpClient<'c> for ReqwestHandle {
	type Error = HttpClientError<ReqwestError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send + Sync>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		let client = self.0.clone();

		Box::pin(async move {
			let response =
				client.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

/// Folds a transport failure from the `stage` call into a broker error.
pub(crate) fn map_transport_error<E>(stage: ExchangeStage, err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(stage, inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		other => TransportError::network(stage, other).into(),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[derive(Debug, ThisError)]
	#[error("Connection refused.")]
	struct Refused;

	#[test]
	fn transport_failures_keep_stage_and_cause() {
		let err = map_transport_error(
			ExchangeStage::Identity,
			HttpClientError::Reqwest(Box::new(Refused)),
		);

		match &err {
			Error::Transport(inner) => assert_eq!(inner.stage(), Some(ExchangeStage::Identity)),
			other => panic!("Unexpected error variant: {other:?}."),
		}

		let cause = err.source().expect("Transport error should expose its cause.");

		assert_eq!(cause.to_string(), "Connection refused.");
	}

	#[test]
	fn http_builder_failures_are_request_construction_errors() {
		let http_err = oauth2::http::Request::builder()
			.uri("not a uri")
			.body(Vec::<u8>::new())
			.expect_err("Invalid URI should fail to build.");
		let err =
			map_transport_error::<Refused>(ExchangeStage::Token, HttpClientError::Http(http_err));

		assert!(matches!(err, Error::Config(ConfigError::HttpRequest(_))));
	}
}
