//! Login-with-a-provider OAuth 2.0 broker: build the authorize redirect, trade the callback code
//! for an access token, and resolve the signed-in user's short profile.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod provider;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for tests; enabled via `cfg(test)` or the `test` crate
	//! feature.

	pub use crate::_prelude::*;

	// std
	use std::collections::VecDeque;
	// crates.io
	use oauth2::{
		AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse,
		http::{HeaderMap, Method, StatusCode},
	};
	// self
	use crate::{flows::IdentityBroker, http::IdentityHttpClient, provider::ProviderDescriptor};

	/// Broker type alias wired to the scripted transport.
	pub type StubBroker = IdentityBroker<StubHttpClient>;

	/// Transport failure produced by [`StubHttpClient`] when a reply is scripted to fail.
	#[derive(Debug, ThisError)]
	#[error("Stub transport failure: {0}.")]
	pub struct StubTransportError(pub String);

	/// Outcome scripted for the next request seen by [`StubHttpClient`].
	#[derive(Clone, Debug)]
	pub enum StubReply {
		/// Respond with the given status and raw body.
		Respond {
			/// HTTP status code.
			status: u16,
			/// Raw response body.
			body: String,
		},
		/// Fail at the transport layer before any response exists.
		Fail(String),
	}
	impl StubReply {
		/// Successful JSON reply.
		pub fn ok(body: impl Into<String>) -> Self {
			Self::Respond { status: 200, body: body.into() }
		}

		/// Reply with an explicit status code.
		pub fn status(status: u16, body: impl Into<String>) -> Self {
			Self::Respond { status, body: body.into() }
		}

		/// Transport-level failure.
		pub fn fail(message: impl Into<String>) -> Self {
			Self::Fail(message.into())
		}
	}

	/// Snapshot of a request observed by [`StubHttpClient`].
	#[derive(Clone, Debug)]
	pub struct RecordedRequest {
		/// Request method.
		pub method: Method,
		/// Request URI.
		pub uri: String,
		/// Request headers.
		pub headers: HeaderMap,
		/// Raw request body.
		pub body: Vec<u8>,
	}
	impl RecordedRequest {
		/// Returns a header value as UTF-8, when present.
		pub fn header(&self, name: &str) -> Option<&str> {
			self.headers.get(name).and_then(|value| value.to_str().ok())
		}

		/// Returns the raw bytes of a header value, when present.
		pub fn header_bytes(&self, name: &str) -> Option<&[u8]> {
			self.headers.get(name).map(|value| value.as_bytes())
		}
	}

	#[derive(Debug, Default)]
	struct StubState {
		replies: Mutex<VecDeque<StubReply>>,
		requests: Mutex<Vec<RecordedRequest>>,
	}

	/// Scripted transport that replays queued replies in order and records every request.
	///
	/// Requests arriving after the script is exhausted fail at the transport layer.
	#[derive(Clone, Debug, Default)]
	pub struct StubHttpClient(Arc<StubState>);
	impl StubHttpClient {
		/// Creates a client that replays `replies` in order.
		pub fn scripted(replies: impl IntoIterator<Item = StubReply>) -> Self {
			let client = Self::default();

			client.0.replies.lock().extend(replies);

			client
		}

		/// Returns every request observed so far.
		pub fn requests(&self) -> Vec<RecordedRequest> {
			self.0.requests.lock().clone()
		}

		/// Number of requests observed so far.
		pub fn request_count(&self) -> usize {
			self.0.requests.lock().len()
		}
	}
	impl IdentityHttpClient for StubHttpClient {
		type Handle = StubHttpClient;
		type TransportError = StubTransportError;

		fn handle(&self) -> Self::Handle {
			self.clone()
		}
	}
	impl<'c> AsyncHttpClient<'c> for StubHttpClient {
		type Error = HttpClientError<StubTransportError>;
		type Future =
			Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send + Sync>>;

		fn call(&'c self, request: HttpRequest) -> Self::Future {
			let state = Arc::clone(&self.0);

			Box::pin(async move {
				let (parts, body) = request.into_parts();

				state.requests.lock().push(RecordedRequest {
					method: parts.method,
					uri: parts.uri.to_string(),
					headers: parts.headers,
					body,
				});

				let reply = state.replies.lock().pop_front();

				match reply {
					Some(StubReply::Respond { status, body }) => {
						let mut response = HttpResponse::new(body.into_bytes());

						*response.status_mut() =
							StatusCode::from_u16(status).map_err(oauth2::http::Error::from)?;

						Ok(response)
					},
					Some(StubReply::Fail(message)) =>
						Err(HttpClientError::Reqwest(Box::new(StubTransportError(message)))),
					None => Err(HttpClientError::Reqwest(Box::new(StubTransportError(
						"no scripted reply left".into(),
					)))),
				}
			})
		}
	}

	/// Builds a broker over [`StubHttpClient`] using the supplied descriptor.
	pub fn build_stub_broker(
		descriptor: ProviderDescriptor,
		replies: impl IntoIterator<Item = StubReply>,
	) -> (StubBroker, StubHttpClient) {
		let http_client = StubHttpClient::scripted(replies);
		let broker = IdentityBroker::new(
			http_client.clone(),
			"client-stub",
			"secret-stub",
			"https://app.example.com/callback",
		)
		.with_descriptor(descriptor);

		(broker, http_client)
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(any(test, feature = "test"))] pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
