//! Broker-level error types shared by the login and exchange flows.

// self
use crate::_prelude::*;

/// Broker-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical broker error exposed by public APIs.
///
/// Every variant keeps the underlying cause reachable through [`StdError::source`]; callers that
/// only need a pass/fail answer can treat the whole enum as one opaque failure.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration or request-construction problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, body read).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Provider response body could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}

/// Which provider call of the code exchange an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExchangeStage {
	/// `POST` to the token endpoint.
	Token,
	/// `GET` to the user endpoint.
	Identity,
}
impl ExchangeStage {
	/// Returns a stable label suitable for span fields and messages.
	pub const fn as_str(self) -> &'static str {
		match self {
			ExchangeStage::Token => "token",
			ExchangeStage::Identity => "identity",
		}
	}
}
impl Display for ExchangeStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed (bad URI or header value).
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Token request body could not be serialized.
	#[error("Token request body could not be serialized.")]
	Serialize(#[source] serde_json::Error),
	/// Authorize endpoint cannot be parsed as a URL.
	#[error("Authorize endpoint is not a valid URL.")]
	InvalidAuthorizeEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the {stage} endpoint.")]
	Network {
		/// Call that failed.
		stage: ExchangeStage,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling a provider endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(stage: ExchangeStage, src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Network { stage, source: Box::new(src) }
	}

	/// Call that failed, when known.
	pub fn stage(&self) -> Option<ExchangeStage> {
		match self {
			Self::Network { stage, .. } => Some(*stage),
			Self::Io(_) => None,
		}
	}
}

/// Response bodies that are not valid JSON or do not match the expected shape.
///
/// The HTTP status is attached for diagnostics only; it never decides whether decoding happens.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Token endpoint body could not be decoded.
	#[error("Token endpoint returned malformed JSON.")]
	TokenResponse {
		/// HTTP status code of the response.
		status: Option<u16>,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// User endpoint body could not be decoded.
	#[error("User endpoint returned malformed JSON.")]
	IdentityResponse {
		/// HTTP status code of the response.
		status: Option<u16>,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl DecodeError {
	/// Call whose body failed to decode.
	pub fn stage(&self) -> ExchangeStage {
		match self {
			Self::TokenResponse { .. } => ExchangeStage::Token,
			Self::IdentityResponse { .. } => ExchangeStage::Identity,
		}
	}

	/// HTTP status of the undecodable response, when known.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::TokenResponse { status, .. } | Self::IdentityResponse { status, .. } => *status,
		}
	}

	/// JSON path at which decoding failed (e.g. `id`), `.` for the document root.
	pub fn path(&self) -> String {
		match self {
			Self::TokenResponse { source, .. } | Self::IdentityResponse { source, .. } =>
				source.path().to_string(),
		}
	}
}
