// self
use crate::{_prelude::*, provider::ProviderDescriptor};

/// Errors raised while constructing descriptors.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ProviderDescriptorError {
	/// A required endpoint was never set.
	#[error("Missing {endpoint} endpoint.")]
	MissingEndpoint {
		/// Which endpoint is missing.
		endpoint: &'static str,
	},
	/// An endpoint is not an absolute URL.
	#[error("The {endpoint} endpoint is not a valid URL: {url}.")]
	InvalidEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint value that failed validation.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTP(S).
	#[error("The {endpoint} endpoint must use http or https: {url}.")]
	UnsupportedScheme {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint value that failed validation.
		url: String,
	},
}

/// Builder for [`ProviderDescriptor`] values.
///
/// Plain `http` is accepted so local mock servers can stand in for the provider.
#[derive(Debug, Default)]
pub struct ProviderDescriptorBuilder {
	authorize_endpoint: Option<String>,
	token_endpoint: Option<String>,
	user_endpoint: Option<String>,
}
impl ProviderDescriptorBuilder {
	/// Sets the authorize endpoint.
	pub fn authorize_endpoint(mut self, url: impl Into<String>) -> Self {
		self.authorize_endpoint = Some(url.into());

		self
	}

	/// Sets the token endpoint.
	pub fn token_endpoint(mut self, url: impl Into<String>) -> Self {
		self.token_endpoint = Some(url.into());

		self
	}

	/// Sets the user endpoint.
	pub fn user_endpoint(mut self, url: impl Into<String>) -> Self {
		self.user_endpoint = Some(url.into());

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ProviderDescriptor, ProviderDescriptorError> {
		let authorize_endpoint = require("authorize", self.authorize_endpoint)?;
		let token_endpoint = require("token", self.token_endpoint)?;
		let user_endpoint = require("user", self.user_endpoint)?;

		Ok(ProviderDescriptor { authorize_endpoint, token_endpoint, user_endpoint })
	}
}

fn require(
	endpoint: &'static str,
	value: Option<String>,
) -> Result<String, ProviderDescriptorError> {
	let value = value.ok_or(ProviderDescriptorError::MissingEndpoint { endpoint })?;
	let url = Url::parse(&value).map_err(|source| ProviderDescriptorError::InvalidEndpoint {
		endpoint,
		url: value.clone(),
		source,
	})?;

	match url.scheme() {
		"http" | "https" => Ok(value),
		_ => Err(ProviderDescriptorError::UnsupportedScheme { endpoint, url: value }),
	}
}
