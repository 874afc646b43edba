//! Token endpoint request and response payloads.
//!
//! Both types live only for the duration of one code exchange.

// self
use crate::{
	_prelude::*,
	auth::{self, SecretString},
};

/// JSON body posted to the token endpoint.
#[derive(Serialize)]
pub(crate) struct TokenRequest<'a> {
	pub(crate) client_id: &'a str,
	pub(crate) client_secret: &'a str,
	pub(crate) code: &'a str,
}
impl Debug for TokenRequest<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenRequest")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.field("code", &"<redacted>")
			.finish()
	}
}

/// Token endpoint response. Absent or `null` fields decode as empty strings.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AccessTokenResult {
	#[serde(default, deserialize_with = "auth::null_as_default")]
	pub(crate) access_token: SecretString,
	#[serde(default, deserialize_with = "auth::null_as_default")]
	#[allow(dead_code)]
	pub(crate) token_type: String,
	#[serde(default, deserialize_with = "auth::null_as_default")]
	#[allow(dead_code)]
	pub(crate) scope: String,
}
impl AccessTokenResult {
	/// Header value for the identity request: literal `token ` plus the access token, whatever
	/// `token_type` says.
	pub(crate) fn authorization_value(&self) -> String {
		format!("token {}", self.access_token.expose())
	}
}
