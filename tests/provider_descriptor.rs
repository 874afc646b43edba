// self
use identity_broker::provider::{ProviderDescriptor, ProviderDescriptorError};

#[test]
fn builder_requires_every_endpoint() {
	let err = ProviderDescriptor::builder()
		.authorize_endpoint("https://example.com/authorize")
		.token_endpoint("https://example.com/token")
		.build()
		.expect_err("Descriptor builder should reject a missing user endpoint.");

	assert_eq!(err, ProviderDescriptorError::MissingEndpoint { endpoint: "user" });
}

#[test]
fn builder_rejects_relative_and_non_http_endpoints() {
	let err = ProviderDescriptor::builder()
		.authorize_endpoint("/authorize")
		.token_endpoint("https://example.com/token")
		.user_endpoint("https://example.com/user")
		.build()
		.expect_err("Relative endpoints should be rejected.");

	assert!(matches!(err, ProviderDescriptorError::InvalidEndpoint { endpoint: "authorize", .. }));

	let err = ProviderDescriptor::builder()
		.authorize_endpoint("https://example.com/authorize")
		.token_endpoint("ftp://example.com/token")
		.user_endpoint("https://example.com/user")
		.build()
		.expect_err("Non-HTTP endpoints should be rejected.");

	assert!(matches!(err, ProviderDescriptorError::UnsupportedScheme { endpoint: "token", .. }));
}

#[test]
fn builder_keeps_endpoint_strings_verbatim() {
	let descriptor = ProviderDescriptor::builder()
		.authorize_endpoint("http://127.0.0.1:9000")
		.token_endpoint("http://127.0.0.1:9000/token")
		.user_endpoint("http://127.0.0.1:9000/user")
		.build()
		.expect("Plain HTTP endpoints are allowed for local providers.");

	assert_eq!(descriptor.authorize_endpoint, "http://127.0.0.1:9000");
}
