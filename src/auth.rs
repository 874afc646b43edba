//! Auth-domain models: provider credentials, redacted secrets, and the provider's token and user
//! payloads.

pub mod credentials;
pub mod identity;
pub mod secret;

mod token;

pub use credentials::*;
pub use identity::*;
pub use secret::*;
pub(crate) use token::*;

// crates.io
use serde::Deserializer;
// self
use crate::_prelude::*;

/// Decodes JSON `null` the same way as an absent field: into `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
