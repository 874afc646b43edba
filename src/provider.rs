//! Provider-facing endpoint configuration.
//!
//! `descriptor` exposes [`ProviderDescriptor`], the authorize/token/user endpoint triple a broker
//! talks to. [`ProviderDescriptor::github`] is the default; tests and self-hosted deployments
//! swap in their own endpoints through [`ProviderDescriptorBuilder`].

pub mod descriptor;

pub use descriptor::*;
