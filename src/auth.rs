//! Credential primitives: the Clerk secret key and the API base URL it authenticates against.

pub mod secret;

pub use secret::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Base URL used when the credential record does not override it.
pub const DEFAULT_BASE_URL: &str = "https://api.clerk.com/v1";

/// Credential snapshot supplied by the host for one invocation.
///
/// `secret_key` is the single source of the bearer token sent with every request, and
/// `base_url` is threaded through every operation so no path hardcodes the API host.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "CredentialRecord")]
pub struct Credentials {
	/// Clerk secret key used as the bearer token.
	pub secret_key: SecretKey,
	/// API base URL every operation path is appended to.
	pub base_url: Url,
}
impl Credentials {
	/// Creates credentials for the default base URL.
	pub fn new(secret_key: impl Into<String>) -> Result<Self, ConfigError> {
		let secret_key = SecretKey::new(secret_key);

		if secret_key.is_empty() {
			return Err(ConfigError::MissingSecretKey);
		}

		Ok(Self { secret_key, base_url: parse_base_url(DEFAULT_BASE_URL)? })
	}

	/// Overrides the base URL.
	pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
		self.base_url = parse_base_url(base_url)?;

		Ok(self)
	}
}

/// Raw credential record as stored by the host.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialRecord {
	secret_key: String,
	#[serde(default)]
	base_url: Option<String>,
}
impl TryFrom<CredentialRecord> for Credentials {
	type Error = ConfigError;

	fn try_from(record: CredentialRecord) -> Result<Self, Self::Error> {
		let credentials = Credentials::new(record.secret_key)?;

		match record.base_url.as_deref().map(str::trim) {
			Some(base_url) if !base_url.is_empty() => credentials.with_base_url(base_url),
			_ => Ok(credentials),
		}
	}
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
	let invalid = |reason: String| ConfigError::InvalidBaseUrl { url: raw.to_owned(), reason };
	let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;

	if !matches!(url.scheme(), "http" | "https") {
		return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
	}
	if url.cannot_be_a_base() {
		return Err(invalid("URL cannot be used as a base".into()));
	}

	Ok(url)
}
