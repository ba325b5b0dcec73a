//! Resource and HTTP method identifiers shared by the registry and the dispatcher.

// self
use crate::{_prelude::*, error::ConfigError};

/// Top-level Clerk API entity categories exposed by the connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
	/// User accounts.
	Users,
	/// Organizations, memberships, and organization invitations.
	Organizations,
	/// Client sessions.
	Sessions,
	/// Email addresses attached to users.
	EmailAddresses,
	/// Phone numbers attached to users.
	PhoneNumbers,
	/// Instance-level invitations.
	Invitations,
	/// Sign-up allowlist entries.
	AllowlistIdentifiers,
	/// Sign-up blocklist entries.
	BlocklistIdentifiers,
	/// JWT templates used to mint session tokens.
	JwtTemplates,
}
impl Resource {
	/// Every resource, in host display order.
	pub const ALL: [Resource; 9] = [
		Resource::Users,
		Resource::Organizations,
		Resource::Sessions,
		Resource::EmailAddresses,
		Resource::PhoneNumbers,
		Resource::Invitations,
		Resource::AllowlistIdentifiers,
		Resource::BlocklistIdentifiers,
		Resource::JwtTemplates,
	];

	/// Returns the host identifier for the resource.
	pub const fn as_str(self) -> &'static str {
		match self {
			Resource::Users => "users",
			Resource::Organizations => "organizations",
			Resource::Sessions => "sessions",
			Resource::EmailAddresses => "emailAddresses",
			Resource::PhoneNumbers => "phoneNumbers",
			Resource::Invitations => "invitations",
			Resource::AllowlistIdentifiers => "allowlistIdentifiers",
			Resource::BlocklistIdentifiers => "blocklistIdentifiers",
			Resource::JwtTemplates => "jwtTemplates",
		}
	}
}
impl Display for Resource {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Resource {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Resource::ALL
			.into_iter()
			.find(|resource| resource.as_str() == s)
			.ok_or_else(|| ConfigError::UnsupportedResource { resource: s.to_owned() })
	}
}

/// HTTP verbs used by the Clerk Backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	/// Read-only retrieval.
	Get,
	/// Creation and state-changing actions.
	Post,
	/// Partial update.
	Patch,
	/// Removal.
	Delete,
}
impl HttpMethod {
	/// Returns the canonical method token.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Patch => "PATCH",
			HttpMethod::Delete => "DELETE",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
