//! Static client configuration: tenant, credential, and base URL.

// self
use crate::_prelude::*;

/// Base URL of the public CommunityOne API.
pub const DEFAULT_BASE_URL: &str = "https://api.communityone.io/v1";

/// Redacted API key wrapper keeping the credential out of logs.
///
/// The key is sent verbatim in the `Authorization` header; no scheme prefix is added.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);
impl ApiKey {
	/// Wraps a new API key.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner key. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ApiKey {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ApiKey").field(&"<redacted>").finish()
	}
}
impl Display for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Immutable configuration shared by every request a client issues.
///
/// Neither the server identifier nor the key is validated; empty strings are accepted and
/// forwarded as-is.
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// Discord server identifier the API key belongs to.
	pub server_id: String,
	/// Credential presented in the `Authorization` header.
	pub api_key: ApiKey,
	/// API root every endpoint path is appended to.
	pub base_url: String,
}
impl ClientConfig {
	/// Creates a configuration pointing at [`DEFAULT_BASE_URL`].
	pub fn new(server_id: impl Into<String>, api_key: impl Into<String>) -> Self {
		Self {
			server_id: server_id.into(),
			api_key: ApiKey::new(api_key),
			base_url: DEFAULT_BASE_URL.into(),
		}
	}

	/// Overrides the API root (staging deployments, local mock servers).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();

		self
	}
}
