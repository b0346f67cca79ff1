//! Transport primitives for CommunityOne API calls.
//!
//! The module exposes [`ApiHttpClient`] alongside the plain-data [`ApiRequest`] and
//! [`ApiResponse`] descriptors so downstream crates can plug in their own HTTP stack (or a test
//! fake) without touching the endpoint logic. The client builds an [`ApiRequest`], hands it to
//! the transport exactly once, and decodes whatever [`ApiResponse`] comes back.

// self
#[cfg(feature = "reqwest")] use crate::error::ConfigError;
use crate::{_prelude::*, error::ResponseError};

/// Boxed future returned by [`ApiHttpClient::execute`].
pub type TransportFuture<'a, E> = Pin<Box<dyn Future<Output = Result<ApiResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing a single API round trip.
///
/// The trait is the client's only dependency on an HTTP stack. Implementations must be
/// `Send + Sync + 'static` so one transport can back many clients and concurrent calls, and the
/// futures they return must be `Send` so callers can spawn them on multi-threaded executors.
///
/// Implementations return `Ok` for every HTTP response they receive, including non-success
/// statuses; status interpretation happens in the client. Errors are reserved for failures
/// where no response exists (DNS, connect, TLS, timeout) and reach the caller unchanged.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Performs one HTTP exchange. Implementations must not retry.
	fn execute(&self, request: ApiRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	/// Read request.
	Get,
	/// Write request carrying a JSON body.
	Post,
}
impl HttpMethod {
	/// Returns the method token as sent on the wire.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// An HTTP request described as plain data.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: HttpMethod,
	/// Fully resolved request URL.
	pub url: Url,
	/// Header name/value pairs, in insertion order.
	pub headers: Vec<(String, String)>,
	/// Encoded JSON body, when the endpoint takes one.
	pub body: Option<Vec<u8>>,
}
impl ApiRequest {
	/// Returns the first header value matching `name` (case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}
impl Debug for ApiRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let headers = self
			.headers
			.iter()
			.map(|(name, value)| {
				if name.eq_ignore_ascii_case("authorization") {
					(name.as_str(), "<redacted>")
				} else {
					(name.as_str(), value.as_str())
				}
			})
			.collect::<Vec<_>>();

		f.debug_struct("ApiRequest")
			.field("method", &self.method)
			.field("url", &self.url.as_str())
			.field("headers", &headers)
			.field("body_len", &self.body.as_ref().map(Vec::len))
			.finish()
	}
}

/// An HTTP response described as plain data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Creates a response from a status code and body bytes.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Decodes the body into `T`, turning non-success statuses into [`ResponseError::Status`].
	pub fn decode<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		if !self.is_success() {
			return Err(ResponseError::Status {
				status: self.status,
				body: String::from_utf8_lossy(&self.body).into_owned(),
			}
			.into());
		}

		let mut de = serde_json::Deserializer::from_slice(&self.body);

		serde_path_to_error::deserialize(&mut de)
			.map_err(|source| ResponseError::Decode { source, status: Some(self.status) }.into())
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client whose requests give up after `timeout`.
	///
	/// Timeouts are the transport's concern; the API client itself never imposes one.
	pub fn with_timeout(timeout: std::time::Duration) -> Result<Self> {
		let client = ReqwestClient::builder().timeout(timeout).build().map_err(ConfigError::from)?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl std::ops::Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: ApiRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = match request.method {
				HttpMethod::Get => reqwest::Method::GET,
				HttpMethod::Post => reqwest::Method::POST,
			};
			let mut builder = client.request(method, request.url);

			for (name, value) in &request.headers {
				builder = builder.header(name.as_str(), value.as_str());
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(ApiResponse { status, body })
		})
	}
}
