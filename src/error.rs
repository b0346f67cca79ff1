//! Client-level error types shared across endpoints and transports.

// std
use std::borrow::Cow;
// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const STATUS_BODY_PREVIEW_CHARS: usize = 256;

/// Canonical client error exposed by public APIs.
///
/// Every variant is a flavor of the same failure: the round trip to the CommunityOne API did
/// not produce the expected record. Nothing is retried or recovered locally.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The API answered, but not with a usable record.
	#[error(transparent)]
	Response(#[from] ResponseError),
}
impl Error {
	/// Returns the HTTP status code attached to the failure, if the API answered.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Response(ResponseError::Status { status, .. }) => Some(*status),
			Self::Response(ResponseError::Decode { status, .. }) => *status,
			_ => None,
		}
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
	/// Base URL cannot be parsed.
	#[error("Base URL `{base_url}` is invalid.")]
	InvalidBaseUrl {
		/// Configured base URL.
		base_url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL parses but cannot carry path segments (e.g. `mailto:`).
	#[error("Base URL `{base_url}` cannot carry endpoint paths.")]
	CannotBeABase {
		/// Configured base URL.
		base_url: String,
	},
	/// Request body could not be serialized.
	#[error("Request body could not be encoded as JSON.")]
	RequestEncode(#[source] serde_json::Error),
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
	/// Underlying HTTP client reported a failure; the original error is kept as the source.
	#[error("Network error occurred while calling the CommunityOne API.")]
	Network {
		/// Transport-specific error, boxed without modification.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Returns the transport's original error.
	pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
		match self {
			Self::Network { source } => source.as_ref(),
		}
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures raised after the API answered.
#[derive(Debug, ThisError)]
pub enum ResponseError {
	/// API returned a non-success status code.
	///
	/// `Display` shows at most the first 256 characters of the body.
	#[error("CommunityOne API returned HTTP {status}: {preview}", preview = body_preview(.body))]
	Status {
		/// HTTP status code.
		status: u16,
		/// Full response body, lossily decoded as UTF-8.
		body: String,
	},
	/// API responded with JSON that does not match the expected record.
	#[error("CommunityOne API returned malformed JSON.")]
	Decode {
		/// Structured parsing failure, including the JSON path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
}

fn body_preview(body: &str) -> Cow<'_, str> {
	match body.char_indices().nth(STATUS_BODY_PREVIEW_CHARS) {
		Some((cut, _)) => Cow::Owned(format!("{}…", &body[..cut])),
		None => Cow::Borrowed(body),
	}
}
