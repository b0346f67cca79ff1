//! Async Rust client for the CommunityOne API: custom quests, player info, and quest
//! completions over a pluggable HTTP transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod model;
pub mod obs;

pub use client::*;
pub use config::{ApiKey, ClientConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};

/// Version of the SDK, mirrored from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)]
use {
	color_eyre as _, httpmock as _, metrics_util as _, parking_lot as _, tokio as _,
	tracing_subscriber as _,
};
