//! Pure request builders for every CommunityOne endpoint.
//!
//! An [`Endpoint`] knows its method, path template, and body; [`Endpoint::request`] turns it into
//! a fully resolved [`ApiRequest`] without touching the network, so request shapes can be
//! asserted in isolation from any transport.

// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	error::ConfigError,
	http::{ApiRequest, HttpMethod},
	model::CompleteQuestBody,
	obs::Operation,
};

/// One addressable API operation together with its path parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
	/// `GET /servers/{server_id}/custom-quests`.
	CustomQuests,
	/// `GET /servers/{server_id}/players/{discord_user_id}/info`.
	PlayerInfo {
		/// Discord user identifier, forwarded without validation.
		discord_user_id: String,
	},
	/// `POST /servers/{server_id}/custom-quests/{custom_quest_id}/complete`.
	CompleteCustomQuest {
		/// Quest being completed.
		custom_quest_id: u64,
		/// Member completing the quest, already coerced to its string form.
		discord_user_id: String,
	},
	/// `GET /servers/{server_id}/custom-quests/{custom_quest_id}/completed-members`.
	CompletedMembers {
		/// Quest whose roster is requested.
		custom_quest_id: u64,
	},
}
impl Endpoint {
	/// Returns the operation label used for spans and metrics.
	pub const fn operation(&self) -> Operation {
		match self {
			Endpoint::CustomQuests => Operation::CustomQuests,
			Endpoint::PlayerInfo { .. } => Operation::PlayerInfo,
			Endpoint::CompleteCustomQuest { .. } => Operation::CompleteCustomQuest,
			Endpoint::CompletedMembers { .. } => Operation::CompletedMembers,
		}
	}

	/// Returns the HTTP method the endpoint expects.
	pub const fn method(&self) -> HttpMethod {
		match self {
			Endpoint::CompleteCustomQuest { .. } => HttpMethod::Post,
			_ => HttpMethod::Get,
		}
	}

	/// Returns the path segments appended after `/servers/{server_id}`.
	pub fn segments(&self) -> Vec<String> {
		match self {
			Endpoint::CustomQuests => vec!["custom-quests".into()],
			Endpoint::PlayerInfo { discord_user_id } =>
				vec!["players".into(), discord_user_id.clone(), "info".into()],
			Endpoint::CompleteCustomQuest { custom_quest_id, .. } =>
				vec!["custom-quests".into(), custom_quest_id.to_string(), "complete".into()],
			Endpoint::CompletedMembers { custom_quest_id } => vec![
				"custom-quests".into(),
				custom_quest_id.to_string(),
				"completed-members".into(),
			],
		}
	}

	/// Resolves the endpoint against `config`, attaching `headers` verbatim.
	///
	/// Segments are percent-encoded by [`Url`], so identifiers containing `/` or `?` stay inside
	/// their own path segment.
	pub fn request(
		&self,
		config: &ClientConfig,
		headers: &[(String, String)],
	) -> Result<ApiRequest> {
		let mut url = Url::parse(&config.base_url).map_err(|source| {
			ConfigError::InvalidBaseUrl { base_url: config.base_url.clone(), source }
		})?;

		url.path_segments_mut()
			.map_err(|_| ConfigError::CannotBeABase { base_url: config.base_url.clone() })?
			.pop_if_empty()
			.extend(["servers", config.server_id.as_str()])
			.extend(self.segments());

		let mut headers = headers.to_vec();
		let body = match self {
			Endpoint::CompleteCustomQuest { discord_user_id, .. } => {
				let body = CompleteQuestBody { discord_user_id: discord_user_id.clone() };

				headers.push(("Content-Type".into(), "application/json".into()));

				Some(serde_json::to_vec(&body).map_err(ConfigError::RequestEncode)?)
			},
			_ => None,
		};

		Ok(ApiRequest { method: self.method(), url, headers, body })
	}
}
