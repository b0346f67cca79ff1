//! Custom quest records, completion results, and completion rosters.

// self
use crate::{
	_prelude::*,
	model::{self, ExtraFields},
};

/// Server-defined task with reward metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomQuest {
	/// Quest identifier.
	pub custom_quest_id: u64,
	/// Short title shown to members.
	pub title: String,
	/// Long-form description.
	pub description: String,
	/// Link members follow to complete the quest; `Some(None)` when sent as `null`.
	#[serde(
		default,
		with = "serde_with::rust::double_option",
		skip_serializing_if = "Option::is_none"
	)]
	pub external_url: Option<Option<String>>,
	/// Points granted on completion.
	pub reward_points: i64,
	/// Discord role granted on completion; `Some(None)` when sent as `null`.
	#[serde(
		default,
		with = "serde_with::rust::double_option",
		skip_serializing_if = "Option::is_none"
	)]
	pub reward_role_id: Option<Option<u64>>,
	/// Whether the quest has been archived.
	pub archived: bool,
	/// Keys not modeled above, kept verbatim.
	#[serde(flatten)]
	pub extra: ExtraFields,
}
impl CustomQuest {
	/// Link members follow to complete the quest, if any.
	pub fn external_url(&self) -> Option<&str> {
		model::flat_str(&self.external_url)
	}

	/// Discord role granted on completion, if any.
	pub fn reward_role_id(&self) -> Option<u64> {
		self.reward_role_id.flatten()
	}
}

/// Result of marking a quest as completed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestCompletionResult {
	/// Whether the API recorded the completion.
	pub success: bool,
	/// Human-readable outcome.
	pub message: String,
	/// ISO-8601 completion timestamp, passed through unparsed; `Some(None)` when sent as `null`.
	#[serde(
		default,
		with = "serde_with::rust::double_option",
		skip_serializing_if = "Option::is_none"
	)]
	pub completed_at: Option<Option<String>>,
	/// Keys not modeled above, kept verbatim.
	#[serde(flatten)]
	pub extra: ExtraFields,
}
impl QuestCompletionResult {
	/// Completion timestamp, if the API reported one.
	pub fn completed_at(&self) -> Option<&str> {
		model::flat_str(&self.completed_at)
	}
}

/// One member who completed a quest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedMember {
	/// Discord user identifier.
	pub discord_user_id: String,
	/// Timestamp of the latest completion, passed through unparsed.
	pub last_completed: String,
	/// Number of times the member completed the quest.
	pub times_completed: u64,
	/// Keys not modeled above, kept verbatim.
	#[serde(flatten)]
	pub extra: ExtraFields,
}

/// Members who completed a quest, in the order the API returned them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedMembersResponse {
	/// Quest the roster belongs to.
	pub custom_quest_id: u64,
	/// Whether the server runs CommunityOne in testing mode.
	pub testing_mode: bool,
	/// Completion roster.
	pub members: Vec<CompletedMember>,
	/// Keys not modeled above, kept verbatim.
	#[serde(flatten)]
	pub extra: ExtraFields,
}

/// Body of the quest completion request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct CompleteQuestBody {
	pub(crate) discord_user_id: String,
}
