//! Player profile records.

// self
use crate::{
	_prelude::*,
	model::{self, ExtraFields},
};

/// Discord member as known to CommunityOne.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
	/// Discord user identifier (snowflake, kept as a string).
	pub discord_user_id: String,
	/// Discord username.
	pub discord_username: String,
	/// Server display name.
	pub discord_display_name: String,
	/// Avatar reference: `None` when absent, `Some(None)` when sent as `null`.
	#[serde(
		default,
		with = "serde_with::rust::double_option",
		skip_serializing_if = "Option::is_none"
	)]
	pub discord_avatar: Option<Option<String>>,
	/// Keys not modeled above, kept verbatim.
	#[serde(flatten)]
	pub extra: ExtraFields,
}
impl PlayerInfo {
	/// Avatar reference, if the member has one.
	pub fn discord_avatar(&self) -> Option<&str> {
		model::flat_str(&self.discord_avatar)
	}
}
