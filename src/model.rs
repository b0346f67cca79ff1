//! Records exchanged with the CommunityOne API.
//!
//! Field names follow the API's snake_case schema so payloads pass through without renaming.
//! Every record keeps keys it does not model in an `extra` map, and optional fields remember
//! whether the key was absent (`None`) or an explicit `null` (`Some(None)`), so a decoded record
//! re-encodes to the payload it came from.

pub mod player;
pub mod quest;

pub use player::*;
pub use quest::*;

/// Keys the API sent that the typed fields do not cover.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Flattens an absent-or-null optional field into a plain `Option<&str>`.
pub(crate) fn flat_str(field: &Option<Option<String>>) -> Option<&str> {
	field.as_ref().and_then(|value| value.as_deref())
}
