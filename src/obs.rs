//! Optional observability helpers for API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run every call inside a span named `communityone.request` carrying the
//!   `operation` and `method` fields. No events are emitted.
//! - Enable `metrics` to increment the `communityone_request_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use self::{metrics::*, tracing::*};

// self
use crate::_prelude::*;

/// API operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// List the server's custom quests.
	CustomQuests,
	/// Fetch one player's profile.
	PlayerInfo,
	/// Mark a custom quest as completed.
	CompleteCustomQuest,
	/// List members who completed a custom quest.
	CompletedMembers,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::CustomQuests => "custom_quests",
			Operation::PlayerInfo => "player_info",
			Operation::CompleteCustomQuest => "complete_custom_quest",
			Operation::CompletedMembers => "completed_members",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to an API method.
	Attempt,
	/// Decoded record returned to the caller.
	Success,
	/// Error propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
