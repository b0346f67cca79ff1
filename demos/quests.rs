//! Lists a server's custom quests, the members who completed one, and a player's profile.
//!
//! ```sh
//! SERVER_ID=... API_KEY=... DISCORD_USER_ID=... CUSTOM_QUEST_ID=... cargo run --example quests
//! ```

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::WrapErr};
// self
use communityone::{CommunityOne, VERSION};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server_id = env::var("SERVER_ID").wrap_err("SERVER_ID must be set.")?;
	let api_key = env::var("API_KEY").wrap_err("API_KEY must be set.")?;
	let client = CommunityOne::new(server_id, api_key);

	println!("communityone SDK v{VERSION}; {client:?}.");

	let quests = client.custom_quests().await?;

	for quest in &quests {
		let status = if quest.archived { "archived" } else { "active" };

		println!(
			"#{} {} ({} points, {status}){}",
			quest.custom_quest_id,
			quest.title,
			quest.reward_points,
			quest.external_url().map(|url| format!(" -> {url}")).unwrap_or_default(),
		);
	}

	if let Ok(raw) = env::var("CUSTOM_QUEST_ID") {
		let custom_quest_id = raw.parse().wrap_err("CUSTOM_QUEST_ID must be an integer.")?;
		let roster = client.completed_members(custom_quest_id).await?;

		println!(
			"Quest #{} has {} completing members (testing mode: {}).",
			roster.custom_quest_id,
			roster.members.len(),
			roster.testing_mode,
		);

		for member in &roster.members {
			println!(
				"  {} completed {} time(s), last at {}.",
				member.discord_user_id, member.times_completed, member.last_completed,
			);
		}
	}
	if let Ok(discord_user_id) = env::var("DISCORD_USER_ID") {
		match client.player_info(&discord_user_id).await {
			Ok(player) => println!(
				"Player {} ({}) is known as {}.",
				player.discord_username, player.discord_user_id, player.discord_display_name,
			),
			Err(e) => println!("Player lookup failed: {e}."),
		}
	}

	Ok(())
}
