//! The CommunityOne API client.
//!
//! [`CommunityOne`] pairs an immutable [`ClientConfig`] with an [`ApiHttpClient`] transport.
//! Every method builds one [`Endpoint`] request, executes it exactly once, and returns the
//! decoded record unchanged. There is no retry, caching, or local state between calls, so a
//! single client can be shared freely across tasks.

// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	endpoint::Endpoint,
	error::TransportError,
	http::ApiHttpClient,
	model::{CompletedMembersResponse, CustomQuest, PlayerInfo, QuestCompletionResult},
	obs::{self, RequestOutcome, RequestSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestCommunityOne = CommunityOne<ReqwestHttpClient>;

/// Async client for one CommunityOne server.
pub struct CommunityOne<C>
where
	C: ?Sized + ApiHttpClient,
{
	config: ClientConfig,
	headers: Arc<[(String, String)]>,
	http_client: Arc<C>,
}
impl<C> CommunityOne<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client that sends every request through `http_client`.
	pub fn with_http_client(config: ClientConfig, http_client: impl Into<Arc<C>>) -> Self {
		let headers: Arc<[(String, String)]> =
			Arc::from([("Authorization".to_owned(), config.api_key.expose().to_owned())]);

		Self { config, headers, http_client: http_client.into() }
	}

	/// Discord server identifier every path is scoped to.
	pub fn server_id(&self) -> &str {
		&self.config.server_id
	}

	/// Configuration the client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Transport shared by every call.
	pub fn http_client(&self) -> &Arc<C> {
		&self.http_client
	}

	/// Lists every custom quest defined for the server.
	pub async fn custom_quests(&self) -> Result<Vec<CustomQuest>> {
		self.send(Endpoint::CustomQuests).await
	}

	/// Fetches a player's profile. The identifier is forwarded without validation.
	pub async fn player_info(&self, discord_user_id: &str) -> Result<PlayerInfo> {
		self.send(Endpoint::PlayerInfo { discord_user_id: discord_user_id.to_owned() }).await
	}

	/// Marks a custom quest as completed for a member.
	///
	/// `discord_user_id` accepts anything displayable (`&str`, `String`, `u64`) and is always
	/// sent as a JSON string. Duplicate calls are not deduplicated; the API decides what a repeat
	/// completion means.
	pub async fn complete_custom_quest(
		&self,
		custom_quest_id: u64,
		discord_user_id: impl Display,
	) -> Result<QuestCompletionResult> {
		self.send(Endpoint::CompleteCustomQuest {
			custom_quest_id,
			discord_user_id: discord_user_id.to_string(),
		})
		.await
	}

	/// Lists the members who completed a custom quest.
	pub async fn completed_members(&self, custom_quest_id: u64) -> Result<CompletedMembersResponse> {
		self.send(Endpoint::CompletedMembers { custom_quest_id }).await
	}

	async fn send<T>(&self, endpoint: Endpoint) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let operation = endpoint.operation();
		let span = RequestSpan::new(operation, endpoint.method());

		obs::record_request_outcome(operation, RequestOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = endpoint.request(&self.config, &self.headers)?;
				let response =
					self.http_client.execute(request).await.map_err(TransportError::network)?;

				response.decode::<T>()
			})
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(operation, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(operation, RequestOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl CommunityOne<ReqwestHttpClient> {
	/// Creates a client for the public API using a default reqwest transport.
	///
	/// Neither argument is validated; empty strings are accepted.
	pub fn new(server_id: impl Into<String>, api_key: impl Into<String>) -> Self {
		Self::with_http_client(ClientConfig::new(server_id, api_key), ReqwestHttpClient::default())
	}
}
impl<C> Clone for CommunityOne<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			headers: Arc::clone(&self.headers),
			http_client: Arc::clone(&self.http_client),
		}
	}
}
impl<C> Debug for CommunityOne<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CommunityOne")
			.field("server_id", &self.config.server_id)
			.field("base_url", &self.config.base_url)
			.field("api_key_set", &!self.config.api_key.expose().is_empty())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::http::{ApiRequest, ApiResponse, TransportFuture};

	#[derive(Debug)]
	struct Unreachable;
	impl Display for Unreachable {
		fn fmt(&self, f: &mut Formatter) -> FmtResult {
			f.write_str("unreachable")
		}
	}
	impl StdError for Unreachable {}

	struct EchoHttpClient;
	impl ApiHttpClient for EchoHttpClient {
		type TransportError = Unreachable;

		fn execute(&self, request: ApiRequest) -> TransportFuture<'_, Self::TransportError> {
			Box::pin(async move {
				let body = serde_json::json!({
					"success": request.header("Authorization") == Some("1234"),
					"message": request.url.path(),
				});

				Ok(ApiResponse::new(200, body.to_string()))
			})
		}
	}

	#[cfg(feature = "metrics")]
	struct FailingHttpClient;
	#[cfg(feature = "metrics")]
	impl ApiHttpClient for FailingHttpClient {
		type TransportError = Unreachable;

		fn execute(&self, _: ApiRequest) -> TransportFuture<'_, Self::TransportError> {
			Box::pin(async { Err(Unreachable) })
		}
	}

	#[cfg(feature = "tracing")]
	struct CurrentSpanHttpClient;
	#[cfg(feature = "tracing")]
	impl ApiHttpClient for CurrentSpanHttpClient {
		type TransportError = Unreachable;

		fn execute(&self, _: ApiRequest) -> TransportFuture<'_, Self::TransportError> {
			let current = tracing::Span::current().metadata().map(|meta| meta.name());
			let body = serde_json::json!({ "success": true, "message": current.unwrap_or_default() });

			Box::pin(async move { Ok(ApiResponse::new(200, body.to_string())) })
		}
	}

	#[cfg(feature = "tracing")]
	type SpanLog = Arc<parking_lot::Mutex<Vec<(&'static str, Vec<(String, String)>)>>>;

	#[cfg(feature = "tracing")]
	struct SpanLogLayer(SpanLog);
	#[cfg(feature = "tracing")]
	impl<S> tracing_subscriber::Layer<S> for SpanLogLayer
	where
		S: tracing::Subscriber,
	{
		fn on_new_span(
			&self,
			attrs: &tracing::span::Attributes<'_>,
			_: &tracing::span::Id,
			_: tracing_subscriber::layer::Context<'_, S>,
		) {
			let mut fields = FieldLog::default();

			attrs.record(&mut fields);
			self.0.lock().push((attrs.metadata().name(), fields.0));
		}
	}

	#[cfg(feature = "tracing")]
	#[derive(Default)]
	struct FieldLog(Vec<(String, String)>);
	#[cfg(feature = "tracing")]
	impl tracing::field::Visit for FieldLog {
		fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
			self.0.push((field.name().to_owned(), value.to_owned()));
		}

		fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn Debug) {
			self.0.push((field.name().to_owned(), format!("{value:?}")));
		}
	}

	fn assert_send_sync<T: Send + Sync>() {}

	#[test]
	fn client_is_shareable() {
		assert_send_sync::<CommunityOne<EchoHttpClient>>();

		let client: CommunityOne<EchoHttpClient> =
			CommunityOne::with_http_client(ClientConfig::new("123", "1234"), EchoHttpClient);
		let cloned = client.clone();

		assert!(Arc::ptr_eq(client.http_client(), cloned.http_client()));
	}

	#[test]
	fn debug_hides_api_key() {
		let client: CommunityOne<EchoHttpClient> =
			CommunityOne::with_http_client(ClientConfig::new("123", "1234"), EchoHttpClient);
		let rendered = format!("{client:?}");

		assert!(rendered.contains("api_key_set: true"));
		assert!(!rendered.contains("\"1234\""));
		assert_eq!(client.server_id(), "123");
	}

	#[tokio::test]
	async fn send_attaches_precomputed_authorization() {
		let client: CommunityOne<EchoHttpClient> =
			CommunityOne::with_http_client(ClientConfig::new("123", "1234"), EchoHttpClient);
		let result = client
			.complete_custom_quest(1, 999_u64)
			.await
			.expect("Echo transport should succeed.");

		assert!(result.success, "Authorization header must carry the raw key.");
		assert_eq!(result.message, "/v1/servers/123/custom-quests/1/complete");
		assert_eq!(result.completed_at(), None);
	}

	#[cfg(feature = "metrics")]
	#[test]
	fn outcomes_are_counted_per_operation() {
		// std
		use std::collections::HashMap;
		// crates.io
		use metrics_util::debugging::{DebugValue, DebuggingRecorder};

		let recorder = DebuggingRecorder::new();
		let snapshotter = recorder.snapshotter();
		let runtime = tokio::runtime::Builder::new_current_thread()
			.build()
			.expect("Current-thread runtime should build.");

		metrics::with_local_recorder(&recorder, || {
			runtime.block_on(async {
				let ok: CommunityOne<EchoHttpClient> =
					CommunityOne::with_http_client(ClientConfig::new("123", "1234"), EchoHttpClient);
				let failing: CommunityOne<FailingHttpClient> =
					CommunityOne::with_http_client(ClientConfig::new("123", "1234"), FailingHttpClient);

				ok.complete_custom_quest(1, "999").await.expect("Echo transport should succeed.");
				failing.complete_custom_quest(1, "999").await.expect_err("Transport must fail.");
				failing.custom_quests().await.expect_err("Transport must fail.");
			})
		});

		let counts = snapshotter
			.snapshot()
			.into_vec()
			.into_iter()
			.filter(|(key, ..)| key.key().name() == "communityone_request_total")
			.filter_map(|(key, _, _, value)| {
				let label = |name: &str| {
					key.key()
						.labels()
						.find(|label| label.key() == name)
						.map(|label| label.value().to_owned())
						.unwrap_or_default()
				};
				let DebugValue::Counter(count) = value else { return None };

				Some(((label("operation"), label("outcome")), count))
			})
			.collect::<HashMap<_, _>>();
		let count = |operation: &str, outcome: &str| {
			counts.get(&(operation.to_owned(), outcome.to_owned())).copied().unwrap_or_default()
		};

		assert_eq!(count("complete_custom_quest", "attempt"), 2);
		assert_eq!(count("complete_custom_quest", "success"), 1);
		assert_eq!(count("complete_custom_quest", "failure"), 1);
		assert_eq!(count("custom_quests", "attempt"), 1);
		assert_eq!(count("custom_quests", "success"), 0);
		assert_eq!(count("custom_quests", "failure"), 1);
	}

	#[cfg(feature = "tracing")]
	#[tokio::test]
	async fn transport_runs_inside_request_span() {
		// crates.io
		use tracing_subscriber::layer::SubscriberExt;

		let log = SpanLog::default();
		let _guard = tracing::subscriber::set_default(
			tracing_subscriber::registry().with(SpanLogLayer(Arc::clone(&log))),
		);
		let client: CommunityOne<CurrentSpanHttpClient> =
			CommunityOne::with_http_client(ClientConfig::new("123", "1234"), CurrentSpanHttpClient);
		let result = client
			.complete_custom_quest(1, "999")
			.await
			.expect("Span-reporting transport should succeed.");

		assert_eq!(result.message, "communityone.request");

		let spans = log.lock().clone();

		assert_eq!(spans.len(), 1, "Each call must open exactly one span.");
		assert_eq!(spans[0].0, "communityone.request");
		assert_eq!(
			spans[0].1,
			vec![
				("operation".to_owned(), "complete_custom_quest".to_owned()),
				("method".to_owned(), "POST".to_owned()),
			]
		);
	}
}
