// self
use crate::{_prelude::*, http::HttpMethod, obs::Operation};

/// Future returned by [`RequestSpan::instrument`].
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Without `tracing`, the wrapped future itself.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// The `communityone.request` span one API call runs in.
///
/// Carries `operation` (e.g. `player_info`) and `method` (`GET`/`POST`). Zero-sized without the
/// `tracing` feature.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Opens the span for `operation`, sent with `method`.
	pub fn new(operation: Operation, method: HttpMethod) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"communityone.request",
				operation = operation.as_str(),
				method = method.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, method);

			Self {}
		}
	}

	/// Runs `fut` inside the span, entering it on every poll.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}
