//! Span creation helpers for bigamount operations.
//!
//! Telemetry stays out of the business logic: instead of `#[instrument]`
//! attributes, each instrumented operation enters a span built here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn format(&self, amount: &Amount) -> Result<String, FormatError> {
//!     let span = spans::format_amount(amount.units().base().code(), self.steps.len());
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

/// Create span for running a formatting pipeline against one amount.
///
/// Parent: caller's span
/// Children: none, individual steps emit trace events
#[inline]
pub(crate) fn format_amount(base_unit: &str, steps: usize) -> Span {
    tracing::trace_span!("bigamount.format_amount", base_unit = %base_unit, steps = steps)
}

/// Create span for decoding the canonical `<integer>/<CODE>` form.
#[inline]
pub(crate) fn decode_amount(input: &str, expected_unit: &str) -> Span {
    tracing::trace_span!(
        "bigamount.decode_amount",
        input = %input,
        expected_unit = %expected_unit,
    )
}
