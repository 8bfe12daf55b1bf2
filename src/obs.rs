//! Optional observability helpers for API operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `taproom_client.op` with the `op`
//!   (operation) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `taproom_client_op_total` counter for every
//!   attempt/success/failure, labeled by `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// API operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
	/// Paged listing of beers.
	List,
	/// Single-record fetch.
	Get,
	/// Creation round trip (POST plus read-back).
	Create,
	/// Update round trip (PUT plus read-back).
	Update,
	/// Single-record deletion.
	Delete,
	/// Access-token exchange against the token endpoint.
	Token,
}
impl OpKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpKind::List => "list",
			OpKind::Get => "get",
			OpKind::Create => "create",
			OpKind::Update => "update",
			OpKind::Delete => "delete",
			OpKind::Token => "token",
		}
	}
}
impl Display for OpKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OpOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpOutcome::Attempt => "attempt",
			OpOutcome::Success => "success",
			OpOutcome::Failure => "failure",
		}
	}
}
impl Display for OpOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside an operation span, recording the attempt and its outcome.
#[cfg(feature = "reqwest")]
pub(crate) async fn observed<T, E, F>(kind: OpKind, stage: &'static str, fut: F) -> Result<T, E>
where
	F: Future<Output = Result<T, E>>,
{
	let span = OpSpan::new(kind, stage);

	record_op_outcome(kind, OpOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => record_op_outcome(kind, OpOutcome::Success),
		Err(_) => record_op_outcome(kind, OpOutcome::Failure),
	}

	result
}
