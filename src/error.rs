use thiserror::Error;

/// The master error type.
///
/// Every contract violation of the panicking tier (`unwrap`, `expect`, ...)
/// is described by one of these, and the `try_*` methods hand it back
/// instead of aborting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpResError {
	#[error("{0}")]
	Custom(String),
	#[error("called `Opt::unwrap()` on an `Absent` value")]
	Absent,
	#[error("called `Outcome::unwrap()` on an `Err` value: {0}")]
	UnexpectedErr(String),
	#[error("called `Outcome::unwrap_err()` on an `Ok` value: {0}")]
	UnexpectedOk(String),
}

impl OpResError {

	/// Joins an `expect` message with the text of the value that broke it.
	pub fn expectation<D: std::fmt::Debug>(msg: &str, value: &D) -> Self {
		OpResError::Custom(format!("{msg}: {value:?}"))
	}
}

pub type OpResult<T> = Result<T,OpResError>;

/// Aborts on a contract violation.
/// The violation is logged first so it shows up wherever the host
/// application collects its events.
#[cold]
#[track_caller]
pub(crate) fn violation(error: OpResError) -> ! {
	#[cfg(feature = "tracing")]
	tracing::error!(target: "opres", %error, "contract violation");
	panic!("{error}")
}
