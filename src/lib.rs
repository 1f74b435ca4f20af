//! Rust-flavoured combinators for an optional value ([`Opt`]), a
//! success-or-failure value ([`Outcome`]) and `bool` ([`BoolExtension`]).
//!
//! Absence and failure are ordinary values. Only the `unwrap`/`expect`
//! family panics, and each of those has a `try_*` twin returning
//! [`OpResult`] instead.

pub mod error;
pub mod macros;
pub mod opt;
pub mod outcome;
pub mod util;

pub use error::OpResError;
pub use error::OpResult;
pub use opt::Opt;
pub use outcome::Outcome;
pub use util::coreext::BoolExtension;
pub use util::traits::{IntoOpt, IntoOutcome};
