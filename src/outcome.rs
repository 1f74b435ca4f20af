//! The outcome container.
//!
//! Variants are always written qualified (`Outcome::Ok`) so they never
//! shadow the prelude's `Ok`/`Err`.

use std::fmt::Debug;

use crate::error::{
	violation,
	OpResError,
	OpResult,
};
use crate::opt::Opt;

/// Either a success carrying `T` or a failure carrying `E`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
	Ok(T),
	Err(E),
}

impl<T, E> Outcome<T, E> {
	#[inline]
	pub fn is_ok(&self) -> bool {
		matches!(self, Outcome::Ok(_))
	}

	#[inline]
	pub fn is_err(&self) -> bool {
		!self.is_ok()
	}

	/// The success value, if there is one.
	pub fn ok_value(self) -> Opt<T> {
		match self {
			Outcome::Ok(value) => Opt::Present(value),
			Outcome::Err(_) => Opt::Absent,
		}
	}

	/// The error, if there is one.
	pub fn err_value(self) -> Opt<E> {
		match self {
			Outcome::Ok(_) => Opt::Absent,
			Outcome::Err(err) => Opt::Present(err),
		}
	}

	#[inline]
	pub fn as_ref(&self) -> Outcome<&T, &E> {
		match self {
			Outcome::Ok(value) => Outcome::Ok(value),
			Outcome::Err(err) => Outcome::Err(err),
		}
	}

	#[inline]
	pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
		match self {
			Outcome::Ok(value) => Outcome::Ok(value),
			Outcome::Err(err) => Outcome::Err(err),
		}
	}

	/// Returns the success value.
	///
	/// # Panics
	/// Panics on `Err`, with a message that includes the error.
	#[track_caller]
	pub fn unwrap(self) -> T
	where
		E: Debug,
	{
		match self {
			Outcome::Ok(value) => value,
			Outcome::Err(err) => violation(OpResError::UnexpectedErr(format!("{err:?}"))),
		}
	}

	/// Returns the success value.
	///
	/// # Panics
	/// Panics on `Err` with `msg: <error>`.
	#[track_caller]
	pub fn expect(self, msg: &str) -> T
	where
		E: Debug,
	{
		match self {
			Outcome::Ok(value) => value,
			Outcome::Err(err) => violation(OpResError::expectation(msg, &err)),
		}
	}

	/// Returns the error.
	///
	/// # Panics
	/// Panics on `Ok`, with a message that includes the success value.
	#[track_caller]
	pub fn unwrap_err(self) -> E
	where
		T: Debug,
	{
		match self {
			Outcome::Ok(value) => violation(OpResError::UnexpectedOk(format!("{value:?}"))),
			Outcome::Err(err) => err,
		}
	}

	/// Returns the error.
	///
	/// # Panics
	/// Panics on `Ok` with `msg: <value>`.
	#[track_caller]
	pub fn expect_err(self, msg: &str) -> E
	where
		T: Debug,
	{
		match self {
			Outcome::Ok(value) => violation(OpResError::expectation(msg, &value)),
			Outcome::Err(err) => err,
		}
	}

	/// Recoverable form of [`Outcome::unwrap`].
	pub fn try_unwrap(self) -> OpResult<T>
	where
		E: Debug,
	{
		match self {
			Outcome::Ok(value) => Ok(value),
			Outcome::Err(err) => Err(OpResError::UnexpectedErr(format!("{err:?}"))),
		}
	}

	/// Recoverable form of [`Outcome::unwrap_err`].
	pub fn try_unwrap_err(self) -> OpResult<E>
	where
		T: Debug,
	{
		match self {
			Outcome::Ok(value) => Err(OpResError::UnexpectedOk(format!("{value:?}"))),
			Outcome::Err(err) => Ok(err),
		}
	}

	#[inline]
	pub fn unwrap_or(self, default: T) -> T {
		match self {
			Outcome::Ok(value) => value,
			Outcome::Err(_) => default,
		}
	}

	/// Returns the success value, or derives one from the error.
	#[inline]
	pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
		match self {
			Outcome::Ok(value) => value,
			Outcome::Err(err) => f(err),
		}
	}

	#[inline]
	pub fn unwrap_or_default(self) -> T
	where
		T: Default,
	{
		self.unwrap_or_else(|_| T::default())
	}

	pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
		match self {
			Outcome::Ok(value) => Outcome::Ok(f(value)),
			Outcome::Err(err) => Outcome::Err(err),
		}
	}

	pub fn map_err<F2, O: FnOnce(E) -> F2>(self, op: O) -> Outcome<T, F2> {
		match self {
			Outcome::Ok(value) => Outcome::Ok(value),
			Outcome::Err(err) => Outcome::Err(op(err)),
		}
	}

	/// Returns `other` if `self` is `Ok`, otherwise passes the error through.
	pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
		match self {
			Outcome::Ok(_) => other,
			Outcome::Err(err) => Outcome::Err(err),
		}
	}

	pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
		match self {
			Outcome::Ok(value) => f(value),
			Outcome::Err(err) => Outcome::Err(err),
		}
	}

	/// Keeps an `Ok`, otherwise falls back to `other`.
	/// The error type may change along the way.
	pub fn or<F2>(self, other: Outcome<T, F2>) -> Outcome<T, F2> {
		match self {
			Outcome::Ok(value) => Outcome::Ok(value),
			Outcome::Err(_) => other,
		}
	}

	pub fn or_else<F2, O: FnOnce(E) -> Outcome<T, F2>>(self, op: O) -> Outcome<T, F2> {
		match self {
			Outcome::Ok(value) => Outcome::Ok(value),
			Outcome::Err(err) => op(err),
		}
	}
}

impl<U, E> Outcome<Opt<U>, E> {
	/// `Outcome<Opt<U>, E>` into `Opt<Outcome<U, E>>`.
	///
	/// `Ok(Absent)` maps to `Absent`; everything else stays present.
	pub fn transpose(self) -> Opt<Outcome<U, E>> {
		match self {
			Outcome::Ok(Opt::Present(value)) => Opt::Present(Outcome::Ok(value)),
			Outcome::Ok(Opt::Absent) => Opt::Absent,
			Outcome::Err(err) => Opt::Present(Outcome::Err(err)),
		}
	}
}

impl<U, E> Outcome<Outcome<U, E>, E> {
	/// Removes one level of nesting. An outer `Err` passes through as-is,
	/// an outer `Ok` unwraps to the inner value, whichever variant it is.
	pub fn flatten(self) -> Outcome<U, E> {
		match self {
			Outcome::Ok(inner) => inner,
			Outcome::Err(err) => Outcome::Err(err),
		}
	}
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
	fn from(value: Result<T, E>) -> Self {
		match value {
			Ok(value) => Outcome::Ok(value),
			Err(err) => Outcome::Err(err),
		}
	}
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
	fn from(value: Outcome<T, E>) -> Self {
		match value {
			Outcome::Ok(value) => Ok(value),
			Outcome::Err(err) => Err(err),
		}
	}
}
