//! The optionality container.

use crate::error::{
	violation,
	OpResError,
	OpResult,
};
use crate::outcome::Outcome;

/// A value that is either `Present` or `Absent`.
///
/// `Absent` is declared first so it orders below every `Present`, the same
/// way `None` orders below `Some`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Opt<T> {
	Absent,
	Present(T),
}

impl<T> Default for Opt<T> {
	fn default() -> Self {
		Opt::Absent
	}
}

impl<T> Opt<T> {
	/// Returns `true` if the container holds a value.
	#[inline]
	pub fn is_present(&self) -> bool {
		matches!(self, Opt::Present(_))
	}

	/// Returns `true` if the container is empty.
	#[inline]
	pub fn is_absent(&self) -> bool {
		!self.is_present()
	}

	#[inline]
	pub fn as_ref(&self) -> Opt<&T> {
		match self {
			Opt::Present(value) => Opt::Present(value),
			Opt::Absent => Opt::Absent,
		}
	}

	#[inline]
	pub fn as_mut(&mut self) -> Opt<&mut T> {
		match self {
			Opt::Present(value) => Opt::Present(value),
			Opt::Absent => Opt::Absent,
		}
	}

	/// Returns the contained value.
	///
	/// # Panics
	/// Panics with `msg` if the container is `Absent`.
	#[track_caller]
	pub fn expect(self, msg: &str) -> T {
		match self {
			Opt::Present(value) => value,
			Opt::Absent => violation(OpResError::Custom(msg.to_owned())),
		}
	}

	/// Returns the contained value.
	///
	/// # Panics
	/// Panics if the container is `Absent`. Use [`Opt::try_unwrap`] when
	/// absence is an expected case.
	#[track_caller]
	pub fn unwrap(self) -> T {
		match self {
			Opt::Present(value) => value,
			Opt::Absent => violation(OpResError::Absent),
		}
	}

	/// Recoverable form of [`Opt::unwrap`].
	pub fn try_unwrap(self) -> OpResult<T> {
		match self {
			Opt::Present(value) => Ok(value),
			Opt::Absent => Err(OpResError::Absent),
		}
	}

	#[inline]
	pub fn unwrap_or(self, default: T) -> T {
		match self {
			Opt::Present(value) => value,
			Opt::Absent => default,
		}
	}

	/// Returns the contained value, or computes one with `f`.
	/// `f` only runs when the container is `Absent`.
	#[inline]
	pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
		match self {
			Opt::Present(value) => value,
			Opt::Absent => f(),
		}
	}

	#[inline]
	pub fn unwrap_or_default(self) -> T
	where
		T: Default,
	{
		self.unwrap_or_else(T::default)
	}

	pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Opt<U> {
		match self {
			Opt::Present(value) => Opt::Present(f(value)),
			Opt::Absent => Opt::Absent,
		}
	}

	/// Applies `f` to the contained value, or returns `default` untransformed.
	pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
		match self {
			Opt::Present(value) => f(value),
			Opt::Absent => default,
		}
	}

	/// Lazy form of [`Opt::map_or`].
	pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
	where
		D: FnOnce() -> U,
		F: FnOnce(T) -> U,
	{
		match self {
			Opt::Present(value) => f(value),
			Opt::Absent => default(),
		}
	}

	/// `Present(v)` becomes `Ok(v)`, `Absent` becomes `Err(err)`.
	pub fn to_outcome<E>(self, err: E) -> Outcome<T, E> {
		match self {
			Opt::Present(value) => Outcome::Ok(value),
			Opt::Absent => Outcome::Err(err),
		}
	}

	/// Like [`Opt::to_outcome`], but the error is only built when needed.
	pub fn to_outcome_else<E, F: FnOnce() -> E>(self, f: F) -> Outcome<T, E> {
		match self {
			Opt::Present(value) => Outcome::Ok(value),
			Opt::Absent => Outcome::Err(f()),
		}
	}

	/// Returns `Absent` if `self` is absent, otherwise `other`.
	pub fn and<U>(self, other: Opt<U>) -> Opt<U> {
		match self {
			Opt::Present(_) => other,
			Opt::Absent => Opt::Absent,
		}
	}

	pub fn and_then<U, F: FnOnce(T) -> Opt<U>>(self, f: F) -> Opt<U> {
		match self {
			Opt::Present(value) => f(value),
			Opt::Absent => Opt::Absent,
		}
	}

	/// Keeps the value only when `predicate` accepts it.
	pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
		if let Opt::Present(value) = self {
			if predicate(&value) {
				return Opt::Present(value);
			}
		}
		Opt::Absent
	}

	pub fn or(self, other: Opt<T>) -> Opt<T> {
		match self {
			Opt::Present(_) => self,
			Opt::Absent => other,
		}
	}

	pub fn or_else<F: FnOnce() -> Opt<T>>(self, f: F) -> Opt<T> {
		match self {
			Opt::Present(_) => self,
			Opt::Absent => f(),
		}
	}

	/// `Present` if exactly one side is present.
	pub fn xor(self, other: Opt<T>) -> Opt<T> {
		match (self, other) {
			(present @ Opt::Present(_), Opt::Absent)
			| (Opt::Absent, present @ Opt::Present(_)) => present,
			_ => Opt::Absent,
		}
	}

	/// Stores `value` if the container is `Absent`, then hands out a
	/// mutable borrow of the payload that now lives in `self`.
	pub fn get_or_insert(&mut self, value: T) -> &mut T {
		self.get_or_insert_with(|| value)
	}

	/// Lazy form of [`Opt::get_or_insert`]: `f` only runs when `Absent`.
	pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
		if self.is_absent() {
			*self = Opt::Present(f());
		}
		match self {
			Opt::Present(value) => value,
			// `self` was made `Present` just above.
			Opt::Absent => unreachable!(),
		}
	}

	/// Moves the current state out, leaving `Absent` behind.
	#[inline]
	pub fn take(&mut self) -> Opt<T> {
		std::mem::take(self)
	}

	/// Stores `Present(value)` and returns the previous state.
	#[inline]
	pub fn replace(&mut self, value: T) -> Opt<T> {
		std::mem::replace(self, Opt::Present(value))
	}
}

impl<U, E> Opt<Outcome<U, E>> {
	/// `Opt<Outcome<U, E>>` into `Outcome<Opt<U>, E>`.
	///
	/// `Absent` maps to `Ok(Absent)`, `Present(Ok(u))` to `Ok(Present(u))`
	/// and `Present(Err(e))` to `Err(e)`.
	pub fn transpose(self) -> Outcome<Opt<U>, E> {
		match self {
			Opt::Present(Outcome::Ok(value)) => Outcome::Ok(Opt::Present(value)),
			Opt::Present(Outcome::Err(err)) => Outcome::Err(err),
			Opt::Absent => Outcome::Ok(Opt::Absent),
		}
	}
}

impl<U> Opt<Opt<U>> {
	/// Removes one level of nesting.
	pub fn flatten(self) -> Opt<U> {
		match self {
			Opt::Present(inner) => inner,
			Opt::Absent => Opt::Absent,
		}
	}
}

impl<T> From<Option<T>> for Opt<T> {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => Opt::Present(value),
			None => Opt::Absent,
		}
	}
}

impl<T> From<Opt<T>> for Option<T> {
	fn from(value: Opt<T>) -> Self {
		match value {
			Opt::Present(value) => Some(value),
			Opt::Absent => None,
		}
	}
}

impl<T> IntoIterator for Opt<T> {
	type Item = T;
	type IntoIter = std::option::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		Option::<T>::from(self).into_iter()
	}
}
