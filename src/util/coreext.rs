//! Extensions to Rust core stuff. Right now that's just `bool`.

use crate::opt::Opt;

/// Branching helpers for `bool` that produce [`Opt`] values.
///
/// `bool` already has an inherent `then` returning a std `Option`, and
/// inherent methods always win, so the [`Opt`] flavour is `then_present`.
pub trait BoolExtension: 'static {
	fn map_bool<T, F: FnOnce(bool) -> T>(self, f: F) -> T;
	fn then_present<T, F: FnOnce() -> T>(self, f: F) -> Opt<T>;
	fn otherwise<T, F: FnOnce() -> T>(self, f: F) -> Opt<T>;
	fn if_then_else<R, Then: FnOnce() -> R, Else: FnOnce() -> R>(self, then: Then, otherwise: Else) -> R;
}

impl BoolExtension for bool {
	/// Feeds the boolean itself to `f`.
	#[inline]
	fn map_bool<T, F: FnOnce(bool) -> T>(self, f: F) -> T {
		f(self)
	}

	/// Returns `Present(f())` if true.
	#[inline]
	fn then_present<T, F: FnOnce() -> T>(self, f: F) -> Opt<T> {
		if self {
			Opt::Present(f())
		} else {
			Opt::Absent
		}
	}

	/// Returns `Present(f())` if false.
	#[inline]
	fn otherwise<T, F: FnOnce() -> T>(self, f: F) -> Opt<T> {
		(!self).then_present(f)
	}

	/// Like `if-else`, but with closures! Only one of them runs.
	#[inline]
	fn if_then_else<R, Then: FnOnce() -> R, Else: FnOnce() -> R>(self, then: Then, otherwise: Else) -> R {
		if self {
			then()
		} else {
			otherwise()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::cell::Cell;

	#[rstest]
	#[case(true, "yes")]
	#[case(false, "no")]
	fn map_bool(#[case] b: bool, #[case] expected: &str) {
		assert_eq!(b.map_bool(|b| if b { "yes" } else { "no" }), expected);
	}

	#[test]
	fn then_present() {
		assert_eq!(true.then_present(|| 10), Opt::Present(10));
		assert_eq!(false.then_present(|| 10), Opt::Absent);
	}

	#[test]
	fn otherwise() {
		assert_eq!(true.otherwise(|| 10), Opt::Absent);
		assert_eq!(false.otherwise(|| 10), Opt::Present(10));
	}

	#[test]
	fn closures_only_run_when_chosen() {
		let calls = Cell::new(0);
		let bump = || calls.set(calls.get() + 1);
		assert_eq!(false.then_present(bump), Opt::Absent);
		assert_eq!(true.otherwise(bump), Opt::Absent);
		assert_eq!(calls.get(), 0);
	}

	#[rstest]
	#[case(true, 1)]
	#[case(false, 2)]
	fn if_then_else_runs_one_branch(#[case] b: bool, #[case] expected: i32) {
		let then_calls = Cell::new(0);
		let else_calls = Cell::new(0);
		let result = b.if_then_else(
			|| {
				then_calls.set(then_calls.get() + 1);
				1
			},
			|| {
				else_calls.set(else_calls.get() + 1);
				2
			},
		);
		assert_eq!(result, expected);
		assert_eq!(then_calls.get() + else_calls.get(), 1);
	}
}
