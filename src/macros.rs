/// Unwraps an [`Opt`](crate::Opt) or returns `Opt::Absent` from the
/// enclosing function. This is `?` for `Opt`.
/// ```rs
/// fn first_even(values: &[i32]) -> Opt<i32> {
/// 	let first = try_present!(values.first().into_opt());
/// 	Opt::Present(*first).filter(|n| n % 2 == 0)
/// }
/// ```
#[macro_export]
macro_rules! try_present {
	($opt:expr) => {
		match $opt {
			$crate::Opt::Present(value) => value,
			$crate::Opt::Absent => return $crate::Opt::Absent,
		}
	};
}

/// Unwraps an [`Outcome`](crate::Outcome) or returns its error from the
/// enclosing function, converted with `Into` like `?` does.
#[macro_export]
macro_rules! try_outcome {
	($outcome:expr) => {
		match $outcome {
			$crate::Outcome::Ok(value) => value,
			$crate::Outcome::Err(err) => return $crate::Outcome::Err(::core::convert::Into::into(err)),
		}
	};
}

#[cfg(test)]
mod tests {
	use crate::{
		Opt,
		Outcome,
	};

	fn halve(n: i32) -> Opt<i32> {
		(n % 2 == 0).then(|| n / 2).into()
	}

	fn quarter(n: i32) -> Opt<i32> {
		let half = try_present!(halve(n));
		halve(half)
	}

	#[test]
	fn try_present() {
		assert_eq!(quarter(8), Opt::Present(2));
		assert_eq!(quarter(6), Opt::Absent);
		assert_eq!(quarter(3), Opt::Absent);
	}

	#[derive(Debug, PartialEq)]
	struct Wide(u16);

	impl From<u8> for Wide {
		fn from(value: u8) -> Self {
			Wide(value as u16)
		}
	}

	fn checked(n: i32) -> Outcome<i32, u8> {
		if n >= 0 { Outcome::Ok(n) } else { Outcome::Err(1) }
	}

	fn sum(a: i32, b: i32) -> Outcome<i32, Wide> {
		let a = try_outcome!(checked(a));
		let b = try_outcome!(checked(b));
		Outcome::Ok(a + b)
	}

	#[test]
	fn try_outcome_converts_error() {
		assert_eq!(sum(1, 2), Outcome::Ok(3));
		assert_eq!(sum(1, -2), Outcome::Err(Wide(1)));
	}
}
