use crate::opt::Opt;
use crate::outcome::Outcome;

/// Turns a std `Option` into an [`Opt`] in method position, which reads
/// better at the end of a call chain than `Opt::from(...)`.
/// ```rs
/// let first = names.first().into_opt().map(String::len);
/// ```
pub trait IntoOpt<T> {
	fn into_opt(self) -> Opt<T>;
}

impl<T> IntoOpt<T> for Option<T> {
	fn into_opt(self) -> Opt<T> {
		Opt::from(self)
	}
}

/// The [`Outcome`] counterpart of [`IntoOpt`], for std `Result`.
pub trait IntoOutcome<T, E> {
	fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
	fn into_outcome(self) -> Outcome<T, E> {
		Outcome::from(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn into_opt() {
		let names = vec![String::from("ferris")];
		assert_eq!(names.first().into_opt().map(String::len), Opt::Present(6));
		assert_eq!(names.get(3).into_opt(), Opt::Absent);
	}

	#[test]
	fn into_outcome() {
		assert_eq!("12".parse::<u8>().into_outcome().ok_value(), Opt::Present(12));
		assert!("twelve".parse::<u8>().into_outcome().is_err());
	}
}
