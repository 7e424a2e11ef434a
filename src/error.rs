/*!
# Pennant: Errors
*/

use thiserror::Error;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Error Handling Policy.
///
/// This decides what [`FlagSet::parse`](crate::FlagSet::parse) and
/// [`FlagSet::parse_all`](crate::FlagSet::parse_all) do when the arguments
/// contain a mistake.
///
/// Declaration-time mistakes, like duplicate names or bad shorthands, are
/// programming errors and always panic, regardless of policy.
pub enum ErrorHandling {
	#[default]
	/// # Return the error to the caller.
	ContinueOnError,

	/// # Print the error and usage, then exit with status `2`.
	///
	/// This includes help requests.
	ExitOnError,

	/// # Print the error and usage, then panic.
	PanicOnError,
}

impl ErrorHandling {
	#[must_use]
	/// # Exit Code.
	///
	/// Return the process exit code a failed parse ends with under this
	/// policy, if it ends the process at all.
	pub const fn exit_code(self) -> Option<i32> {
		match self {
			Self::ExitOnError => Some(2),
			Self::ContinueOnError | Self::PanicOnError => None,
		}
	}

	#[must_use]
	/// # Silent?
	///
	/// Returns `true` if errors should be handed back without printing
	/// anything.
	pub const fn is_silent(self) -> bool { matches!(self, Self::ContinueOnError) }
}



#[derive(Debug, Clone, Eq, Error, PartialEq)]
/// # Flag Error.
pub enum FlagError {
	/// # Help Requested.
	///
	/// This is not really an error; it means `-h` or `--help` was passed
	/// without being declared, and the usage has already been printed.
	#[error("pennant: help requested")]
	Help,

	/// # Malformed Long Flag.
	#[error("bad flag syntax: {0}")]
	BadSyntax(String),

	/// # Unknown Long Flag.
	#[error("unknown flag: --{0}")]
	UnknownFlag(String),

	/// # Unknown Shorthand.
	#[error("unknown shorthand flag: {short:?} in -{cluster}")]
	UnknownShorthand {
		/// # The offending character.
		short: char,

		/// # The cluster it was found in.
		cluster: String,
	},

	/// # Missing Value.
	#[error("flag needs an argument: {0}")]
	NeedsArgument(String),

	/// # Value Rejected.
	#[error("invalid argument {value:?} for {flag:?} flag: {reason}")]
	InvalidArgument {
		/// # Flag (`-x, --long` or `--long`).
		flag: String,

		/// # The rejected text.
		value: String,

		/// # Why.
		reason: String,
	},

	/// # Undeclared Flag.
	#[error("flag ({0}) does not exist")]
	NotFound(String),

	/// # Deprecation Without Guidance.
	#[error("deprecation message for ({0}) must not be empty")]
	EmptyDeprecation(String),

	/// # Typed Getter Mismatch.
	#[error("trying to get {wanted} value of flag of type {actual}")]
	TypeMismatch {
		/// # Requested type tag.
		wanted: &'static str,

		/// # Actual type tag.
		actual: &'static str,
	},

	/// # Typed Getter Conversion.
	#[error("unable to convert flag ({name}): {reason}")]
	Conversion {
		/// # Flag name.
		name: String,

		/// # Why.
		reason: String,
	},

	/// # Custom.
	///
	/// Setters passed to [`FlagSet::parse_all`](crate::FlagSet::parse_all)
	/// and foreign flag sets can use this for anything else.
	#[error("{0}")]
	Custom(String),
}

impl FlagError {
	#[must_use]
	/// # Is Help?
	pub const fn is_help(&self) -> bool { matches!(self, Self::Help) }
}



#[derive(Debug, Clone, Eq, Error, PartialEq)]
#[error("{0}")]
/// # Value Error.
///
/// This is returned by [`Value::set`](crate::Value::set) and friends when
/// text cannot be converted to the underlying type.
pub struct ValueError(pub String);

impl ValueError {
	/// # New.
	pub fn new<S: Into<String>>(msg: S) -> Self { Self(msg.into()) }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_display() {
		assert_eq!(
			FlagError::UnknownShorthand { short: 'q', cluster: "qv".to_owned() }.to_string(),
			"unknown shorthand flag: 'q' in -qv",
		);
		assert_eq!(
			FlagError::InvalidArgument {
				flag: "-n, --num".to_owned(),
				value: "abc".to_owned(),
				reason: "invalid digit".to_owned(),
			}.to_string(),
			r#"invalid argument "abc" for "-n, --num" flag: invalid digit"#,
		);
		assert_eq!(FlagError::UnknownFlag("nope".to_owned()).to_string(), "unknown flag: --nope");
	}

	#[test]
	fn t_exit_code() {
		assert_eq!(ErrorHandling::ExitOnError.exit_code(), Some(2));
		assert_eq!(ErrorHandling::ContinueOnError.exit_code(), None);
		assert_eq!(ErrorHandling::PanicOnError.exit_code(), None);
		assert!(ErrorHandling::default().is_silent());
		assert!(! ErrorHandling::PanicOnError.is_silent());
	}
}
