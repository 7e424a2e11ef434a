/*!
# Pennant: Parsing
*/

use crate::{
	ErrorHandling,
	Flag,
	FlagError,
	FlagSet,
};
use std::io::Write;



/// ## Parsing.
impl FlagSet {
	/// # Parse.
	///
	/// Scan the arguments (minus the program name) left to right, setting
	/// declared flags as they are found and keeping everything else as
	/// positional arguments.
	///
	/// Any foreign flag sets get to run their own parse first.
	///
	/// Positional arguments from a previous parse are discarded.
	///
	/// ## Errors
	///
	/// Under [`ErrorHandling::ContinueOnError`], the first problem found is
	/// returned. Under [`ErrorHandling::ExitOnError`] the process exits
	/// instead, and under [`ErrorHandling::PanicOnError`] it panics.
	///
	/// If `-h` or `--help` is passed but not declared, the usage is printed
	/// and [`FlagError::Help`] is handled like any other error.
	pub fn parse<I, S>(&mut self, args: I) -> Result<(), FlagError>
	where I: IntoIterator<Item=S>, S: Into<String> {
		for foreign in &mut self.foreign {
			if let Err(e) = foreign.parse_now() {
				tracing::warn!(error = %e, "foreign flag set failed to parse");
			}
		}

		let args = self.begin(args);
		let res = self.parse_args(&args, |set, idx, value| set.set_idx(idx, value));
		self.finish(res)
	}

	/// # Parse (Custom Setter).
	///
	/// This works just like [`FlagSet::parse`], except each matched flag
	/// and its value are passed to `cb` _instead of_ being set. Flags are
	/// not marked changed unless `cb` does something about it.
	///
	/// Foreign flag sets are not consulted.
	///
	/// ## Errors
	///
	/// Same as [`FlagSet::parse`]. Errors returned by `cb` end the scan and
	/// are handled according to the error policy.
	pub fn parse_all<I, S, F>(&mut self, args: I, mut cb: F) -> Result<(), FlagError>
	where
		I: IntoIterator<Item=S>,
		S: Into<String>,
		F: FnMut(&Flag, &str) -> Result<(), FlagError>,
	{
		let args = self.begin(args);
		let res = self.parse_args(&args, |set, idx, value| cb(&set.flags[idx], value));
		self.finish(res)
	}

	/// # Parse From the Environment.
	///
	/// Parse [`std::env::args_os`], minus the program name. Arguments that
	/// are not valid UTF-8 are converted lossily.
	///
	/// ## Errors
	///
	/// Same as [`FlagSet::parse`].
	pub fn parse_env(&mut self) -> Result<(), FlagError> {
		self.parse(std::env::args_os().skip(1).map(|a| a.to_string_lossy().into_owned()))
	}
}

/// ## Internal.
impl FlagSet {
	/// # Begin.
	///
	/// Reset the per-parse state and collect the arguments.
	fn begin<I, S>(&mut self, args: I) -> Vec<String>
	where I: IntoIterator<Item=S>, S: Into<String> {
		let args: Vec<String> = args.into_iter().map(Into::into).collect();
		self.parsed = true;
		self.args = Vec::with_capacity(args.len());
		self.args_len_at_dash = None;
		args
	}

	/// # Finish.
	///
	/// Apply the error policy to the scan result.
	fn finish(&self, res: Result<(), FlagError>) -> Result<(), FlagError> {
		let Err(e) = res else { return Ok(()); };
		if let Some(code) = self.error_handling.exit_code() {
			println!("{e}");
			std::process::exit(code);
		}
		if matches!(self.error_handling, ErrorHandling::PanicOnError) {
			panic!("{e}");
		}
		Err(e)
	}

	/// # Fail.
	///
	/// Print the error and usage (unless the policy is silent), then hand the
	/// error back.
	fn failf(&mut self, err: FlagError) -> FlagError {
		if ! self.error_handling.is_silent() {
			let _res = writeln!(self.output, "{err}");
			self.usage();
		}
		err
	}

	/// # Help.
	fn help(&mut self) -> FlagError {
		self.usage();
		FlagError::Help
	}

	/// # Dispatch.
	fn dispatch<F>(&mut self, idx: usize, value: &str, set: &mut F)
	-> Result<(), FlagError>
	where F: FnMut(&mut Self, usize, &str) -> Result<(), FlagError> {
		set(self, idx, value).map_err(|e| self.failf(e))
	}

	/// # Parse Arguments.
	fn parse_args<F>(&mut self, args: &[String], mut set: F) -> Result<(), FlagError>
	where F: FnMut(&mut Self, usize, &str) -> Result<(), FlagError> {
		let mut rest = args;
		while let [raw, tail @ ..] = rest {
			rest = tail;
			tracing::trace!(token = %raw, "scanning");

			// Positional.
			if raw.len() < 2 || ! raw.starts_with('-') {
				self.args.push(raw.clone());
				if ! self.interspersed {
					self.args.extend_from_slice(rest);
					return Ok(());
				}
			}
			// Terminator.
			else if raw == "--" {
				self.args_len_at_dash = Some(self.args.len());
				self.args.extend_from_slice(rest);
				return Ok(());
			}
			else if raw.starts_with("--") {
				rest = self.parse_long_arg(raw, rest, &mut set)?;
			}
			else {
				rest = self.parse_short_arg(&raw[1..], rest, &mut set)?;
			}
		}

		Ok(())
	}

	/// # Parse Long Flag.
	///
	/// Handle `--name`, `--name=value`, or `--name value`, returning the
	/// arguments left over.
	fn parse_long_arg<'a, F>(&mut self, raw: &str, rest: &'a [String], set: &mut F)
	-> Result<&'a [String], FlagError>
	where F: FnMut(&mut Self, usize, &str) -> Result<(), FlagError> {
		let body = &raw[2..];
		if body.is_empty() || body.starts_with(['-', '=']) {
			return Err(self.failf(FlagError::BadSyntax(raw.to_owned())));
		}

		let (name, inline) = match body.split_once('=') {
			Some((name, value)) => (name, Some(value)),
			None => (body, None),
		};

		let Some(idx) = self.find(name) else {
			if name == "help" { return Err(self.help()); }
			if self.unknown_flags {
				tracing::debug!(flag = name, "skipping unknown flag");
				return Ok(if inline.is_some() { rest } else { strip_unknown_flag_value(rest) });
			}
			return Err(self.failf(FlagError::UnknownFlag(name.to_owned())));
		};

		let no_value = self.flags[idx].no_value_default();
		let (value, rest) = match (inline, rest) {
			// --flag=value
			(Some(v), _) => (v.to_owned(), rest),
			// --flag (value is optional)
			_ if ! no_value.is_empty() => (no_value.to_owned(), rest),
			// --flag value
			(None, [next, tail @ ..]) => (next.clone(), tail),
			// --flag (value is required)
			(None, []) => return Err(self.failf(FlagError::NeedsArgument(raw.to_owned()))),
		};

		self.dispatch(idx, &value, set)?;
		Ok(rest)
	}

	/// # Parse Short Cluster.
	///
	/// Peel shorthands off the front of the cluster (sans dash) until it is
	/// used up, returning the arguments left over.
	fn parse_short_arg<'a, F>(&mut self, cluster: &str, rest: &'a [String], set: &mut F)
	-> Result<&'a [String], FlagError>
	where F: FnMut(&mut Self, usize, &str) -> Result<(), FlagError> {
		let mut shorts = cluster;
		let mut rest = rest;
		while ! shorts.is_empty() {
			(shorts, rest) = self.parse_single_short_arg(shorts, rest, set)?;
		}
		Ok(rest)
	}

	/// # Parse One Shorthand.
	///
	/// Handle the first character of `shorts`, returning whatever remains of
	/// the cluster and the arguments.
	fn parse_single_short_arg<'s, 'a, F>(
		&mut self,
		shorts: &'s str,
		rest: &'a [String],
		set: &mut F,
	) -> Result<(&'s str, &'a [String]), FlagError>
	where F: FnMut(&mut Self, usize, &str) -> Result<(), FlagError> {
		// Test harness flags are none of our business.
		if shorts.starts_with("test.") { return Ok(("", rest)); }

		let mut chars = shorts.chars();
		let Some(c) = chars.next() else { return Ok(("", rest)); };
		let remainder = chars.as_str();

		let Some(&idx) = self.shorts.get(&c) else {
			if c == 'h' { return Err(self.help()); }
			if self.unknown_flags {
				tracing::debug!(short = %c, "skipping unknown shorthand");
				if remainder.starts_with('=') { return Ok(("", rest)); }
				return Ok(("", strip_unknown_flag_value(rest)));
			}
			return Err(self.failf(FlagError::UnknownShorthand {
				short: c,
				cluster: shorts.to_owned(),
			}));
		};

		let no_value = self.flags[idx].no_value_default();
		let (value, shorts_out, rest_out) =
			// -f=value
			if let Some(v) = remainder.strip_prefix('=') { (v.to_owned(), "", rest) }
			// -f (value is optional)
			else if ! no_value.is_empty() { (no_value.to_owned(), remainder, rest) }
			// -fvalue
			else if ! remainder.is_empty() { (remainder.to_owned(), "", rest) }
			// -f value
			else if let [next, tail @ ..] = rest { (next.clone(), "", tail) }
			// -f (value is required)
			else {
				return Err(self.failf(FlagError::NeedsArgument(format!("{c:?} in -{shorts}"))));
			};

		if let Some(msg) = self.flags[idx].shorthand_deprecated() {
			let _res = writeln!(self.output, "Flag shorthand -{c} has been deprecated, {msg}");
		}

		self.dispatch(idx, &value, set)?;
		Ok((shorts_out, rest_out))
	}
}

/// # Strip Unknown Flag Value.
///
/// Drop the argument following an unknown flag, unless it looks like a flag
/// itself.
fn strip_unknown_flag_value(rest: &[String]) -> &[String] {
	match rest {
		[next, tail @ ..] if ! next.starts_with('-') => tail,
		_ => rest,
	}
}
