/*!
# Pennant: Flag Set
*/

mod declare;
mod parse;

use crate::{
	ErrorHandling,
	Flag,
	FlagError,
	ForeignFlagSet,
	Value,
};
use std::{
	borrow::Cow,
	collections::BTreeMap,
	fmt,
	io::Write,
};



/// # Normalization Callback.
type NormalizeFn = Box<dyn Fn(&str) -> String>;

/// # Usage Callback.
type UsageFn = Box<dyn FnMut(&mut FlagSet)>;



/// # Flag Set.
///
/// This is the registry: it owns every declared [`Flag`] for one parsing
/// context, scans raw arguments into them, and keeps whatever is left over
/// as positional arguments.
///
/// Flags are declared up front with [`FlagSet::var`] or one of the typed
/// helpers like [`FlagSet::bool`], which hand back a [`Binding`](crate::Binding)
/// to read the result from after [`FlagSet::parse`].
///
/// Declaration mistakes (duplicate names, duplicate or multi-character
/// shorthands) are programming errors and will panic.
///
/// ## Examples
///
/// ```
/// use pennant::{ErrorHandling, FlagSet};
///
/// let mut flags = FlagSet::new("demo", ErrorHandling::ContinueOnError);
/// let all = flags.bool("all", "a", false, "Show everything.");
/// let long = flags.bool("long", "l", false, "Use a long listing format.");
///
/// flags.parse(["-la", "--", "-not-a-flag"]).unwrap();
/// assert!(all.get());
/// assert!(long.get());
/// assert_eq!(flags.args(), ["-not-a-flag"]);
/// assert_eq!(flags.args_len_at_dash(), Some(0));
/// ```
pub struct FlagSet {
	/// # Name.
	name: String,

	/// # Flags (Declaration Order).
	flags: Vec<Flag>,

	/// # Declared (By Name).
	formal: BTreeMap<String, usize>,

	/// # Set (By Name).
	actual: BTreeMap<String, usize>,

	/// # Set (Discovery Order).
	ordered_actual: Vec<usize>,

	/// # Shorthands.
	shorts: BTreeMap<char, usize>,

	/// # Positional Arguments.
	args: Vec<String>,

	/// # Positional Count at `--`.
	args_len_at_dash: Option<usize>,

	/// # Interspersed Flags?
	interspersed: bool,

	/// # Sort Flags for Display?
	sort_flags: bool,

	/// # Name Normalization.
	normalize: Option<NormalizeFn>,

	/// # Error Policy.
	error_handling: ErrorHandling,

	/// # Tolerate Unknown Flags?
	unknown_flags: bool,

	/// # Diagnostic Output.
	output: Box<dyn Write>,

	/// # Usage Callback.
	usage: Option<UsageFn>,

	/// # Parsed?
	parsed: bool,

	/// # Foreign Sets.
	foreign: Vec<Box<dyn ForeignFlagSet>>,
}

impl fmt::Debug for FlagSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FlagSet")
			.field("name", &self.name)
			.field("flags", &self.flags)
			.field("args", &self.args)
			.field("args_len_at_dash", &self.args_len_at_dash)
			.field("interspersed", &self.interspersed)
			.field("sort_flags", &self.sort_flags)
			.field("error_handling", &self.error_handling)
			.field("unknown_flags", &self.unknown_flags)
			.field("parsed", &self.parsed)
			.finish_non_exhaustive()
	}
}

impl Default for FlagSet {
	#[inline]
	fn default() -> Self { Self::new("", ErrorHandling::default()) }
}

impl FlagSet {
	#[must_use]
	/// # New.
	///
	/// Create an empty flag set. Diagnostics go to `STDERR` until
	/// [`FlagSet::set_output`] says otherwise.
	pub fn new(name: &str, error_handling: ErrorHandling) -> Self {
		Self {
			name: name.to_owned(),
			flags: Vec::new(),
			formal: BTreeMap::new(),
			actual: BTreeMap::new(),
			ordered_actual: Vec::new(),
			shorts: BTreeMap::new(),
			args: Vec::new(),
			args_len_at_dash: None,
			interspersed: true,
			sort_flags: true,
			normalize: None,
			error_handling,
			unknown_flags: false,
			output: Box::new(std::io::stderr()),
			usage: None,
			parsed: false,
			foreign: Vec::new(),
		}
	}
}

/// ## Configuration.
impl FlagSet {
	/// # Set Error Handling.
	pub fn set_error_handling(&mut self, error_handling: ErrorHandling) {
		self.error_handling = error_handling;
	}

	/// # Set Interspersed.
	///
	/// When `false`, the first positional argument ends flag processing;
	/// it and everything after it are kept as-is. Default `true`.
	pub fn set_interspersed(&mut self, interspersed: bool) {
		self.interspersed = interspersed;
	}

	/// # Set Sort Flags.
	///
	/// Visit (and print) flags alphabetically rather than in declaration
	/// order. Default `true`.
	pub fn set_sort_flags(&mut self, sort: bool) { self.sort_flags = sort; }

	/// # Set Unknown Flags.
	///
	/// When `true`, undeclared flags are skipped instead of triggering an
	/// error. An unknown flag without an inline `=value` takes the next
	/// argument with it, unless that argument looks like a flag.
	pub fn set_unknown_flags(&mut self, tolerate: bool) {
		self.unknown_flags = tolerate;
	}

	/// # Set Output.
	///
	/// Change where deprecation warnings, errors, and usage are written.
	pub fn set_output<W: Write + 'static>(&mut self, output: W) {
		self.output = Box::new(output);
	}

	/// # Set Usage.
	///
	/// Replace the usage callback run on help requests and (non-silent)
	/// errors. The default prints `Usage of <name>:` followed by
	/// [`FlagSet::flag_usages`].
	pub fn set_usage<F>(&mut self, cb: F)
	where F: FnMut(&mut Self) + 'static {
		self.usage = Some(Box::new(cb));
	}

	/// # Set Normalization.
	///
	/// Install a function to rewrite flag names before they are stored or
	/// looked up, e.g. to treat `--foo_bar` and `--foo-bar` the same.
	///
	/// Flags already declared are re-keyed under their normalized names.
	pub fn set_normalize_func<F>(&mut self, cb: F)
	where F: Fn(&str) -> String + 'static {
		self.normalize = Some(Box::new(cb));

		for (idx, flag) in self.flags.iter_mut().enumerate() {
			let Some(normalize) = self.normalize.as_ref() else { break; };
			let new = normalize(&flag.name);
			if new == flag.name { continue; }

			let old = std::mem::replace(&mut flag.name, new.clone());
			self.formal.remove(&old);
			self.formal.insert(new.clone(), idx);
			if self.actual.remove(&old).is_some() {
				self.actual.insert(new, idx);
			}
		}
	}

	#[must_use]
	/// # With Error Handling.
	pub fn with_error_handling(mut self, error_handling: ErrorHandling) -> Self {
		self.set_error_handling(error_handling);
		self
	}

	#[must_use]
	/// # With Interspersed.
	pub fn with_interspersed(mut self, interspersed: bool) -> Self {
		self.interspersed = interspersed;
		self
	}

	#[must_use]
	/// # With Sort Flags.
	pub fn with_sort_flags(mut self, sort: bool) -> Self {
		self.sort_flags = sort;
		self
	}

	#[must_use]
	/// # With Unknown Flags.
	pub fn with_unknown_flags(mut self, tolerate: bool) -> Self {
		self.unknown_flags = tolerate;
		self
	}

	#[must_use]
	/// # With Output.
	pub fn with_output<W: Write + 'static>(mut self, output: W) -> Self {
		self.set_output(output);
		self
	}

	#[must_use]
	/// # With Normalization.
	pub fn with_normalize_func<F>(mut self, cb: F) -> Self
	where F: Fn(&str) -> String + 'static {
		self.set_normalize_func(cb);
		self
	}
}

/// ## Getters.
impl FlagSet {
	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Parsed?
	///
	/// Returns `true` once [`FlagSet::parse`] or [`FlagSet::parse_all`] has
	/// been called.
	pub const fn parsed(&self) -> bool { self.parsed }

	#[must_use]
	/// # Error Handling.
	pub const fn error_handling(&self) -> ErrorHandling { self.error_handling }

	#[must_use]
	/// # Output.
	pub fn output(&mut self) -> &mut dyn Write { self.output.as_mut() }

	#[must_use]
	/// # Positional Arguments.
	///
	/// Everything left over after parsing.
	pub fn args(&self) -> &[String] { &self.args }

	#[must_use]
	/// # Positional Argument.
	pub fn arg(&self, idx: usize) -> Option<&str> {
		self.args.get(idx).map(String::as_str)
	}

	#[must_use]
	/// # Number of Positional Arguments.
	pub fn n_arg(&self) -> usize { self.args.len() }

	#[must_use]
	/// # Number of Flags Set.
	pub fn n_flag(&self) -> usize { self.actual.len() }

	#[must_use]
	/// # Positional Count at `--`.
	///
	/// If a `--` terminator was found, return the number of positional
	/// arguments that preceded it.
	pub const fn args_len_at_dash(&self) -> Option<usize> { self.args_len_at_dash }

	#[must_use]
	/// # Has Flags?
	pub fn has_flags(&self) -> bool { ! self.flags.is_empty() }

	#[must_use]
	/// # Has Visible Flags?
	pub fn has_available_flags(&self) -> bool {
		self.flags.iter().any(|f| ! f.hidden())
	}

	#[must_use]
	/// # Changed?
	///
	/// Returns `true` if the named flag was explicitly set.
	pub fn changed(&self, name: &str) -> bool {
		self.lookup(name).is_some_and(Flag::changed)
	}
}

/// ## Declaration and Lookup.
impl FlagSet {
	/// # Add Flag.
	///
	/// Register a flag, normalizing its name, and return a reference to it
	/// for further tweaking.
	///
	/// ## Panics
	///
	/// This will panic if the name is empty or already taken, or if the
	/// shorthand is more than one character or already taken.
	pub fn add_flag(&mut self, mut flag: Flag) -> &mut Flag {
		let name = self.normalize_name(&flag.name).into_owned();
		if name.is_empty() {
			self.fatal(&format!("{} flag has no name", self.name));
		}
		if self.formal.contains_key(&name) {
			self.fatal(&format!("{} flag redefined: {}", self.name, flag.name));
		}

		let mut chars = flag.shorthand.chars();
		let short = chars.next();
		if chars.next().is_some() {
			self.fatal(&format!("{:?} shorthand is more than one ASCII character", flag.shorthand));
		}
		if let Some(c) = short {
			if let Some(&used) = self.shorts.get(&c) {
				self.fatal(&format!(
					"unable to redefine {c:?} shorthand in {:?} flagset: it's already used for {:?} flag",
					self.name,
					self.flags[used].name,
				));
			}
		}

		let idx = self.flags.len();
		flag.name.clone_from(&name);
		self.formal.insert(name, idx);
		if let Some(c) = short { self.shorts.insert(c, idx); }
		self.flags.push(flag);
		&mut self.flags[idx]
	}

	/// # Declare a Custom Value.
	///
	/// Wrap `value` in a [`Flag`] and add it. Pass an empty `short` if there
	/// isn't one.
	///
	/// ## Panics
	///
	/// See [`FlagSet::add_flag`].
	pub fn var<V>(&mut self, value: V, name: &str, short: &str, usage: &str) -> &mut Flag
	where V: Value + 'static {
		self.add_flag(Flag::new(value, name, short, usage))
	}

	/// # Merge.
	///
	/// Absorb the flags from another set. Names already declared here are
	/// skipped.
	///
	/// ## Panics
	///
	/// This will panic if an absorbed flag's shorthand is already taken.
	pub fn add_flag_set(&mut self, other: Self) {
		for flag in other.flags {
			if self.lookup(&flag.name).is_none() { self.add_flag(flag); }
		}
	}

	#[must_use]
	/// # Lookup.
	pub fn lookup(&self, name: &str) -> Option<&Flag> {
		self.find(name).map(|idx| &self.flags[idx])
	}

	#[must_use]
	/// # Lookup (Mutable).
	pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Flag> {
		self.find(name).map(|idx| &mut self.flags[idx])
	}

	#[must_use]
	/// # Shorthand Lookup.
	///
	/// Find a flag by its shorthand. An empty string finds nothing.
	///
	/// ## Panics
	///
	/// This will panic if `short` is more than one character.
	pub fn short_lookup(&self, short: &str) -> Option<&Flag> {
		let mut chars = short.chars();
		let c = chars.next()?;
		assert!(
			chars.next().is_none(),
			"can not look up shorthand which is more than one ASCII character: {short:?}",
		);
		self.shorts.get(&c).map(|&idx| &self.flags[idx])
	}

	#[must_use]
	/// # Shorthand Lookup (Mutable).
	pub fn short_lookup_mut(&mut self, short: char) -> Option<&mut Flag> {
		self.shorts.get(&short).map(|&idx| &mut self.flags[idx])
	}

	/// # Normalize Name.
	fn normalize_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
		match &self.normalize {
			Some(cb) => Cow::Owned(cb(name)),
			None => Cow::Borrowed(name),
		}
	}

	/// # Find Index.
	fn find(&self, name: &str) -> Option<usize> {
		self.formal.get(self.normalize_name(name).as_ref()).copied()
	}

	/// # Configuration Fault.
	///
	/// Write the message to the output, then panic.
	fn fatal(&mut self, msg: &str) -> ! {
		let _res = writeln!(self.output, "{msg}");
		panic!("{msg}");
	}
}

/// ## Mutation.
impl FlagSet {
	/// # Set.
	///
	/// Parse `value` into the named flag and mark it as changed, exactly as
	/// if it had been passed on the command line.
	///
	/// ## Errors
	///
	/// Returns an error if the flag does not exist or the value is
	/// rejected.
	pub fn set(&mut self, name: &str, value: &str) -> Result<(), FlagError> {
		let idx = self.find(name).ok_or_else(|| FlagError::NotFound(name.to_owned()))?;
		self.set_idx(idx, value)
	}

	/// # Set (By Index).
	fn set_idx(&mut self, idx: usize, value: &str) -> Result<(), FlagError> {
		let flag = &mut self.flags[idx];
		if let Err(e) = flag.set_value(value) {
			return Err(FlagError::InvalidArgument {
				flag: flag.display_name(),
				value: value.to_owned(),
				reason: e.0,
			});
		}

		if ! flag.changed {
			flag.changed = true;
			self.actual.insert(flag.name.clone(), idx);
			self.ordered_actual.push(idx);
		}
		tracing::debug!(flag = %flag.name, value, "flag set");

		if let Some(msg) = flag.deprecated() {
			let _res = writeln!(self.output, "Flag --{} has been deprecated, {msg}", flag.name);
		}

		Ok(())
	}

	/// # Mark Hidden.
	///
	/// Hidden flags work normally but are left out of the usage.
	///
	/// ## Errors
	///
	/// Returns an error if the flag does not exist.
	pub fn mark_hidden(&mut self, name: &str) -> Result<(), FlagError> {
		self.must_lookup_mut(name)?.hidden = true;
		Ok(())
	}

	/// # Mark Deprecated.
	///
	/// Deprecated flags work normally, but are hidden from the usage and
	/// print `msg` as a warning whenever they are used.
	///
	/// ## Errors
	///
	/// Returns an error if the flag does not exist or `msg` is empty.
	pub fn mark_deprecated(&mut self, name: &str, msg: &str) -> Result<(), FlagError> {
		let flag = self.must_lookup_mut(name)?;
		if msg.is_empty() { return Err(FlagError::EmptyDeprecation(name.to_owned())); }
		msg.clone_into(&mut flag.deprecated);
		flag.hidden = true;
		Ok(())
	}

	/// # Mark Shorthand Deprecated.
	///
	/// The flag stays visible, but its shorthand is dropped from the usage
	/// and prints `msg` as a warning whenever it is used.
	///
	/// ## Errors
	///
	/// Returns an error if the flag does not exist or `msg` is empty.
	pub fn mark_shorthand_deprecated(&mut self, name: &str, msg: &str)
	-> Result<(), FlagError> {
		let flag = self.must_lookup_mut(name)?;
		if msg.is_empty() { return Err(FlagError::EmptyDeprecation(name.to_owned())); }
		msg.clone_into(&mut flag.shorthand_deprecated);
		Ok(())
	}

	/// # Set Annotation.
	///
	/// Attach arbitrary metadata to a flag, replacing any previous values
	/// under the same key. The parser ignores these entirely.
	///
	/// ## Errors
	///
	/// Returns an error if the flag does not exist.
	pub fn set_annotation(&mut self, name: &str, key: &str, values: Vec<String>)
	-> Result<(), FlagError> {
		self.must_lookup_mut(name)?.annotations.insert(key.to_owned(), values);
		Ok(())
	}

	/// # Lookup or Fail.
	fn must_lookup_mut(&mut self, name: &str) -> Result<&mut Flag, FlagError> {
		self.lookup_mut(name).ok_or_else(|| FlagError::NotFound(name.to_owned()))
	}
}

/// ## Visiting.
impl FlagSet {
	/// # Visit All.
	///
	/// Run a callback for every declared flag, alphabetically or in
	/// declaration order depending on [`FlagSet::set_sort_flags`].
	pub fn visit_all<F>(&self, mut cb: F)
	where F: FnMut(&Flag) {
		if self.sort_flags {
			for &idx in self.formal.values() { cb(&self.flags[idx]); }
		}
		else {
			for flag in &self.flags { cb(flag); }
		}
	}

	/// # Visit All (Mutable).
	///
	/// Same as [`FlagSet::visit_all`], but with mutable access, e.g. to
	/// reach a value's [`ListValue`](crate::ListValue) capability.
	pub fn visit_all_mut<F>(&mut self, mut cb: F)
	where F: FnMut(&mut Flag) {
		let order: Vec<usize> =
			if self.sort_flags { self.formal.values().copied().collect() }
			else { (0..self.flags.len()).collect() };
		for idx in order { cb(&mut self.flags[idx]); }
	}

	/// # Visit.
	///
	/// Run a callback for every flag that has been set, alphabetically or
	/// in the order they were found.
	pub fn visit<F>(&self, mut cb: F)
	where F: FnMut(&Flag) {
		if self.sort_flags {
			for &idx in self.actual.values() { cb(&self.flags[idx]); }
		}
		else {
			for &idx in &self.ordered_actual { cb(&self.flags[idx]); }
		}
	}
}

/// ## Foreign Sets.
impl FlagSet {
	/// # Add Foreign Flag Set.
	///
	/// Absorb the declarations of a [`ForeignFlagSet`] now (skipping names
	/// already taken), and let it run its own parse at the start of every
	/// subsequent [`FlagSet::parse`].
	///
	/// ## Panics
	///
	/// This will panic if an absorbed flag's shorthand is already taken.
	pub fn add_foreign_flag_set<S>(&mut self, mut foreign: S)
	where S: ForeignFlagSet + 'static {
		for flag in foreign.take_flags() {
			if self.lookup(&flag.name).is_none() { self.add_flag(flag); }
		}
		self.foreign.push(Box::new(foreign));
	}
}

/// ## Usage Callback.
impl FlagSet {
	/// # Run Usage.
	fn usage(&mut self) {
		if let Some(mut cb) = self.usage.take() {
			cb(self);
			if self.usage.is_none() { self.usage = Some(cb); }
		}
		else {
			let out =
				if self.name.is_empty() { "Usage:\n".to_owned() }
				else { format!("Usage of {}:\n", self.name) };
			let _res = self.output.write_all(out.as_bytes());
			self.print_defaults();
		}
	}
}



#[must_use]
/// # Command Line Flag Set.
///
/// Return a new [`FlagSet`] named after the running program, using
/// [`ErrorHandling::ExitOnError`]. Pair it with [`FlagSet::parse_env`].
///
/// This is just a convenience constructor; there is no global state.
pub fn command_line() -> FlagSet {
	let name = std::env::args_os()
		.next()
		.map(|s| s.to_string_lossy().into_owned())
		.unwrap_or_default();
	FlagSet::new(&name, ErrorHandling::ExitOnError)
}



#[cfg(test)]
/// # Shared Buffer.
///
/// An output sink tests can read back from.
#[derive(Debug, Clone, Default)]
struct SharedBuf(std::rc::Rc<std::cell::RefCell<Vec<u8>>>);

#[cfg(test)]
impl SharedBuf {
	/// # Take Contents.
	fn take(&self) -> String {
		String::from_utf8(std::mem::take(&mut *self.0.borrow_mut()))
			.expect("Output is not UTF-8.")
	}
}

#[cfg(test)]
impl Write for SharedBuf {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		self.0.borrow_mut().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		Binding,
		ScalarValue,
	};

	/// # Flag Set With Captured Output.
	fn captured(name: &str) -> (FlagSet, SharedBuf) {
		let buf = SharedBuf::default();
		let set = FlagSet::new(name, ErrorHandling::ContinueOnError)
			.with_output(buf.clone());
		(set, buf)
	}

	#[test]
	fn t_declare_lookup() {
		let mut fs = FlagSet::new("t", ErrorHandling::ContinueOnError);
		assert!(! fs.has_flags());
		fs.bool("verbose", "v", false, "");
		fs.int("num", "", 5, "");

		assert!(fs.has_flags());
		assert!(fs.has_available_flags());
		assert_eq!(fs.lookup("verbose").map(Flag::name), Some("verbose"));
		assert!(fs.lookup("nope").is_none());
		assert_eq!(fs.short_lookup("v").map(Flag::name), Some("verbose"));
		assert!(fs.short_lookup("n").is_none());
		assert!(fs.short_lookup("").is_none());
		assert_eq!(fs.lookup("num").map(Flag::default_value), Some("5"));
	}

	#[test]
	#[should_panic(expected = "more than one ASCII character")]
	fn t_short_lookup_long() {
		let fs = FlagSet::new("t", ErrorHandling::ContinueOnError);
		let _res = fs.short_lookup("ab");
	}

	#[test]
	#[should_panic(expected = "flag redefined: dupe")]
	fn t_redefine() {
		let (mut fs, _) = captured("t");
		fs.bool("dupe", "", false, "");
		fs.int("dupe", "", 0, "");
	}

	#[test]
	#[should_panic(expected = "unable to redefine 'd' shorthand")]
	fn t_redefine_short() {
		let (mut fs, _) = captured("t");
		fs.bool("one", "d", false, "");
		fs.bool("two", "d", false, "");
	}

	#[test]
	#[should_panic(expected = "shorthand is more than one ASCII character")]
	fn t_long_short() {
		let (mut fs, _) = captured("t");
		fs.bool("one", "ab", false, "");
	}

	#[test]
	#[should_panic(expected = "t flag has no name")]
	fn t_empty_name() {
		let (mut fs, _) = captured("t");
		fs.bool("", "e", false, "");
	}

	#[test]
	fn t_fatal_output() {
		let (mut fs, buf) = captured("prog");
		fs.bool("dupe", "", false, "");
		let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
			fs.bool("dupe", "", false, "");
		}));
		assert!(res.is_err(), "Redefinition should panic.");
		assert_eq!(buf.take(), "prog flag redefined: dupe\n");
	}

	#[test]
	fn t_set() {
		let (mut fs, buf) = captured("t");
		let num = fs.int("num", "n", 0, "");
		let old = fs.bool("old", "", false, "");
		assert!(fs.mark_deprecated("old", "please use --new instead").is_ok());

		assert_eq!(fs.set("nope", "1"), Err(FlagError::NotFound("nope".to_owned())));
		assert!(matches!(
			fs.set("num", "abc"),
			Err(FlagError::InvalidArgument { ref flag, .. }) if flag == "-n, --num"
		));
		assert!(! fs.changed("num"), "Failed sets should not count.");

		assert!(fs.set("num", "3").is_ok());
		assert!(fs.set("num", "4").is_ok());
		assert_eq!(num.get(), 4);
		assert!(fs.changed("num"));
		assert_eq!(fs.n_flag(), 1);
		assert_eq!(buf.take(), "");

		assert!(fs.set("old", "true").is_ok());
		assert!(old.get());
		assert_eq!(buf.take(), "Flag --old has been deprecated, please use --new instead\n");
	}

	#[test]
	fn t_marks() {
		let mut fs = FlagSet::new("t", ErrorHandling::ContinueOnError);
		fs.bool("a", "a", false, "");

		assert_eq!(fs.mark_hidden("b"), Err(FlagError::NotFound("b".to_owned())));
		assert_eq!(fs.mark_deprecated("b", "x"), Err(FlagError::NotFound("b".to_owned())));
		assert_eq!(fs.mark_deprecated("a", ""), Err(FlagError::EmptyDeprecation("a".to_owned())));
		assert_eq!(
			fs.mark_shorthand_deprecated("a", ""),
			Err(FlagError::EmptyDeprecation("a".to_owned())),
		);
		assert_eq!(fs.set_annotation("b", "k", Vec::new()), Err(FlagError::NotFound("b".to_owned())));

		assert!(fs.set_annotation("a", "bash", vec!["files".to_owned()]).is_ok());
		let flag = fs.lookup("a").expect("Missing flag.");
		assert_eq!(flag.annotation("bash"), Some(["files".to_owned()].as_slice()));
		assert!(! flag.hidden());

		assert!(fs.mark_shorthand_deprecated("a", "use --a").is_ok());
		assert!(! fs.lookup("a").expect("Missing flag.").hidden());
		assert!(fs.mark_hidden("a").is_ok());
		assert!(! fs.has_available_flags());
	}

	#[test]
	fn t_visit_order() {
		let mut fs = FlagSet::new("t", ErrorHandling::ContinueOnError);
		for name in ["c", "a", "b"] { fs.bool(name, "", false, ""); }
		assert!(fs.set("b", "true").is_ok());
		assert!(fs.set("c", "true").is_ok());

		let mut seen = Vec::new();
		fs.visit_all(|f| seen.push(f.name().to_owned()));
		assert_eq!(seen, ["a", "b", "c"]);

		seen.clear();
		fs.visit(|f| seen.push(f.name().to_owned()));
		assert_eq!(seen, ["b", "c"]);

		fs.set_sort_flags(false);
		seen.clear();
		fs.visit_all(|f| seen.push(f.name().to_owned()));
		assert_eq!(seen, ["c", "a", "b"]);

		seen.clear();
		fs.visit(|f| seen.push(f.name().to_owned()));
		assert_eq!(seen, ["b", "c"]);

		let mut n = 0;
		fs.visit_all_mut(|f| {
			assert!(f.value_mut().as_list().is_none(), "Bools aren't lists.");
			n += 1;
		});
		assert_eq!(n, 3);
	}

	#[test]
	fn t_normalize() {
		let mut fs = FlagSet::new("t", ErrorHandling::ContinueOnError);
		fs.bool("valid_flag", "", false, "");
		assert!(fs.set("valid_flag", "true").is_ok());

		fs.set_normalize_func(|name| name.replace(['-', '_'], "."));
		assert_eq!(fs.lookup("valid-flag").map(Flag::name), Some("valid.flag"));
		assert!(fs.changed("valid_flag"));

		// New declarations are normalized too.
		fs.bool("other-flag", "", false, "");
		assert_eq!(fs.lookup("other_flag").map(Flag::name), Some("other.flag"));

		// Normalizing again changes nothing.
		fs.set_normalize_func(|name| name.replace(['-', '_'], "."));
		let mut seen = Vec::new();
		fs.visit_all(|f| seen.push(f.name().to_owned()));
		assert_eq!(seen, ["other.flag", "valid.flag"]);
	}

	#[test]
	fn t_merge() {
		let mut a = FlagSet::new("a", ErrorHandling::ContinueOnError);
		let first = a.string("shared", "", "a".to_owned(), "");
		let mut b = FlagSet::new("b", ErrorHandling::ContinueOnError);
		let second = b.string("shared", "", "b".to_owned(), "");
		let extra = b.int("extra", "x", 1, "");

		a.add_flag_set(b);
		assert_eq!(a.lookup("shared").map(Flag::default_value), Some("a"));
		assert!(a.set("shared", "z").is_ok());
		assert!(a.set("extra", "9").is_ok());
		assert_eq!(first.get(), "z");
		assert_eq!(second.get(), "b");
		assert_eq!(extra.get(), 9);
		assert!(a.short_lookup("x").is_some());
	}

	#[test]
	fn t_manual_flag() {
		let mut fs = FlagSet::new("t", ErrorHandling::ContinueOnError);
		let b = Binding::new(1.5_f32);
		let flag = Flag::new(ScalarValue::new(b.clone()), "ratio", "r", "A ratio.");
		fs.add_flag(flag).set_no_value_default("2.5");

		assert!(fs.parse(["-r"]).is_ok());
		assert_eq!(b.get(), 2.5);
		assert!(fs.parsed());
	}

	#[test]
	fn t_usage_callback() {
		let (mut fs, buf) = captured("prog");
		fs.bool("quiet", "q", false, "Be quiet.");

		fs.usage();
		assert_eq!(
			buf.take(),
			"Usage of prog:\n  -q, --quiet   Be quiet.\n",
		);

		fs.set_usage(|set| {
			let _res = set.output().write_all(b"custom\n");
		});
		fs.usage();
		fs.usage();
		assert_eq!(buf.take(), "custom\ncustom\n");
	}
}
