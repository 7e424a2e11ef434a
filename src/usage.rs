/*!
# Pennant: Usage
*/

use crate::{
	Flag,
	FlagSet,
};
use std::{
	borrow::Cow,
	fmt::Write as _,
};



/// # Column Marker.
///
/// Swapped for padding once the widest flag column is known.
const MARKER: char = '\0';



/// # Unquote Usage.
///
/// Extract a variable name for the flag's value from its usage text,
/// returning the name and the usage with the quotes removed.
///
/// The first back-quoted word, if any, is the name. (`"Dial `timeout`."` is
/// `timeout` and `"Dial timeout."`.) Otherwise the name is derived from the
/// value's type tag.
///
/// ## Examples
///
/// ```
/// use pennant::{Binding, Flag, ScalarValue, unquote_usage};
///
/// let flag = Flag::new(
///     ScalarValue::new(Binding::new(String::new())),
///     "dir",
///     "",
///     "Load files from `path`.",
/// );
/// let (name, usage) = unquote_usage(&flag);
/// assert_eq!(name, "path");
/// assert_eq!(usage, "Load files from path.");
/// ```
#[must_use]
pub fn unquote_usage(flag: &Flag) -> (Cow<'_, str>, Cow<'_, str>) {
	let usage = flag.usage();
	if let Some((before, rest)) = usage.split_once('`') {
		if let Some((name, after)) = rest.split_once('`') {
			return (Cow::Borrowed(name), Cow::Owned(format!("{before}{name}{after}")));
		}
	}

	let name = match flag.value().type_name() {
		"bool" => "",
		"float64" => "float",
		"int64" => "int",
		"uint64" => "uint",
		"stringSlice" => "strings",
		"intSlice" => "ints",
		"uintSlice" => "uints",
		"boolSlice" => "bools",
		t => t,
	};
	(Cow::Borrowed(name), Cow::Borrowed(usage))
}



/// ## Usage.
impl FlagSet {
	#[must_use]
	/// # Flag Usages.
	///
	/// Return the usage table for all visible flags, without wrapping.
	pub fn flag_usages(&self) -> String { self.flag_usages_wrapped(0) }

	#[must_use]
	/// # Flag Usages (Wrapped).
	///
	/// Return the usage table for all visible flags, one per line, with the
	/// descriptions aligned and wrapped to `cols` columns. Pass `0` to
	/// disable wrapping.
	///
	/// Hidden and deprecated flags are skipped.
	pub fn flag_usages_wrapped(&self, cols: usize) -> String {
		let mut lines = Vec::new();
		let mut max_len = 0;

		self.visit_all(|flag| {
			if flag.hidden() { return; }
			let line = usage_line(flag);
			if let Some(idx) = line.find(MARKER) { max_len = max_len.max(idx + 1); }
			lines.push(line);
		});

		let mut out = String::new();
		for line in lines {
			let Some((head, tail)) = line.split_once(MARKER) else { continue; };
			let _res = writeln!(
				&mut out,
				"{head} {:pad$} {}",
				"",
				wrap(max_len + 2, cols, tail),
				pad = max_len - head.len(),
			);
		}
		out
	}

	/// # Print Defaults.
	///
	/// Write the usage table to the set's output.
	pub fn print_defaults(&mut self) {
		let usages = self.flag_usages();
		let _res = self.output().write_all(usages.as_bytes());
	}
}

/// # Usage Line.
///
/// Build the unpadded line for a single flag, with a [`MARKER`] separating
/// the flag column from the description.
fn usage_line(flag: &Flag) -> String {
	let mut line = match flag.shorthand() {
		Some(c) if flag.shorthand_deprecated().is_none() => format!("  -{c}, --{}", flag.name()),
		_ => format!("      --{}", flag.name()),
	};

	let (var_name, usage) = unquote_usage(flag);
	if ! var_name.is_empty() {
		line.push(' ');
		line.push_str(&var_name);
	}

	let no_value = flag.no_value_default();
	if ! no_value.is_empty() {
		match flag.value().type_name() {
			"string" => { let _res = write!(&mut line, "[={no_value:?}]"); },
			"bool" if no_value == "true" => {},
			"count" if no_value == "+1" => {},
			_ => { let _res = write!(&mut line, "[={no_value}]"); },
		}
	}

	line.push(MARKER);
	line.push_str(&usage);

	if ! flag.default_is_zero() {
		if flag.value().type_name() == "string" {
			let _res = write!(&mut line, " (default {:?})", flag.default_value());
		}
		else {
			let _res = write!(&mut line, " (default {})", flag.default_value());
		}
	}

	if let Some(msg) = flag.deprecated() {
		let _res = write!(&mut line, " (DEPRECATED: {msg})");
	}

	line
}

/// # Wrap.
///
/// Wrap `s` to fit within `w` columns, given that the first `i` columns are
/// already in use. Continuation lines are indented by `i`.
///
/// If there isn't room for at least 24 columns of text, the description is
/// moved to its own line, indented by 16. If there still isn't room, the
/// text is returned as-is (with embedded newlines indented).
fn wrap(mut i: usize, w: usize, s: &str) -> String {
	if w == 0 { return s.replace('\n', &format!("\n{}", " ".repeat(i))); }

	let mut out = String::new();
	let mut width = w.saturating_sub(i);
	if width < 24 {
		i = 16;
		width = w.saturating_sub(i);
		out.push('\n');
		out.push_str(&" ".repeat(i));
	}
	if width < 24 { return s.replace('\n', &out); }

	/// # Slop.
	///
	/// Lines may run this far over to avoid orphaning a short word.
	const SLOP: usize = 5;

	let indent = format!("\n{}", " ".repeat(i));
	let width = width - SLOP;
	let (line, mut rest) = wrap_n(width, SLOP, s);
	out.push_str(&line.replace('\n', &indent));
	while ! rest.is_empty() {
		let (line, r) = wrap_n(width, SLOP, rest);
		rest = r;
		out.push_str(&indent);
		out.push_str(&line.replace('\n', &indent));
	}

	out
}

/// # Wrap Once.
///
/// Split `s` at the last whitespace before `i` (or an earlier newline),
/// unless it fits within `i + slop`.
fn wrap_n(i: usize, slop: usize, s: &str) -> (&str, &str) {
	if i + slop > s.len() { return (s, ""); }

	let head = &s[..floor_char_boundary(s, i)];
	let Some(w) = head.rfind([' ', '\t', '\n']).filter(|&w| w != 0) else {
		return (s, "");
	};

	if let Some(nl) = head.rfind('\n') {
		if nl > 0 && nl < w { return (&s[..nl], &s[nl + 1..]); }
	}

	(&s[..w], &s[w + 1..])
}

/// # Floor Char Boundary.
///
/// Round `idx` down to the nearest UTF-8 character boundary.
fn floor_char_boundary(s: &str, mut idx: usize) -> usize {
	if idx >= s.len() { return s.len(); }
	while ! s.is_char_boundary(idx) { idx -= 1; }
	idx
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		Binding,
		ErrorHandling,
		ScalarValue,
		Value,
		ValueError,
	};
	use std::{
		net::IpAddr,
		time::Duration,
	};

	/// # Custom Value.
	struct Custom(i64);

	impl Value for Custom {
		fn render(&self) -> String { self.0.to_string() }
		fn set(&mut self, raw: &str) -> Result<(), ValueError> {
			self.0 = raw.parse().map_err(|_| ValueError::new("nope"))?;
			Ok(())
		}
		fn type_name(&self) -> &'static str { "custom" }
	}

	/// # Expected Output.
	const DEFAULT_OUTPUT: &str = "      --A                         for bootstrapping, allow 'any' type
      --Alongflagname             disable bounds checking
  -C, --CCC                       a boolean defaulting to true (default true)
      --D path                    set relative path for local imports
  -E, --EEE num[=1234]            a num with no-value default (default 4321)
      --F number                  a non-zero number (default 2.7)
      --G float                   a float that defaults to zero
      --IP ip                     IP address with a default (default 127.0.0.1)
      --Ints ints                 int slice with zero default
      --N int                     a non-zero int (default 27)
      --ND1 string[=\"bar\"]        a string with no-value default (default \"foo\")
      --ND2 num[=4321]            a num with no-value default (default 1234)
      --StringArray stringArray   string array with zero default
      --StringSlice strings       string slice with zero default
      --Z int                     an int that defaults to zero
      --custom custom             custom Value implementation
      --customP custom            a custom with default (default 10)
      --maxT timeout              set timeout for dial
  -v, --verbose count             verbosity
";

	#[test]
	fn t_flag_usages() {
		let mut fs = FlagSet::new("print defaults test", ErrorHandling::ContinueOnError);
		fs.bool("A", "", false, "for bootstrapping, allow 'any' type");
		fs.bool("Alongflagname", "", false, "disable bounds checking");
		fs.bool("CCC", "C", true, "a boolean defaulting to true");
		fs.string("D", "", String::new(), "set relative `path` for local imports");
		fs.float64("F", "", 2.7, "a non-zero `number`");
		fs.float64("G", "", 0.0, "a float that defaults to zero");
		fs.int("N", "", 27, "a non-zero int");
		fs.slice::<isize>("Ints", "", Vec::new(), "int slice with zero default");
		fs.scalar("IP", "", IpAddr::from([127, 0, 0, 1]), "IP address with a default");
		fs.int("Z", "", 0, "an int that defaults to zero");
		fs.duration("maxT", "", Duration::ZERO, "set `timeout` for dial");
		fs.string("ND1", "", "foo".to_owned(), "a string with no-value default");
		fs.lookup_mut("ND1").expect("ND1 is missing.").set_no_value_default("bar");
		fs.int("ND2", "", 1234, "a `num` with no-value default");
		fs.lookup_mut("ND2").expect("ND2 is missing.").set_no_value_default("4321");
		fs.int("EEE", "E", 4321, "a `num` with no-value default");
		fs.short_lookup_mut('E').expect("E is missing.").set_no_value_default("1234");
		fs.slice::<String>("StringSlice", "", Vec::new(), "string slice with zero default");
		fs.string_array("StringArray", "", Vec::new(), "string array with zero default");
		fs.count("verbose", "v", "verbosity");
		fs.var(Custom(0), "custom", "", "custom Value implementation");
		fs.var(Custom(10), "customP", "", "a custom with default");

		assert_eq!(fs.flag_usages(), DEFAULT_OUTPUT);
	}

	#[test]
	fn t_hidden_and_deprecated() {
		let mut fs = FlagSet::new("bob", ErrorHandling::ContinueOnError);
		fs.bool("badflag", "", true, "always true");
		fs.bool("secretFlag", "", true, "shhh");
		fs.bool("noshorthandflag", "n", true, "always true");
		fs.bool("visible", "", false, "see me");
		assert!(fs.mark_deprecated("badflag", "use --good-flag instead").is_ok());
		assert!(fs.mark_hidden("secretFlag").is_ok());
		assert!(fs.mark_shorthand_deprecated("noshorthandflag", "use --noshorthandflag instead").is_ok());

		let out = fs.flag_usages();
		assert!(! out.contains("badflag"), "Deprecated flags should be hidden.");
		assert!(! out.contains("secretFlag"), "Hidden flags should be hidden.");
		assert!(! out.contains("-n,"), "Deprecated shorthands should be hidden.");
		assert!(out.contains("--noshorthandflag"));
		assert!(out.contains("--visible"));

		// Unhide the deprecated one and its message should show.
		fs.lookup_mut("badflag").expect("badflag is missing.").hidden = false;
		let out = fs.flag_usages();
		assert!(out.contains("badflag"));
		assert!(out.contains("(DEPRECATED: use --good-flag instead)"));
	}

	#[test]
	fn t_unquote_usage() {
		let flag = Flag::new(ScalarValue::new(Binding::new(0_u64)), "n", "", "How `many` things");
		assert_eq!(unquote_usage(&flag), (Cow::Borrowed("many"), Cow::Borrowed("How many things")));

		let flag = Flag::new(ScalarValue::new(Binding::new(0_u64)), "n", "", "An `unclosed quote");
		assert_eq!(unquote_usage(&flag), (Cow::Borrowed("uint"), Cow::Borrowed("An `unclosed quote")));

		let flag = Flag::new(ScalarValue::new(Binding::new(false)), "b", "", "");
		assert_eq!(unquote_usage(&flag).0, "");
	}

	#[test]
	fn t_wrap() {
		// No wrapping.
		assert_eq!(wrap(4, 0, "one\ntwo"), "one\n    two");

		// Plenty of room.
		let text = "the quick brown fox jumps over the lazy dog again and again";
		let out = wrap(10, 50, text);
		for line in out.lines() {
			assert!(line.len() <= 50, "Line too long: {line:?}");
		}
		assert_eq!(
			out.split_whitespace().collect::<Vec<_>>(),
			text.split_whitespace().collect::<Vec<_>>(),
		);

		// Not enough room for the description; it moves down.
		assert!(wrap(40, 50, "short").starts_with("\n                "));

		// Unbreakable text is left alone.
		assert_eq!(wrap_n(5, 5, "abcdefghijklmnop"), ("abcdefghijklmnop", ""));
	}

	#[test]
	fn t_floor_char_boundary() {
		let s = "aö";
		assert_eq!(floor_char_boundary(s, 2), 1);
		assert_eq!(floor_char_boundary(s, 1), 1);
		assert_eq!(floor_char_boundary(s, 9), 3);
	}
}
