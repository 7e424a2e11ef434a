/*!
# Pennant: CSV

A minimal single-record CSV reader/writer for list values, so elements may
contain commas if quoted: `--names='"Doe, Jane",Bob'`.
*/

use crate::ValueError;



/// # Read CSV Record.
///
/// Split a single comma-separated record into its fields. An empty string
/// yields an empty list.
pub(crate) fn read_csv(raw: &str) -> Result<Vec<String>, ValueError> {
	let mut out = Vec::new();
	if raw.is_empty() { return Ok(out); }

	let mut chars = raw.chars().peekable();
	loop {
		let mut field = String::new();

		// Quoted field.
		if chars.peek() == Some(&'"') {
			chars.next();
			loop {
				match chars.next() {
					Some('"') =>
						if chars.peek() == Some(&'"') {
							chars.next();
							field.push('"');
						}
						else { break; },
					Some(c) => { field.push(c); },
					None => return Err(ValueError::new(format!("unterminated quote in {raw:?}"))),
				}
			}

			// A closing quote must be followed by a separator or the end.
			match chars.next() {
				Some(',') => { out.push(field); },
				None => {
					out.push(field);
					return Ok(out);
				},
				Some(_) => return Err(ValueError::new(format!("extraneous \" in field of {raw:?}"))),
			}
		}
		// Bare field.
		else {
			loop {
				match chars.next() {
					Some(',') => {
						out.push(field);
						break;
					},
					Some('"') => return Err(ValueError::new(format!("bare \" in non-quoted field of {raw:?}"))),
					Some(c) => { field.push(c); },
					None => {
						out.push(field);
						return Ok(out);
					},
				}
			}
		}
	}
}

/// # Write CSV Record.
///
/// Join fields with commas, quoting any that would otherwise be ambiguous.
pub(crate) fn write_csv<S: AsRef<str>>(fields: &[S]) -> String {
	let mut out = String::new();
	for (idx, field) in fields.iter().enumerate() {
		if idx != 0 { out.push(','); }
		let field = field.as_ref();
		if needs_quotes(field) {
			out.push('"');
			out.push_str(&field.replace('"', "\"\""));
			out.push('"');
		}
		else { out.push_str(field); }
	}
	out
}

/// # Needs Quotes?
fn needs_quotes(field: &str) -> bool {
	if field.is_empty() { return false; }
	field == r"\." ||
	field.contains([',', '"', '\r', '\n']) ||
	field.starts_with(char::is_whitespace)
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_read_csv() {
		for (raw, expected) in [
			("", Vec::new()),
			("one", vec!["one"]),
			("one,two,three", vec!["one", "two", "three"]),
			("a,,b", vec!["a", "", "b"]),
			("trailing,", vec!["trailing", ""]),
			(r#""Doe, Jane",Bob"#, vec!["Doe, Jane", "Bob"]),
			(r#""say ""hi""""#, vec![r#"say "hi""#]),
			(" spaced ", vec![" spaced "]),
		] {
			assert_eq!(
				read_csv(raw).expect("CSV failed to parse."),
				expected,
				"Bug: {raw:?} split wrong.",
			);
		}

		for bad in [r#""open"#, r#"a"b"#, r#""x"y"#] {
			assert!(read_csv(bad).is_err(), "Bug: {bad:?} should not parse.");
		}
	}

	#[test]
	fn t_write_csv() {
		assert_eq!(write_csv::<&str>(&[]), "");
		assert_eq!(write_csv(&["a", "b"]), "a,b");
		assert_eq!(write_csv(&["Doe, Jane", "Bob"]), r#""Doe, Jane",Bob"#);
		assert_eq!(write_csv(&[r#"say "hi""#]), r#""say ""hi""""#);
		assert_eq!(write_csv(&["", "x"]), ",x");
	}
}
