/*!
# Pennant: Number Parsing

Boolean and integer parsing with the conventional CLI leniencies: `t`/`F`
style booleans and `0x`/`0o`/`0b`-prefixed integers.
*/

use crate::ValueError;



/// # Parse Bool.
pub(super) fn parse_bool(raw: &str) -> Result<bool, ValueError> {
	match raw {
		"1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
		"0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
		_ => Err(ValueError::new(format!("invalid syntax for bool: {raw:?}"))),
	}
}

/// # Parse Signed.
///
/// Parse an integer with an optional sign and base prefix, leaving range
/// checks to the caller.
pub(super) fn parse_signed(raw: &str) -> Result<i128, ValueError> {
	let (neg, body) = match raw.as_bytes() {
		[b'-', ..] => (true, &raw[1..]),
		[b'+', ..] => (false, &raw[1..]),
		_ => (false, raw),
	};
	let v = i128::try_from(parse_magnitude(raw, body)?)
		.map_err(|_| out_of_range(raw))?;
	Ok(if neg { -v } else { v })
}

/// # Parse Unsigned.
pub(super) fn parse_unsigned(raw: &str) -> Result<u128, ValueError> {
	let body = raw.strip_prefix('+').unwrap_or(raw);
	parse_magnitude(raw, body)
}

/// # Out of Range Error.
pub(super) fn out_of_range(raw: &str) -> ValueError {
	ValueError::new(format!("value out of range: {raw:?}"))
}

/// # Parse Magnitude.
///
/// Parse the unsigned body of an integer, honoring base prefixes. Digit
/// separators (`_`) are only allowed when a prefix is present.
fn parse_magnitude(raw: &str, body: &str) -> Result<u128, ValueError> {
	let bytes = body.as_bytes();
	let (radix, digits, prefixed) = match bytes {
		[b'0', b'x' | b'X', ..] => (16, &body[2..], true),
		[b'0', b'o' | b'O', ..] => (8, &body[2..], true),
		[b'0', b'b' | b'B', ..] => (2, &body[2..], true),
		[b'0', _, ..] => (8, &body[1..], true),
		_ => (10, body, false),
	};

	let invalid = || ValueError::new(format!("invalid syntax for integer: {raw:?}"));
	if digits.is_empty() || (! prefixed && digits.contains('_')) {
		return Err(invalid());
	}

	let mut out = 0_u128;
	let mut any = false;
	for c in digits.chars() {
		if c == '_' { continue; }
		let d = c.to_digit(radix).ok_or_else(invalid)?;
		out = out.checked_mul(u128::from(radix))
			.and_then(|n| n.checked_add(u128::from(d)))
			.ok_or_else(|| out_of_range(raw))?;
		any = true;
	}

	if any { Ok(out) }
	else { Err(invalid()) }
}
