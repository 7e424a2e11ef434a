/*!
# Pennant: Durations

Durations are written as a sequence of decimal numbers, each with an
optional fraction and a unit suffix, like `300ms`, `1.5h`, or `2h45m`. Valid
units are `ns`, `us` (or `µs`), `ms`, `s`, `m`, and `h`.
*/

use crate::ValueError;
use std::{
	fmt::Write,
	time::Duration,
};



/// # Units (Suffix, Nanoseconds).
///
/// Longer suffixes must precede their prefixes (`ms` before `m`).
const UNITS: [(&str, u128); 8] = [
	("ns", 1),
	("us", 1_000),
	("µs", 1_000),
	("μs", 1_000),
	("ms", 1_000_000),
	("s", 1_000_000_000),
	("m", 60_000_000_000),
	("h", 3_600_000_000_000),
];

/// # Nanoseconds Per Second.
const NANOS_PER_SEC: u128 = 1_000_000_000;



/// # Parse Duration.
pub(super) fn parse_duration(raw: &str) -> Result<Duration, ValueError> {
	let invalid = || ValueError::new(format!("invalid duration {raw:?}"));

	let mut s = raw.strip_prefix('+').unwrap_or(raw);
	if s == "0" { return Ok(Duration::ZERO); }
	if s.is_empty() || s.starts_with('-') { return Err(invalid()); }

	let mut total = 0_u128;
	while ! s.is_empty() {
		// The whole part.
		let end = s.find(|c: char| ! c.is_ascii_digit()).unwrap_or(s.len());
		let (whole, rest) = s.split_at(end);
		s = rest;

		// The fractional part, if any.
		let mut frac = "";
		if let Some(rest) = s.strip_prefix('.') {
			let end = rest.find(|c: char| ! c.is_ascii_digit()).unwrap_or(rest.len());
			(frac, s) = rest.split_at(end);
		}
		if whole.is_empty() && frac.is_empty() { return Err(invalid()); }

		// The unit.
		let end = s.find(|c: char| c == '.' || c.is_ascii_digit()).unwrap_or(s.len());
		let (unit, rest) = s.split_at(end);
		s = rest;
		let scale = UNITS.iter()
			.find_map(|(k, v)| (*k == unit).then_some(*v))
			.ok_or_else(|| ValueError::new(format!("unknown unit {unit:?} in duration {raw:?}")))?;

		// Add it up!
		let mut v = parse_digits(whole).ok_or_else(invalid)?
			.checked_mul(scale)
			.ok_or_else(invalid)?;
		if ! frac.is_empty() {
			// Anything past nanosecond precision is noise.
			let frac = &frac[..frac.len().min(18)];
			let f = parse_digits(frac).ok_or_else(invalid)?;
			v = v.checked_add(f * scale / 10_u128.pow(frac.len() as u32))
				.ok_or_else(invalid)?;
		}
		total = total.checked_add(v).ok_or_else(invalid)?;
	}

	u64::try_from(total)
		.map(Duration::from_nanos)
		.map_err(|_| invalid())
}

/// # Parse Digits.
///
/// Empty strings count as zero.
fn parse_digits(src: &str) -> Option<u128> {
	src.bytes().try_fold(0_u128, |acc, b|
		acc.checked_mul(10)?.checked_add(u128::from(b - b'0'))
	)
}

/// # Format Duration.
///
/// Durations under a second use the largest fitting sub-second unit;
/// everything else is broken down into hours, minutes, and (fractional)
/// seconds, leading zero units omitted.
pub(super) fn format_duration(d: Duration) -> String {
	let total = d.as_nanos();
	if total == 0 { return "0s".to_owned(); }

	if total < NANOS_PER_SEC {
		let (div, unit) =
			if total < 1_000 { (1, "ns") }
			else if total < 1_000_000 { (1_000, "µs") }
			else { (1_000_000, "ms") };
		let mut out = fmt_frac(total, div);
		out.push_str(unit);
		return out;
	}

	let secs = total / NANOS_PER_SEC;
	let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
	let mut out = String::new();
	if h != 0 { let _res = write!(out, "{h}h"); }
	if h != 0 || m != 0 { let _res = write!(out, "{m}m"); }
	out.push_str(&fmt_frac(s * NANOS_PER_SEC + total % NANOS_PER_SEC, NANOS_PER_SEC));
	out.push('s');
	out
}

/// # Format Fraction.
///
/// Divide `v` by `div` (a power of ten), printing any remainder as decimals
/// with trailing zeroes trimmed.
fn fmt_frac(v: u128, div: u128) -> String {
	let whole = v / div;
	let rem = v % div;
	if rem == 0 { return whole.to_string(); }

	let width = div.ilog10() as usize;
	let frac = format!("{rem:0width$}");
	format!("{whole}.{}", frac.trim_end_matches('0'))
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_parse_duration() {
		for (raw, nanos) in [
			("0", 0),
			("0s", 0),
			("5s", 5_000_000_000),
			("2m", 120_000_000_000),
			("1.5h", 5_400_000_000_000),
			("1h2m3s", 3_723_000_000_000),
			("300ms", 300_000_000),
			("2us", 2_000),
			("2µs", 2_000),
			("7ns", 7),
			(".5s", 500_000_000),
			("1.s", 1_000_000_000),
			("+3s", 3_000_000_000),
		] {
			assert_eq!(
				parse_duration(raw),
				Ok(Duration::from_nanos(nanos)),
				"Bug: {raw} parsed wrong.",
			);
		}

		for bad in [
			"", "5", "s", "-1s", "1d", ".s", "1.2.3s", "1ss",
			// The fraction tips the whole part over the edge.
			"94522879700260684295381835.9h",
		] {
			assert!(parse_duration(bad).is_err(), "Bug: {bad:?} should not parse.");
		}
	}

	#[test]
	fn t_format_duration() {
		for (nanos, expected) in [
			(0, "0s"),
			(7, "7ns"),
			(1_500, "1.5µs"),
			(300_000_000, "300ms"),
			(1_000_000_000, "1s"),
			(5_000_000_000, "5s"),
			(120_000_000_000, "2m0s"),
			(3_600_000_000_000, "1h0m0s"),
			(3_723_500_000_000, "1h2m3.5s"),
		] {
			assert_eq!(format_duration(Duration::from_nanos(nanos)), expected);
		}
	}

	#[test]
	fn t_roundtrip() {
		for raw in ["1h2m3.5s", "300ms", "2m0s", "1.5µs"] {
			let d = parse_duration(raw).expect("Duration failed to parse.");
			assert_eq!(format_duration(d), raw);
		}
	}
}
