/*!
# Pennant: Scalar Values
*/

use crate::{
	Binding,
	Value,
	ValueError,
};
use std::{
	net::IpAddr,
	time::Duration,
};
use super::{
	duration::{
		format_duration,
		parse_duration,
	},
	num::{
		out_of_range,
		parse_bool,
		parse_signed,
		parse_unsigned,
	},
};



/// # Scalar Type.
///
/// This is implemented for the primitive types [`ScalarValue`] and
/// [`SliceValue`](crate::SliceValue) know how to bind.
pub trait Scalar: Clone + Sized {
	/// # Type Tag.
	const TYPE: &'static str;

	/// # Type Tag (Slice).
	const SLICE_TYPE: &'static str;

	/// # No-Value Default.
	///
	/// If set, a flag of this type may appear without a value, in which
	/// case this text is used instead.
	const NO_VALUE: Option<&'static str> = None;

	/// # Quoted Lists?
	///
	/// If `true`, slices split their input as CSV, allowing quoted
	/// elements; otherwise they simply split on commas.
	const CSV: bool = false;

	/// # Parse.
	///
	/// ## Errors
	///
	/// Return an error if the text is not a valid `Self`.
	fn parse(raw: &str) -> Result<Self, ValueError>;

	/// # Render.
	fn render(&self) -> String;
}

impl Scalar for bool {
	const TYPE: &'static str = "bool";
	const SLICE_TYPE: &'static str = "boolSlice";
	const NO_VALUE: Option<&'static str> = Some("true");
	const CSV: bool = true;

	fn parse(raw: &str) -> Result<Self, ValueError> { parse_bool(raw) }
	fn render(&self) -> String { self.to_string() }
}

impl Scalar for String {
	const TYPE: &'static str = "string";
	const SLICE_TYPE: &'static str = "stringSlice";
	const CSV: bool = true;

	fn parse(raw: &str) -> Result<Self, ValueError> { Ok(raw.to_owned()) }
	fn render(&self) -> String { self.clone() }
}

impl Scalar for Duration {
	const TYPE: &'static str = "duration";
	const SLICE_TYPE: &'static str = "durationSlice";

	fn parse(raw: &str) -> Result<Self, ValueError> { parse_duration(raw) }
	fn render(&self) -> String { format_duration(*self) }
}

impl Scalar for IpAddr {
	const TYPE: &'static str = "ip";
	const SLICE_TYPE: &'static str = "ipSlice";
	const CSV: bool = true;

	fn parse(raw: &str) -> Result<Self, ValueError> {
		raw.trim().parse()
			.map_err(|_| ValueError::new(format!("failed to parse IP: {raw:?}")))
	}
	fn render(&self) -> String { self.to_string() }
}

/// # Helper: Integer Scalars.
macro_rules! scalar_int {
	($parse:ident, $($ty:ty, $tag:literal, $slice:literal),+ $(,)?) => ($(
		impl Scalar for $ty {
			const TYPE: &'static str = $tag;
			const SLICE_TYPE: &'static str = $slice;

			fn parse(raw: &str) -> Result<Self, ValueError> {
				Self::try_from($parse(raw)?).map_err(|_| out_of_range(raw))
			}
			fn render(&self) -> String { self.to_string() }
		}
	)+);
}

scalar_int!(
	parse_signed,
	isize, "int", "intSlice",
	i8, "int8", "int8Slice",
	i16, "int16", "int16Slice",
	i32, "int32", "int32Slice",
	i64, "int64", "int64Slice",
);

scalar_int!(
	parse_unsigned,
	usize, "uint", "uintSlice",
	u8, "uint8", "uint8Slice",
	u16, "uint16", "uint16Slice",
	u32, "uint32", "uint32Slice",
	u64, "uint64", "uint64Slice",
);

/// # Helper: Float Scalars.
macro_rules! scalar_float {
	($($ty:ty, $tag:literal, $slice:literal),+ $(,)?) => ($(
		impl Scalar for $ty {
			const TYPE: &'static str = $tag;
			const SLICE_TYPE: &'static str = $slice;

			fn parse(raw: &str) -> Result<Self, ValueError> {
				raw.parse().map_err(|_| ValueError::new(format!("invalid syntax for {}: {raw:?}", $tag)))
			}
			fn render(&self) -> String { self.to_string() }
		}
	)+);
}

scalar_float!(
	f32, "float32", "float32Slice",
	f64, "float64", "float64Slice",
);



#[derive(Debug, Clone)]
/// # Scalar Value.
///
/// A [`Value`] writing a single [`Scalar`] through a [`Binding`].
pub struct ScalarValue<T>(Binding<T>);

impl<T: Scalar> Value for ScalarValue<T> {
	fn render(&self) -> String { self.0.with(T::render) }

	fn set(&mut self, raw: &str) -> Result<(), ValueError> {
		let v = T::parse(raw)?;
		self.0.replace(v);
		Ok(())
	}

	fn type_name(&self) -> &'static str { T::TYPE }
}

impl<T> ScalarValue<T> {
	#[must_use]
	/// # New.
	pub const fn new(binding: Binding<T>) -> Self { Self(binding) }

	#[must_use]
	/// # Binding.
	pub fn binding(&self) -> Binding<T> { self.0.clone() }
}



#[derive(Debug, Clone)]
/// # Count Value.
///
/// An integer that increments each time the flag appears without a value
/// (`-vvv` is three). Explicit values (`--verbose=5`) replace the count.
pub struct CountValue(Binding<isize>);

impl Value for CountValue {
	fn render(&self) -> String { self.0.get().to_string() }

	fn set(&mut self, raw: &str) -> Result<(), ValueError> {
		if raw == "+1" {
			self.0.with_mut(|v| *v = v.saturating_add(1));
		}
		else {
			self.0.replace(<isize as Scalar>::parse(raw)?);
		}
		Ok(())
	}

	fn type_name(&self) -> &'static str { "count" }
}

impl CountValue {
	/// # No-Value Default.
	pub(crate) const NO_VALUE: &'static str = "+1";

	#[must_use]
	/// # New.
	pub const fn new(binding: Binding<isize>) -> Self { Self(binding) }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_scalar_ints() {
		assert_eq!(<i8 as Scalar>::parse("-8"), Ok(-8));
		assert!(<i8 as Scalar>::parse("200").is_err(), "i8 should overflow.");
		assert_eq!(<i64 as Scalar>::parse("0x23"), Ok(35));
		assert_eq!(<u8 as Scalar>::parse("255"), Ok(255));
		assert!(<u8 as Scalar>::parse("-1").is_err(), "u8 can't be negative.");
		assert_eq!(<isize as Scalar>::TYPE, "int");
		assert_eq!(<u64 as Scalar>::SLICE_TYPE, "uint64Slice");
	}

	#[test]
	fn t_scalar_misc() {
		assert_eq!(<f64 as Scalar>::parse("2718e28"), Ok(2718e28));
		assert!(<f32 as Scalar>::parse("x").is_err());
		assert_eq!(
			<IpAddr as Scalar>::parse(" 10.11.12.13 "),
			Ok(IpAddr::from([10, 11, 12, 13])),
		);
		assert!(<IpAddr as Scalar>::parse("10.11.12").is_err());
		assert_eq!(<bool as Scalar>::NO_VALUE, Some("true"));
		assert_eq!(<String as Scalar>::NO_VALUE, None);
	}

	#[test]
	fn t_scalar_value() {
		let b = Binding::new(0_u16);
		let mut v = ScalarValue::new(b.clone());
		assert_eq!(v.render(), "0");
		assert_eq!(v.type_name(), "uint16");

		assert!(v.set("16").is_ok());
		assert_eq!(b.get(), 16);

		// Failures leave the value alone.
		assert!(v.set("nope").is_err());
		assert_eq!(b.get(), 16);
		assert!(v.as_list().is_none());
	}

	#[test]
	fn t_count() {
		let b = Binding::new(0_isize);
		let mut v = CountValue::new(b.clone());
		for _ in 0..3 { assert!(v.set(CountValue::NO_VALUE).is_ok()); }
		assert_eq!(b.get(), 3);
		assert!(v.set("10").is_ok());
		assert_eq!(v.render(), "10");
		assert_eq!(v.type_name(), "count");
	}
}
