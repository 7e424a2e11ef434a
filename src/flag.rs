/*!
# Pennant: Flag
*/

use crate::Value;
use std::{
	collections::BTreeMap,
	fmt,
};



/// # Flag.
///
/// A single declared option: its name, optional shorthand, usage, and the
/// [`Value`] it writes into.
///
/// Flags are usually created indirectly via the declaration helpers on
/// [`FlagSet`](crate::FlagSet), but can be built manually and added with
/// [`FlagSet::add_flag`](crate::FlagSet::add_flag).
pub struct Flag {
	/// # Name.
	///
	/// This is normalized when the flag is added to a set.
	pub(crate) name: String,

	/// # Shorthand.
	///
	/// Either empty or a single character. (This is validated when the flag
	/// is added to a set.)
	pub(crate) shorthand: String,

	/// # Usage.
	usage: String,

	/// # Value.
	value: Box<dyn Value>,

	/// # Default (Rendered).
	default: String,

	/// # Changed?
	pub(crate) changed: bool,

	/// # No-Value Default.
	no_value: String,

	/// # Deprecation Message.
	pub(crate) deprecated: String,

	/// # Shorthand Deprecation Message.
	pub(crate) shorthand_deprecated: String,

	/// # Hidden?
	pub(crate) hidden: bool,

	/// # Annotations.
	pub(crate) annotations: BTreeMap<String, Vec<String>>,
}

impl fmt::Debug for Flag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Flag")
			.field("name", &self.name)
			.field("shorthand", &self.shorthand)
			.field("usage", &self.usage)
			.field("type", &self.value.type_name())
			.field("value", &self.value.render())
			.field("default", &self.default)
			.field("changed", &self.changed)
			.field("no_value", &self.no_value)
			.field("deprecated", &self.deprecated)
			.field("shorthand_deprecated", &self.shorthand_deprecated)
			.field("hidden", &self.hidden)
			.field("annotations", &self.annotations)
			.finish()
	}
}

impl Flag {
	#[must_use]
	/// # New.
	///
	/// Create a new flag. The value's current rendering is captured as the
	/// default and will never change.
	///
	/// Pass an empty `shorthand` if there isn't one.
	pub fn new<V>(value: V, name: &str, shorthand: &str, usage: &str) -> Self
	where V: Value + 'static {
		Self::new_boxed(Box::new(value), name, shorthand, usage)
	}

	#[must_use]
	/// # New (Boxed).
	pub fn new_boxed(value: Box<dyn Value>, name: &str, shorthand: &str, usage: &str)
	-> Self {
		Self {
			name: name.to_owned(),
			shorthand: shorthand.to_owned(),
			usage: usage.to_owned(),
			default: value.render(),
			value,
			changed: false,
			no_value: String::new(),
			deprecated: String::new(),
			shorthand_deprecated: String::new(),
			hidden: false,
			annotations: BTreeMap::new(),
		}
	}

	#[must_use]
	/// # With No-Value Default.
	///
	/// Builder-style version of [`Flag::set_no_value_default`].
	pub fn with_no_value_default(mut self, value: &str) -> Self {
		value.clone_into(&mut self.no_value);
		self
	}
}

/// ## Getters.
impl Flag {
	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Shorthand.
	pub fn shorthand(&self) -> Option<char> { self.shorthand.chars().next() }

	#[must_use]
	/// # Usage.
	pub fn usage(&self) -> &str { &self.usage }

	#[must_use]
	/// # Value.
	pub fn value(&self) -> &dyn Value { self.value.as_ref() }

	#[must_use]
	/// # Value (Mutable).
	///
	/// Use this to reach a list value's [`ListValue`](crate::ListValue)
	/// capability, for example.
	pub fn value_mut(&mut self) -> &mut dyn Value { self.value.as_mut() }

	#[must_use]
	/// # Default.
	///
	/// The value as it was rendered when the flag was created.
	pub fn default_value(&self) -> &str { &self.default }

	#[must_use]
	/// # Changed?
	///
	/// Returns `true` if the flag was explicitly set.
	pub const fn changed(&self) -> bool { self.changed }

	#[must_use]
	/// # No-Value Default.
	///
	/// The text substituted when the flag appears without a value. Empty if
	/// the flag always requires one.
	pub fn no_value_default(&self) -> &str { &self.no_value }

	#[must_use]
	/// # Deprecation Message.
	pub fn deprecated(&self) -> Option<&str> {
		Some(self.deprecated.as_str()).filter(|s| ! s.is_empty())
	}

	#[must_use]
	/// # Shorthand Deprecation Message.
	pub fn shorthand_deprecated(&self) -> Option<&str> {
		Some(self.shorthand_deprecated.as_str()).filter(|s| ! s.is_empty())
	}

	#[must_use]
	/// # Hidden?
	pub const fn hidden(&self) -> bool { self.hidden }

	#[must_use]
	/// # Annotation.
	pub fn annotation(&self, key: &str) -> Option<&[String]> {
		self.annotations.get(key).map(Vec::as_slice)
	}

	#[must_use]
	/// # Annotations.
	pub const fn annotations(&self) -> &BTreeMap<String, Vec<String>> { &self.annotations }
}

/// ## Setters.
impl Flag {
	/// # Set No-Value Default.
	///
	/// When set, the flag may appear without a value (`--flag` or `-f`),
	/// in which case this text is used instead. Such flags never consume
	/// the following argument; a value must be attached with `=`.
	pub fn set_no_value_default(&mut self, value: &str) {
		value.clone_into(&mut self.no_value);
	}

	/// # Set Value.
	///
	/// Parse `raw` into the flag's value directly, bypassing the registry.
	/// This does _not_ mark the flag as changed.
	///
	/// ## Errors
	///
	/// Bubbles up any conversion errors from the value.
	pub(crate) fn set_value(&mut self, raw: &str) -> Result<(), crate::ValueError> {
		self.value.set(raw)
	}
}

/// ## Display Helpers.
impl Flag {
	/// # Display Name.
	///
	/// Returns `-x, --name` if the flag has an undeprecated shorthand, or
	/// just `--name` otherwise.
	pub(crate) fn display_name(&self) -> String {
		match self.shorthand() {
			Some(c) if self.shorthand_deprecated.is_empty() => format!("-{c}, --{}", self.name),
			_ => format!("--{}", self.name),
		}
	}

	/// # Default Is Zero?
	///
	/// Returns `true` if the default is the zero value for its type, in
	/// which case it is omitted from usage output.
	pub(crate) fn default_is_zero(&self) -> bool {
		let d = self.default.as_str();
		match self.value.type_name() {
			"bool" => d == "false",
			"duration" => d == "0" || d == "0s",
			"int" | "int8" | "int16" | "int32" | "int64" |
			"uint" | "uint8" | "uint16" | "uint32" | "uint64" |
			"count" | "float32" | "float64" => d == "0",
			"string" | "bytesHex" => d.is_empty(),
			"ip" => d == "<nil>",
			t if t.ends_with("Slice") || t == "stringArray" => d == "[]",
			_ => matches!(d, "false" | "<nil>" | "" | "0" | "[]"),
		}
	}
}
