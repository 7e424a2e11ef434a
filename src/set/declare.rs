/*!
# Pennant: Typed Declarations
*/

use crate::{
	Binding,
	BytesBase64Value,
	BytesHexValue,
	CountValue,
	Flag,
	FlagError,
	FlagSet,
	IpMask,
	IpNet,
	Scalar,
	ScalarValue,
	SliceValue,
	StringArrayValue,
	value::{
		decode_base64,
		decode_hex,
		read_csv,
		split_list,
	},
};
use std::time::Duration;



/// ## Declarations.
///
/// Each of these adds a flag and returns the [`Binding`] its value is
/// written to.
///
/// Pass an empty `short` if there is no shorthand.
///
/// These all panic if the name or shorthand is already taken; see
/// [`FlagSet::add_flag`].
impl FlagSet {
	/// # Scalar.
	///
	/// Declare a flag for any [`Scalar`] type. Booleans may appear without a
	/// value, implying `true`.
	pub fn scalar<T>(&mut self, name: &str, short: &str, default: T, usage: &str)
	-> Binding<T>
	where T: Scalar + 'static {
		let binding = Binding::new(default);
		self.scalar_var(&binding, name, short, usage);
		binding
	}

	/// # Scalar (Existing Binding).
	///
	/// Same as [`FlagSet::scalar`], but writes to a binding you already have.
	/// Its current value is the default.
	pub fn scalar_var<T>(&mut self, binding: &Binding<T>, name: &str, short: &str, usage: &str)
	-> &mut Flag
	where T: Scalar + 'static {
		let flag = self.var(ScalarValue::new(binding.clone()), name, short, usage);
		if let Some(no_value) = T::NO_VALUE { flag.set_no_value_default(no_value); }
		flag
	}

	/// # Bool.
	pub fn bool(&mut self, name: &str, short: &str, default: bool, usage: &str)
	-> Binding<bool> {
		self.scalar(name, short, default, usage)
	}

	/// # Int.
	pub fn int(&mut self, name: &str, short: &str, default: isize, usage: &str)
	-> Binding<isize> {
		self.scalar(name, short, default, usage)
	}

	/// # String.
	pub fn string(&mut self, name: &str, short: &str, default: String, usage: &str)
	-> Binding<String> {
		self.scalar(name, short, default, usage)
	}

	/// # Float.
	pub fn float64(&mut self, name: &str, short: &str, default: f64, usage: &str)
	-> Binding<f64> {
		self.scalar(name, short, default, usage)
	}

	/// # Duration.
	///
	/// Values are written like `300ms`, `1.5h`, or `2h45m`.
	pub fn duration(&mut self, name: &str, short: &str, default: Duration, usage: &str)
	-> Binding<Duration> {
		self.scalar(name, short, default, usage)
	}

	/// # Count.
	///
	/// An integer, starting at zero, incremented every time the flag appears
	/// without a value.
	pub fn count(&mut self, name: &str, short: &str, usage: &str) -> Binding<isize> {
		let binding = Binding::new(0);
		self.var(CountValue::new(binding.clone()), name, short, usage)
			.set_no_value_default(CountValue::NO_VALUE);
		binding
	}

	/// # Slice.
	///
	/// Declare a comma-separated list flag for any [`Scalar`] type. Repeated
	/// occurrences accumulate.
	pub fn slice<T>(&mut self, name: &str, short: &str, default: Vec<T>, usage: &str)
	-> Binding<Vec<T>>
	where T: Scalar + 'static {
		let binding = Binding::new(default);
		self.var(SliceValue::new(binding.clone()), name, short, usage);
		binding
	}

	/// # String Array.
	///
	/// Like a string slice, except commas are not special; each occurrence
	/// adds exactly one element.
	pub fn string_array(&mut self, name: &str, short: &str, default: Vec<String>, usage: &str)
	-> Binding<Vec<String>> {
		let binding = Binding::new(default);
		self.var(StringArrayValue::new(binding.clone()), name, short, usage);
		binding
	}

	/// # IP Mask.
	pub fn ip_mask(&mut self, name: &str, short: &str, default: IpMask, usage: &str)
	-> Binding<IpMask> {
		self.scalar(name, short, default, usage)
	}

	/// # IP Network.
	///
	/// Values are written in CIDR notation, like `10.0.0.0/8`.
	pub fn ip_net(&mut self, name: &str, short: &str, default: IpNet, usage: &str)
	-> Binding<IpNet> {
		self.scalar(name, short, default, usage)
	}

	/// # Hex Bytes.
	pub fn bytes_hex(&mut self, name: &str, short: &str, default: Vec<u8>, usage: &str)
	-> Binding<Vec<u8>> {
		let binding = Binding::new(default);
		self.var(BytesHexValue::new(binding.clone()), name, short, usage);
		binding
	}

	/// # Base64 Bytes.
	pub fn bytes_base64(&mut self, name: &str, short: &str, default: Vec<u8>, usage: &str)
	-> Binding<Vec<u8>> {
		let binding = Binding::new(default);
		self.var(BytesBase64Value::new(binding.clone()), name, short, usage);
		binding
	}
}

/// ## Typed Getters.
///
/// These look a flag up by name, check its type tag, and parse its current
/// value back out of the rendered text. This is mostly useful for flags
/// declared elsewhere, whose bindings you don't have.
impl FlagSet {
	/// # Get Scalar.
	///
	/// ## Errors
	///
	/// Returns an error if the flag does not exist, is not a `T`, or cannot
	/// be converted.
	pub fn get<T: Scalar>(&self, name: &str) -> Result<T, FlagError> {
		let raw = self.typed_render(name, T::TYPE)?;
		T::parse(&raw).map_err(|e| conversion(name, e.0))
	}

	/// # Get Slice.
	///
	/// ## Errors
	///
	/// Returns an error if the flag does not exist, is not a list of `T`, or
	/// cannot be converted.
	pub fn get_slice<T: Scalar>(&self, name: &str) -> Result<Vec<T>, FlagError> {
		let raw = self.typed_render(name, T::SLICE_TYPE)?;
		let inner = unbracket(&raw);
		if inner.is_empty() { return Ok(Vec::new()); }
		split_list(inner).map_err(|e| conversion(name, e.0))
	}

	/// # Get String Array.
	///
	/// ## Errors
	///
	/// Returns an error if the flag does not exist or is not a string array.
	pub fn get_string_array(&self, name: &str) -> Result<Vec<String>, FlagError> {
		let raw = self.typed_render(name, "stringArray")?;
		read_csv(unbracket(&raw)).map_err(|e| conversion(name, e.0))
	}

	/// # Get Count.
	///
	/// ## Errors
	///
	/// Returns an error if the flag does not exist or is not a count.
	pub fn get_count(&self, name: &str) -> Result<isize, FlagError> {
		let raw = self.typed_render(name, "count")?;
		<isize as Scalar>::parse(&raw).map_err(|e| conversion(name, e.0))
	}

	/// # Get Hex Bytes.
	///
	/// ## Errors
	///
	/// Returns an error if the flag does not exist or is not hex bytes.
	pub fn get_bytes_hex(&self, name: &str) -> Result<Vec<u8>, FlagError> {
		let raw = self.typed_render(name, "bytesHex")?;
		decode_hex(&raw).map_err(|e| conversion(name, e.0))
	}

	/// # Get Base64 Bytes.
	///
	/// ## Errors
	///
	/// Returns an error if the flag does not exist or is not base64 bytes.
	pub fn get_bytes_base64(&self, name: &str) -> Result<Vec<u8>, FlagError> {
		let raw = self.typed_render(name, "bytesBase64")?;
		decode_base64(&raw).map_err(|e| conversion(name, e.0))
	}

	/// # Typed Render.
	///
	/// Render the named flag's value, provided its type tag is `wanted`.
	fn typed_render(&self, name: &str, wanted: &'static str) -> Result<String, FlagError> {
		let flag = self.lookup(name).ok_or_else(|| FlagError::NotFound(name.to_owned()))?;
		let actual = flag.value().type_name();
		if actual == wanted { Ok(flag.value().render()) }
		else { Err(FlagError::TypeMismatch { wanted, actual }) }
	}
}

/// # Conversion Error.
fn conversion(name: &str, reason: String) -> FlagError {
	FlagError::Conversion { name: name.to_owned(), reason }
}

/// # Strip List Brackets.
fn unbracket(raw: &str) -> &str {
	raw.strip_prefix('[')
		.and_then(|s| s.strip_suffix(']'))
		.unwrap_or(raw)
}
