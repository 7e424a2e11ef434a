/*!
# Pennant: Byte Values
*/

use base64::prelude::{
	BASE64_STANDARD,
	Engine as _,
};
use crate::{
	Binding,
	Value,
	ValueError,
};



#[derive(Debug, Clone)]
/// # Hex Bytes Value.
///
/// Raw bytes written as hexadecimal text, e.g. `--key=DEADBEEF`. Either case
/// is accepted; values are rendered in upper case.
pub struct BytesHexValue(Binding<Vec<u8>>);

impl Value for BytesHexValue {
	fn render(&self) -> String { self.0.with(|v| hex::encode_upper(v)) }

	fn set(&mut self, raw: &str) -> Result<(), ValueError> {
		let v = decode_hex(raw.trim())?;
		self.0.replace(v);
		Ok(())
	}

	fn type_name(&self) -> &'static str { "bytesHex" }
}

impl BytesHexValue {
	#[must_use]
	/// # New.
	pub const fn new(binding: Binding<Vec<u8>>) -> Self { Self(binding) }
}



#[derive(Debug, Clone)]
/// # Base64 Bytes Value.
///
/// Raw bytes written as standard, padded base64.
pub struct BytesBase64Value(Binding<Vec<u8>>);

impl Value for BytesBase64Value {
	fn render(&self) -> String { self.0.with(|v| BASE64_STANDARD.encode(v)) }

	fn set(&mut self, raw: &str) -> Result<(), ValueError> {
		let v = decode_base64(raw.trim())?;
		self.0.replace(v);
		Ok(())
	}

	fn type_name(&self) -> &'static str { "bytesBase64" }
}

impl BytesBase64Value {
	#[must_use]
	/// # New.
	pub const fn new(binding: Binding<Vec<u8>>) -> Self { Self(binding) }
}



/// # Decode Hex.
pub(crate) fn decode_hex(raw: &str) -> Result<Vec<u8>, ValueError> {
	hex::decode(raw)
		.map_err(|e| ValueError::new(format!("invalid hex string {raw:?}: {e}")))
}

/// # Decode Base64.
pub(crate) fn decode_base64(raw: &str) -> Result<Vec<u8>, ValueError> {
	BASE64_STANDARD.decode(raw)
		.map_err(|e| ValueError::new(format!("invalid base64 string {raw:?}: {e}")))
}
