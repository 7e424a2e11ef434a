/*!
# Pennant: Values

Every flag holds exactly one [`Value`]: something that can parse text into
itself, render itself back out, and name its type.
*/

mod bytes;
mod csv;
mod duration;
mod list;
mod net;
mod num;
mod scalar;

pub(crate) use bytes::{
	decode_base64,
	decode_hex,
};
pub use bytes::{
	BytesBase64Value,
	BytesHexValue,
};
pub(crate) use csv::{
	read_csv,
	write_csv,
};
pub(crate) use list::split_list;
pub use list::{
	SliceValue,
	StringArrayValue,
};
pub use net::IpMask;
pub use scalar::{
	CountValue,
	Scalar,
	ScalarValue,
};
use crate::ValueError;
use std::{
	cell::RefCell,
	fmt,
	rc::Rc,
};



/// # Flag Value.
///
/// This is the capability a [`Flag`](crate::Flag) needs from its payload.
/// The registry never cares what the concrete type is; implement this for
/// your own types to plug them in.
///
/// ## Examples
///
/// ```
/// use pennant::{ErrorHandling, FlagSet, Value, ValueError};
///
/// #[derive(Default)]
/// struct Upper(String);
///
/// impl Value for Upper {
///     fn render(&self) -> String { self.0.clone() }
///     fn set(&mut self, raw: &str) -> Result<(), ValueError> {
///         self.0 = raw.to_uppercase();
///         Ok(())
///     }
///     fn type_name(&self) -> &'static str { "upper" }
/// }
///
/// let mut flags = FlagSet::new("demo", ErrorHandling::ContinueOnError);
/// flags.var(Upper::default(), "shout", "", "Say it louder.");
/// flags.parse(["--shout", "hello"]).unwrap();
/// assert_eq!(flags.lookup("shout").unwrap().value().render(), "HELLO");
/// ```
pub trait Value {
	/// # Render.
	///
	/// Return the current value as text. This is used to capture the
	/// default at declaration time and for usage output.
	fn render(&self) -> String;

	/// # Set.
	///
	/// Parse `raw` into the value.
	///
	/// ## Errors
	///
	/// Return an error if the text is malformed.
	fn set(&mut self, raw: &str) -> Result<(), ValueError>;

	/// # Type Tag.
	///
	/// A short name for the type, used in usage output and to check typed
	/// getters.
	fn type_name(&self) -> &'static str;

	/// # As List.
	///
	/// Values backed by an ordered sequence should return themselves here
	/// so callers can append/replace/export elements directly.
	fn as_list(&mut self) -> Option<&mut dyn ListValue> { None }
}



/// # List Value.
///
/// The secondary capability for values holding an ordered sequence. The
/// parser itself never uses this; it is for callers wanting to manipulate a
/// list flag wholesale.
pub trait ListValue {
	/// # Append one text-encoded element.
	///
	/// ## Errors
	///
	/// Return an error if the element cannot be parsed.
	fn append(&mut self, raw: &str) -> Result<(), ValueError>;

	/// # Replace all elements.
	///
	/// ## Errors
	///
	/// Return an error if any element cannot be parsed, in which case the
	/// existing list is left as it was.
	fn replace(&mut self, raw: &[String]) -> Result<(), ValueError>;

	/// # Export the elements as text.
	fn items(&self) -> Vec<String>;
}



/// # Value Binding.
///
/// A shared handle to caller-owned storage. The typed declaration helpers
/// hand one of these back; the registry keeps a clone inside the flag's
/// value and writes through it during parsing.
///
/// Bindings are reference-counted, not atomic; a [`FlagSet`](crate::FlagSet)
/// and its bindings belong to a single thread.
pub struct Binding<T>(Rc<RefCell<T>>);

impl<T> Clone for Binding<T> {
	#[inline]
	fn clone(&self) -> Self { Self(Rc::clone(&self.0)) }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Binding").field(&*self.0.borrow()).finish()
	}
}

impl<T: Default> Default for Binding<T> {
	#[inline]
	fn default() -> Self { Self::new(T::default()) }
}

impl<T> Binding<T> {
	#[must_use]
	/// # New.
	pub fn new(value: T) -> Self { Self(Rc::new(RefCell::new(value))) }

	#[must_use]
	/// # Get (Copy).
	pub fn get(&self) -> T where T: Clone { self.0.borrow().clone() }

	/// # Replace.
	///
	/// Swap in a new value, returning the old one.
	pub fn replace(&self, value: T) -> T { self.0.replace(value) }

	/// # With.
	///
	/// Run a callback against a reference to the value.
	pub fn with<F, R>(&self, cb: F) -> R
	where F: FnOnce(&T) -> R { cb(&self.0.borrow()) }

	/// # With (Mutable).
	pub(crate) fn with_mut<F, R>(&self, cb: F) -> R
	where F: FnOnce(&mut T) -> R { cb(&mut self.0.borrow_mut()) }
}
