/*!
# Pennant: List Values
*/

use crate::{
	Binding,
	ListValue,
	Scalar,
	Value,
	ValueError,
};
use super::{
	read_csv,
	write_csv,
};



#[derive(Debug, Clone)]
/// # Slice Value.
///
/// A [`Value`] holding a list of [`Scalar`]s. Each occurrence of the flag
/// takes a comma-separated list of elements; the first occurrence replaces
/// the default, later ones append to it. (`--n=1,2 --n=3` yields `[1,2,3]`.)
pub struct SliceValue<T> {
	/// # Storage.
	value: Binding<Vec<T>>,

	/// # Set Before?
	changed: bool,
}

impl<T: Scalar> Value for SliceValue<T> {
	fn render(&self) -> String {
		let items = self.items();
		let inner =
			if T::CSV { write_csv(&items) }
			else { items.join(",") };
		format!("[{inner}]")
	}

	fn set(&mut self, raw: &str) -> Result<(), ValueError> {
		let parsed = split_list::<T>(raw)?;
		if self.changed {
			self.value.with_mut(|v| v.extend(parsed));
		}
		else {
			self.value.replace(parsed);
			self.changed = true;
		}
		Ok(())
	}

	fn type_name(&self) -> &'static str { T::SLICE_TYPE }

	fn as_list(&mut self) -> Option<&mut dyn ListValue> { Some(self) }
}

impl<T: Scalar> ListValue for SliceValue<T> {
	fn append(&mut self, raw: &str) -> Result<(), ValueError> {
		let v = T::parse(raw)?;
		self.value.with_mut(|list| list.push(v));
		Ok(())
	}

	fn replace(&mut self, raw: &[String]) -> Result<(), ValueError> {
		let parsed = raw.iter()
			.map(|s| T::parse(s))
			.collect::<Result<Vec<T>, ValueError>>()?;
		self.value.replace(parsed);
		Ok(())
	}

	fn items(&self) -> Vec<String> {
		self.value.with(|list| list.iter().map(T::render).collect())
	}
}

impl<T> SliceValue<T> {
	#[must_use]
	/// # New.
	pub const fn new(value: Binding<Vec<T>>) -> Self {
		Self { value, changed: false }
	}
}

/// # Split List.
///
/// Break a raw list argument into its parsed elements.
pub(crate) fn split_list<T: Scalar>(raw: &str) -> Result<Vec<T>, ValueError> {
	if T::CSV {
		read_csv(raw)?.iter()
			.map(|s| T::parse(s))
			.collect()
	}
	else {
		raw.split(',').map(T::parse).collect()
	}
}



#[derive(Debug, Clone)]
/// # String Array Value.
///
/// Like a string [`SliceValue`], except each occurrence of the flag adds
/// exactly one element, commas and all. (`--s=a,b --s=c` yields
/// `["a,b", "c"]`.)
pub struct StringArrayValue {
	/// # Storage.
	value: Binding<Vec<String>>,

	/// # Set Before?
	changed: bool,
}

impl Value for StringArrayValue {
	fn render(&self) -> String {
		self.value.with(|v| format!("[{}]", write_csv(v)))
	}

	fn set(&mut self, raw: &str) -> Result<(), ValueError> {
		if self.changed {
			self.value.with_mut(|v| v.push(raw.to_owned()));
		}
		else {
			self.value.replace(vec![raw.to_owned()]);
			self.changed = true;
		}
		Ok(())
	}

	fn type_name(&self) -> &'static str { "stringArray" }

	fn as_list(&mut self) -> Option<&mut dyn ListValue> { Some(self) }
}

impl ListValue for StringArrayValue {
	fn append(&mut self, raw: &str) -> Result<(), ValueError> {
		self.value.with_mut(|v| v.push(raw.to_owned()));
		Ok(())
	}

	fn replace(&mut self, raw: &[String]) -> Result<(), ValueError> {
		self.value.replace(raw.to_vec());
		Ok(())
	}

	fn items(&self) -> Vec<String> { self.value.get() }
}

impl StringArrayValue {
	#[must_use]
	/// # New.
	pub const fn new(value: Binding<Vec<String>>) -> Self {
		Self { value, changed: false }
	}
}
