/*!
# Pennant

This crate provides a POSIX/GNU-style flag parser built around a [`FlagSet`]
registry: declare your flags (long names, optional single-character
shorthands, typed defaults), then hand it the raw arguments and read the
results back out.

[`FlagSet`] recognizes long flags (`--key`, `--key=val`, `--key val`),
clustered shorthands (`-abc`, `-kval`, `-k=val`, `-k val`), and the
end-of-flags terminator (`--`), collecting everything else as positional
arguments for the caller.

Values are typed via the [`Value`] trait, which the crate implements for
booleans, integers, floats, strings, durations, IP addresses and networks,
raw bytes, and lists thereof. Implement it yourself to plug in anything else.

Semantic validation (ranges, required-ness, subcommands, etc.) is left
_entirely up to you_.



## Example

```
use pennant::{ErrorHandling, FlagSet};

let mut flags = FlagSet::new("demo", ErrorHandling::ContinueOnError);
let verbose = flags.bool("verbose", "v", false, "Print more stuff.");
let threads = flags.int("threads", "j", 1, "Use `num` threads.");

flags.parse(["-v", "--threads=4", "/foo/bar"]).unwrap();

assert!(verbose.get());
assert_eq!(threads.get(), 4);
assert_eq!(flags.args(), ["/foo/bar"]);
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod error;
mod flag;
mod foreign;
mod set;
mod usage;
mod value;

pub use error::{
	ErrorHandling,
	FlagError,
	ValueError,
};
pub use flag::Flag;
pub use foreign::ForeignFlagSet;
pub use set::{
	command_line,
	FlagSet,
};
pub use usage::unquote_usage;
pub use ipnet::IpNet;
pub use value::{
	Binding,
	BytesBase64Value,
	BytesHexValue,
	CountValue,
	IpMask,
	ListValue,
	Scalar,
	ScalarValue,
	SliceValue,
	StringArrayValue,
	Value,
};
