/*!
# Pennant: Foreign Flag Sets
*/

use crate::{
	Flag,
	FlagError,
};



/// # Foreign Flag Set.
///
/// A bridge to some other option-parsing convention whose declarations
/// should live alongside a [`FlagSet`](crate::FlagSet)'s own.
///
/// When passed to [`FlagSet::add_foreign_flag_set`](crate::FlagSet::add_foreign_flag_set),
/// the foreign set's flags are absorbed right away, and it is asked to do its
/// own parsing at the start of every [`FlagSet::parse`](crate::FlagSet::parse),
/// before any arguments are scanned.
///
/// ## Examples
///
/// ```
/// use pennant::{
///     Binding,
///     ErrorHandling,
///     Flag,
///     FlagError,
///     FlagSet,
///     ForeignFlagSet,
///     ScalarValue,
/// };
///
/// struct Legacy {
///     debug: Binding<bool>,
///     parses: Binding<usize>,
/// }
///
/// impl ForeignFlagSet for Legacy {
///     fn take_flags(&mut self) -> Vec<Flag> {
///         let debug = Flag::new(ScalarValue::new(self.debug.clone()), "debug", "", "Debug mode.")
///             .with_no_value_default("true");
///         vec![debug]
///     }
///
///     fn parse_now(&mut self) -> Result<(), FlagError> {
///         self.parses.replace(self.parses.get() + 1);
///         Ok(())
///     }
/// }
///
/// let debug = Binding::new(false);
/// let parses = Binding::new(0);
///
/// let mut flags = FlagSet::new("demo", ErrorHandling::ContinueOnError);
/// flags.add_foreign_flag_set(Legacy { debug: debug.clone(), parses: parses.clone() });
/// flags.parse(["--debug"]).unwrap();
///
/// assert!(debug.get());
/// assert_eq!(parses.get(), 1);
/// ```
pub trait ForeignFlagSet {
	/// # Take Flags.
	///
	/// Hand over the declarations to absorb. This is called exactly once.
	/// Flags whose names are already taken are dropped.
	fn take_flags(&mut self) -> Vec<Flag>;

	/// # Parse Now.
	///
	/// Run the foreign set's own parse step.
	///
	/// ## Errors
	///
	/// Failures are logged but otherwise ignored; they do not stop the
	/// registry's own parse.
	fn parse_now(&mut self) -> Result<(), FlagError>;
}
