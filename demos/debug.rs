/*!
# Pennant: Debug

This example parses whatever arguments are fed to it against a handful of
sample flags and displays the results.
*/

use pennant::Flag;
use std::time::Duration;



fn main() {
	tracing_subscriber::fmt()
		.with_max_level(tracing::Level::TRACE)
		.with_writer(std::io::stderr)
		.init();

	let mut flags = pennant::command_line();
	flags.bool("quiet", "q", false, "Suppress output.");
	flags.count("verbose", "v", "Increase verbosity.");
	flags.string("out", "o", String::new(), "Write results to `path`.");
	flags.int("jobs", "j", 1, "Run `num` jobs at once.");
	flags.duration("timeout", "", Duration::from_secs(30), "Give up after this long.");
	flags.slice::<String>("tag", "t", Vec::new(), "Only consider these tags.");

	// ExitOnError handles any problems.
	let _res = flags.parse_env();

	println!("\x1b[2mFLAGS:\x1b[0m");
	flags.visit_all(|f: &Flag| {
		let mark = if f.changed() { "\x1b[92m*\x1b[0m" } else { " " };
		println!("{mark} --{:<10} {}", f.name(), f.value().render());
	});

	println!();
	println!("\x1b[2mARGUMENTS:\x1b[0m");
	if flags.args().is_empty() {
		println!("  \x1b[91mNo Arguments Passed\x1b[0m");
	}
	for (idx, arg) in flags.args().iter().enumerate() {
		let dash =
			if flags.args_len_at_dash().is_some_and(|d| idx >= d) { " (after --)" }
			else { "" };
		println!("  {arg:?}{dash}");
	}
	println!();
}
