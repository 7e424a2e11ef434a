/*!
# Benchmark: `pennant::FlagSet`
*/

use brunch::{
	Bench,
	benches,
};
use pennant::{
	ErrorHandling,
	FlagSet,
};
use std::time::Duration;

/// # Arguments.
const ARGS: [&str; 10] = [
	"-qv",
	"--key=val",
	"-x",
	"out",
	"--jobs", "4",
	"--wait=1m30s",
	"--tag=a,b,c",
	"/foo/bar",
	"/bar/baz",
];

fn flags() -> FlagSet {
	let mut flags = FlagSet::new("bench", ErrorHandling::ContinueOnError);
	flags.bool("quiet", "q", false, "");
	flags.count("verbose", "v", "");
	flags.string("key", "k", String::new(), "");
	flags.string("extra", "x", String::new(), "");
	flags.int("jobs", "j", 1, "");
	flags.duration("wait", "", Duration::ZERO, "");
	flags.slice::<String>("tag", "t", Vec::new(), "");
	flags
}

benches!(
	Bench::new("pennant::FlagSet::new()")
		.run(flags),

	Bench::spacer(),

	Bench::new("pennant::FlagSet::parse()")
		.run_seeded_with(flags, |mut f| f.parse(ARGS).is_ok()),

	Bench::new("pennant::FlagSet::parse_all()")
		.run_seeded_with(flags, |mut f| f.parse_all(ARGS, |_, _| Ok(())).is_ok()),

	Bench::spacer(),

	Bench::new("pennant::FlagSet::flag_usages()")
		.run_seeded_with(flags, |f| f.flag_usages()),
);
