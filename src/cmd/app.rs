use clap::{crate_version, value_parser, Arg, ArgAction, Command};

pub const ARG_PROFILE: (&str, char) = ("profile", 'p');
pub const ARG_ENDPOINT: &str = "endpoint";
pub const ARG_KEY_ID: &str = "key-id";
pub const ARG_KEY_SECRET: &str = "key-secret";
pub const ARG_VERBOSE: (&str, char) = ("verbose", 'v');
pub const ARG_PAGE_SIZE: &str = "page-size";
pub const ARG_LIST_DELAY_MS: &str = "list-delay-ms";
pub const ARG_BATCH_SIZE: &str = "batch-size";
pub const ARG_COOLDOWN_MS: &str = "cooldown-ms";
pub const ARG_RECURSIVE: (&str, char) = ("recursive", 'r');
pub const ARG_FORCE: &str = "force";
pub const ARG_PATH_1: &str = "path_1";
pub const ARG_EXCLUDE: &str = "exclude";
pub const ARG_INCLUDE: &str = "include";

pub fn cmd_app() -> Command {
	Command::new("mdstore")
		.version(crate_version!())
		.about("Traverse, size, and bulk delete MediaStore container content")
		.args(args_cred())
		.args(args_engine())
		.arg(arg_verbose())
		.subcommand(sub_check())
		.subcommand(sub_ls())
		.subcommand(sub_du())
		.subcommand(sub_rm())
}

// region:    --- Sub Commands
fn sub_check() -> Command {
	Command::new("check").about("Authenticate against the endpoint and report if the store is reachable")
}

fn sub_ls() -> Command {
	Command::new("ls")
		.about("List a path. Folders and objects of the level, or all objects with --recursive")
		.arg(arg_path_1())
		.arg(arg_include())
		.arg(arg_exlude())
		.arg(arg_recursive())
}

fn sub_du() -> Command {
	Command::new("du")
		.about("Count the objects and sum their size under a path (recursive)")
		.arg(arg_path_1())
}

fn sub_rm() -> Command {
	Command::new("rm")
		.about("Delete all of the objects under a path (recursive, rate limited)")
		.arg(arg_path_1())
		.arg(arg_include())
		.arg(arg_exlude())
		.arg(arg_force())
}
// endregion: --- Sub Commands

// region:    --- Common Args
fn arg_path_1() -> Arg {
	Arg::new(ARG_PATH_1)
		.num_args(1)
		.required(false)
		.default_value("")
		.help("The path in the container (default the container root).")
}

fn arg_recursive() -> Arg {
	Arg::new(ARG_RECURSIVE.0)
		.num_args(0)
		.action(ArgAction::SetTrue)
		.short(ARG_RECURSIVE.1)
		.long(ARG_RECURSIVE.0)
		.help("Specify to list all objects recursively")
}

fn arg_verbose() -> Arg {
	Arg::new(ARG_VERBOSE.0)
		.short(ARG_VERBOSE.1)
		.long(ARG_VERBOSE.0)
		.action(ArgAction::Count)
		.global(true)
		.help("Log more (-v info, -vv debug). RUST_LOG takes precedence.")
}

fn args_cred() -> [Arg; 4] {
	[
		Arg::new(ARG_PROFILE.0)
			.required(false)
			.num_args(1)
			.short(ARG_PROFILE.1)
			.long(ARG_PROFILE.0)
			.global(true)
			.help("The profile to use if no explicit credentials."),
		Arg::new(ARG_ENDPOINT)
			.required(false)
			.num_args(1)
			.long(ARG_ENDPOINT)
			.global(true)
			.help("The container data endpoint (override profile/env endpoint)."),
		Arg::new(ARG_KEY_ID)
			.required(false)
			.num_args(1)
			.long(ARG_KEY_ID)
			.global(true)
			.help("The access key id (override profile/env key id)."),
		Arg::new(ARG_KEY_SECRET)
			.required(false)
			.num_args(1)
			.long(ARG_KEY_SECRET)
			.global(true)
			.help("The secret access key (override profile/env secret)."),
	]
}
// endregion: --- Common Args

// region:    --- Engine Args
fn args_engine() -> [Arg; 4] {
	[
		Arg::new(ARG_PAGE_SIZE)
			.num_args(1)
			.long(ARG_PAGE_SIZE)
			.global(true)
			.value_parser(value_parser!(i32))
			.help("Listing page size, 1 to 500 (default 500)."),
		Arg::new(ARG_LIST_DELAY_MS)
			.num_args(1)
			.long(ARG_LIST_DELAY_MS)
			.global(true)
			.value_parser(value_parser!(u64))
			.help("Pause before each listing request, in milliseconds (default 100)."),
		Arg::new(ARG_BATCH_SIZE)
			.num_args(1)
			.long(ARG_BATCH_SIZE)
			.global(true)
			.value_parser(value_parser!(usize))
			.help("Number of concurrent deletes per batch (default 100)."),
		Arg::new(ARG_COOLDOWN_MS)
			.num_args(1)
			.long(ARG_COOLDOWN_MS)
			.global(true)
			.value_parser(value_parser!(u64))
			.help("Pause between two delete batches, in milliseconds (default 1000)."),
	]
}
// endregion: --- Engine Args

// region:    --- Delete

fn arg_force() -> Arg {
	Arg::new(ARG_FORCE)
		.num_args(0)
		.long(ARG_FORCE)
		.action(ArgAction::SetTrue)
		.help("Force the delete (bypassing the prompt)")
}

// endregion: --- Delete

// region:    --- ls/rm Args
fn arg_exlude() -> Arg {
	Arg::new(ARG_EXCLUDE)
		.num_args(1)
		.short('e')
		.long("exclude")
		.action(ArgAction::Append)
		.help("Exclude the objects which path match the glob expression.")
}

fn arg_include() -> Arg {
	Arg::new(ARG_INCLUDE)
		.num_args(1)
		.short('i')
		.long(ARG_INCLUDE)
		.action(ArgAction::Append)
		.help("Only process the objects which path match the glob expression.")
}
// endregion: --- ls/rm Args
