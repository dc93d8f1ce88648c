use crate::cmd::app::{
	cmd_app, ARG_BATCH_SIZE, ARG_COOLDOWN_MS, ARG_ENDPOINT, ARG_EXCLUDE, ARG_FORCE, ARG_INCLUDE, ARG_KEY_ID,
	ARG_KEY_SECRET, ARG_LIST_DELAY_MS, ARG_PAGE_SIZE, ARG_PATH_1, ARG_PROFILE, ARG_RECURSIVE, ARG_VERBOSE,
};
use crate::prompt::{is_yes, prompt};
use clap::ArgMatches;
use file_size::fit_4;
use mdstore::engine::{EngineConfig, Session, Walk};
use mdstore::msw::{load_store_cred, CredArgs, EntryType, ObjectRef, PathFilter};
use mdstore::{Error, Result};
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod app;

pub async fn cmd_run() -> Result<()> {
	let argm = cmd_app().get_matches();

	match argm.subcommand() {
		Some(("check", sub_cmd)) => exec_check(sub_cmd).await?,
		Some(("ls", sub_cmd)) => exec_ls(sub_cmd).await?,
		Some(("du", sub_cmd)) => exec_du(sub_cmd).await?,
		Some(("rm", sub_cmd)) => exec_rm(sub_cmd).await?,
		_ => {
			cmd_app().print_long_help()?;
			println!("\n");
		}
	}

	Ok(())
}

// region:    --- Execs
async fn exec_check(argm: &ArgMatches) -> Result<()> {
	let session = new_session(argm).await?;
	println!("Store reachable at {}", session.endpoint().unwrap_or_default());
	Ok(())
}

async fn exec_ls(argm: &ArgMatches) -> Result<()> {
	let session = new_session(argm).await?;
	let path = get_path_1(argm);
	let filter = get_path_filter(argm)?;

	if argm.get_flag(ARG_RECURSIVE.0) {
		let walk = session.try_list_by_path(path).await?;
		for obj in walk.value.iter().filter(|o| filter.accept(&o.path)) {
			println!("{:>10}  {}", fit_4(obj.content_length), obj.path);
		}
		print_skipped(&walk);
	} else {
		let entries = session.try_list_level(path).await?;
		for entry in entries.iter() {
			match entry.typ {
				EntryType::Folder => println!("{:>10}  {}/", "", entry.name),
				EntryType::Object => {
					if filter.accept(&entry.child_path(path)) {
						println!("{:>10}  {}", fit_4(entry.content_length.unwrap_or_default()), entry.name)
					}
				}
			}
		}
	}

	Ok(())
}

async fn exec_du(argm: &ArgMatches) -> Result<()> {
	let session = new_session(argm).await?;
	let path = get_path_1(argm);

	let walk = session.try_size_by_path(path).await?;
	let agg = walk.value;
	println!("{} objects, {} ({} bytes)", agg.count, fit_4(agg.total_size), agg.total_size);
	print_skipped(&walk);

	Ok(())
}

async fn exec_rm(argm: &ArgMatches) -> Result<()> {
	let session = new_session(argm).await?;
	let path = get_path_1(argm);
	let filter = get_path_filter(argm)?;

	let walk = session.try_list_by_path(path).await?;
	print_skipped(&walk);
	let objects: Vec<ObjectRef> = walk.value.into_iter().filter(|o| filter.accept(&o.path)).collect();

	if objects.is_empty() {
		println!("Nothing to delete under '{path}'");
		return Ok(());
	}

	let size: u64 = objects.iter().map(|o| o.content_length).sum();
	if !argm.get_flag(ARG_FORCE) {
		let answer = prompt(&format!(
			"Delete {} objects ({}) under '{path}'? (y/N) ",
			objects.len(),
			fit_4(size)
		))?;
		if !is_yes(&answer) {
			println!("Delete cancelled");
			return Ok(());
		}
	}

	let report = session.delete_objects(&objects).await?;
	for failed in report.failures.iter() {
		println!("{:13} {} ({})", "Failed", failed.path, failed.error);
	}
	println!("{:13} {} of {} objects", "Deleted", report.succeeded, report.total);

	if report.is_complete() {
		Ok(())
	} else {
		Err(Error::PartialDelete {
			succeeded: report.succeeded,
			total: report.total,
		})
	}
}
// endregion: --- Execs

// region:    --- Session Utils
async fn new_session(argm: &ArgMatches) -> Result<Session> {
	init_logging(argm.get_count(ARG_VERBOSE.0));

	let cred = load_store_cred(CredArgs {
		profile: argm.get_one::<String>(ARG_PROFILE.0).cloned(),
		key_id: argm.get_one::<String>(ARG_KEY_ID).cloned(),
		key_secret: argm.get_one::<String>(ARG_KEY_SECRET).cloned(),
		endpoint: argm.get_one::<String>(ARG_ENDPOINT).cloned(),
	})
	.await?;

	let mut session = Session::new(get_engine_config(argm));
	if !session.authenticate(&cred.key_secret, &cred.key_id, &cred.endpoint).await {
		return Err(Error::AuthenticationFailed(cred.endpoint));
	}

	Ok(session)
}

fn get_engine_config(argm: &ArgMatches) -> EngineConfig {
	let mut config = EngineConfig::default();
	if let Some(page_size) = argm.get_one::<i32>(ARG_PAGE_SIZE) {
		config = config.with_page_size(*page_size);
	}
	if let Some(ms) = argm.get_one::<u64>(ARG_LIST_DELAY_MS) {
		config = config.with_list_delay(Duration::from_millis(*ms));
	}
	if let Some(batch_size) = argm.get_one::<usize>(ARG_BATCH_SIZE) {
		config = config.with_delete_batch_size(*batch_size);
	}
	if let Some(ms) = argm.get_one::<u64>(ARG_COOLDOWN_MS) {
		config = config.with_delete_cooldown(Duration::from_millis(*ms));
	}
	config
}

/// Logs go to stderr so stdout only has the command output.
fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => Level::WARN,
		1 => Level::INFO,
		_ => Level::DEBUG,
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

	// ignore the error when already set
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init();
}

fn print_skipped<T>(walk: &Walk<T>) {
	for skipped in walk.skipped.iter() {
		println!("{:13} {} ({})", "Skipped", skipped.path, skipped.error);
	}
}
// endregion: --- Session Utils

// region:    Args Utils
fn get_path_1(argm: &ArgMatches) -> &str {
	argm.get_one::<String>(ARG_PATH_1).map(|s| s.as_str()).unwrap_or_default()
}

fn get_path_filter(argm: &ArgMatches) -> Result<PathFilter> {
	let includes: Vec<&str> = argm
		.get_many::<String>(ARG_INCLUDE)
		.map(|vals| vals.map(|s| s.as_str()).collect())
		.unwrap_or_default();
	let excludes: Vec<&str> = argm
		.get_many::<String>(ARG_EXCLUDE)
		.map(|vals| vals.map(|s| s.as_str()).collect())
		.unwrap_or_default();

	PathFilter::new(&includes, &excludes)
}
// endregion: Args Utils
