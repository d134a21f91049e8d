//! Monitor script entry point.
//!
//! This binary bundles the scripts the monitor can run for a match. Every subcommand
//! reads one JSON envelope from stdin:
//!
//! - `evm-block-number`, `stellar-block-number`, `block-number`: filters admitting
//!   matches from even-numbered blocks or ledgers
//! - `has-argument`: filter admitting matches whose script arguments carry a token
//! - `custom-notification`: trigger validating and logging the match
//!
//! `execute` runs the other way round: it plays the monitor and invokes a configured
//! script for a match read from a file, which is handy when developing scripts.

use openzeppelin_monitor_scripts::{
	models::{BlockChainType, ConfigLoader, ScriptConfig},
	services::{
		filter::ScriptFilter,
		notification::ScriptNotifier,
		script::{
			ArgumentMembership, BlockNumberParity, CustomNotification, FilterPredicate,
			FilterScript, TriggerScript,
		},
	},
	utils::logging::{setup_logging, LogTarget},
};

use clap::{Arg, ArgAction, ArgMatches, Command};
use dotenvy::dotenv;
use std::{
	env::{set_var, var},
	io,
	path::{Path, PathBuf},
	process::ExitCode,
};
use tracing::{error, info};

fn cli() -> Command {
	Command::new("openzeppelin-monitor-script")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Filter and trigger scripts for the OpenZeppelin Monitor. Scripts read a match \
			 envelope as JSON from stdin.",
		)
		.subcommand_required(true)
		.arg_required_else_help(true)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL")
				.global(true),
		)
		.subcommand(
			Command::new("evm-block-number")
				.about("Prints true when the EVM block number of the match is even"),
		)
		.subcommand(
			Command::new("stellar-block-number")
				.about("Prints true when the Stellar ledger sequence of the match is even"),
		)
		.subcommand(
			Command::new("block-number")
				.about("Prints true when the block or ledger number of the match is even"),
		)
		.subcommand(
			Command::new("has-argument")
				.about("Prints true when the script arguments contain the token")
				.arg(
					Arg::new("token")
						.long("token")
						.help("Argument to look for")
						.value_name("TOKEN")
						.allow_hyphen_values(true)
						.default_value(ArgumentMembership::DEFAULT_TOKEN),
				),
		)
		.subcommand(
			Command::new("custom-notification")
				.about("Validates the match and logs a summary of it"),
		)
		.subcommand(
			Command::new("execute")
				.about("Runs a configured script for a match, the way the monitor does")
				.arg(
					Arg::new("config")
						.long("config")
						.help("Path to the script configuration (JSON)")
						.value_name("PATH")
						.value_parser(clap::value_parser!(PathBuf))
						.required(true),
				)
				.arg(
					Arg::new("match")
						.long("match")
						.help("Path to a monitor match (JSON)")
						.value_name("PATH")
						.value_parser(clap::value_parser!(PathBuf))
						.required(true),
				)
				.arg(
					Arg::new("notification")
						.long("notification")
						.help("Run the script as a trigger instead of a filter")
						.action(ArgAction::SetTrue),
				),
		)
}

fn init_logging(target: LogTarget) {
	setup_logging(target).unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});
}

/// Runs a filter over stdin and writes its verdict to stdout
fn run_filter<P: FilterPredicate>(predicate: P) -> ExitCode {
	init_logging(LogTarget::Stderr);

	match FilterScript::new(predicate).run(io::stdin().lock(), io::stdout().lock()) {
		Ok(_) => ExitCode::SUCCESS,
		Err(_) => ExitCode::FAILURE,
	}
}

fn run_trigger() -> ExitCode {
	init_logging(LogTarget::Stdout);

	let code = TriggerScript::new(CustomNotification).run(io::stdin().lock(), io::stderr().lock());
	ExitCode::from(code)
}

fn load_match(path: &Path) -> anyhow::Result<serde_json::Value> {
	let content = std::fs::read_to_string(path)
		.map_err(|e| anyhow::anyhow!("Failed to read match {}: {}", path.display(), e))?;
	serde_json::from_str(&content)
		.map_err(|e| anyhow::anyhow!("Failed to parse match {}: {}", path.display(), e))
}

/// Runs a configured script against a match read from disk.
///
/// # Errors
/// Returns an error if the configuration or match cannot be loaded, or if the script
/// fails.
async fn execute_script(matches: &ArgMatches) -> anyhow::Result<()> {
	let config_path = matches
		.get_one::<PathBuf>("config")
		.ok_or_else(|| anyhow::anyhow!("--config is required"))?;
	let match_path = matches
		.get_one::<PathBuf>("match")
		.ok_or_else(|| anyhow::anyhow!("--match is required"))?;

	let config = ScriptConfig::load_from_path(config_path)?;
	let monitor_match = load_match(match_path)?;

	info!(
		script = %config.script_path,
		language = ?config.language,
		"Executing script"
	);

	if matches.get_flag("notification") {
		ScriptNotifier::from_config(config)?
			.script_notify(&monitor_match)
			.await?;
		println!("Trigger script completed");
	} else {
		let verdict = ScriptFilter::from_config(config)?
			.evaluate(&monitor_match)
			.await?;
		println!("{}", verdict);
	}

	Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
	let matches = cli().get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	// Only apply the CLI option if LOG_LEVEL is not already set
	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("LOG_LEVEL").is_err() {
			set_var("LOG_LEVEL", level);
		}
	}

	match matches.subcommand() {
		Some(("evm-block-number", _)) => {
			run_filter(BlockNumberParity::for_chain(BlockChainType::EVM))
		}
		Some(("stellar-block-number", _)) => {
			run_filter(BlockNumberParity::for_chain(BlockChainType::Stellar))
		}
		Some(("block-number", _)) => run_filter(BlockNumberParity::any_chain()),
		Some(("has-argument", sub)) => {
			let token = sub
				.get_one::<String>("token")
				.map(String::as_str)
				.unwrap_or(ArgumentMembership::DEFAULT_TOKEN);
			run_filter(ArgumentMembership::new(token))
		}
		Some(("custom-notification", _)) => run_trigger(),
		Some(("execute", sub)) => {
			init_logging(LogTarget::Stderr);
			match execute_script(sub).await {
				Ok(()) => ExitCode::SUCCESS,
				Err(e) => {
					error!("{:#}", e);
					ExitCode::FAILURE
				}
			}
		}
		_ => ExitCode::FAILURE,
	}
}
