//! mapcfg command line inspector
//!
//! ```bash
//! # List settings, optionally filtered by key prefix
//! mapcfg list --prefix hibernate.type.
//!
//! # Show everything known about one setting
//! mapcfg describe hibernate.timezone.default_storage
//!
//! # Resolve every setting against a configuration file
//! mapcfg check hibernate.properties
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use mapcfg::error::McResult;
use mapcfg::settings::{SettingDefinition, SettingDescriptor};
use mapcfg::{SettingsService, load_config_file, registry};

/// Inspect mapping settings and validate configuration files
#[derive(Parser, Debug)]
#[command(name = "mapcfg")]
#[command(author, version, about, long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// List known settings
	List {
		/// Only list keys starting with this prefix
		#[arg(long)]
		prefix: Option<String>,

		/// Output as JSON
		#[arg(long)]
		json: bool,
	},

	/// Describe one setting
	Describe {
		#[arg(value_name = "KEY")]
		key: String,
	},

	/// Resolve every setting against a configuration file (.json or properties)
	Check {
		#[arg(value_name = "FILE")]
		file: PathBuf,
	},
}

fn main() -> ExitCode {
	mapcfg::init_logging();
	let cli = Cli::parse();

	let result = match cli.command {
		Command::List { prefix, json } => list(prefix.as_deref(), json),
		Command::Describe { key } => describe(&key),
		Command::Check { file } => check(&file),
	};

	match result {
		Ok(code) => code,
		Err(err) => {
			error!("{}", err);
			ExitCode::FAILURE
		}
	}
}

fn list(prefix: Option<&str>, json: bool) -> McResult<ExitCode> {
	let defs: Vec<&SettingDefinition> = registry().list_by_prefix(prefix.unwrap_or("")).collect();

	if json {
		let descriptors: Vec<SettingDescriptor> = defs.into_iter().map(SettingDescriptor::from).collect();
		println!("{}", serde_json::to_string_pretty(&descriptors)?);
		return Ok(ExitCode::SUCCESS);
	}

	for def in defs {
		let default = def.default.map_or_else(|| "-".to_owned(), |d| d.to_value().to_string());
		let marker = if def.is_deprecated() { " (deprecated)" } else { "" };
		println!("{:<64} {:<10} {}{}", def.key, def.domain.kind(), default, marker);
	}
	Ok(ExitCode::SUCCESS)
}

fn describe(key: &str) -> McResult<ExitCode> {
	let def = registry().lookup(key)?;

	println!("{}", def.key);
	if !def.description.is_empty() {
		println!("  {}", def.description);
	}
	println!("  accepts:    {}", def.domain.describe());
	match def.default {
		Some(default) => println!("  default:    {}", default.to_value()),
		None => println!("  default:    none, decided by the consumer"),
	}
	if let Some(since) = def.since {
		println!("  since:      {}", since);
	}
	if def.incubating {
		println!("  incubating: subject to change");
	}
	if let Some(deprecation) = &def.deprecation {
		println!("  {}", deprecation);
	}
	Ok(ExitCode::SUCCESS)
}

fn check(file: &Path) -> McResult<ExitCode> {
	let service = SettingsService::new(load_config_file(file)?);
	service.report_deprecations();

	let mut invalid = 0;
	for def in registry().list() {
		match service.get(def.key) {
			Ok(resolved) => match resolved.value() {
				Some(value) => println!("{} = {} ({})", def.key, value, resolved.source()),
				None => println!("{} unset", def.key),
			},
			Err(err) => {
				invalid += 1;
				println!("{} INVALID: {}", def.key, err);
			}
		}
	}

	if invalid > 0 {
		error!("{} invalid setting(s) in {}", invalid, file.display());
		return Ok(ExitCode::FAILURE);
	}
	Ok(ExitCode::SUCCESS)
}

// vim: ts=4
