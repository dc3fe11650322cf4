use crate::config::ResolvedConfig;
use crate::errors::{AppError, AppResult};
use crate::parser::{output_path_for, process_map};
use crate::store::run_query;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parses command-line arguments and runs the selected flow.
///
/// This function handles two subcommands:
/// - `ingest`: Shape an OSM XML extract into `<input>.json`
/// - `query`: Load a document collection and print every document where the
///   match field exists
///
/// Both accept `--config <toml>`; flags given on the command line override
/// values from the file.
///
/// # Returns
///
/// Returns an error if:
/// - The config file is unreadable or invalid
/// - The input cannot be read or the output cannot be written
/// - An element is malformed
/// - The document store cannot be reached
pub fn cli() -> AppResult<()> {
    run(std::env::args_os())
}

/// Same as [`cli`] with explicit arguments (the first one is the program name).
pub fn run<I, T>(args: I) -> AppResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cmd = command();
    let matches = match cmd.try_get_matches_from_mut(args) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
            return Ok(());
        }
        Err(e) => return Err(AppError::InvalidInput(e.to_string())),
    };

    match matches.subcommand() {
        Some(("ingest", sub)) => {
            let input = sub
                .get_one::<PathBuf>("input")
                .ok_or_else(|| AppError::InvalidInput("input is required".into()))?;
            let mut config = load_config(sub)?;
            if sub.get_flag("pretty") {
                config.pretty = true;
            }

            let documents = process_map(input, config.pretty, &config.street_mapping)?;
            info!(
                documents = documents.len(),
                output = %output_path_for(input).display(),
                "All operations completed successfully"
            );
        }
        Some(("query", sub)) => {
            let address = sub
                .get_one::<String>("address")
                .ok_or_else(|| AppError::InvalidInput("address is required".into()))?;
            let mut config = load_config(sub)?;
            if let Some(field) = sub.get_one::<String>("field") {
                config.match_field = field.clone();
            }
            if let Some(database) = sub.get_one::<String>("database") {
                config.database = database.clone();
            }
            if let Some(collection) = sub.get_one::<String>("collection") {
                config.collection = collection.clone();
            }
            config.validate()?;

            for doc in run_query(&config, address)? {
                println!("{}", serde_json::to_string_pretty(&doc)?);
            }
        }
        _ => {
            cmd.print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

fn command() -> Command {
    let config_arg = Arg::new("config")
        .short('c')
        .long("config")
        .help("Path to a TOML configuration file")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set);

    Command::new("osm-wrangle")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("ingest")
                .about("Shape an OSM XML extract into newline-delimited JSON")
                .after_help("Writes <INPUT>.json next to the input.\nExample:\n  osm-wrangle ingest aurora_il.osm --pretty")
                .arg(
                    Arg::new("input")
                        .help("Path to the OSM XML file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("pretty")
                        .short('p')
                        .long("pretty")
                        .help("Indent each JSON document")
                        .action(ArgAction::SetTrue),
                )
                .arg(config_arg.clone()),
        )
        .subcommand(
            Command::new("query")
                .about("Print every document of a collection where a field exists")
                .after_help("ADDRESS is a JSON-lines file or 'memory:'.\nExample:\n  osm-wrangle query aurora_il.osm.json --field NHD:way_id")
                .arg(
                    Arg::new("address")
                        .help("Document store address")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("field")
                        .short('f')
                        .long("field")
                        .help("Field that must exist in matching documents")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("database")
                        .short('d')
                        .long("database")
                        .help("Database name")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("collection")
                        .long("collection")
                        .help("Collection name")
                        .action(ArgAction::Set),
                )
                .arg(config_arg),
        )
}

fn load_config(sub: &ArgMatches) -> AppResult<ResolvedConfig> {
    match sub.get_one::<PathBuf>("config") {
        Some(path) => ResolvedConfig::from_toml_file(path),
        None => Ok(ResolvedConfig::default()),
    }
}
