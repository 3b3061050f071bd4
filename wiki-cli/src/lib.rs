//! Shared plumbing for the `wiki2html` and `wiki2md` binaries.
//!
//! Both converters take the same shape of arguments (an input path, an optional
//! output path, `--config`, `--verbose`, `--json`) and report progress the same
//! way. Only the format and its flags differ, so each binary builds its
//! [`Command`] from [`base_command`], picks a [`Format`], and hands off to [`run`].

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use serde_json::{json, Value};
use std::path::Path;
use tracing_subscriber::EnvFilter;
use wiki_babel::{publish_path, BatchReport, ConversionResult, Format, Outcome};
use wiki_config::{Loader, ValueKind, WikiConfig, LOCAL_CONFIG_FILE};

/// Arguments common to both converters.
pub fn base_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Markdown file or directory to convert")
                .required(true)
                .index(1)
                .value_hint(ValueHint::AnyPath),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Output file (file mode) or directory (directory mode)")
                .value_hint(ValueHint::AnyPath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a wiki.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log every converted file to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print a JSON summary instead of progress lines")
                .action(ArgAction::SetTrue),
        )
}

/// Installs the stderr subscriber. `RUST_LOG` wins unless `--verbose` is given.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Key/value pairs applied over every configuration file.
pub type Overrides = Vec<(&'static str, ValueKind)>;

/// Defaults, then `./wiki.toml` if present, then the explicit `--config` file,
/// then `overrides` from command-line flags.
///
/// Exits with status 1 when the configuration cannot be loaded.
pub fn load_cli_config(explicit_path: Option<&str>, overrides: Overrides) -> WikiConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    overrides
        .into_iter()
        .try_fold(loader, |loader, (key, value)| loader.set_override(key, value))
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

/// Sets up logging and loads the layered configuration named by `--config`.
pub fn prepare(matches: &ArgMatches, overrides: Overrides) -> WikiConfig {
    init_tracing(matches.get_flag("verbose"));
    let config = load_cli_config(config_path(matches), overrides);
    tracing::debug!(?config, "loaded configuration");
    config
}

/// The `--config` argument, if given.
pub fn config_path(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>("config").map(|s| s.as_str())
}

/// Converts the `input` argument with `format` and reports the outcome.
///
/// Conversion failures are printed and never change the exit status.
pub fn run(format: &dyn Format, matches: &ArgMatches) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = matches.get_one::<String>("output").map(Path::new);
    let as_json = matches.get_flag("json");

    let input = Path::new(input);
    match publish_path(format, input, output) {
        Ok(outcome) if as_json => println!("{}", outcome_json(&outcome)),
        Ok(Outcome::File(result)) => print_result(&result),
        Ok(Outcome::Batch(report)) => print_report(&report, input),
        Err(err) if as_json => println!("{}", json!({ "error": err.to_string() })),
        Err(err) => println!("❌ Error: {err}"),
    }
}

/// One progress line per file.
pub fn result_line(result: &ConversionResult) -> String {
    match &result.error {
        None => format!(
            "✅ Converted: {} -> {}",
            result.source.display(),
            result.destination.display()
        ),
        Some(err) => format!("❌ Failed to convert {}: {err}", result.source.display()),
    }
}

fn print_result(result: &ConversionResult) {
    println!("{}", result_line(result));
}

fn print_report(report: &BatchReport, input_dir: &Path) {
    if report.is_empty() {
        println!("No markdown files found in {}", input_dir.display());
    }
    for result in &report.results {
        print_result(result);
    }
    println!("\n{}", tally_line(report));
}

/// Closing line of a directory run, printed even when nothing matched.
pub fn tally_line(report: &BatchReport) -> String {
    format!(
        "📊 Converted {}/{} files",
        report.succeeded(),
        report.total()
    )
}

fn result_json(result: &ConversionResult) -> Value {
    json!({
        "source": result.source.display().to_string(),
        "destination": result.destination.display().to_string(),
        "error": result.error.as_ref().map(|err| err.to_string()),
    })
}

/// Machine-readable summary printed under `--json`.
pub fn outcome_json(outcome: &Outcome) -> Value {
    let (succeeded, results): (usize, Vec<Value>) = match outcome {
        Outcome::File(result) => (usize::from(result.is_success()), vec![result_json(result)]),
        Outcome::Batch(report) => (
            report.succeeded(),
            report.results.iter().map(result_json).collect(),
        ),
    };
    json!({
        "succeeded": succeeded,
        "total": results.len(),
        "results": results,
    })
}
