use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pricelint::dsl::display;
use pricelint::dsl::reporting;
use pricelint::dsl::types::Outcome;
use pricelint::loading;
use pricelint::normalize;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(ClapArgs, Debug)]
struct Sources {
    /// Directory holding the price files
    #[clap(short, long, value_parser, default_value = "prices")]
    dir: PathBuf,
    /// Schema file, defaults to <dir>/schema.json
    #[clap(short, long, value_parser)]
    schema: Option<PathBuf>,
}

impl Sources {
    fn schema_path(&self) -> PathBuf {
        self.schema
            .clone()
            .unwrap_or_else(|| self.dir.join(loading::SCHEMA_FILE_NAME))
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate every price file against the schema
    Validate {
        #[clap(flatten)]
        sources: Sources,
    },
    /// Merge every price file into one document keyed by provider
    Normalize {
        #[clap(flatten)]
        sources: Sources,
        #[clap(short, long, value_parser, default_value = "normalized-automated.json")]
        output: PathBuf,
    },
}

fn validate(sources: &Sources) -> ExitCode {
    let schema_path = sources.schema_path();

    let schema = match loading::load_schema(&schema_path) {
        Ok(schema) => schema,
        Err(error) => {
            println!("{}", display::error_header(&error.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let files = match loading::load_price_files(&sources.dir, &schema_path) {
        Ok(files) => files,
        Err(error) => {
            println!("{}", display::error_header(&error.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let reporter = reporting::run(&schema, &files);
    display::print_report(&reporter);

    let summary = reporter.summary();
    info!(
        examined = summary.files_examined,
        valid = summary.valid_files,
        violations = summary.total_violations,
        "validation finished"
    );

    match summary.outcome() {
        Outcome::Success => ExitCode::SUCCESS,
        Outcome::Failure => ExitCode::FAILURE,
    }
}

fn normalize(sources: &Sources, output: &Path) -> ExitCode {
    let result = loading::load_price_files(&sources.dir, &sources.schema_path())
        .map_err(normalize::NormalizeError::from)
        .and_then(|files| normalize::write_normalized(&files, output));

    match result {
        Ok(provider_count) => {
            println!(
                "Written to {} with {} providers",
                output.display(),
                provider_count
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            debug!(%error, "normalization failed");
            println!("{}", display::error_header(&error.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Validate { sources } => validate(&sources),
        Commands::Normalize { sources, output } => normalize(&sources, &output),
    }
}
