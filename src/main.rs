use anyhow::Result;
use clap::Parser;
use keycheck::{
    check,
    config::{Config, EnvFile, Layered, ProcessEnv, DEFAULT_ENV_FILE, DEFAULT_KEY_NAME},
    Report,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keycheck")]
#[command(about = "Check that an API key is configured", long_about = None)]
struct Args {
    #[arg(long = "var", help = "Environment variable to check", default_value = DEFAULT_KEY_NAME)]
    var: String,

    #[arg(long, help = "Settings file layered under the process environment", default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    #[arg(long, help = "Ignore the settings file")]
    no_env_file: bool,

    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::from_default_env()
            .add_directive("keycheck=debug".parse()?)
            .add_directive("info".parse()?)
    } else {
        EnvFilter::from_default_env()
            .add_directive("keycheck=info".parse()?)
            .add_directive("warn".parse()?)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    debug!("keycheck v{}", env!("CARGO_PKG_VERSION"));

    let env_file = if args.no_env_file {
        debug!("Settings file disabled");
        EnvFile::default()
    } else {
        match EnvFile::load(&args.env_file) {
            Ok(file) => file,
            Err(e) => {
                warn!("{}; continuing with the process environment only", e);
                EnvFile::default()
            }
        }
    };

    let settings_file = (!args.no_env_file).then_some(args.env_file.as_path());
    let config = Config::from_source(args.var, &Layered::new(ProcessEnv, env_file));
    let report = check(&config, settings_file);

    let stdout = io::stdout();
    print_report(&report, &mut stdout.lock());

    Ok(())
}

/// Writes the report. Output failures such as a closed pipe are logged, not
/// propagated, so the exit status stays successful.
fn print_report<W: Write>(report: &Report, out: &mut W) -> bool {
    match report.write_to(out) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to write report: {}", e);
            false
        }
    }
}
