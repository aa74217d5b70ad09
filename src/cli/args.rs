use crate::config::{Options, PackageManager};
use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, Parser};
use log::LevelFilter;

/// CLI arguments for vitegen.
#[derive(Parser, Debug, Clone)]
#[command(name = "vitegen", author, version, about = "Create a new Vite + React app", long_about = None)]
pub struct Args {
    /// Name of the app to create.
    #[arg(value_name = "APP_NAME")]
    pub app_name: Option<String>,

    /// Set up Tailwind CSS without asking.
    #[arg(short, long)]
    pub tailwind: bool,

    /// Choose where the app is initialized (currently ignored).
    // TODO: accept a value once the target-path behavior is settled
    #[arg(short, long)]
    pub path: bool,

    /// Package manager used for scaffolding and installs.
    #[arg(short = 'm', long = "package-manager", value_enum, value_name = "npm|yarn|pnpm")]
    pub package_manager: Option<PackageManager>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the partial configuration the prompt flow starts from.
    ///
    /// The target path is the invoking working directory; the `--path`
    /// flag is accepted for compatibility but carries no value.
    pub fn to_options(&self) -> crate::error::Result<Options> {
        Ok(Options {
            app_name: self.app_name.clone(),
            path: std::env::current_dir()?,
            package_manager: self.package_manager,
            tailwind: if self.tailwind { Some(true) } else { None },
            variant: None,
        })
    }
}

/// Parse command line arguments with custom handling for invalid values.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::InvalidValue {
            eprintln!("{e}");
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
