mod demo;
mod logging;

use std::path::PathBuf;

use autoclose::{
    demos::{Demo, Settings},
    error::DemoError,
    transcript::Transcript,
};
use clap::{Parser, Subcommand};
use log::info;

use self::{
    demo::BinDemo,
    logging::{init_logger, Verbosity},
};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Autoclose compares closing files by hand with closing them on scope exit."
)]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn execute(self) -> Result<(), DemoError> {
        self.command.execute()
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run demos in the order given
    Run {
        /// Demos to run (defaults to copy-line-by-line-scoped)
        demos: Vec<BinDemo>,
        /// Run every demo
        #[arg(short, long, conflicts_with = "demos")]
        all: bool,
        /// File the greeting demos read
        #[arg(long)]
        greeting: Option<PathBuf>,
        /// File the missing-greeting demos try to read
        #[arg(long)]
        missing: Option<PathBuf>,
        /// Destination of the copy demos
        #[arg(long)]
        copy: Option<PathBuf>,
        /// Header width
        #[arg(short, long)]
        width: Option<usize>,
        /// Output verbosity
        #[arg(short, long, default_value = "normal")]
        verbosity: Verbosity,
    },
    /// List available demos
    List,
}

impl Command {
    pub fn execute(self) -> Result<(), DemoError> {
        match self {
            Command::Run {
                demos,
                all,
                greeting,
                missing,
                copy,
                width,
                verbosity,
            } => {
                let defaults = Settings::default();

                let demos = match (all, demos.is_empty()) {
                    (true, _) => Demo::ALL.to_vec(),
                    (false, true) => defaults.demos,
                    (false, false) => demos.into_iter().map(Into::into).collect(),
                };

                let settings = Settings {
                    greeting: greeting.unwrap_or(defaults.greeting),
                    missing: missing.unwrap_or(defaults.missing),
                    copy: copy.unwrap_or(defaults.copy),
                    width: width.unwrap_or(defaults.width),
                    demos,
                };

                Self::run(settings, verbosity)
            }
            Command::List => Self::list(),
        }
    }

    fn run(settings: Settings, verbosity: Verbosity) -> Result<(), DemoError> {
        preamble(verbosity)?;

        let failed = autoclose::run(&settings, &Transcript::stdout())?;

        info!("{} of {} demos reported a failure", failed, settings.demos.len());

        Ok(())
    }

    fn list() -> Result<(), DemoError> {
        let transcript = Transcript::stdout();

        for demo in Demo::ALL {
            transcript.line(format!("{:<28}{}", demo.name(), demo.title()))?;
        }

        Ok(())
    }
}

fn preamble(verbosity: Verbosity) -> Result<(), DemoError> {
    init_logger(verbosity)?;

    log::debug!("pid: {}", std::process::id());

    Ok(())
}
