use clap::ValueEnum;
use log::LevelFilter;
use simple_logger::SimpleLogger;

pub fn init_logger(verbosity: Verbosity) -> Result<(), log::SetLoggerError> {
    // Goes to stderr; stdout carries the demo output.
    SimpleLogger::new()
        .with_level(LevelFilter::Off)
        .with_module_level("autoclose", verbosity.into())
        .without_timestamps()
        .init()
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for LevelFilter {
    fn from(v: Verbosity) -> Self {
        match v {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Normal => LevelFilter::Error,
            Verbosity::Verbose => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Trace,
        }
    }
}
