pub mod demos;
pub mod error;
pub mod files;
pub mod header;
pub mod scope;
pub mod transcript;

use std::error::Error;

use demos::Settings;
use log::{info, warn};
use transcript::Transcript;

/// Run every enabled demo in order.
///
/// A demo's error is printed as a trace and the next demo still runs.
/// Returns how many demos reported a failure. Only a failure to write the
/// transcript itself is returned as an error.
pub fn run(settings: &Settings, transcript: &Transcript) -> Result<usize, std::io::Error> {
    let mut failed = 0;

    for demo in &settings.demos {
        info!("Running {}", demo);

        if let Err(e) = demo.run(settings, transcript) {
            warn!("{} failed: {}", demo, e);
            print_trace(transcript, &e)?;
            failed += 1;
        }
    }

    Ok(failed)
}

/// The error itself first, then each underlying cause.
pub fn print_trace(transcript: &Transcript, error: &dyn Error) -> Result<(), std::io::Error> {
    transcript.line(format!("Error: {}", error))?;

    let mut source = error.source();
    while let Some(cause) = source {
        transcript.line(format!("    caused by: {}", cause))?;
        source = cause.source();
    }

    Ok(())
}
