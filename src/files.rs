pub mod reading;
pub mod writing;

pub use reading::{BufferedReader, FileReader};
pub use writing::{BufferedWriter, FileWriter};

// External
use std::io::Error;

/// Release whatever the handle holds.
///
/// Closing consumes the handle, so a handle can only ever be closed once.
/// Layered handles close the layer they wrap before reporting their own
/// closure.
pub trait Close {
    fn close(self) -> Result<(), Error>;
}
