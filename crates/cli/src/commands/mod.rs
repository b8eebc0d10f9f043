mod fetch;
mod lengths;
mod report;
mod shapes;

pub use fetch::*;
pub use lengths::*;
pub use report::*;
pub use shapes::*;

use crate::error::Error;
use std::{fs, path::Path};

/// Creates `dir` if it is missing and fails if something else is in the way.
pub(crate) fn ensure_dir(dir: &Path) -> Result<(), Error> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    } else if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}
