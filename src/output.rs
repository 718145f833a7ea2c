use std::{fs, io, path::Path};

use tracing::debug;

/// Writes `count` followed by a newline, replacing the file's contents.
pub fn write_count(path: impl AsRef<Path>, count: u64) -> io::Result<()> {
    let path = path.as_ref();
    fs::write(path, format!("{count}\n"))?;
    debug!(path = %path.display(), count, "wrote count");
    Ok(())
}
