// healthdq-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Streams content into `path` through a temporary file in the same directory, then
/// renames it into place. Readers see either the old file or the complete new one.
///
/// `write` receives a buffered writer over the temporary file.
pub fn write_atomically<P, F>(path: P, write: F) -> Result<(), InfrastructureError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut dyn Write) -> Result<(), InfrastructureError>,
{
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let temp_file = tempfile::NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        write(&mut writer)?;
        writer.flush()?;
    }

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}
