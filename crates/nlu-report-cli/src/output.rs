//! Writing rendered documents to disk.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

/// Write `content` to `path`, appending instead of truncating when asked.
pub fn write_output(path: &Path, content: &str, append: bool) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    if !content.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    tracing::info!(path = %path.display(), append, bytes = content.len(), "output written");
    Ok(())
}
