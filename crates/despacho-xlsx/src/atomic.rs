use anyhow::Context;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `bytes` to `path`.
///
/// Writes to a temp file in the destination directory, flushes, then renames
/// into place, so user-visible export paths never hold a partially written
/// file if the process dies mid-save.
pub fn write_file_atomic(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    write_atomic_io(path, bytes).with_context(|| format!("write file atomically to {path:?}"))
}

fn write_atomic_io(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    // A bare file name yields an empty parent; fall back to the current
    // directory so the temp file still lands next to the destination.
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.as_file_mut().write_all(bytes)?;
    tmp.as_file_mut().flush()?;
    tmp.as_file().sync_all()?;

    match tmp.persist(path) {
        Ok(_) => Ok(()),
        Err(err) if err.error.kind() == std::io::ErrorKind::AlreadyExists => {
            // Rename does not clobber on every platform/filesystem.
            let _ = std::fs::remove_file(path);
            err.file.persist(path).map(|_| ()).map_err(|e| e.error)
        }
        Err(err) => Err(err.error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_replaces_existing_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.xlsx");

        write_file_atomic(&path, b"first").expect("first write");
        assert_eq!(std::fs::read(&path).expect("read"), b"first");

        write_file_atomic(&path, b"second").expect("overwrite");
        assert_eq!(std::fs::read(&path).expect("read"), b"second");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested/deep/out.xlsx");
        write_file_atomic(&path, b"data").expect("write");
        assert_eq!(std::fs::read(&path).expect("read"), b"data");
    }
}
