use crate::error::{LabelError, LabelResult};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Reads a text dump, replacing invalid UTF-8 sequences instead of failing.
pub fn read_text_lossy(path: &Path) -> LabelResult<String> {
    let bytes = fs::read(path).map_err(|e| missing_or_io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads a file that this pipeline wrote itself; it must be valid UTF-8.
pub fn read_text(path: &Path) -> LabelResult<String> {
    match fs::read_to_string(path) {
        Ok(s) => Ok(s),
        Err(e) if e.kind() == ErrorKind::InvalidData => Err(LabelError::MalformedReport(format!(
            "{} is not valid UTF-8",
            path.display()
        ))),
        Err(e) => Err(missing_or_io(path, e)),
    }
}

/// Replaces `path` with `bytes` in one step: the content goes to a temp file
/// in the same directory which is then renamed over the target.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> LabelResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let fail = |source: std::io::Error| LabelError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    fs::create_dir_all(&parent).map_err(fail)?;
    let mut tmp = NamedTempFile::new_in(&parent).map_err(fail)?;
    tmp.write_all(bytes).map_err(fail)?;
    tmp.flush().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;
    Ok(())
}

fn missing_or_io(path: &Path, e: std::io::Error) -> LabelError {
    if e.kind() == ErrorKind::NotFound {
        LabelError::MissingSource {
            path: path.to_path_buf(),
        }
    } else {
        LabelError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_text_lossy(&tmp.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, LabelError::MissingSource { .. }));
    }

    #[test]
    fn lossy_read_replaces_invalid_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("dump.txt");
        fs::write(&path, b"Dog's Name \xff*\n").unwrap();
        let text = read_text_lossy(&path).unwrap();
        assert_eq!(text, "Dog's Name \u{fffd}*\n");
    }

    #[test]
    fn atomic_write_creates_parents_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("out.md");
        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
