use log::info;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ErrorKind {
    MissingInput(PathBuf),
    Io(io::Error),
}

impl From<io::Error> for ErrorKind {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingInput(path) => write!(f, "file not found: {}", path.display()),
            ErrorKind::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for ErrorKind {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ErrorKind::MissingInput(_) => None,
            ErrorKind::Io(e) => Some(e),
        }
    }
}

pub type RepairResult<T> = Result<T, ErrorKind>;

/// Reads the whole document as raw bytes.
pub fn read_document(path: &Path) -> RepairResult<Vec<u8>> {
    if !path.exists() {
        return Err(ErrorKind::MissingInput(path.to_path_buf()));
    }
    info!("reading {}", path.display());
    let bytes = fs::read(path)?;
    info!("read {} bytes", bytes.len());
    Ok(bytes)
}

/// Writes the repaired text as UTF-8, replacing any existing file.
pub fn write_document(path: &Path, text: &str) -> RepairResult<()> {
    fs::write(path, text.as_bytes())?;
    info!("wrote {}", path.display());
    Ok(())
}
