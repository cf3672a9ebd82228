use std::fmt::{Display, Formatter};

/// The closed set of errors that can occur while scanning a file.<br><br>
///
/// Every public scanning function returns exactly one of these kinds on
/// failure, and never a partial result alongside it.
#[derive(Debug)]
pub enum ScanError {
    /// Thrown when a caller-supplied argument violates a documented
    /// constraint (empty pattern, pattern longer than 4096 bytes, a
    /// `max_matches` of zero, ...).
    InvalidArgument(String),
    /// Thrown when the target file cannot be opened for reading, or its
    /// length cannot be obtained.
    OpenFailed(std::io::Error),
    /// Thrown when the OS refuses to map the file into the address space.
    MapFailed(std::io::Error),
    /// Thrown when allocating space for match buffers fails.
    OutOfMemory,
    /// Thrown when worker dispatch or join fails unexpectedly (e.g. a
    /// worker thread panicked).
    Internal(String),
}

impl Display for ScanError {
    /// Formats the various errors that can occur while scanning a file.<br><br>
    ///
    /// # Arguments
    /// * `f` - The formatter.
    ///
    /// # Returns
    /// Whether the formatting was successful or not.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {}", message),
            Self::OpenFailed(err) => write!(f, "failed to open file: {}", err),
            Self::MapFailed(err) => write!(f, "failed to map file into memory: {}", err),
            Self::OutOfMemory => write!(f, "allocation failed while collecting matches"),
            Self::Internal(message) => write!(f, "internal error: {}", message),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OpenFailed(err) | Self::MapFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScanError {
    /// Every I/O failure reachable from [`Region::open`](crate::region::Region::open)
    /// before the mapping itself happens — missing file, permission denial,
    /// a failed `fstat` — collapses into `OpenFailed`, matching the spec's
    /// single "file-system-level I/O refusal" kind. A failed `mmap` call is
    /// reported separately as `MapFailed`, since the OS is refusing the
    /// mapping rather than the open.
    fn from(err: std::io::Error) -> Self {
        Self::OpenFailed(err)
    }
}
