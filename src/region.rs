//! The Region Mapper: opens a file read-only and exposes it as a
//! contiguous, immutable byte region with OS-level read-ahead hints.

use std::fs::File;
use std::path::Path;

use memmap2::{Advice, Mmap, UncheckedAdvice};

use crate::error::ScanError;

/// An immutable, contiguous, read-only view of a file's bytes.<br><br>
///
/// The mapping (and the file descriptor backing it) stays alive for as long
/// as the `Region` does; there is no separate `close` step to forget to
/// call — dropping the `Region` unmaps and closes everything, after issuing
/// a `DontNeed` hint to release the OS's page cache for this mapping.
#[derive(Debug)]
pub struct Region {
    // `None` for a zero-length file: mapping zero bytes is undefined
    // behavior for most `mmap` implementations, so the empty case never
    // calls `Mmap::map` at all.
    mmap: Option<Mmap>,
    // Kept alive so the file descriptor the mapping is backed by isn't
    // closed out from under it.
    _file: Option<File>,
}

impl Region {
    /// Opens `path` read-only and maps it into memory in its entirety.<br><br>
    ///
    /// # Errors
    /// * `ScanError::OpenFailed` - The file cannot be opened, or its length
    ///   cannot be obtained.
    /// * `ScanError::MapFailed` - The OS refuses to map the file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        if len == 0 {
            log::debug!("region: {} is empty, skipping mmap", path.display());
            return Ok(Self {
                mmap: None,
                _file: Some(file),
            });
        }

        // SAFETY: the caller is trusted not to modify or truncate `path`
        // while the returned `Region` is alive; this is the same
        // trade-off every `mmap`-based reader in this ecosystem makes
        // (there is no safe alternative to mapping a file for read-only
        // access on any major OS).
        let mmap = unsafe { Mmap::map(&file) }.map_err(ScanError::MapFailed)?;

        advise_best_effort(&mmap, path);

        log::debug!("region: mapped {} ({} bytes)", path.display(), len);
        Ok(Self {
            mmap: Some(mmap),
            _file: Some(file),
        })
    }

    /// The mapped bytes. Empty for a zero-length file.
    pub fn as_slice(&self) -> &[u8] {
        match &self.mmap {
            Some(mmap) => mmap,
            None => &[],
        }
    }

    /// The length of the mapped region, in bytes.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the mapped region is empty (i.e. the source file had length
    /// zero).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for Region {
    /// Releases the OS's cached pages for this mapping before unmapping
    /// and closing the file. Best-effort: a platform that doesn't support
    /// the hint simply does nothing, which is not an error for a hint.
    fn drop(&mut self) {
        if let Some(mmap) = &self.mmap {
            // SAFETY: `DontNeed` discards the mapping's cached pages; no
            // reference into `mmap` outlives this call, since `Region` is
            // being dropped and `as_slice` can no longer be called on it.
            let _ = unsafe { mmap.unchecked_advise(UncheckedAdvice::DontNeed) };
        }
    }
}

/// Issues the sequential-access and will-need hints from spec §4.1. Both
/// are advisory: a platform or kernel that rejects them must not affect the
/// scan's correctness or observable behavior, only its throughput.
fn advise_best_effort(mmap: &Mmap, path: &Path) {
    if let Err(err) = mmap.advise(Advice::Sequential) {
        log::debug!(
            "region: sequential-access hint rejected for {}: {}",
            path.display(),
            err
        );
    }
    if let Err(err) = mmap.advise(Advice::WillNeed) {
        log::debug!(
            "region: will-need hint rejected for {}: {}",
            path.display(),
            err
        );
    }
}
