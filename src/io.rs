//! Buffer acquisition: memory-mapped files, in-memory text and readers

use crate::error::{Error, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

enum Source<'a> {
    Mapped {
        mmap: Mmap,
        // Held open for as long as the mapping is alive.
        _file: File,
    },
    Owned(Vec<u8>),
    Borrowed(&'a [u8]),
}

/// An immutable byte region holding an entire CSV input.
///
/// Every row and cell handed out by the crate borrows from a `Buffer`, so the
/// buffer must outlive them; the borrow checker enforces this.
pub struct Buffer<'a> {
    source: Source<'a>,
}

impl Buffer<'static> {
    /// Map a file read-only.
    ///
    /// A missing file yields [`Error::FileNotFound`] and a zero-length file
    /// yields [`Error::EmptyFile`]; both are recoverable conditions.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;

        if file.metadata()?.len() == 0 {
            return Err(Error::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        // SAFETY: the mapping is read-only and never handed out mutably.
        // Concurrent modification of the file by another process is outside
        // what we can guard against, as with any mmap-based reader.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|source| Error::MapFailed {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = mmap.len(), "mapped csv file");

        Ok(Self {
            source: Source::Mapped { mmap, _file: file },
        })
    }

    /// Read everything from `reader` into an owned buffer. Empty input is allowed.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        tracing::debug!(bytes = data.len(), "read csv input");
        Ok(Self::owned(data))
    }

    /// Take ownership of bytes that are already in memory.
    pub fn owned(data: Vec<u8>) -> Self {
        Self {
            source: Source::Owned(data),
        }
    }
}

impl<'a> Buffer<'a> {
    /// Borrow caller-owned text, rejecting an empty string.
    pub fn from_text(content: &'a str) -> Result<Self> {
        if content.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self::borrowed(content.as_bytes()))
    }

    /// Borrow caller-owned bytes. An empty slice is accepted and yields no rows.
    pub fn borrowed(data: &'a [u8]) -> Self {
        Self {
            source: Source::Borrowed(data),
        }
    }

    /// Get a slice view of the whole buffer
    #[inline(always)]
    pub fn data(&self) -> &[u8] {
        match &self.source {
            Source::Mapped { mmap, .. } => &mmap[..],
            Source::Owned(data) => data.as_slice(),
            Source::Borrowed(data) => data,
        }
    }

    /// Get the length of the data
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Check if the buffer is empty
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the bytes come from a memory-mapped file.
    pub fn is_mapped(&self) -> bool {
        matches!(self.source, Source::Mapped { .. })
    }
}

impl std::fmt::Debug for Buffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len())
            .field("mapped", &self.is_mapped())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_mapped() {
        let temp_dir = std::env::temp_dir();
        let test_file = temp_dir.join("zerocsv_io_open.csv");

        {
            let mut file = File::create(&test_file).unwrap();
            file.write_all(b"a,b,c\n1,2,3\n4,5,6\n").unwrap();
        }

        let buffer = Buffer::open(&test_file).unwrap();

        assert!(buffer.is_mapped());
        assert_eq!(buffer.len(), 18);
        assert_eq!(buffer.data(), b"a,b,c\n1,2,3\n4,5,6\n");

        drop(buffer);
        std::fs::remove_file(test_file).ok();
    }

    #[test]
    fn test_open_empty_file() {
        let test_file = std::env::temp_dir().join("zerocsv_io_empty.csv");
        File::create(&test_file).unwrap();

        let err = Buffer::open(&test_file).unwrap_err();
        assert!(matches!(err, Error::EmptyFile { .. }), "got {err:?}");

        std::fs::remove_file(test_file).ok();
    }

    #[test]
    fn test_open_missing_file() {
        let test_file = std::env::temp_dir().join("zerocsv_io_definitely_missing.csv");
        std::fs::remove_file(&test_file).ok();

        let err = Buffer::open(&test_file).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }), "got {err:?}");
    }

    #[test]
    fn test_from_text() {
        let buffer = Buffer::from_text("a,b").unwrap();
        assert_eq!(buffer.data(), b"a,b");
        assert!(!buffer.is_mapped());

        assert!(matches!(Buffer::from_text(""), Err(Error::EmptyInput)));
        assert!(Buffer::borrowed(b"").is_empty());
    }

    #[test]
    fn test_read_from() {
        let buffer = Buffer::read_from(&b"x,y\n"[..]).unwrap();
        assert_eq!(buffer.data(), b"x,y\n");

        let empty = Buffer::read_from(io::empty()).unwrap();
        assert!(empty.is_empty());
    }
}
