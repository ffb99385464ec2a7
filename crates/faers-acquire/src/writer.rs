//! Incremental JSON array writing.
//!
//! Fetched pages stream into the raw file as they arrive, so a large
//! window never buffers every record in memory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{AcquireError, Result};

pub struct ArrayWriter {
    path: PathBuf,
    inner: BufWriter<File>,
    written: usize,
}

impl ArrayWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let io_err = |source| AcquireError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        let mut inner = BufWriter::new(file);
        inner.write_all(b"[").map_err(io_err)?;
        Ok(Self {
            path: path.to_path_buf(),
            inner,
            written: 0,
        })
    }

    pub fn push(&mut self, record: &Value) -> Result<()> {
        let io_err = |source| AcquireError::Io {
            path: self.path.clone(),
            source,
        };
        if self.written > 0 {
            self.inner.write_all(b",\n").map_err(io_err)?;
        }
        serde_json::to_writer(&mut self.inner, record).map_err(AcquireError::Serialize)?;
        self.written += 1;
        Ok(())
    }

    /// Close the array and flush. Returns the record count.
    pub fn finish(mut self) -> Result<usize> {
        let io_err = |source| AcquireError::Io {
            path: self.path.clone(),
            source,
        };
        self.inner.write_all(b"]\n").map_err(io_err)?;
        self.inner.flush().map_err(io_err)?;
        Ok(self.written)
    }
}
