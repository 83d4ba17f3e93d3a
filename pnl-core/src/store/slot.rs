use anyhow::{Context, Result, bail};
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A single named place holding the serialized entry map.
///
/// Implementations replace the whole content on every write.
pub trait StorageSlot {
    /// `Ok(None)` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>>;

    fn write(&self, contents: &str) -> Result<()>;
}

/// Slot backed by one JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        Ok(Some(contents))
    }

    /// Writes to a sibling temporary file first, then renames it over the target,
    /// so a failed write never leaves a half-written file behind.
    fn write(&self, contents: &str) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&parent)
            .with_context(|| format!("creating temporary file in {}", parent.display()))?;
        tmp.write_all(contents.as_bytes())
            .with_context(|| format!("writing temporary file for {}", self.path.display()))?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

/// In-process slot, used in tests and anywhere persistence is not wanted.
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: RefCell<Option<String>>,
    read_only: bool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with raw `contents`, as if a previous session had written them.
    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: RefCell::new(Some(contents.to_string())),
            read_only: false,
        }
    }

    /// A slot whose writes always fail.
    pub fn read_only(contents: Option<&str>) -> Self {
        Self {
            contents: RefCell::new(contents.map(str::to_string)),
            read_only: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        if self.read_only {
            bail!("storage slot is read-only");
        }
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}
