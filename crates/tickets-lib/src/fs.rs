//! Filesystem capability used by every storage, backup, and import path.
//!
//! Storage code never touches `std::fs` directly; it goes through a
//! [`FileSystem`] handed to it by the caller. Two implementations ship:
//!
//! - [`OsFileSystem`] delegates to the operating system.
//! - [`MemoryFileSystem`] keeps everything in memory and can inject faults
//!   per operation, for deterministic tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A directory entry as reported by [`FileSystem::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Basic file metadata as reported by [`FileSystem::metadata`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub is_dir: bool,
    pub len: u64,
}

/// Filesystem operations the storage engine depends on.
///
/// Every operation may fail with an [`io::Error`]; absent files and
/// directories are reported with [`io::ErrorKind::NotFound`].
pub trait FileSystem: Send + Sync {
    /// Resolve the current user's home directory.
    fn home_dir(&self) -> io::Result<PathBuf>;

    /// Create a directory and all missing parents. No-op if it exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Read the full contents of a file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write the full contents of a file, creating or truncating it.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// List the entries of a directory (names only, non-recursive).
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Query whether a path exists and its basic metadata.
    fn metadata(&self, path: &Path) -> io::Result<Metadata>;

    /// Open a file for sequential line-based reading.
    ///
    /// The handle is released when the returned reader is dropped.
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>>;
}

// ============================================================================
// Operating system
// ============================================================================

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct OsFileSystem {
    home_override: Option<PathBuf>,
}

impl OsFileSystem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `home` instead of the user's real home directory.
    #[must_use]
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home_override: Some(home.into()),
        }
    }
}

impl FileSystem for OsFileSystem {
    fn home_dir(&self) -> io::Result<PathBuf> {
        if let Some(home) = &self.home_override {
            return Ok(home.clone());
        }

        // $HOME first so containers and test harnesses can redirect it
        if let Some(home) = std::env::var_os("HOME").filter(|h| !h.is_empty()) {
            return Ok(PathBuf::from(home));
        }

        dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine home directory",
            )
        })
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type()?.is_dir(),
            });
        }
        Ok(entries)
    }

    fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        let meta = fs::metadata(path)?;
        Ok(Metadata {
            is_dir: meta.is_dir(),
            len: meta.len(),
        })
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>> {
        let file = fs::File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

// ============================================================================
// In memory
// ============================================================================

/// Names of the [`FileSystem`] operations, used to inject faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FsOp {
    HomeDir,
    CreateDirAll,
    Read,
    Write,
    ReadDir,
    Metadata,
    Open,
}

#[derive(Debug, Default)]
struct MemoryState {
    home: PathBuf,
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    faults: HashMap<FsOp, io::ErrorKind>,
    read_faults: HashMap<PathBuf, usize>,
}

impl MemoryState {
    fn check(&self, op: FsOp) -> io::Result<()> {
        match self.faults.get(&op) {
            Some(kind) => Err(io::Error::new(*kind, format!("injected {op:?} failure"))),
            None => Ok(()),
        }
    }

    fn insert_dir_with_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

/// In-memory [`FileSystem`] with per-operation fault injection.
///
/// Seeding helpers ([`add_file`](Self::add_file), [`add_dir`](Self::add_dir))
/// create parent directories implicitly. Trait writes do not: writing into a
/// missing directory fails with `NotFound`, as it would on disk.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    state: Mutex<MemoryState>,
}

impl MemoryFileSystem {
    /// Create an empty filesystem whose home directory is `home`.
    #[must_use]
    pub fn new(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let mut state = MemoryState {
            home: home.clone(),
            ..MemoryState::default()
        };
        state.insert_dir_with_ancestors(&home);
        Self {
            state: Mutex::new(state),
        }
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut state = self.state();
        if let Some(parent) = path.parent() {
            state.insert_dir_with_ancestors(parent);
        }
        state.files.insert(path.to_path_buf(), contents.into());
    }

    /// Seed a directory and its parents.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.state().insert_dir_with_ancestors(path.as_ref());
    }

    /// Current contents of a file, if present.
    #[must_use]
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.state().files.get(path.as_ref()).cloned()
    }

    /// Whether a file exists at `path`.
    #[must_use]
    pub fn has_file(&self, path: impl AsRef<Path>) -> bool {
        self.state().files.contains_key(path.as_ref())
    }

    /// All file paths, sorted.
    #[must_use]
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.state().files.keys().cloned().collect()
    }

    /// Make every call to `op` fail with `kind` until cleared.
    pub fn fail_on(&self, op: FsOp, kind: io::ErrorKind) {
        self.state().faults.insert(op, kind);
    }

    /// Remove a fault injected with [`fail_on`](Self::fail_on).
    pub fn clear_fault(&self, op: FsOp) {
        self.state().faults.remove(&op);
    }

    /// Readers opened on `path` fail once `after_bytes` bytes have been read.
    pub fn fail_reads_after(&self, path: impl AsRef<Path>, after_bytes: usize) {
        self.state()
            .read_faults
            .insert(path.as_ref().to_path_buf(), after_bytes);
    }
}

fn is_a_directory(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::IsADirectory,
        format!("{} is a directory", path.display()),
    )
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{}: no such file or directory", path.display()),
    )
}

impl FileSystem for MemoryFileSystem {
    fn home_dir(&self) -> io::Result<PathBuf> {
        let state = self.state();
        state.check(FsOp::HomeDir)?;
        Ok(state.home.clone())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state();
        state.check(FsOp::CreateDirAll)?;
        if state.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", path.display()),
            ));
        }
        state.insert_dir_with_ancestors(path);
        Ok(())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let state = self.state();
        state.check(FsOp::Read)?;
        if state.dirs.contains(path) {
            return Err(is_a_directory(path));
        }
        state.files.get(path).cloned().ok_or_else(|| not_found(path))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self.state();
        state.check(FsOp::Write)?;
        if state.dirs.contains(path) {
            return Err(is_a_directory(path));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !state.dirs.contains(parent) {
                return Err(not_found(parent));
            }
        }
        state.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let state = self.state();
        state.check(FsOp::ReadDir)?;
        if !state.dirs.contains(path) {
            if state.files.contains_key(path) {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("{} is not a directory", path.display()),
                ));
            }
            return Err(not_found(path));
        }

        let child_name = |child: &Path| -> Option<String> {
            (child.parent() == Some(path))
                .then(|| child.file_name())
                .flatten()
                .map(|n| n.to_string_lossy().into_owned())
        };

        let dirs = state.dirs.iter().filter_map(|d| {
            child_name(d.as_path()).map(|name| DirEntry { name, is_dir: true })
        });
        let files = state.files.keys().filter_map(|f| {
            child_name(f.as_path()).map(|name| DirEntry {
                name,
                is_dir: false,
            })
        });
        Ok(dirs.chain(files).collect())
    }

    fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        let state = self.state();
        state.check(FsOp::Metadata)?;
        if state.dirs.contains(path) {
            return Ok(Metadata {
                is_dir: true,
                len: 0,
            });
        }
        state
            .files
            .get(path)
            .map(|data| Metadata {
                is_dir: false,
                len: data.len() as u64,
            })
            .ok_or_else(|| not_found(path))
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>> {
        let state = self.state();
        state.check(FsOp::Open)?;
        if state.dirs.contains(path) {
            return Err(is_a_directory(path));
        }
        let data = state.files.get(path).cloned().ok_or_else(|| not_found(path))?;

        match state.read_faults.get(path) {
            Some(&limit) => Ok(Box::new(BufReader::new(FaultyReader {
                inner: Cursor::new(data),
                remaining: limit,
            }))),
            None => Ok(Box::new(Cursor::new(data))),
        }
    }
}

/// Reader that yields `remaining` bytes and then fails.
struct FaultyReader {
    inner: Cursor<Vec<u8>>,
    remaining: usize,
}

impl Read for FaultyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::other("injected read failure"));
        }
        let cap = buf.len().min(self.remaining);
        let n = self.inner.read(&mut buf[..cap])?;
        self.remaining -= n;
        Ok(n)
    }
}
