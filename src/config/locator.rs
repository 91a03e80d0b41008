use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use super::ConfigPaths;

/// An opened configuration file.
///
/// The file handle is closed when the source is dropped.
#[derive(Debug)]
pub struct ConfigSource {
    path: PathBuf,
    reader: BufReader<File>,
}

impl ConfigSource {
    /// Path the source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for ConfigSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

/// Resolves a config file name against an ordered list of directories.
///
/// The default search order is the per-user directory, then the system
/// directory. The first file that opens for reading wins.
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    search_dirs: Vec<PathBuf>,
    override_file: Option<PathBuf>,
}

impl ConfigLocator {
    /// Builds the default search list from the environment.
    ///
    /// When `HOME` is unset the per-user directory is left out.
    pub fn from_env() -> Self {
        let mut search_dirs = Vec::with_capacity(2);

        match ConfigPaths::user_dir() {
            Ok(dir) => search_dirs.push(dir),
            Err(e) => debug!("skipping per-user config directory: {e}"),
        }
        search_dirs.push(ConfigPaths::system_dir());

        Self::with_candidates(search_dirs)
    }

    /// Searches the given directories, in order.
    pub fn with_candidates(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_dirs,
            override_file: None,
        }
    }

    /// Uses exactly `path`, bypassing the directory search.
    pub fn with_override(path: PathBuf) -> Self {
        Self {
            search_dirs: Vec::new(),
            override_file: Some(path),
        }
    }

    /// Candidate paths for `name`, in the order they are tried.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        match &self.override_file {
            Some(path) => vec![path.clone()],
            None => self.search_dirs.iter().map(|dir| dir.join(name)).collect(),
        }
    }

    /// Opens the first readable candidate for `name`.
    ///
    /// Returns `None` when no candidate can be opened. Missing files are
    /// expected and only logged at debug level.
    pub fn locate(&self, name: &str) -> Option<ConfigSource> {
        self.candidates(name)
            .into_iter()
            .find_map(|path| Self::open(&path))
    }

    fn open(path: &Path) -> Option<ConfigSource> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file");
                return None;
            }
            Err(e) => {
                warn!(path = %path.display(), "cannot open config file: {e}");
                return None;
            }
        };

        match file.metadata() {
            Ok(metadata) if metadata.is_file() => Some(ConfigSource {
                path: path.to_path_buf(),
                reader: BufReader::new(file),
            }),
            Ok(_) => {
                warn!(path = %path.display(), "config path is not a regular file");
                None
            }
            Err(e) => {
                warn!(path = %path.display(), "cannot stat config file: {e}");
                None
            }
        }
    }
}
