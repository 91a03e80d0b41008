use std::{
    env,
    fs,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// Utility struct for locating the directories strata reads from and writes to
pub struct ConfigPaths;

impl ConfigPaths {
    /// Per-user directory name, relative to `$HOME`
    pub const USER_DIR_NAME: &'static str = ".strata";

    /// System-wide configuration directory
    pub const SYSTEM_DIR: &'static str = "/etc/strata";

    /// Returns the per-user configuration directory, `$HOME/.strata`
    ///
    /// # Errors
    /// Returns an error if `HOME` is unset or empty
    pub fn user_dir() -> Result<PathBuf, Error> {
        let home = env::var("HOME")
            .ok()
            .filter(|home| !home.is_empty())
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "HOME environment variable not set"))?;

        Ok(PathBuf::from(home).join(Self::USER_DIR_NAME))
    }

    /// Returns the system-wide configuration directory
    pub fn system_dir() -> PathBuf {
        PathBuf::from(Self::SYSTEM_DIR)
    }

    /// Get the application log directory
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns error if `HOME` is unset or the directory cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let log_dir = Self::user_dir()?.join("logs");

        if !log_dir.exists() {
            fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }
}
