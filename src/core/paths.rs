use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::RwLock;

use directories::ProjectDirs;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref PATHS: RwLock<Paths> = RwLock::new(Paths::default());
}

/// Data paths for the program
///
/// Stores a custom config path when one is provided on the command line,
/// falling back to the platform specific one otherwise.
#[derive(Debug, Default, Clone)]
pub struct Paths {
    custom_config_dir_path: Option<PathBuf>,
}

impl Paths {
    fn project_dir() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
    }

    /// The directory holding the config file, `None` when the platform has no home directory
    pub fn get_config_dir_path(&self) -> Option<Cow<PathBuf>> {
        if let Some(config_path) = &self.custom_config_dir_path {
            Some(Cow::Borrowed(config_path))
        } else {
            Self::project_dir().map(|dirs| Cow::Owned(PathBuf::from(dirs.config_dir())))
        }
    }

    pub fn set_config_dir_path(&mut self, config_dir_path: PathBuf) {
        self.custom_config_dir_path = Some(config_dir_path)
    }
}
