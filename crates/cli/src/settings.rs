use std::{
    fs,
    path::{Path, PathBuf},
};

use fracsets_domain as domain;
use fracsets_storage::{FileRepository, UserProfile};
use log::LevelFilter;

pub const DEFAULT_SETTINGS_FILE: &str = "fracsets.json";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub log_level: LogLevel,
    /// Directory of the exercise database, custom exercises, templates and log.
    pub data_dir: PathBuf,
    pub catalog: Option<PathBuf>,
    pub custom_exercises: Option<PathBuf>,
    pub templates: Option<PathBuf>,
    /// Applied over the profile of programs that are analyzed.
    pub profile: Option<UserProfile>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            data_dir: PathBuf::from("data"),
            catalog: None,
            custom_exercises: None,
            templates: None,
            profile: None,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Settings {
    /// Reads the given settings file, or the default settings file if it
    /// exists. Fields missing in the file keep their defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(DEFAULT_SETTINGS_FILE);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };
        let text = fs::read_to_string(&path).map_err(|source| SettingsError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SettingsError::Json { path, source })
    }

    #[must_use]
    pub fn repository(&self) -> FileRepository {
        let mut repository = FileRepository::new(&self.data_dir);
        if let Some(catalog) = &self.catalog {
            repository.catalog.clone_from(catalog);
        }
        if let Some(custom_exercises) = &self.custom_exercises {
            repository.custom_exercises.clone_from(custom_exercises);
        }
        if let Some(templates) = &self.templates {
            repository.templates.clone_from(templates);
        }
        repository
    }

    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("log.json")
    }

    /// A program's own profile with the configured profile merged over it.
    pub fn apply_profile(
        &self,
        program: &mut domain::Program,
    ) -> Result<(), fracsets_storage::ImportError> {
        match &self.profile {
            Some(profile) => profile.clone().merge_into(&mut program.profile),
            None => Ok(()),
        }
    }
}
