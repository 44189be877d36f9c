use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use fracsets_domain as domain;
use log::{debug, error};

use crate::{
    ImportError, StorageError, Templates, export_custom_exercises, export_program, parse_catalog,
    parse_custom_exercises, parse_program, parse_templates,
};

pub trait Repository {
    fn read_catalog(&self) -> Result<Vec<domain::Exercise>, StorageError>;

    fn read_custom_exercises(&self) -> Result<domain::CustomExercises, StorageError>;
    fn write_custom_exercises(&self, custom: &domain::CustomExercises)
    -> Result<(), StorageError>;

    fn read_templates(&self) -> Result<Templates, StorageError>;

    fn read_program(&self, path: &Path) -> Result<domain::Program, StorageError>;
    fn write_program(&self, path: &Path, program: &domain::Program) -> Result<(), StorageError>;

    /// The base catalog with the custom exercises in front.
    fn read_full_catalog(&self) -> Result<domain::Catalog, StorageError> {
        Ok(domain::Catalog::with_custom(
            self.read_catalog()?,
            &self.read_custom_exercises()?,
        ))
    }
}

/// JSON documents in the file system.
///
/// Missing custom exercise and template files are treated as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRepository {
    pub catalog: PathBuf,
    pub custom_exercises: PathBuf,
    pub templates: PathBuf,
}

pub const CATALOG_FILE: &str = "exercises.json";
pub const CUSTOM_EXERCISES_FILE: &str = "custom_exercises.json";
pub const TEMPLATES_FILE: &str = "program_templates.json";

impl FileRepository {
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            catalog: data_dir.join(CATALOG_FILE),
            custom_exercises: data_dir.join(CUSTOM_EXERCISES_FILE),
            templates: data_dir.join(TEMPLATES_FILE),
        }
    }
}

impl Repository for FileRepository {
    fn read_catalog(&self) -> Result<Vec<domain::Exercise>, StorageError> {
        let exercises = read(&self.catalog, parse_catalog).inspect_err(|err| {
            error!("failed to load exercise catalog: {err}");
        })?;
        debug!(
            "loaded {} exercises from {}",
            exercises.len(),
            self.catalog.display()
        );
        Ok(exercises)
    }

    fn read_custom_exercises(&self) -> Result<domain::CustomExercises, StorageError> {
        read_optional(&self.custom_exercises, parse_custom_exercises)
    }

    fn write_custom_exercises(
        &self,
        custom: &domain::CustomExercises,
    ) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(&export_custom_exercises(custom)).map_err(
            |source| StorageError::Serialization {
                path: self.custom_exercises.clone(),
                source,
            },
        )?;
        write(&self.custom_exercises, &text)
    }

    fn read_templates(&self) -> Result<Templates, StorageError> {
        read_optional(&self.templates, parse_templates)
    }

    fn read_program(&self, path: &Path) -> Result<domain::Program, StorageError> {
        read(path, parse_program)
    }

    fn write_program(&self, path: &Path, program: &domain::Program) -> Result<(), StorageError> {
        let text = export_program(program).map_err(|source| StorageError::Serialization {
            path: path.to_path_buf(),
            source,
        })?;
        write(path, &text)
    }
}

fn read<T>(
    path: &Path,
    parse: impl FnOnce(&str) -> Result<T, ImportError>,
) -> Result<T, StorageError> {
    let text = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text).map_err(|source| StorageError::Import {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional<T: Default>(
    path: &Path,
    parse: impl FnOnce(&str) -> Result<T, ImportError>,
) -> Result<T, StorageError> {
    match read(path, parse) {
        Err(StorageError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            debug!("{} not found", path.display());
            Ok(T::default())
        }
        result => result,
    }
}

fn write(path: &Path, text: &str) -> Result<(), StorageError> {
    fs::write(path, text).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}
