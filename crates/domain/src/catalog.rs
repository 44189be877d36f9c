use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::{Exercise, Muscle};

/// Read-only access to exercise metadata.
///
/// Lookups are exact and case-sensitive. Missing exercises are not an error,
/// callers treat them as contributing no volume.
pub trait ExerciseCatalog {
    fn exercises(&self) -> &[Exercise];

    fn lookup(&self, name: &str) -> Option<&Exercise> {
        self.exercises().iter().find(|e| e.name == name)
    }

    fn exercises_targeting(&self, muscle: &Muscle) -> Vec<&Exercise> {
        self.exercises()
            .iter()
            .filter(|e| e.targets(muscle))
            .collect()
    }
}

impl ExerciseCatalog for [Exercise] {
    fn exercises(&self) -> &[Exercise] {
        self
    }
}

impl ExerciseCatalog for Vec<Exercise> {
    fn exercises(&self) -> &[Exercise] {
        self
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    index: HashMap<String, usize>,
}

impl Catalog {
    #[must_use]
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self::with_custom(exercises, &CustomExercises::default())
    }

    /// Custom exercises shadow base exercises of the same name.
    #[must_use]
    pub fn with_custom(base: Vec<Exercise>, custom: &CustomExercises) -> Self {
        let mut exercises = Vec::with_capacity(base.len() + custom.len());
        let mut index = HashMap::new();

        for exercise in custom.exercises().cloned().chain(base) {
            if index.contains_key(&exercise.name) {
                debug!("ignoring duplicate catalog exercise \"{}\"", exercise.name);
                continue;
            }
            index.insert(exercise.name.clone(), exercises.len());
            exercises.push(exercise);
        }

        Self { exercises, index }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl ExerciseCatalog for Catalog {
    fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    fn lookup(&self, name: &str) -> Option<&Exercise> {
        self.index.get(name).map(|i| &self.exercises[*i])
    }
}

/// User-defined exercises grouped by the source they were imported from.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CustomExercises {
    sources: BTreeMap<String, Vec<Exercise>>,
}

impl CustomExercises {
    /// Names must be unique within a source, ignoring case.
    pub fn add(&mut self, source: &str, exercise: Exercise) -> Result<(), CatalogError> {
        let exercises = self.sources.entry(source.to_string()).or_default();

        if exercises
            .iter()
            .any(|e| e.name.to_lowercase() == exercise.name.to_lowercase())
        {
            return Err(CatalogError::Duplicate {
                name: exercise.name,
                collection: source.to_string(),
            });
        }

        exercises.push(exercise);
        Ok(())
    }

    /// Removes a source that becomes empty.
    pub fn remove(&mut self, source: &str, name: &str) -> Result<Exercise, CatalogError> {
        let exercises = self
            .sources
            .get_mut(source)
            .ok_or_else(|| CatalogError::UnknownSource(source.to_string()))?;
        let position = exercises
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| CatalogError::UnknownExercise {
                name: name.to_string(),
                collection: source.to_string(),
            })?;
        let exercise = exercises.remove(position);

        if exercises.is_empty() {
            self.sources.remove(source);
        }

        Ok(exercise)
    }

    pub fn remove_source(&mut self, source: &str) -> Option<Vec<Exercise>> {
        self.sources.remove(source)
    }

    pub fn sources(&self) -> impl Iterator<Item = (&String, &Vec<Exercise>)> {
        self.sources.iter().filter(|(_, e)| !e.is_empty())
    }

    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.sources.values().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("Exercise \"{name}\" already exists in \"{collection}\"")]
    Duplicate { name: String, collection: String },
    #[error("Unknown source \"{0}\"")]
    UnknownSource(String),
    #[error("Exercise \"{name}\" not found in \"{collection}\"")]
    UnknownExercise { name: String, collection: String },
}
