use std::collections::BTreeMap;

use fracsets_domain::{self as domain, Property};
use log::{debug, warn};
use serde_json::Value;

use crate::{ImportError, ImportReport};

/// An exercise in the format of the free exercise database.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub primary_muscles: Vec<String>,
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
    #[serde(default)]
    pub force: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub mechanic: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: Some(value.id.clone()),
            name: value.name.clone(),
            primary_muscles: value.primary_muscles.iter().map(muscle_name).collect(),
            secondary_muscles: value.secondary_muscles.iter().map(muscle_name).collect(),
            force: value.force.map(property_key),
            level: value.level.map(property_key),
            mechanic: value.mechanic.map(property_key),
            equipment: value.equipment.map(property_key),
            instructions: value.instructions.clone(),
            category: value.category.map(property_key),
            images: value.images.clone(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = ExerciseError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        if value.name.trim().is_empty() {
            return Err(ExerciseError::MissingName);
        }

        let primary_muscles = muscles(&value.primary_muscles);

        if primary_muscles.is_empty() {
            return Err(ExerciseError::MissingPrimaryMuscles(value.name));
        }

        Ok(Self {
            id: match value.id {
                Some(id) if !id.is_empty() => id,
                _ => domain::generate_exercise_id(&value.name),
            },
            primary_muscles,
            secondary_muscles: muscles(&value.secondary_muscles),
            force: property(value.force.as_deref()),
            level: property(value.level.as_deref()),
            mechanic: property(value.mechanic.as_deref()),
            equipment: property(value.equipment.as_deref()),
            category: property(value.category.as_deref()),
            instructions: value.instructions,
            images: value.images,
            name: value.name,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error("Missing required field 'name'")]
    MissingName,
    #[error("Exercise \"{0}\" has no primary muscles")]
    MissingPrimaryMuscles(String),
}

fn muscles(names: &[String]) -> Vec<domain::Muscle> {
    names.iter().filter_map(|m| domain::Muscle::new(m)).collect()
}

fn muscle_name(muscle: &domain::Muscle) -> String {
    muscle.as_ref().to_string()
}

fn property_key<P: Property>(property: P) -> String {
    property.name().to_lowercase()
}

fn property<P: Property>(key: Option<&str>) -> Option<P> {
    let key = key?;
    let property = P::from_name(key);
    if property.is_none() {
        debug!("ignoring unknown exercise property \"{key}\"");
    }
    property
}

/// Reads an exercise database file, a JSON array of exercises.
///
/// Invalid exercises are skipped.
pub fn parse_catalog(text: &str) -> Result<Vec<domain::Exercise>, ImportError> {
    let items = serde_json::from_str::<Vec<Value>>(text)?;
    let count = items.len();
    let exercises = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| {
            match serde_json::from_value::<Exercise>(item)
                .map_err(|err| err.to_string())
                .and_then(|e| domain::Exercise::try_from(e).map_err(|err| err.to_string()))
            {
                Ok(exercise) => Some(exercise),
                Err(err) => {
                    warn!("skipping catalog item {i}: {err}");
                    None
                }
            }
        })
        .collect::<Vec<_>>();

    debug!("read {} of {count} catalog exercises", exercises.len());

    Ok(exercises)
}

/// Adds the exercises of a document to a custom source.
///
/// The document may be a single exercise or an array of exercises. Every
/// item is validated on its own, so valid items are imported even if others
/// are rejected.
pub fn import_custom_exercises(
    document: &Value,
    source: &str,
    custom: &mut domain::CustomExercises,
) -> ImportReport {
    let items = match document {
        Value::Object(_) => std::slice::from_ref(document),
        Value::Array(items) => items.as_slice(),
        _ => {
            return ImportReport {
                imported: 0,
                errors: vec![ImportError::ExpectedObjectOrArray.to_string()],
            };
        }
    };
    let mut report = ImportReport::default();

    for (i, item) in items.iter().enumerate() {
        match custom_exercise(i, item).and_then(|exercise| {
            let name = exercise.name.clone();
            custom
                .add(source, exercise)
                .map_err(|_| format!("'{name}': Duplicate exercise name in source"))
        }) {
            Ok(()) => report.imported += 1,
            Err(err) => {
                warn!("{err}");
                report.errors.push(err);
            }
        }
    }

    report
}

fn custom_exercise(i: usize, item: &Value) -> Result<domain::Exercise, String> {
    let Value::Object(object) = item else {
        return Err(format!("Item {i}: Not a valid object"));
    };
    let name = match object.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name,
        _ => return Err(format!("Item {i}: Missing required field 'name'")),
    };
    if !object
        .get("primaryMuscles")
        .is_some_and(|m| m.as_array().is_some_and(|m| !m.is_empty()))
    {
        return Err(format!(
            "Item {i} ({name}): Missing required field 'primaryMuscles'"
        ));
    }

    serde_json::from_value::<Exercise>(item.clone())
        .map_err(|err| err.to_string())
        .and_then(|e| domain::Exercise::try_from(e).map_err(|err| err.to_string()))
        .map_err(|err| format!("Item {i} ({name}): {err}"))
}

/// Custom exercises grouped by source, as written by [`export_custom_exercises`].
pub fn parse_custom_exercises(text: &str) -> Result<domain::CustomExercises, ImportError> {
    let sources = serde_json::from_str::<BTreeMap<String, Value>>(text)?;
    let mut custom = domain::CustomExercises::default();

    for (source, exercises) in sources {
        let report = import_custom_exercises(&exercises, &source, &mut custom);
        debug!(
            "read {} custom exercises from \"{source}\", {} rejected",
            report.imported,
            report.failed()
        );
    }

    Ok(custom)
}

#[must_use]
pub fn export_custom_exercises(custom: &domain::CustomExercises) -> BTreeMap<String, Vec<Exercise>> {
    custom
        .sources()
        .map(|(source, exercises)| {
            (
                source.clone(),
                exercises.iter().map(Exercise::from).collect(),
            )
        })
        .collect()
}

#[must_use]
pub fn export_custom_source(custom: &domain::CustomExercises, source: &str) -> Vec<Exercise> {
    custom
        .sources()
        .filter(|(s, _)| s.as_str() == source)
        .flat_map(|(_, exercises)| exercises.iter().map(Exercise::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_catalog() {
        let exercises = parse_catalog(
            &json!([
                {
                    "id": "Barbell_Bench_Press_-_Medium_Grip",
                    "name": "Barbell Bench Press - Medium Grip",
                    "force": "push",
                    "level": "beginner",
                    "mechanic": "compound",
                    "equipment": "barbell",
                    "primaryMuscles": ["chest"],
                    "secondaryMuscles": ["shoulders", "triceps"],
                    "instructions": ["Lie back on a flat bench."],
                    "category": "strength",
                    "images": ["Barbell_Bench_Press_-_Medium_Grip/0.jpg"]
                },
                {
                    "name": "Clean and Jerk",
                    "force": null,
                    "equipment": "e-z curl bar",
                    "category": "olympic weightlifting",
                    "primaryMuscles": ["Shoulders"]
                },
                {"name": "Mystery"},
                {"name": "", "primaryMuscles": ["chest"]}
            ])
            .to_string(),
        )
        .unwrap();

        assert_eq!(exercises.len(), 2);
        let bench = &exercises[0];
        assert_eq!(bench.id, "Barbell_Bench_Press_-_Medium_Grip");
        assert_eq!(bench.force, Some(domain::Force::Push));
        assert_eq!(bench.level, Some(domain::Level::Beginner));
        assert_eq!(bench.mechanic, Some(domain::Mechanic::Compound));
        assert_eq!(bench.equipment, Some(domain::Equipment::Barbell));
        assert_eq!(bench.category, Some(domain::Category::Strength));
        assert_eq!(
            bench.secondary_muscles,
            vec![
                domain::Muscle::new("shoulders").unwrap(),
                domain::Muscle::new("triceps").unwrap()
            ]
        );
        let clean = &exercises[1];
        assert_eq!(clean.id, "Clean_and_Jerk");
        assert_eq!(clean.force, None);
        assert_eq!(clean.equipment, Some(domain::Equipment::EzCurlBar));
        assert_eq!(clean.category, Some(domain::Category::OlympicWeightlifting));
        assert_eq!(clean.primary_muscle(), domain::Muscle::new("shoulders").as_ref());
    }

    #[test]
    fn test_parse_catalog_not_an_array() {
        assert!(matches!(
            parse_catalog("{\"name\": \"Squat\"}"),
            Err(ImportError::Malformed(_))
        ));
    }

    #[test]
    fn test_import_custom_exercises() {
        let mut custom = domain::CustomExercises::default();

        let report = import_custom_exercises(
            &json!([
                {"name": "Landmine Press", "primaryMuscles": ["shoulders"], "secondaryMuscles": ["triceps"]},
                "Pendlay Row",
                {"primaryMuscles": ["lats"]},
                {"name": "Sissy Squat", "primaryMuscles": []},
                {"name": "landmine press", "primaryMuscles": ["chest"]},
                {"name": "Belt Squat", "primaryMuscles": ["quadriceps"], "id": "belt"}
            ]),
            "Gym",
            &mut custom,
        );

        assert_eq!(report.imported, 2);
        assert_eq!(report.failed(), 4);
        assert_eq!(
            report.errors,
            vec![
                "Item 1: Not a valid object",
                "Item 2: Missing required field 'name'",
                "Item 3 (Sissy Squat): Missing required field 'primaryMuscles'",
                "'landmine press': Duplicate exercise name in source",
            ]
        );
        assert_eq!(
            custom
                .exercises()
                .map(|e| (e.id.as_str(), e.name.as_str()))
                .collect::<Vec<_>>(),
            vec![("Landmine_Press", "Landmine Press"), ("belt", "Belt Squat")]
        );
    }

    #[rstest]
    #[case::string(json!("Landmine Press"))]
    #[case::number(json!(5))]
    fn test_import_custom_exercises_invalid_document(#[case] document: Value) {
        let mut custom = domain::CustomExercises::default();

        assert_eq!(
            import_custom_exercises(&document, "Gym", &mut custom),
            ImportReport {
                imported: 0,
                errors: vec!["Invalid JSON format: expected object or array".to_string()]
            }
        );
        assert!(custom.is_empty());
    }

    #[test]
    fn test_import_custom_exercise_object() {
        let mut custom = domain::CustomExercises::default();

        let report = import_custom_exercises(
            &json!({"name": "Landmine Press", "primaryMuscles": ["shoulders"]}),
            "Gym",
            &mut custom,
        );

        assert_eq!(report.imported, 1);
        assert!(report.errors.is_empty());
        let report = import_custom_exercises(
            &json!({"name": "Landmine Press", "primaryMuscles": ["shoulders"]}),
            "Home",
            &mut custom,
        );
        assert_eq!(report.imported, 1);
        assert_eq!(custom.len(), 2);
    }

    #[test]
    fn test_export_custom_exercises() {
        let mut custom = domain::CustomExercises::default();
        let mut press = domain::Exercise::new("Landmine Press", &["Shoulders"], &["triceps"]);
        press.equipment = Some(domain::Equipment::BodyOnly);
        custom.add("Gym", press).unwrap();
        custom
            .add("Home", domain::Exercise::new("Band Pull-Apart", &["rear deltoids"], &[]))
            .unwrap();

        let exported = serde_json::to_value(export_custom_exercises(&custom)).unwrap();

        assert_eq!(
            exported["Gym"],
            json!([{
                "id": "Landmine_Press",
                "name": "Landmine Press",
                "primaryMuscles": ["shoulders"],
                "secondaryMuscles": ["triceps"],
                "force": null,
                "level": null,
                "mechanic": null,
                "equipment": "body only",
                "instructions": [],
                "category": null,
                "images": []
            }])
        );
        assert_eq!(
            parse_custom_exercises(&exported.to_string()).unwrap(),
            custom
        );
        assert_eq!(export_custom_source(&custom, "Home").len(), 1);
        assert!(export_custom_source(&custom, "Work").is_empty());
    }
}
