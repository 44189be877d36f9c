use std::collections::BTreeMap;

use fracsets_domain as domain;
use log::{info, warn};
use serde_json::Value;

use crate::{ImportError, ImportReport};

const NAME_KEYS: [&str; 3] = ["exercise", "name", "Exercise"];
const VALUE_KEYS: [&str; 4] = ["1rm", "1RM", "rm", "value"];

/// Reads one-rep maxes from a flat `{name: value}` mapping or from a list of
/// `{exercise, 1rm}` objects. Values may be numbers or numeric strings.
pub fn parse_one_rep_maxes(
    document: &Value,
) -> Result<(BTreeMap<String, f64>, Vec<String>), ImportError> {
    let mut values = BTreeMap::new();
    let mut errors = vec![];

    match document {
        Value::Object(object) => {
            for (name, value) in object {
                if name.trim().is_empty() {
                    errors.push(format!("'{name}': Missing exercise name"));
                    continue;
                }
                match positive(value) {
                    Some(value) => {
                        values.insert(name.trim().to_string(), value);
                    }
                    None => errors.push(format!("'{name}': Invalid 1RM value {value}")),
                }
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let Value::Object(object) = item else {
                    errors.push(format!("Item {i}: Not a valid object"));
                    continue;
                };
                let Some(name) = NAME_KEYS
                    .iter()
                    .filter_map(|key| object.get(*key).and_then(Value::as_str))
                    .map(str::trim)
                    .find(|name| !name.is_empty())
                else {
                    errors.push(format!("Item {i}: Missing exercise name"));
                    continue;
                };
                match VALUE_KEYS
                    .iter()
                    .find_map(|key| object.get(*key).filter(|v| !v.is_null()))
                {
                    Some(value) => match positive(value) {
                        Some(value) => {
                            values.insert(name.to_string(), value);
                        }
                        None => {
                            errors.push(format!("Item {i} ({name}): Invalid 1RM value {value}"));
                        }
                    },
                    None => errors.push(format!("Item {i} ({name}): Missing 1RM value")),
                }
            }
        }
        _ => return Err(ImportError::ExpectedObjectOrArray),
    }

    Ok((values, errors))
}

fn positive(value: &Value) -> Option<f64> {
    let value = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(string) => string.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Merges the valid one-rep maxes of a document into a program, or replaces
/// all existing values with them.
///
/// A document without any valid value is rejected and leaves the program
/// unchanged, even in replace mode.
pub fn import_one_rep_maxes(
    program: &mut domain::Program,
    document: &Value,
    replace: bool,
) -> Result<ImportReport, ImportError> {
    let (values, errors) = parse_one_rep_maxes(document)?;

    for error in &errors {
        warn!("skipping 1RM entry: {error}");
    }

    if values.is_empty() {
        return Err(ImportError::NoOneRepMaxes);
    }

    let imported = program.merge_one_rep_maxes(values, replace);
    info!("imported {imported} 1RM values");

    Ok(ImportReport { imported, errors })
}

pub fn export_one_rep_maxes(program: &domain::Program) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(program.one_rep_maxes())
}
