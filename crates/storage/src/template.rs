use std::collections::{BTreeMap, btree_map::Keys};

use fracsets_domain as domain;
use log::debug;

use crate::{Days, ImportError, week_days};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Template {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    #[serde(default)]
    pub days: Days,
}

/// Program templates grouped by category.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct Templates(BTreeMap<String, BTreeMap<String, Template>>);

impl Templates {
    /// Template names per category.
    pub fn categories(&self) -> impl Iterator<Item = (&String, Keys<'_, String, Template>)> {
        self.0
            .iter()
            .map(|(category, templates)| (category, templates.keys()))
    }

    pub fn get(&self, category: &str, name: &str) -> Result<&Template, ImportError> {
        self.0
            .get(category)
            .and_then(|templates| templates.get(name))
            .ok_or_else(|| ImportError::TemplateNotFound {
                category: category.to_string(),
                name: name.to_string(),
            })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }
}

pub fn parse_templates(text: &str) -> Result<Templates, ImportError> {
    Ok(serde_json::from_str(text)?)
}

/// Replaces the days of the current week by those of a template and renames
/// the program after the template.
///
/// An invalid template leaves the program unchanged.
pub fn apply_template(
    program: &mut domain::Program,
    templates: &Templates,
    category: &str,
    name: &str,
) -> Result<(), ImportError> {
    let template = templates.get(category, name)?;
    let days = week_days(template.days.clone())?;
    let program_name = template.program_name.as_deref().unwrap_or(name);

    debug!("applying template \"{category}/{name}\"");
    program.apply_template(Some(program_name), days);

    Ok(())
}
