use std::collections::HashSet;
use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::TemplateError;
use crate::space::{Assignment, ConfigSpace};
use crate::value::ParamValue;

/// A sweep template: the parameters of a configuration space and the
/// candidate values of each.
///
/// Declaration order is meaningful. Enumeration walks the cross product of
/// the domains with the last declared parameter varying fastest:
///
/// ```toml
/// [[param]]
/// name = "rate"
/// values = [1, 2, 5]
///
/// [[param]]
/// name = "mode"
/// values = ["a", "b"]
/// ```
///
/// yields variants `(1,a) (1,b) (2,a) (2,b) (5,a) (5,b)` at indices 0..=5.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepTemplate {
    #[serde(rename = "param", default)]
    pub params: Vec<ParamField>,
}

/// One parameter and its value domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamField {
    pub name: String,
    pub values: Vec<ParamValue>,
}

impl SweepTemplate {
    /// Loads and validates a template file. A `.json` extension selects the
    /// JSON reader; everything else is read as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let template = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents)?,
            _ => Self::from_toml_str(&contents)?,
        };
        debug!(
            path = %path.display(),
            params = template.params.len(),
            variants = template.size(),
            "loaded sweep template"
        );
        Ok(template)
    }

    /// Parses and validates a TOML template.
    pub fn from_toml_str(s: &str) -> Result<Self, TemplateError> {
        let template: Self = toml::from_str(s)?;
        template.validate()?;
        Ok(template)
    }

    /// Parses and validates a JSON template.
    pub fn from_json_str(s: &str) -> Result<Self, TemplateError> {
        let template: Self = serde_json::from_str(s)?;
        template.validate()?;
        Ok(template)
    }

    /// Structural check: parameter names must be unique. Domains are taken
    /// as declared; an empty domain is legal and empties the whole space.
    pub fn validate(&self) -> Result<(), TemplateError> {
        let mut seen = HashSet::new();
        for field in &self.params {
            if !seen.insert(field.name.as_str()) {
                return Err(TemplateError::DuplicateParameter(field.name.clone()));
            }
        }
        Ok(())
    }

    /// Number of variants the enumeration will produce.
    pub fn size(&self) -> usize {
        self.params.iter().map(|p| p.values.len()).product()
    }
}

impl ConfigSpace for SweepTemplate {
    fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }

    fn assignments(&self) -> Box<dyn Iterator<Item = Assignment> + '_> {
        // The nullary product still has one (empty) member.
        if self.params.is_empty() {
            return Box::new(std::iter::once(Assignment::new()));
        }
        let combos = self
            .params
            .iter()
            .map(|p| p.values.iter())
            .multi_cartesian_product();
        Box::new(combos.map(move |combo| {
            self.params
                .iter()
                .zip(combo)
                .map(|(field, value)| (field.name.clone(), value.clone()))
                .collect::<Assignment>()
        }))
    }
}
