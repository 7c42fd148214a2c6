use std::collections::BTreeMap;

use tracing::debug;

use crate::errors::{FilterError, Result};
use crate::space::{Assignment, ConfigSpace};
use crate::value::ParamValue;

/// The filter criteria: required equalities between parameter names and
/// values, built once per invocation and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    entries: BTreeMap<String, ParamValue>,
}

impl ConstraintSet {
    /// Builds the set from a flattened sequence of name/value tokens.
    ///
    /// Value literals go through numeric inference ([`ParamValue::parse`]).
    /// A repeated name keeps its last value; an odd-length sequence is
    /// rejected before anything else happens.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        if tokens.len() % 2 != 0 {
            return Err(FilterError::OddPairCount);
        }
        let mut entries = BTreeMap::new();
        for pair in tokens.chunks(2) {
            let name = pair[0].as_ref().to_string();
            let value = ParamValue::parse(pair[1].as_ref());
            entries.insert(name, value);
        }
        debug!(constraints = entries.len(), "built constraint set");
        Ok(ConstraintSet { entries })
    }

    /// Checks every constrained name against the space's known parameters.
    ///
    /// Runs over the whole set before the caller may start scanning; the
    /// first unknown name (in the set's sorted order) aborts the run.
    pub fn validate_against<S: ConfigSpace + ?Sized>(&self, space: &S) -> Result<()> {
        let known = space.param_names();
        for name in self.entries.keys() {
            if !known.contains(&name.as_str()) {
                return Err(FilterError::UnknownParameter(name.clone()));
            }
        }
        Ok(())
    }

    /// True when the assignment agrees with every constrained parameter.
    /// Unconstrained parameters are free; the empty set matches everything.
    pub fn matches(&self, assignment: &Assignment) -> bool {
        self.entries
            .iter()
            .all(|(name, want)| assignment.get(name).map_or(false, |have| have == want))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
