use std::collections::BTreeMap;

use crate::value::ParamValue;

/// One variant's complete parameter binding.
pub type Assignment = BTreeMap<String, ParamValue>;

/// Contract for anything that can enumerate configuration variants.
///
/// The enumeration must be ordered, finite, and stable across repeated calls
/// to [`assignments`](ConfigSpace::assignments) within one invocation;
/// variant `i` is the `i`-th item of the stream. How the space is computed
/// (cross product, explicit list, ...) is the implementor's business.
pub trait ConfigSpace {
    /// Every parameter name the space defines, in declaration order.
    fn param_names(&self) -> Vec<&str>;

    /// The ordered stream of per-variant assignments.
    fn assignments(&self) -> Box<dyn Iterator<Item = Assignment> + '_>;
}
