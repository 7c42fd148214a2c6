use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::constraint::ConstraintSet;
use crate::emit;
use crate::errors::Result;
use crate::space::ConfigSpace;
use crate::sweep::SweepTemplate;

/// Everything one invocation needs: where the space comes from, what to
/// match, and how to label the output. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct FilterJob {
    pub template: PathBuf,
    pub constraints: ConstraintSet,
    pub prefix: Option<String>,
}

/// Validates the constraints against the space, then returns the lazy
/// stream of matching variant indices, in enumeration order.
///
/// The stream borrows the space and is consumed once; nothing is buffered.
/// Running dry without a single match is a legitimate outcome.
pub fn scan<'a, S: ConfigSpace>(
    space: &'a S,
    constraints: &'a ConstraintSet,
) -> Result<impl Iterator<Item = usize> + 'a> {
    constraints.validate_against(space)?;
    debug!(constraints = constraints.len(), "scanning enumeration");
    Ok(space
        .assignments()
        .enumerate()
        .filter(move |(_, assignment)| constraints.matches(assignment))
        .map(|(index, _)| index))
}

/// Runs a whole job: loads the template, scans, streams the matches to
/// `out`. Returns the number of matches written.
pub fn run_job<W: Write>(job: &FilterJob, out: W) -> Result<usize> {
    let template = SweepTemplate::load(&job.template)?;
    let matched = scan(&template, &job.constraints)?;
    let count = emit::write_matches(out, job.prefix.as_deref(), matched)?;
    debug!(matches = count, "filter run complete");
    Ok(count)
}
