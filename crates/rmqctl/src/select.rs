//! Queue selection: turns command-line terms into an ordered list of
//! target queue names.

use crate::QueueInfo;
use crate::error::SelectionError;
use regex::Regex;

/// How the command-line terms should be interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionSpec {
    /// Exact queue names, taken verbatim. Existence is checked at
    /// deletion time, not here.
    Literal { names: Vec<String> },
    /// Regular expressions matched (unanchored) against the names of
    /// queues already known to exist.
    Pattern { patterns: Vec<String> },
}

/// Compute the ordered list of queue names to act on.
///
/// Pattern terms are compiled up front, so a bad pattern fails the
/// whole selection before any matching happens. In pattern mode the
/// result follows inventory order, then pattern order within each
/// queue; a name matching several patterns appears once per match.
/// That duplication is deliberate and flows through to deletion,
/// where the repeat attempt surfaces as a "not found" outcome.
///
/// No I/O, deterministic given identical inputs.
pub fn select(
    inventory: &[QueueInfo],
    spec: &SelectionSpec,
) -> Result<Vec<String>, SelectionError> {
    match spec {
        SelectionSpec::Literal { names } => Ok(names.clone()),
        SelectionSpec::Pattern { patterns } => {
            let compiled = compile_patterns(patterns)?;
            Ok(inventory
                .iter()
                .flat_map(|queue| {
                    compiled
                        .iter()
                        .filter(|pattern| pattern.is_match(&queue.name))
                        .map(|_| queue.name.clone())
                })
                .collect())
        }
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>, SelectionError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|e| SelectionError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })
        })
        .collect()
}
