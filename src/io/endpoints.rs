use std::path::Path;

use log::debug;

use crate::collections::FxIndexMap;
use crate::errors::{PlannerError, Result};
use crate::geometry::Coordinate;


/// Named endpoints in file order
pub type EndpointMap = FxIndexMap<String, Coordinate>;


/// Read named endpoints from a line-oriented text file
/// Each line holds `<name> (row, col)`
pub fn read_endpoints(path: &Path) -> Result<EndpointMap> {
    let text = std::fs::read_to_string(path)?;
    let endpoints = parse_endpoints(&text)?;
    debug!("loaded {} endpoints from {}", endpoints.len(), path.display());
    Ok(endpoints)
}

/// Parse `<name> (row, col)` lines into an endpoint map
/// Blank lines and lines without a second field are skipped; a second field
/// that is not a two-integer tuple literal is a parse error
pub fn parse_endpoints(text: &str) -> Result<EndpointMap> {
    let mut endpoints = EndpointMap::default();

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((name, literal)) = line.split_once(char::is_whitespace) else {
            continue;
        };
        let coord = parse_tuple(literal.trim()).ok_or_else(|| {
            PlannerError::Parse(format!(
                "line {}: expected a (row, col) tuple, got {:?}",
                lineno + 1,
                literal.trim()
            ))
        })?;
        endpoints.insert(name.to_string(), coord);
    }

    Ok(endpoints)
}

/// Look up a named endpoint, failing with `UnknownEndpoint` if absent
pub fn resolve(endpoints: &EndpointMap, name: &str) -> Result<Coordinate> {
    endpoints
        .get(name)
        .copied()
        .ok_or_else(|| PlannerError::UnknownEndpoint(name.to_string()))
}

/// Strict parser for a parenthesised two-integer tuple literal, e.g. `(3, 14)`
/// Deliberately rejects anything else - endpoint files are untrusted text
/// and never go through an expression evaluator
fn parse_tuple(s: &str) -> Option<Coordinate> {
    let inner = s.strip_prefix('(')?.strip_suffix(')')?;
    let (row, col) = inner.split_once(',')?;
    let row = row.trim().parse::<usize>().ok()?;
    let col = col.trim().parse::<usize>().ok()?;
    Some(Coordinate::new(row, col))
}
