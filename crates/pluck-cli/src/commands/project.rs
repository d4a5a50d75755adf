//! Project command implementation

use anyhow::{Context, Result};
use pluck::{json, project_value_with, ProjectContext, Value};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::{debug, Level};

/// Read both files, project, and render the result.
pub fn execute(document: &Path, template: &Path, compact: bool) -> Result<String> {
    let document = read_value(document)
        .with_context(|| format!("Failed to read document {}", document.display()))?;
    let template = read_value(template)
        .with_context(|| format!("Failed to read template {}", template.display()))?;

    run(&document, &template, compact)
}

/// Project already-decoded values and render the result as JSON.
///
/// Per-node tracing is switched on whenever the installed subscriber
/// accepts `TRACE` events from the projector.
pub fn run(document: &Value, template: &Value, compact: bool) -> Result<String> {
    let ctx = ProjectContext {
        trace: trace_requested(),
    };
    let output = project_value_with(document, template, &ctx).context("Projection failed")?;

    debug!(
        keys = output.as_mapping().map_or(0, |m| m.len()),
        "projected document"
    );

    let rendered = if compact {
        json::to_string(&output)
    } else {
        json::to_string_pretty(&output)
    };
    Ok(rendered?)
}

fn trace_requested() -> bool {
    tracing::enabled!(target: "pluck::project", Level::TRACE)
}

/// Decode JSON from a file, or from stdin when the path is `-`.
fn read_value(path: &Path) -> Result<Value> {
    read_value_or(path, io::stdin().lock())
}

fn read_value_or(path: &Path, stdin: impl Read) -> Result<Value> {
    if path.as_os_str() == "-" {
        return Ok(json::from_reader(stdin)?);
    }
    let file = File::open(path)?;
    Ok(json::from_reader(BufReader::new(file))?)
}
