//! Batch validation of routing request documents
//!
//! Request documents are JSON: either a single request object or an array
//! of them. Each request produces one [`RequestReport`].

use anyhow::{Context, Result};
use argos_validation::{FieldError, RouteRequest};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Source name used for standard input
pub const STDIN_SOURCE: &str = "-";

/// How requests are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Capability for requests without their own `flexible` flag
    pub flexible: bool,
    /// Report only the first rejected field per request
    pub fail_fast: bool,
}

/// Outcome for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestReport {
    pub source: String,
    pub index: usize,
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

/// Decode a JSON document holding one request or an array of requests
pub fn decode_requests(document: &str) -> Result<Vec<RouteRequest>> {
    let value: serde_json::Value =
        serde_json::from_str(document).context("Request document is not valid JSON")?;

    if value.is_array() {
        serde_json::from_value(value).context("Failed to decode request array")
    } else {
        let request = serde_json::from_value(value).context("Failed to decode request")?;
        Ok(vec![request])
    }
}

/// Read and decode requests from a file path, or stdin for `-`
pub fn load_requests(source: &str) -> Result<Vec<RouteRequest>> {
    let document = if source == STDIN_SOURCE {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read requests from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(Path::new(source))
            .with_context(|| format!("Failed to read request file {}", source))?
    };

    let requests = decode_requests(&document)
        .with_context(|| format!("Failed to load requests from {}", source))?;
    debug!(source, count = requests.len(), "loaded requests");
    Ok(requests)
}

/// Validate every request from one source
pub fn validate_requests(
    source: &str,
    requests: &[RouteRequest],
    options: RunOptions,
) -> Vec<RequestReport> {
    let reports: Vec<RequestReport> = requests
        .iter()
        .enumerate()
        .map(|(index, request)| {
            let errors = if options.fail_fast {
                request.validate(options.flexible).err().into_iter().collect()
            } else {
                request.collect_errors(options.flexible)
            };
            RequestReport {
                source: source.to_string(),
                index,
                valid: errors.is_empty(),
                errors,
            }
        })
        .collect();

    let rejected = reports.iter().filter(|report| !report.valid).count();
    info!(source, total = reports.len(), rejected, "validated requests");
    reports
}
