pub mod json;
pub mod text;

use serde::Serialize;
use vectorguard::catalog::{SeverityCounts, Vector};

/// One row of the `list` output.
#[derive(Debug, Serialize)]
pub struct CommandSummary {
    pub name: String,
    pub title: String,
    pub vectors: SeverityCounts,
}

/// Payload of the `vectors` output.
#[derive(Debug, Serialize)]
pub struct VectorListing {
    pub command: String,
    pub vectors: Vec<Vector>,
}
