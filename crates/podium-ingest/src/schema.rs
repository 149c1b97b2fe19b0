//! Ordered schema adapters for raw sources.
//!
//! Each dataset ships in one of a few column-name schemes (the current
//! lowercase export scheme, or the older capitalized one). Instead of
//! best-effort column coercion, every loader declares an ordered adapter
//! list and uses the first adapter whose required columns are all present.

use std::collections::BTreeMap;

use crate::error::{IngestError, Result};

/// One named column scheme: (logical field, header) pairs.
#[derive(Debug, Clone, Copy)]
pub struct SchemaAdapter {
    pub name: &'static str,
    pub required: &'static [(&'static str, &'static str)],
    pub optional: &'static [(&'static str, &'static str)],
}

/// Resolved mapping from logical field name to column index.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub adapter: &'static str,
    indices: BTreeMap<&'static str, usize>,
}

impl ColumnMap {
    pub fn index(&self, field: &str) -> Option<usize> {
        self.indices.get(field).copied()
    }

    /// Cell for `field` in `row`, or "" when the column is absent or the
    /// row is short.
    pub fn get<'a>(&self, field: &str, row: &'a [String]) -> &'a str {
        self.index(field)
            .and_then(|idx| row.get(idx))
            .map_or("", String::as_str)
    }
}

fn header_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

/// Returns the first adapter whose required columns are all present.
///
/// On failure the error names the dataset, the adapters tried, and the
/// columns the best candidate was missing.
pub fn resolve_schema(
    dataset: &str,
    headers: &[String],
    adapters: &[SchemaAdapter],
) -> Result<ColumnMap> {
    let mut best_missing: Option<Vec<String>> = None;

    for adapter in adapters {
        let mut indices = BTreeMap::new();
        let mut missing = Vec::new();
        for (field, header) in adapter.required {
            match header_index(headers, header) {
                Some(idx) => {
                    indices.insert(*field, idx);
                }
                None => missing.push((*header).to_string()),
            }
        }
        if missing.is_empty() {
            for (field, header) in adapter.optional {
                if let Some(idx) = header_index(headers, header) {
                    indices.insert(*field, idx);
                }
            }
            tracing::debug!(dataset, adapter = adapter.name, "schema adapter matched");
            return Ok(ColumnMap {
                adapter: adapter.name,
                indices,
            });
        }
        let better = best_missing
            .as_ref()
            .is_none_or(|prev| missing.len() < prev.len());
        if better {
            best_missing = Some(missing);
        }
    }

    Err(IngestError::SchemaMismatch {
        dataset: dataset.to_string(),
        tried: adapters.iter().map(|a| a.name.to_string()).collect(),
        missing: best_missing.unwrap_or_default(),
    })
}
