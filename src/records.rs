use std::collections::HashMap;

use chrono::SecondsFormat;
use serde_json::{Map, Value};

use crate::types::Stargazer;

pub const STARRED_AT_COLUMN: &str = "starred_at";

/// Flat table of star events, one row per stargazer.
///
/// Each pushed record has its nested `user` object flattened into top-level
/// columns; the `user` key itself never becomes a column. Columns are
/// registered in first-encounter order, starting with `starred_at`, and rows
/// that lack a later-registered column render as empty cells.
#[derive(Debug)]
pub struct StargazerTable {
    columns: Vec<String>,
    rows: Vec<HashMap<String, String>>,
}

impl StargazerTable {
    pub fn new() -> Self {
        StargazerTable {
            columns: vec![STARRED_AT_COLUMN.to_string()],
            rows: Vec::new(),
        }
    }

    /// Flatten one star event and append it as a row.
    pub fn push(&mut self, stargazer: Stargazer) {
        let mut row = HashMap::new();
        row.insert(
            STARRED_AT_COLUMN.to_string(),
            stargazer
                .starred_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        );

        let mut flat = Map::new();
        flatten_object(None, &stargazer.user, &mut flat);
        for (column, value) in flat {
            if !self.columns.iter().any(|c| c == &column) {
                self.columns.push(column.clone());
            }
            row.insert(column, render_cell(&value));
        }

        self.rows.push(row);
    }

    /// Append a whole page of star events, preserving their order.
    pub fn extend(&mut self, page: Vec<Stargazer>) {
        for stargazer in page {
            self.push(stargazer);
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell values row by row, in column order. Missing cells are empty.
    pub fn records(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.rows.iter().map(move |row| {
            self.columns
                .iter()
                .map(|column| row.get(column).map(String::as_str).unwrap_or_default())
                .collect()
        })
    }
}

impl Default for StargazerTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Nested objects contribute dot-joined column names (`plan.name`); every
/// other value lands under its own key.
fn flatten_object(prefix: Option<&str>, object: &Map<String, Value>, out: &mut Map<String, Value>) {
    for (key, value) in object {
        let column = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match value {
            Value::Object(nested) => flatten_object(Some(&column), nested, out),
            other => {
                out.insert(column, other.clone());
            }
        }
    }
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
