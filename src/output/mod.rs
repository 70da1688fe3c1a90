// src/output/mod.rs
use crate::indicators::{FIB_RATIOS, LEVEL_COUNT};
use crate::models::PivotLevels;
use anyhow::Result;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Three labeled lines
    #[default]
    Text,
    /// One row per Fibonacci ratio
    Table,
    /// Pretty-printed JSON object
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    pivot_point: f64,
    support_levels: &'a [f64; LEVEL_COUNT],
    resistance_levels: &'a [f64; LEVEL_COUNT],
    ratios: &'a [f64; LEVEL_COUNT],
}

/// Format a price. Without a precision the shortest representation that
/// round-trips is used, so `105` prints as `105.0`.
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(places) => format!("{:.*}", places, value),
        None => format!("{:?}", value),
    }
}

fn format_sequence(values: &[f64], precision: Option<usize>) -> String {
    format!(
        "[{}]",
        values.iter().map(|&v| format_value(v, precision)).join(", ")
    )
}

pub fn render_text(levels: &PivotLevels, precision: Option<usize>) -> String {
    format!(
        "Pivot Point: {}\nSupport Levels: {}\nResistance Levels: {}\n",
        format_value(levels.pivot_point, precision),
        format_sequence(&levels.support_levels, precision),
        format_sequence(&levels.resistance_levels, precision),
    )
}

pub fn render_table(levels: &PivotLevels, precision: Option<usize>) -> String {
    let mut out = format!(
        "Pivot Point: {}\n{:<5} | {:<5} | {:>12} | {:>12}\n",
        format_value(levels.pivot_point, precision),
        "Level",
        "Ratio",
        "Support",
        "Resistance"
    );
    for (i, row) in levels.levels().enumerate() {
        out.push_str(&format!(
            "{:<5} | {:<5.3} | {:>12} | {:>12}\n",
            i + 1,
            row.ratio,
            format_value(row.support, precision),
            format_value(row.resistance, precision),
        ));
    }
    out
}

// Precision does not apply: JSON carries full f64 values.
pub fn render_json(levels: &PivotLevels) -> Result<String> {
    let report = JsonReport {
        pivot_point: levels.pivot_point,
        support_levels: &levels.support_levels,
        resistance_levels: &levels.resistance_levels,
        ratios: &FIB_RATIOS,
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

pub fn render(levels: &PivotLevels, format: OutputFormat, precision: Option<usize>) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(levels, precision)),
        OutputFormat::Table => Ok(render_table(levels, precision)),
        OutputFormat::Json => render_json(levels),
    }
}
