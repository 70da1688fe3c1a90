// src/input/mod.rs
use crate::models::SessionPrices;
use log::*;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("invalid {field} price: '{value}' is not a number")]
    InvalidInput { field: PriceField, value: String },

    #[error("no {field} price supplied")]
    MissingInput { field: PriceField },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    High,
    Low,
    Close,
}

impl PriceField {
    pub const ALL: [PriceField; 3] = [PriceField::High, PriceField::Low, PriceField::Close];

    pub fn prompt(&self) -> &'static str {
        match self {
            PriceField::High => "Enter the day's high price: ",
            PriceField::Low => "Enter the day's low price: ",
            PriceField::Close => "Enter the day's close price: ",
        }
    }
}

impl std::fmt::Display for PriceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceField::High => write!(f, "high"),
            PriceField::Low => write!(f, "low"),
            PriceField::Close => write!(f, "close"),
        }
    }
}

/// Parse one price. Surrounding whitespace is ignored; `inf` and `NaN` are
/// accepted as real numbers.
pub fn parse_price(field: PriceField, raw: &str) -> Result<f64, InputError> {
    raw.trim().parse::<f64>().map_err(|_| InputError::InvalidInput {
        field,
        value: raw.trim().to_string(),
    })
}

/// Somewhere the three session prices come from.
pub trait PriceSource {
    fn read_raw(&mut self, field: PriceField) -> Result<String, InputError>;

    /// Read and parse high, low and close in that order, stopping at the
    /// first bad value.
    fn read_prices(&mut self) -> Result<SessionPrices, InputError> {
        let mut values = [0.0; 3];
        for (slot, field) in values.iter_mut().zip(PriceField::ALL) {
            let raw = self.read_raw(field)?;
            *slot = parse_price(field, &raw)?;
            debug!("Parsed {} price: {}", field, slot);
        }
        let [high, low, close] = values;
        Ok(SessionPrices::new(high, low, close))
    }
}

/// Prices passed as positional arguments.
#[derive(Debug, Clone)]
pub struct ArgsSource {
    high: String,
    low: String,
    close: String,
}

impl ArgsSource {
    pub fn new(high: impl Into<String>, low: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            high: high.into(),
            low: low.into(),
            close: close.into(),
        }
    }
}

impl PriceSource for ArgsSource {
    fn read_raw(&mut self, field: PriceField) -> Result<String, InputError> {
        let value = match field {
            PriceField::High => &self.high,
            PriceField::Low => &self.low,
            PriceField::Close => &self.close,
        };
        Ok(value.clone())
    }
}

/// Interactive prompts: writes a prompt per field, reads one line back.
pub struct PromptSource<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl PromptSource<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PriceSource for PromptSource<R, W> {
    fn read_raw(&mut self, field: PriceField) -> Result<String, InputError> {
        self.writer.write_all(field.prompt().as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::MissingInput { field });
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}
