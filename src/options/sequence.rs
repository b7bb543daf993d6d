use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::SortvisError, sequence::Value};

/// What gets sorted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Sequence", inline)]
#[serde(default)]
pub struct SequenceOptions {
    /// Number of values.
    #[schemars(title = "Length", range(min = 1))]
    pub length: usize,
    /// Explicit values; `0..length` ascending when absent.
    #[schemars(title = "Values")]
    pub values: Option<Vec<Value>>,
    /// Shuffle once before the first run.
    #[schemars(title = "Shuffle On Start")]
    pub shuffle_on_start: bool,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            length: 100,
            values: None,
            shuffle_on_start: false,
        }
    }
}

impl SequenceOptions {
    /// Values the store starts with.
    #[must_use]
    pub fn initial_values(&self) -> Vec<Value> {
        self.values
            .clone()
            .unwrap_or_else(|| (0..self.length as Value).collect())
    }

    pub(crate) fn validate(&self) -> Result<(), SortvisError> {
        if self.length == 0 {
            return Err(SortvisError::Config(
                "sequence length must be positive".to_owned(),
            ));
        }
        if let Some(values) = &self.values {
            if values.len() != self.length {
                return Err(SortvisError::Config(format!(
                    "expected {} values, got {}",
                    self.length,
                    values.len()
                )));
            }
        }
        Ok(())
    }
}
