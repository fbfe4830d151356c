//! GSM8K dataset loading.
//!
//! Records are read from a JSONL file, one object per line with a
//! `question` and an `answer` field. GSM8K answer fields carry the
//! worked solution followed by `#### <number>`; [`Gsm8kRecord::ground_truth`]
//! isolates the numeric suffix and applies the same digit-only
//! normalization used for model predictions.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, DatasetResult};
use crate::strategies::normalize_answer;

/// One GSM8K benchmark record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gsm8kRecord {
    pub question: String,
    pub answer: String,
}

impl Gsm8kRecord {
    /// The normalized numeric ground-truth answer.
    ///
    /// Takes the text after the final `####` marker when present (the GSM8K
    /// convention), else the whole answer field, then strips every non-digit
    /// character.
    pub fn ground_truth(&self) -> String {
        let tail = self.answer.rsplit("####").next().unwrap_or(&self.answer);
        normalize_answer(tail)
    }
}

/// Load records from a JSONL file, keeping at most `limit` records when set.
///
/// Blank lines are skipped; a malformed line fails the whole load with its
/// 1-based line number.
pub fn load_jsonl(path: &Path, limit: Option<usize>) -> DatasetResult<Vec<Gsm8kRecord>> {
    let file = File::open(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| DatasetError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let record: Gsm8kRecord =
            serde_json::from_str(&line).map_err(|e| DatasetError::Parse {
                line: idx + 1,
                message: e.to_string(),
            })?;
        records.push(record);

        if let Some(limit) = limit {
            if records.len() >= limit {
                break;
            }
        }
    }

    Ok(records)
}
