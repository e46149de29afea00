// ============================================================
// Layer 4 — Record Loader
// ============================================================
// Reads a two-column delimited text file into RawRecords:
//
//     speaker,utterance
//     ana,Hi there
//     bob,"Well, hello"
//
// Format rules:
//   - one record per line, no header row
//   - fields separated by a single delimiter character (default ',')
//   - a field may be wrapped in double quotes so it can contain the
//     delimiter; a literal quote inside a quoted field is written ""
//   - every non-blank line must have EXACTLY two fields
//   - blank lines are skipped
//   - a leading UTF-8 byte-order mark is dropped before splitting
//
// Both fields go through the Preprocessor, so labels and sentences
// reach the core lower-cased and whitespace-normalised.
//
// A malformed line is fatal for the whole load: the caller gets an
// Input error naming the file and 1-based line number.
//
// Reference: Rust Book §9 (Error Handling), §12 (I/O)

use std::{fs, path::PathBuf};

use crate::data::preprocessor::Preprocessor;
use crate::domain::error::{PipelineError, PipelineResult};
use crate::domain::record::RawRecord;
use crate::domain::traits::RecordSource;

const FIELDS_PER_RECORD: usize = 2;

/// Loads (speaker, utterance) records from a delimited text file.
/// Implements the RecordSource trait from Layer 3.
pub struct DelimitedLoader {
    path:         PathBuf,
    delimiter:    char,
    preprocessor: Preprocessor,
}

impl DelimitedLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path:         path.into(),
            delimiter:    ',',
            preprocessor: Preprocessor::new(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse already-read file contents. Split out from `load_all`
    /// so the format rules can be exercised without touching disk.
    pub fn parse_str(&self, text: &str) -> PipelineResult<Vec<RawRecord>> {
        let text        = text.strip_prefix('\u{FEFF}').unwrap_or(text);
        let mut records = Vec::new();

        for (i, line) in text.lines().enumerate() {
            let line_no = i + 1;

            if line.trim().is_empty() {
                tracing::debug!("Skipping blank line {}", line_no);
                continue;
            }

            let location = || format!("{}:{}", self.path.display(), line_no);

            let fields = split_fields(line, self.delimiter)
                .map_err(|msg| PipelineError::input(location(), msg))?;

            if fields.len() != FIELDS_PER_RECORD {
                return Err(PipelineError::input(
                    location(),
                    format!(
                        "expected {} fields, found {}",
                        FIELDS_PER_RECORD,
                        fields.len()
                    ),
                ));
            }

            records.push(RawRecord::new(
                self.preprocessor.clean(&fields[0]),
                self.preprocessor.clean(&fields[1]),
            ));
        }

        Ok(records)
    }
}

impl RecordSource for DelimitedLoader {
    fn load_all(&self) -> PipelineResult<Vec<RawRecord>> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            PipelineError::input(self.path.display().to_string(), format!("cannot read file: {e}"))
        })?;

        let records = self.parse_str(&text)?;
        tracing::info!(
            "Loaded {} records from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Split one line into fields, honouring double-quoted fields.
///
/// A quote only opens a quoted field at the very start of a field;
/// anywhere else it is an ordinary character.
fn split_fields(line: &str, delimiter: char) -> Result<Vec<String>, String> {
    let mut fields    = Vec::new();
    let mut field     = String::new();
    let mut in_quotes = false;
    let mut quoted    = false;
    let mut chars     = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' && field.is_empty() && !quoted {
            in_quotes = true;
            quoted    = true;
        } else if c == delimiter {
            fields.push(std::mem::take(&mut field));
            quoted = false;
        } else {
            field.push(c);
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }

    fields.push(field);
    Ok(fields)
}

// ─── InMemorySource ───────────────────────────────────────────────────────────
/// Records that are already in memory. Returned as-is: the caller is
/// responsible for having case-normalised the labels.
pub struct InMemorySource {
    records: Vec<RawRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for InMemorySource {
    fn load_all(&self) -> PipelineResult<Vec<RawRecord>> {
        Ok(self.records.clone())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> DelimitedLoader {
        DelimitedLoader::new("dialogue.csv")
    }

    #[test]
    fn test_parses_and_lowercases() {
        let records = loader().parse_str("Ana,Hi There\nBOB,Hi\n").unwrap();
        assert_eq!(
            records,
            vec![RawRecord::new("ana", "hi there"), RawRecord::new("bob", "hi")]
        );
    }

    #[test]
    fn test_quoted_field_keeps_delimiter() {
        let records = loader()
            .parse_str("bob,\"Well, hello \"\"friend\"\"\"")
            .unwrap();
        assert_eq!(records[0].sentence, "well, hello \"friend\"");
    }

    #[test]
    fn test_wrong_column_count_names_line() {
        let err = loader().parse_str("ana,hi\nbob,hi,again\n").unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, PipelineError::Input { .. }));
        assert!(msg.contains("dialogue.csv:2"), "{msg}");
        assert!(msg.contains("expected 2 fields, found 3"), "{msg}");
    }

    #[test]
    fn test_single_column_is_rejected() {
        let err = loader().parse_str("just a sentence").unwrap_err();
        assert!(err.to_string().contains("found 1"));
    }

    #[test]
    fn test_unterminated_quote_is_rejected() {
        let err = loader().parse_str("ana,\"oops").unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let records = loader().parse_str("\nana,hi\n   \nbob,yo\n\n").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_leading_bom_does_not_hide_quoted_label() {
        let records = loader().parse_str("\u{FEFF}\"Ana\",hi\nana,yo\n").unwrap();
        assert_eq!(records[0].label, "ana");
        assert_eq!(records[0].label, records[1].label);
    }

    #[test]
    fn test_bom_only_file_is_empty() {
        assert!(loader().parse_str("\u{FEFF}").unwrap().is_empty());
        assert!(loader().parse_str("\u{FEFF}\n").unwrap().is_empty());

        let records = loader().parse_str("\u{FEFF}\nbob,hi\n").unwrap();
        assert_eq!(records, vec![RawRecord::new("bob", "hi")]);
    }

    #[test]
    fn test_custom_delimiter() {
        let records = loader()
            .with_delimiter('|')
            .parse_str("ana|hi, there")
            .unwrap();
        assert_eq!(records[0], RawRecord::new("ana", "hi, there"));
    }

    #[test]
    fn test_empty_sentence_is_a_record() {
        let records = loader().parse_str("ana,").unwrap();
        assert_eq!(records, vec![RawRecord::new("ana", "")]);
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let path = std::env::temp_dir().join("dialogue_vectorizer_missing_file.csv");
        let _ = std::fs::remove_file(&path);
        let err = DelimitedLoader::new(&path).load_all().unwrap_err();
        assert!(matches!(err, PipelineError::Input { .. }));
    }

    #[test]
    fn test_load_all_reads_file() {
        let path = std::env::temp_dir().join("dialogue_vectorizer_loader_test.csv");
        std::fs::write(&path, "ana,Hi there\nbob,Hi\nana,there you are\n").unwrap();

        let records = DelimitedLoader::new(&path).load_all().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2], RawRecord::new("ana", "there you are"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_in_memory_source() {
        let src = InMemorySource::new(vec![RawRecord::new("ana", "hi")]);
        assert_eq!(src.load_all().unwrap().len(), 1);
    }
}
