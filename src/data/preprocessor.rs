// ============================================================
// Layer 4 — Field Preprocessor
// ============================================================
// Cleans one raw field (speaker or utterance) before it becomes
// part of a RawRecord.
//
// Why clean fields at all?
//   Dialogue exports often contain:
//   - Non-breaking spaces (U+00A0) and zero-width spaces (U+200B)
//   - Byte order marks on the very first field of the file
//   - Tabs and stray control characters
//   - Mixed case ("ANA", "Ana", "ana" are the same speaker)
//
// If we don't clean these, "Ana" and "ana" become two labels,
// and the tokenizer sees invisible characters as word content.
//
// Cleaning steps (applied in order):
//   1. Replace Unicode whitespace variants and control chars with space
//   2. Collapse runs of spaces into one
//   3. Trim leading/trailing whitespace
//   4. Lower-case
//
// Reference: Rust Book §8 (Strings in Rust)

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean a single field. Takes a &str and returns an owned String.
    pub fn clean(&self, field: &str) -> String {

        // ── Step 1: Normalise individual characters ───────────────────────────
        let mapped = field.chars().map(|c| match c {
            '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
            c if c.is_control() => ' ',
            c => c,
        });

        // ── Step 2: Collapse repeated spaces ──────────────────────────────────
        let mut out        = String::with_capacity(field.len());
        let mut last_space = false;

        for c in mapped {
            if c == ' ' {
                if !last_space {
                    out.push(' ');
                }
                last_space = true;
            } else {
                out.push(c);
                last_space = false;
            }
        }

        // ── Steps 3 + 4: Trim and lower-case ──────────────────────────────────
        out.trim().to_lowercase()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
