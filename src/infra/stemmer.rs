// ============================================================
// Layer 5 — Token Normalisers
// ============================================================
// Two Normalizer implementations:
//
//   IdentityNormalizer → returns the token unchanged
//   LancasterStemmer   → Paice/Husk (Lancaster) suffix stripper
//
// How the Lancaster stemmer works:
//   Rules are indexed by the LAST letter of the word. Each rule
//   is written compactly as
//
//       <reversed ending>[*]<chars to remove>[append](. or >)
//
//   e.g. "sei3y>" means: if the word ends in "ies", remove 3
//   characters, append "y", and keep stemming. A "*" restricts
//   the rule to words that have not been touched yet, "." stops
//   after the rule fires, and a remove count of 0 protects an
//   ending from further stripping.
//
//   A rule only fires if what is left is still a plausible stem:
//     - starts with a vowel → at least 2 characters remain
//     - starts with a consonant → at least 3 remain, and one of
//       the 2nd / 3rd characters is a vowel
//
// Reference: Paice (1990), "Another Stemmer", SIGIR Forum 24(3)

use std::collections::HashMap;

use crate::domain::error::PipelineResult;
use crate::domain::traits::Normalizer;

// ─── IdentityNormalizer ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl Normalizer for IdentityNormalizer {
    fn normalize(&self, token: &str) -> PipelineResult<String> {
        Ok(token.to_string())
    }
}

// ─── LancasterStemmer ─────────────────────────────────────────────────────────
const RULES: &[&str] = &[
    "ai*2.", "a*1.",
    "bb1.",
    "city3s.", "ci2>", "cn1t>",
    "dd1.", "dei3y>", "deec2ss.", "dee1.", "de2>", "dooh4>",
    "e1>",
    "feil1v.", "fi2>",
    "gni3>", "gai3y.", "ga2>", "gg1.",
    "ht*2.", "hsiug5ct.", "hsi3>",
    "i*1.", "i1y>",
    "ji1d.", "juf1s.", "ju1d.", "jo1d.", "jeh1r.", "jrev1t.", "jsim2t.", "jn1d.", "j1s.",
    "lbaifi6.", "lbai4y.", "lba3>", "lbi3.", "lib2l>", "lc1.", "lufi4y.", "luf3>", "lu2.",
    "lai3>", "lau3>", "la2>", "ll1.",
    "mui3.", "mu*2.", "msi3>", "mm1.",
    "nois4j>", "noix4ct.", "noi3>", "nai3>", "na2>", "nee0.", "ne2>", "nn1.",
    "pihs4>", "pp1.",
    "re2>", "rae0.", "ra2.", "ro2>", "ru2>", "rr1.", "rt1>", "rei3y>",
    "sei3y>", "sis2.", "si2>", "ssen4>", "ss0.", "suo3>", "su*2.", "s*1>", "s0.",
    "tacilp4y.", "ta2>", "tnem4>", "tne3>", "tna3>", "tpir2b.", "tpro2b.", "tcud1.",
    "tpmus2.", "tpec2iv.", "tulo2v.", "tsis0.", "tsi3>", "tt1.",
    "uqi3.", "ugo1.",
    "vis3j>", "vie0.", "vi2>",
    "ylb1>", "yli3y>", "ylp0.", "yl2>", "ygo1.", "yhp1.", "ymo1.", "ypo1.", "yti3>",
    "yte3>", "ytl2.", "yrtsi5.", "yra3>", "yro3>", "yfi3.", "ycn2t>", "yca3>",
    "zi2>", "zy1s.",
];

#[derive(Debug, Clone)]
struct Rule {
    /// Ending in normal (not reversed) order
    ending:      String,
    intact_only: bool,
    remove:      usize,
    append:      &'static str,
    stop:        bool,
}

impl Rule {
    fn parse(spec: &'static str) -> Option<Self> {
        let letters = spec.find(|c: char| !c.is_ascii_lowercase())?;
        let (reversed, rest) = spec.split_at(letters);
        if reversed.is_empty() {
            return None;
        }

        let (intact_only, rest) = match rest.strip_prefix('*') {
            Some(r) => (true, r),
            None    => (false, rest),
        };

        let mut chars = rest.chars();
        let remove    = chars.next()?.to_digit(10)? as usize;
        let rest      = chars.as_str();

        let (append, flag) = rest.split_at(rest.len().checked_sub(1)?);
        let stop = match flag {
            "." => true,
            ">" => false,
            _   => return None,
        };
        if !append.chars().all(|c| c.is_ascii_lowercase()) {
            return None;
        }

        Some(Self {
            ending: reversed.chars().rev().collect(),
            intact_only,
            remove,
            append,
            stop,
        })
    }
}

#[derive(Debug, Clone)]
pub struct LancasterStemmer {
    /// Rules keyed by the last letter of the ending they match
    rules: HashMap<char, Vec<Rule>>,
}

impl LancasterStemmer {
    pub fn new() -> Self {
        let mut rules: HashMap<char, Vec<Rule>> = HashMap::new();
        for rule in RULES.iter().copied().filter_map(Rule::parse) {
            if let Some(last) = rule.ending.chars().last() {
                rules.entry(last).or_default().push(rule);
            }
        }
        Self { rules }
    }

    /// Stem one token. The token is lower-cased first.
    pub fn stem(&self, token: &str) -> String {
        let intact   = token.to_lowercase();
        let mut word = intact.clone();

        loop {
            // The rule bucket is chosen by the last letter of the
            // leading alphabetic run; tokens starting with a digit or
            // punctuation are left alone.
            let Some(last) = word.chars().take_while(|c| c.is_alphabetic()).last() else {
                break;
            };
            let Some(bucket) = self.rules.get(&last) else {
                break;
            };

            let fired = bucket.iter().find(|rule| {
                word.ends_with(&rule.ending)
                    && (!rule.intact_only || word == intact)
                    && is_acceptable(&word, rule.remove)
            });

            match fired {
                Some(rule) => {
                    apply(&mut word, rule);
                    if rule.stop {
                        break;
                    }
                }
                None => break,
            }
        }

        word
    }
}

impl Default for LancasterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer for LancasterStemmer {
    fn normalize(&self, token: &str) -> PipelineResult<String> {
        Ok(self.stem(token))
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn is_acceptable(word: &str, remove: usize) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let Some(remaining) = chars.len().checked_sub(remove) else {
        return false;
    };

    match chars.first() {
        Some(&c) if is_vowel(c) => remaining >= 2,
        Some(_) if remaining >= 3 => is_vowel(chars[1]) || is_vowel(chars[2]),
        _ => false,
    }
}

fn apply(word: &mut String, rule: &Rule) {
    let keep = word.chars().count().saturating_sub(rule.remove);
    let cut  = word
        .char_indices()
        .nth(keep)
        .map(|(i, _)| i)
        .unwrap_or(word.len());
    word.truncate(cut);
    word.push_str(rule.append);
}
