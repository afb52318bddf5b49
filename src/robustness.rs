//! Robustness harness.
//!
//! Generates small perturbations of an utterance (case changes, extra
//! whitespace, trailing punctuation, keyboard-neighbour typos) and reports
//! whether each still produces the same kind of result as the original.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::RobustnessSettings;
use crate::types::ResultKind;

/// Shortest word a typo is introduced into.
const MIN_TYPO_WORD: usize = 4;

/// QWERTY neighbours for each lowercase letter.
const NEIGHBOURS: &[(char, &str)] = &[
    ('q', "wa"),
    ('w', "qes"),
    ('e', "wrd"),
    ('r', "etf"),
    ('t', "ryg"),
    ('y', "tuh"),
    ('u', "yij"),
    ('i', "uok"),
    ('o', "ipl"),
    ('p', "ol"),
    ('a', "qsz"),
    ('s', "adw"),
    ('d', "sfe"),
    ('f', "dgr"),
    ('g', "fht"),
    ('h', "gjy"),
    ('j', "hku"),
    ('k', "jli"),
    ('l', "ko"),
    ('z', "ax"),
    ('x', "zc"),
    ('c', "xv"),
    ('v', "cb"),
    ('b', "vn"),
    ('n', "bm"),
    ('m', "n"),
];

/// How an input was altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perturbation {
    /// The input as given.
    Original,
    /// All lowercase.
    Lowercase,
    /// All uppercase.
    Uppercase,
    /// Words separated by runs of spaces, padded at both ends.
    ExtraWhitespace,
    /// "!!" appended.
    TrailingPunctuation,
    /// One letter swapped for a keyboard neighbour; the payload numbers the variant.
    CharacterSubstitution(usize),
}

/// Outcome for one perturbation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Which perturbation was applied.
    pub perturbation: Perturbation,
    /// The perturbed input.
    pub input: String,
    /// Kind of result it parsed to.
    pub kind: ResultKind,
    /// Whether `kind` matches the original's.
    pub stable: bool,
}

/// Perturbed variants of `text`, the original first.
///
/// Substitution variants are skipped when the text has no word long enough.
pub fn perturbations(text: &str, settings: &RobustnessSettings) -> Vec<(Perturbation, String)> {
    let mut variants = vec![
        (Perturbation::Original, text.to_owned()),
        (Perturbation::Lowercase, text.to_lowercase()),
        (Perturbation::Uppercase, text.to_uppercase()),
        (
            Perturbation::ExtraWhitespace,
            format!("  {}  ", text.split_whitespace().collect::<Vec<_>>().join("   ")),
        ),
        (Perturbation::TrailingPunctuation, format!("{}!!", text.trim_end())),
    ];

    let mut rng = StdRng::seed_from_u64(settings.seed);
    for n in 0..settings.substitutions {
        if let Some(typo) = substitute_one(text, &mut rng) {
            variants.push((Perturbation::CharacterSubstitution(n), typo));
        }
    }
    variants
}

/// Parse every variant with `classify` and compare kinds to the original.
pub fn run(
    text: &str,
    settings: &RobustnessSettings,
    mut classify: impl FnMut(&str) -> ResultKind,
) -> Vec<TestResult> {
    let variants = perturbations(text, settings);
    let mut baseline = None;
    variants
        .into_iter()
        .map(|(perturbation, input)| {
            let kind = classify(&input);
            let original = *baseline.get_or_insert(kind);
            TestResult {
                perturbation,
                input,
                kind,
                stable: kind == original,
            }
        })
        .collect()
}

/// Alphabetic runs of at least [`MIN_TYPO_WORD`] chars, as char index ranges.
fn typo_candidates(chars: &[char]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;
    for (i, c) in chars.iter().enumerate() {
        match (c.is_ascii_alphabetic(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i.saturating_sub(s) >= MIN_TYPO_WORD {
                    runs.push((s, i));
                }
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        if chars.len().saturating_sub(s) >= MIN_TYPO_WORD {
            runs.push((s, chars.len()));
        }
    }
    runs
}

fn substitute_one(text: &str, rng: &mut StdRng) -> Option<String> {
    let mut chars: Vec<char> = text.chars().collect();
    let runs = typo_candidates(&chars);
    if runs.is_empty() {
        return None;
    }
    let (start, end) = *runs.get(rng.gen_range(0..runs.len()))?;
    let index = rng.gen_range(start..end);
    let original = *chars.get(index)?;

    let lower = original.to_ascii_lowercase();
    let (_, options) = NEIGHBOURS.iter().find(|(key, _)| *key == lower)?;
    let options: Vec<char> = options.chars().collect();
    let replacement = *options.get(rng.gen_range(0..options.len()))?;
    let replacement = if original.is_ascii_uppercase() {
        replacement.to_ascii_uppercase()
    } else {
        replacement
    };

    *chars.get_mut(index)? = replacement;
    Some(chars.into_iter().collect())
}
