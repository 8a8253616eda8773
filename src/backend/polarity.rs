// ABOUTME: Text polarity scoring - the PolarityScorer trait and a word-list
// ABOUTME: scorer with simple negation handling.

use std::collections::HashMap;

use regex::Regex;

/// Scores a piece of text from -1.0 (negative) to 1.0 (positive).
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

const POSITIVE: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("best", 1.0),
    ("win", 0.8),
    ("wins", 0.8),
    ("success", 0.6),
    ("growth", 0.5),
    ("gain", 0.5),
    ("gains", 0.5),
    ("rally", 0.5),
    ("record", 0.3),
    ("strong", 0.4),
    ("boost", 0.5),
    ("happy", 0.8),
    ("hope", 0.4),
    ("breakthrough", 0.7),
    ("improve", 0.5),
    ("improves", 0.5),
    ("safe", 0.5),
    ("celebrate", 0.7),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("bad", -0.7),
    ("worst", -1.0),
    ("crisis", -0.6),
    ("crash", -0.7),
    ("loss", -0.5),
    ("losses", -0.5),
    ("fall", -0.4),
    ("falls", -0.4),
    ("fear", -0.6),
    ("fears", -0.6),
    ("war", -0.7),
    ("death", -0.8),
    ("dead", -0.8),
    ("attack", -0.7),
    ("fail", -0.6),
    ("fails", -0.6),
    ("weak", -0.4),
    ("slump", -0.6),
    ("threat", -0.5),
    ("scandal", -0.6),
];

const NEGATORS: &[&str] = &["not", "no", "never", "without", "isn't", "doesn't", "don't"];

/// Averages per-word weights from a fixed lexicon. A negator flips the next
/// sentiment-bearing word. Text without such words scores 0.
pub struct LexiconScorer {
    weights: HashMap<&'static str, f64>,
    words: Regex,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        let weights = POSITIVE.iter().chain(NEGATIVE).copied().collect();
        let words = Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("static regex is valid");
        Self { weights, words }
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let mut total = 0.0;
        let mut hits = 0u32;
        let mut negate = false;

        for word in self.words.find_iter(&lowered).map(|m| m.as_str()) {
            if NEGATORS.iter().any(|n| *n == word) {
                negate = true;
                continue;
            }
            if let Some(&weight) = self.weights.get(word) {
                total += if negate { -weight } else { weight };
                hits += 1;
                negate = false;
            }
        }

        if hits == 0 {
            return 0.0;
        }
        (total / f64::from(hits)).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_text_scores_zero() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.polarity("The committee met on Tuesday"), 0.0);
        assert_eq!(scorer.polarity(""), 0.0);
    }

    #[test]
    fn test_positive_and_negative() {
        let scorer = LexiconScorer::new();
        assert!(scorer.polarity("A great win for the team") > 0.0);
        assert!(scorer.polarity("Markets crash amid war fears") < 0.0);
    }

    #[test]
    fn test_averages_weights() {
        let scorer = LexiconScorer::new();
        // good (0.7) and bad (-0.7) cancel out.
        assert!(scorer.polarity("good news, bad news").abs() < 1e-9);
    }

    #[test]
    fn test_negation_flips_next_word() {
        let scorer = LexiconScorer::new();
        assert!(scorer.polarity("This is not good") < 0.0);
        assert!(scorer.polarity("Never a bad day") > 0.0);
    }

    #[test]
    fn test_stays_in_range() {
        let scorer = LexiconScorer::new();
        for text in ["best best best", "worst worst", "BEST!!!"] {
            let score = scorer.polarity(text);
            assert!((-1.0..=1.0).contains(&score), "{} out of range", score);
        }
    }
}
