//! Heuristic syllable estimation from spelling.
//!
//! The pipeline runs on a normalized copy of the input:
//!
//! 1. lowercase and drop everything that is not `a`-`z`
//! 2. short-circuit empty (0) and one- or two-letter words (1)
//! 3. return the [`corner_cases`] count if the word is listed
//! 4. strip affixes, adding each [`Stage`]'s weight per match
//! 5. add one per vowel cluster (`y` counts as a vowel)
//! 6. apply the counting-only correction stages
//! 7. floor the result at 1
//!
//! Intermediate totals may go negative; only the final floor clamps.
//! Nothing is cached between calls.

pub mod corner_cases;
pub mod rules;

pub use rules::{PatternRule, RULES, RuleSet, RuleSpec, Stage};

/// Running syllable total for a single estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator(i64);

impl Accumulator {
    /// A zeroed accumulator.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Apply `hits` matches of a stage.
    #[must_use]
    pub const fn apply(self, stage: Stage, hits: usize) -> Self {
        Self(self.0 + stage.delta() * hits as i64)
    }

    /// Add one per syllable nucleus.
    #[must_use]
    pub const fn add_nuclei(self, nuclei: usize) -> Self {
        Self(self.0 + nuclei as i64)
    }

    /// The raw, possibly negative, running total.
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Final count, floored at 1.
    pub fn finish(self) -> usize {
        usize::try_from(self.0).map_or(1, |n| n.max(1))
    }
}

/// Lowercase `text` and keep only ASCII letters.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Estimate the syllables in `text`.
///
/// Returns 0 only when nothing survives normalization.
pub fn syllables_in(text: &str) -> usize {
    estimate(&RULES, text)
}

/// [`syllables_in`] for raw bytes. Invalid UTF-8 is replaced before
/// normalization, which discards it anyway.
pub fn in_bytes(bytes: &[u8]) -> usize {
    syllables_in(&String::from_utf8_lossy(bytes))
}

/// Estimate with an explicit rule set.
///
/// The corner-case table still applies.
pub fn estimate(rules: &RuleSet, text: &str) -> usize {
    let word = normalize(text);

    match word.len() {
        0 => return 0,
        1 | 2 => return 1,
        _ => {}
    }

    if let Some(count) = corner_cases::lookup(&word) {
        tracing::trace!(word = %word, count, "corner case");
        return count;
    }

    let (rest, acc) = rules
        .strip_rules()
        .fold((word, Accumulator::new()), |(text, acc), rule| {
            strip_stage(rule, text, acc)
        });
    let acc = nucleus_stage(rules, &rest, acc);
    let acc = rules
        .correction_rules()
        .fold(acc, |acc, rule| correction_stage(rule, &rest, acc));

    acc.finish()
}

fn strip_stage(rule: &PatternRule, text: String, acc: Accumulator) -> (String, Accumulator) {
    let (rest, hits) = rule.strip(text);
    (rest, acc.apply(rule.stage(), hits))
}

fn nucleus_stage(rules: &RuleSet, text: &str, acc: Accumulator) -> Accumulator {
    acc.add_nuclei(rules.count_nuclei(text))
}

fn correction_stage(rule: &PatternRule, text: &str, acc: Accumulator) -> Accumulator {
    acc.apply(rule.stage(), rule.count_matches(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_exits() {
        assert_eq!(syllables_in(""), 0);
        assert_eq!(syllables_in("a"), 1);
        assert_eq!(syllables_in("by"), 1);
        assert_eq!(syllables_in("123 !!"), 0);
    }

    #[test]
    fn corner_cases_short_circuit() {
        assert_eq!(syllables_in("cafe"), 2);
        assert_eq!(syllables_in("Cafe!"), 2);
        assert_eq!(syllables_in("recipe"), 3);
        assert_eq!(syllables_in("aborigine"), 5);
    }

    #[test]
    fn common_words() {
        assert_eq!(syllables_in("hello"), 2);
        assert_eq!(syllables_in("world"), 1);
        assert_eq!(syllables_in("beautiful"), 3);
        assert_eq!(syllables_in("running"), 2);
        assert_eq!(syllables_in("syllable"), 3);
        assert_eq!(syllables_in("readability"), 5);
        assert_eq!(syllables_in("quiet"), 2);
        assert_eq!(syllables_in("idea"), 3);
    }

    #[test]
    fn silent_endings() {
        assert_eq!(syllables_in("hoped"), 1);
        assert_eq!(syllables_in("jumped"), 1);
        assert_eq!(syllables_in("created"), 2);
    }

    #[test]
    fn affixes_contribute_their_weight() {
        assert_eq!(syllables_in("biology"), 4);
        assert_eq!(syllables_in("unhappiness"), 4);
        assert_eq!(syllables_in("overcome"), 3);
        assert_eq!(syllables_in("counterproductive"), 5);
        assert_eq!(syllables_in("strawberry"), 3);
        // The whole word is a suffix; nothing is left for the nucleus count.
        assert_eq!(syllables_in("ology"), 3);
    }

    #[test]
    fn floor_applies_to_vowelless_words() {
        assert_eq!(syllables_in("psst"), 1);
        assert_eq!(syllables_in("crwth"), 1);
        assert_eq!(syllables_in("shhh"), 1);
    }

    #[test]
    fn normalization_ignores_case_and_punctuation() {
        assert_eq!(syllables_in("HELLO"), syllables_in("hello"));
        assert_eq!(syllables_in("he-llo!"), syllables_in("hello"));
        assert_eq!(normalize("Don't Stop-3"), "dontstop");
        assert_eq!(normalize("na\u{ef}ve"), "nave");
    }

    #[test]
    fn whole_text_is_one_string() {
        // Spaces and periods are stripped before estimating.
        assert_eq!(syllables_in("The cat sat on the mat. It was happy."), 10);
        assert_eq!(syllables_in("Hi. Bye!"), 3);
    }

    #[test]
    fn repeated_calls_agree() {
        for word in ["beautiful", "cafe", "psst", "", "unhappiness"] {
            assert_eq!(syllables_in(word), syllables_in(word));
        }
    }

    #[test]
    fn bytes_match_str() {
        assert_eq!(in_bytes(b"beautiful"), syllables_in("beautiful"));
        assert_eq!(in_bytes(b""), 0);
        assert_eq!(in_bytes(&[0xff, b'c', b'a', b'f', b'e']), 2);
    }

    #[test]
    fn accumulator_floor() {
        let acc = Accumulator::new()
            .apply(Stage::Monosyllabic1, 2)
            .add_nuclei(1);
        assert_eq!(acc.value(), -1);
        assert_eq!(acc.finish(), 1);

        let acc = Accumulator::new().apply(Stage::StripTriple, 1).add_nuclei(2);
        assert_eq!(acc.value(), 5);
        assert_eq!(acc.finish(), 5);
    }

    #[test]
    fn custom_rule_set() {
        let rules = RuleSet::compile(&[RuleSpec {
            stage: Stage::Double4,
            pattern: "ll".to_string(),
        }])
        .unwrap();
        // Nuclei "e" and "o" plus one for "ll".
        assert_eq!(estimate(&rules, "hello"), 3);
    }
}
