//! Spelling-pattern rules for the syllable estimator.
//!
//! Each [`Stage`] owns one pattern, assembled from the alternative lists
//! below and compiled once into [`RULES`]. A stage either strips its
//! matches from the word (affix stages) or only counts them (correction
//! stages); in both cases every non-overlapping match moves the
//! accumulator by the stage's [`Stage::delta`].
//!
//! Alternation order matters: the regex engine prefers the leftmost
//! alternative, so `c` is tried before `ch` and so on.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A step of the estimator pipeline that is driven by a pattern.
///
/// Declaration order is pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Three-syllable suffixes (`-ology`, `-onomist`).
    StripTriple,
    /// Two-syllable prefixes and suffixes (`counter-`, `-berry`).
    StripDouble,
    /// One-syllable prefixes and suffixes (`un-`, `-ness`).
    StripSingle,
    /// Vowel pairs and silent endings that count as one syllable.
    #[serde(rename = "monosyllabic-1")]
    Monosyllabic1,
    /// Silent final `e` after a vowel and consonant cluster.
    #[serde(rename = "monosyllabic-2")]
    Monosyllabic2,
    /// Word endings that hide an extra syllable (`-ism`, `-ier`).
    #[serde(rename = "double-1")]
    Double1,
    /// Vowel triples and a few word openings (`ia-`, `mc-`).
    #[serde(rename = "double-2")]
    Double2,
    /// Split vowel pairs inside a word (`io`, `iu`, `-riet-`).
    #[serde(rename = "double-3")]
    Double3,
    /// `ia` not preceded by `s`.
    #[serde(rename = "double-4")]
    Double4,
}

impl Stage {
    /// Every stage in pipeline order.
    pub const ALL: [Self; 9] = [
        Self::StripTriple,
        Self::StripDouble,
        Self::StripSingle,
        Self::Monosyllabic1,
        Self::Monosyllabic2,
        Self::Double1,
        Self::Double2,
        Self::Double3,
        Self::Double4,
    ];

    /// Signed contribution of a single match.
    pub const fn delta(self) -> i64 {
        match self {
            Self::StripTriple => 3,
            Self::StripDouble => 2,
            Self::StripSingle => 1,
            Self::Monosyllabic1 | Self::Monosyllabic2 => -1,
            Self::Double1 | Self::Double2 | Self::Double3 | Self::Double4 => 1,
        }
    }

    /// Whether matches are removed from the working text.
    pub const fn strips(self) -> bool {
        matches!(
            self,
            Self::StripTriple | Self::StripDouble | Self::StripSingle
        )
    }

    /// Stable kebab-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StripTriple => "strip-triple",
            Self::StripDouble => "strip-double",
            Self::StripSingle => "strip-single",
            Self::Monosyllabic1 => "monosyllabic-1",
            Self::Monosyllabic2 => "monosyllabic-2",
            Self::Double1 => "double-1",
            Self::Double2 => "double-2",
            Self::Double3 => "double-3",
            Self::Double4 => "double-4",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Pattern corpus
// ---------------------------------------------------------------------------

const TRIPLE_SUFFIXES: &[&str] = &["ology", "ologist", "onomy", "onomist"];

const DOUBLE_PREFIXES: &[&str] = &[
    "above", "anti", "ante", "counter", "hyper", "afore", "agri", "infra", "intra", "inter",
    "over", "semi", "ultra", "under", "extra", "dia", "micro", "mega", "kilo", "pico", "nano",
    "macro",
];

const DOUBLE_SUFFIXES: &[&str] = &["fully", "berry", "woman", "women"];

const SINGLE_PREFIXES: &[&str] = &[
    "un", "fore", "ware", "none?", "out", "post", "sub", "pre", "pro", "dis", "side",
];

const SINGLE_SUFFIXES: &[&str] = &[
    "ly",
    "less",
    "some",
    "ful",
    "ers?",
    "ness",
    "cians?",
    "ments?",
    "ettes?",
    "villes?",
    "ships?",
    "sides?",
    "ports?",
    "shires?",
    "tion(?:ed)?",
];

/// Vowel pairs and endings the nucleus count reads as two syllables.
const MONOSYLLABIC_ONE: &[&str] = &[
    "cia(?:l|$)",
    "tia",
    "cius",
    "cious",
    "[^aeiou]giu",
    "[aeiouy][^aeiouy]ion",
    "iou",
    "sia$",
    "eous$",
    "[oa]gue$",
    ".[^aeiuoycgltdb]{2,}ed$",
    ".ely$",
    "^jua",
    "uai",
    "eau",
    "^busi$",
];

/// Consonant clusters after which a final `-ed` is silent.
const SILENT_ED_CLUSTERS: &[&str] = &[
    "b", "c", "ch", "dg", "f", "g", "gh", "gn", "k", "l", "lch", "ll", "lv", "m", "mm", "n", "nc",
    "ng", "nch", "nn", "p", "r", "rc", "rn", "rs", "rv", "s", "sc", "sk", "sl", "squ", "ss", "th",
    "v", "y", "z",
];

/// Consonant clusters after which a final `-es` is silent.
const SILENT_ES_CLUSTERS: &[&str] = &[
    "b", "ch", "d", "f", "gh", "gn", "k", "l", "lch", "ll", "lv", "m", "mm", "n", "nch", "nn", "p",
    "r", "rn", "rs", "rv", "s", "sc", "sk", "sl", "squ", "ss", "st", "t", "th", "v", "y",
];

/// Consonant clusters after which a final `e` is silent.
const SILENT_E_CLUSTERS: &[&str] = &[
    "b", "c", "ch", "d", "dg", "f", "g", "gh", "gn", "k", "l", "ll", "lv", "m", "mm", "n", "nc",
    "ng", "nn", "p", "r", "rc", "rn", "rs", "rv", "s", "sc", "sk", "sl", "squ", "ss", "st", "t",
    "th", "v", "y", "z",
];

/// Word endings hiding a second syllable. Anchored at the end as a group.
const DOUBLE_ONE_ENDINGS: &[&str] = &[
    // One or two consonants, not necessarily doubled, before the `l`.
    "[^aeiouy]{1,2}l",
    "[^aeiouy]ie(?:r|st|t)",
    "[aeiouym]bl",
    "eo",
    "ism",
    "asm",
    "thm",
    "dnt",
    "uity",
    "dea",
    "gean",
    "oa",
    "ua",
    "eings?",
    "[aeiouy]sh?e[rsd]",
];

const DOUBLE_TWO: &[&str] = &["[^gq]ua[^auieo]", "[aeiou]{3}", "^(?:ia|mc|coa[dglx].)"];

const DOUBLE_THREE: &[&str] = &[
    "[^aeiou]y[ae]",
    "[^l]lien",
    "riet",
    "dien",
    "iu",
    "io",
    "ii",
    "uen",
    "real",
    "iell",
    "eo[^aeiou]",
    "[aeiou]y[aeiou]",
];

const DOUBLE_FOUR: &[&str] = &["[^s]ia"];

/// Runs of characters that separate syllable nuclei.
const NON_VOWEL_RUN: &str = "[^aeiouy]+";

fn alternation(parts: &[&str]) -> String {
    parts.join("|")
}

/// Uncompiled pattern for one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    /// Stage the pattern drives.
    pub stage: Stage,
    /// Regex source.
    pub pattern: String,
}

/// The built-in rule table, one entry per stage in pipeline order.
pub fn rule_table() -> Vec<RuleSpec> {
    let spec = |stage, pattern: String| RuleSpec { stage, pattern };

    vec![
        spec(Stage::StripTriple, alternation(TRIPLE_SUFFIXES)),
        spec(
            Stage::StripDouble,
            format!(
                "^(?:{})|(?:{})",
                alternation(DOUBLE_PREFIXES),
                alternation(DOUBLE_SUFFIXES)
            ),
        ),
        spec(
            Stage::StripSingle,
            format!(
                "^(?:{})|(?:{})",
                alternation(SINGLE_PREFIXES),
                alternation(SINGLE_SUFFIXES)
            ),
        ),
        spec(
            Stage::Monosyllabic1,
            format!(
                "{}|[aeiouy](?:{})ed$|[aeiouy](?:{})es$",
                alternation(MONOSYLLABIC_ONE),
                alternation(SILENT_ED_CLUSTERS),
                alternation(SILENT_ES_CLUSTERS)
            ),
        ),
        spec(
            Stage::Monosyllabic2,
            format!("[aeiouy](?:{})e$", alternation(SILENT_E_CLUSTERS)),
        ),
        spec(
            Stage::Double1,
            format!("(?:{})$", alternation(DOUBLE_ONE_ENDINGS)),
        ),
        spec(Stage::Double2, alternation(DOUBLE_TWO)),
        spec(Stage::Double3, alternation(DOUBLE_THREE)),
        spec(Stage::Double4, alternation(DOUBLE_FOUR)),
    ]
}

/// A compiled pattern bound to its stage.
#[derive(Debug, Clone)]
pub struct PatternRule {
    stage: Stage,
    regex: Regex,
}

impl PatternRule {
    /// Compile a rule from its spec.
    pub fn compile(spec: &RuleSpec) -> Result<Self, regex::Error> {
        Ok(Self {
            stage: spec.stage,
            regex: Regex::new(&spec.pattern)?,
        })
    }

    /// The stage this rule drives.
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// The compiled pattern.
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Number of non-overlapping matches in `text`.
    pub fn count_matches(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// Remove every match from `text`, returning the remainder and the
    /// number of matches removed.
    pub fn strip(&self, text: String) -> (String, usize) {
        let hits = self.count_matches(&text);
        if hits == 0 {
            return (text, 0);
        }
        (self.regex.replace_all(&text, "").into_owned(), hits)
    }
}

/// The ordered, compiled rule set shared by every estimator call.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<PatternRule>,
    non_vowel_run: Regex,
}

impl RuleSet {
    /// Compile a rule table. Rules are kept in pipeline order regardless
    /// of the order given; rules of the same stage keep their relative order.
    pub fn compile(specs: &[RuleSpec]) -> Result<Self, regex::Error> {
        let mut rules = specs
            .iter()
            .map(PatternRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        rules.sort_by_key(PatternRule::stage);

        Ok(Self {
            rules,
            non_vowel_run: Regex::new(NON_VOWEL_RUN)?,
        })
    }

    /// All rules in pipeline order.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Affix rules, applied before the nucleus count.
    pub fn strip_rules(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter().filter(|r| r.stage().strips())
    }

    /// Correction rules, applied after the nucleus count.
    pub fn correction_rules(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter().filter(|r| !r.stage().strips())
    }

    /// Count the non-empty segments left after splitting on non-vowel runs.
    pub fn count_nuclei(&self, text: &str) -> usize {
        self.non_vowel_run
            .split(text)
            .filter(|segment| !segment.is_empty())
            .count()
    }
}

/// The built-in rule set, compiled on first use.
pub static RULES: LazyLock<RuleSet> =
    LazyLock::new(|| RuleSet::compile(&rule_table()).expect("valid regex"));

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(stage: Stage) -> &'static PatternRule {
        RULES
            .rules()
            .iter()
            .find(|r| r.stage() == stage)
            .expect("stage present")
    }

    #[test]
    fn one_rule_per_stage_in_pipeline_order() {
        let stages: Vec<Stage> = RULES.rules().iter().map(PatternRule::stage).collect();
        assert_eq!(stages, Stage::ALL.to_vec());
    }

    #[test]
    fn strip_stages_come_first() {
        assert_eq!(RULES.strip_rules().count(), 3);
        assert_eq!(RULES.correction_rules().count(), 6);
        assert!(RULES.strip_rules().all(|r| r.stage().delta() > 0));
    }

    #[test]
    fn deltas() {
        assert_eq!(Stage::StripTriple.delta(), 3);
        assert_eq!(Stage::StripDouble.delta(), 2);
        assert_eq!(Stage::StripSingle.delta(), 1);
        assert_eq!(Stage::Monosyllabic1.delta(), -1);
        assert_eq!(Stage::Monosyllabic2.delta(), -1);
        assert_eq!(Stage::Double4.delta(), 1);
    }

    #[test]
    fn triple_strips_suffix() {
        let (rest, hits) = rule(Stage::StripTriple).strip("biology".to_string());
        assert_eq!(rest, "bi");
        assert_eq!(hits, 1);
    }

    #[test]
    fn single_prefix_only_at_start() {
        let single = rule(Stage::StripSingle);
        let (rest, hits) = single.strip("unhappiness".to_string());
        assert_eq!(rest, "happi");
        assert_eq!(hits, 2);

        // "un" in the middle is not a prefix.
        assert_eq!(single.count_matches("bunk"), 0);
    }

    #[test]
    fn double_strip_prefix_and_suffix() {
        let (rest, hits) = rule(Stage::StripDouble).strip("overcome".to_string());
        assert_eq!(rest, "come");
        assert_eq!(hits, 1);

        let (rest, hits) = rule(Stage::StripDouble).strip("strawberry".to_string());
        assert_eq!(rest, "straw");
        assert_eq!(hits, 1);
    }

    #[test]
    fn strip_without_match_returns_input() {
        let (rest, hits) = rule(Stage::StripTriple).strip("cat".to_string());
        assert_eq!(rest, "cat");
        assert_eq!(hits, 0);
    }

    #[test]
    fn silent_ed_and_e() {
        assert_eq!(rule(Stage::Monosyllabic1).count_matches("hoped"), 1);
        assert_eq!(rule(Stage::Monosyllabic1).count_matches("jumped"), 1);
        assert_eq!(rule(Stage::Monosyllabic2).count_matches("come"), 1);
        // Voiced "-ted" is left alone.
        assert_eq!(rule(Stage::Monosyllabic1).count_matches("created"), 0);
    }

    #[test]
    fn split_vowel_pairs() {
        assert_eq!(rule(Stage::Double3).count_matches("radio"), 1);
        assert_eq!(rule(Stage::Double1).count_matches("prism"), 1);
        assert_eq!(rule(Stage::Double1).count_matches("table"), 0);
        assert_eq!(rule(Stage::Double2).count_matches("queue"), 1);
        assert_eq!(rule(Stage::Double4).count_matches("asia"), 0);
        assert_eq!(rule(Stage::Double4).count_matches("media"), 1);
    }

    #[test]
    fn nuclei_are_vowel_runs() {
        assert_eq!(RULES.count_nuclei("beautiful"), 3);
        assert_eq!(RULES.count_nuclei("rhythm"), 1);
        assert_eq!(RULES.count_nuclei("psst"), 0);
        assert_eq!(RULES.count_nuclei(""), 0);
    }

    #[test]
    fn compile_sorts_by_stage() {
        let mut table = rule_table();
        table.reverse();
        let set = RuleSet::compile(&table).unwrap();
        let stages: Vec<Stage> = set.rules().iter().map(PatternRule::stage).collect();
        assert_eq!(stages, Stage::ALL.to_vec());
    }

    #[test]
    fn compile_rejects_bad_pattern() {
        let table = vec![RuleSpec {
            stage: Stage::Double4,
            pattern: "(unclosed".to_string(),
        }];
        assert!(RuleSet::compile(&table).is_err());
    }

    #[test]
    fn stage_names_round_trip_through_serde() {
        for stage in Stage::ALL {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.as_str()));
        }
    }
}
