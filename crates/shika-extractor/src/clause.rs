//! Train / cause / object extraction
//!
//! A segment reports a collision when it reads
//! `<train>が[…<particle>]<object><marker><verb>` or
//! `<train>は…で[…<particle>]<object><marker><verb>`.
//! The train noun is tried from a fixed table, most specific first: Japanese
//! compounds mean `列車` also matches inside `貨物列車`, so the freight rule
//! has to get the first chance.

use regex::Regex;
use tracing::debug;

/// Verb nouns that make a clause a collision report:
/// contact, collision, impact, discovery, entanglement
const VERBS: &str = "接触|衝突|衝撃|発見|巻き込[みん]";

/// Case markers between the object and the verb noun
const MARKERS: &str = "と|を|に";

/// Particles that end a modifier ("線路上の", "走行中に"); never part of the object
const PARTICLES: &str = "のにをでがは";

/// One entry of the train-noun table
struct TrainNoun {
    name: &'static str,
    pattern: &'static str,
    canonical: bool,
}

/// Train nouns in priority order. The first rule whose full clause matches wins.
const TRAIN_NOUNS: &[TrainNoun] = &[
    TrainNoun { name: "freight", pattern: "貨物列車", canonical: false },
    TrainNoun { name: "deadhead", pattern: "回送列車", canonical: false },
    TrainNoun { name: "limited_express", pattern: "特急[^\\s&がは]+", canonical: false },
    TrainNoun { name: "limited_express_bare", pattern: "特急", canonical: false },
    TrainNoun { name: "rapid", pattern: "快速[^\\s&がは]+", canonical: false },
    TrainNoun { name: "ordinary", pattern: "普通列車", canonical: false },
    TrainNoun { name: "generic", pattern: "列車", canonical: true },
];

/// A compiled clause rule
#[derive(Debug)]
pub struct ClauseRule {
    /// Position in the priority order (0 is tried first)
    pub rank: usize,
    /// Rule name, reported in diagnostics and logs
    pub name: &'static str,
    regex: Regex,
    canonical: bool,
}

/// What a clause rule pulled out of a segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseMatch {
    /// Normalized train label
    pub train_label: String,
    /// Object + marker + verb, e.g. `鹿と衝突`
    pub cause: String,
    /// Struck-object token, e.g. `鹿`
    pub object: String,
    /// Name of the rule that matched
    pub rule: &'static str,
}

/// Ordered clause rules, first match wins
#[derive(Debug)]
pub struct ClauseRules {
    rules: Vec<ClauseRule>,
    canonical_label: String,
}

impl ClauseRules {
    /// Compile the built-in rule table
    pub fn compile(canonical_label: &str) -> Result<Self, regex::Error> {
        let rules = TRAIN_NOUNS
            .iter()
            .enumerate()
            .map(|(rank, noun)| {
                // Text between the subject marker and the object must end in a particle,
                // so the object is the bare noun in front of the case marker.
                let pattern = format!(
                    r"(?P<train>{noun})(?:が|は(?s:.*?)で)\s*(?:(?s:.*?)[{PARTICLES}]\s*)??(?P<cause>(?P<object>[^\s&{PARTICLES}]+?)(?:{MARKERS})(?:{VERBS}))",
                    noun = noun.pattern,
                );
                Ok(ClauseRule {
                    rank,
                    name: noun.name,
                    regex: Regex::new(&pattern)?,
                    canonical: noun.canonical,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            rules,
            canonical_label: canonical_label.to_string(),
        })
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[ClauseRule] {
        &self.rules
    }

    /// Apply the rules to one segment
    ///
    /// Returns `None` when no rule matches; the caller drops the segment.
    pub fn extract(&self, segment: &str) -> Option<ClauseMatch> {
        self.rules.iter().find_map(|rule| {
            let caps = rule.regex.captures(segment)?;
            let train = caps.name("train")?.as_str().trim();
            let cause = caps.name("cause")?.as_str().trim();
            let object = caps.name("object")?.as_str().trim();

            debug!(rule = rule.name, rank = rule.rank, train, cause, "clause rule matched");

            let train_label = if rule.canonical {
                self.canonical_label.clone()
            } else {
                train.to_string()
            };

            Some(ClauseMatch {
                train_label,
                cause: cause.to_string(),
                object: object.to_string(),
                rule: rule.name,
            })
        })
    }
}
