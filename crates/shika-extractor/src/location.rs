//! Location extraction
//!
//! Two tiers, tried in order; the first tier with at least one match wins and
//! results are never merged across tiers:
//!
//! - **station pair**: `<A>[駅]～<B>[駅]間で` and friends, every
//!   non-overlapping match in the segment
//! - **single station**: `<A>駅構内`, `<A>駅付近`, `<A>駅で`

use regex::Regex;
use shika_domain::LocationRef;
use tracing::debug;

/// Glyphs accepted between the two stations of a pair
const DASHES: &str = r"～〜~\-－ー";

/// Placeholder for a prolonged sound mark that belongs to a word, not a dash.
/// Private-use code point, never present in bulletin text.
const MASKED_MARK: char = '\u{E000}';

/// Characters that can never be part of a station name
const NAME_EXCLUDED: &str = r"\s&、。，．・【】「」『』（）()\[\]駅線がはでをにと";

/// Time-of-day and direction words written flush against a station name
/// ("7時頃札幌", "上り札幌")
const LEADING_NOISE: &str = r"^(?:[0-9０-９]+(?:時|分|頃|ごろ)*|上り|下り)+";

/// Shape of the references a tier produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TierShape {
    Pair,
    Single,
}

/// A compiled location tier
#[derive(Debug)]
pub struct LocationTier {
    /// Position in the evaluation order
    pub rank: usize,
    /// Tier name for logs and tests
    pub name: &'static str,
    regex: Regex,
    shape: TierShape,
}

/// Ordered location tiers
#[derive(Debug)]
pub struct LocationRules {
    tiers: Vec<LocationTier>,
    leading_noise: Regex,
}

impl LocationRules {
    /// Compile the built-in tiers
    pub fn compile() -> Result<Self, regex::Error> {
        // A name may not start with "の" ("函館線の札幌") but may contain it ("あいの里公園").
        let head = format!("[^{}{}の]", NAME_EXCLUDED, DASHES);
        let tail = format!("[^{}{}]", NAME_EXCLUDED, DASHES);
        let name = format!("{head}{tail}*?");

        let pair = format!(
            r"(?P<from>{name})駅?[{DASHES}](?P<to>{name})[駅席]?間(?:で|を|付近|の踏切|\s*&|\s*$)"
        );
        let single = format!(r"(?P<from>{name})駅(?:構内|付近|において|で)");

        Ok(Self {
            tiers: vec![
                LocationTier {
                    rank: 0,
                    name: "station_pair",
                    regex: Regex::new(&pair)?,
                    shape: TierShape::Pair,
                },
                LocationTier {
                    rank: 1,
                    name: "single_station",
                    regex: Regex::new(&single)?,
                    shape: TierShape::Single,
                },
            ],
            leading_noise: Regex::new(LEADING_NOISE)?,
        })
    }

    /// Tiers in evaluation order
    pub fn tiers(&self) -> &[LocationTier] {
        &self.tiers
    }

    /// All locations named by a segment, from the first tier that finds any
    pub fn extract(&self, segment: &str) -> Vec<LocationRef> {
        let protected = protect_loanwords(segment);

        for tier in &self.tiers {
            let locations: Vec<LocationRef> = tier
                .regex
                .captures_iter(&protected)
                .filter_map(|caps| {
                    let from = self.station_name(caps.name("from")?.as_str())?;
                    match tier.shape {
                        TierShape::Pair => {
                            let to = self.station_name(caps.name("to")?.as_str())?;
                            Some(LocationRef::between(from, to))
                        }
                        TierShape::Single => Some(LocationRef::station(from)),
                    }
                })
                .collect();

            if !locations.is_empty() {
                debug!(tier = tier.name, count = locations.len(), "location tier matched");
                return locations;
            }
        }

        Vec::new()
    }

    /// Gazetteer key for a captured name: unmasked, without leading time or
    /// direction words, trimmed
    fn station_name(&self, raw: &str) -> Option<String> {
        let name: String = raw
            .chars()
            .map(|c| if c == MASKED_MARK { 'ー' } else { c })
            .collect();
        let name = self.leading_noise.replace(name.trim(), "");
        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

/// Mask prolonged sound marks that are part of a loanword so the pair rule
/// does not split on them: after "ビ" (ビール) or before "ル" (ホール, ビール).
fn protect_loanwords(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let after_bi = i > 0 && chars[i - 1] == 'ビ';
            let before_ru = chars.get(i + 1) == Some(&'ル');
            if c == 'ー' && (after_bi || before_ru) {
                MASKED_MARK
            } else {
                c
            }
        })
        .collect()
}
