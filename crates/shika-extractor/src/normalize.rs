//! Conjunction flattening
//!
//! Bulletins enumerate intervals with several conjunctions ("および", "及び",
//! the ideographic comma). Rewriting all of them to one separator lets the
//! location rules deal with a single list shape.

/// Separator every conjunction is rewritten to
pub const SEPARATOR: &str = " & ";

/// Conjunctions replaced by [`SEPARATOR`], applied in order
const CONJUNCTIONS: [&str; 3] = ["および", "及び", "、"];

/// "間と" (interval + "and") and its replacement. The interval marker is kept
/// so the pair rule still sees the end of the first interval.
const INTERVAL_AND: (&str, &str) = ("間と", "間 & ");

/// Flatten conjunctions into the uniform separator
///
/// Total and pure: text without any conjunction comes back unchanged.
pub fn normalize(text: &str) -> String {
    let mut out = text.to_string();
    for conjunction in CONJUNCTIONS {
        if out.contains(conjunction) {
            out = out.replace(conjunction, SEPARATOR);
        }
    }
    if out.contains(INTERVAL_AND.0) {
        out = out.replace(INTERVAL_AND.0, INTERVAL_AND.1);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_text_passes_through() {
        let text = "列車が札幌～桑園駅間で鹿と衝突しました。";
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn test_conjunctions_become_separator() {
        assert_eq!(normalize("A、B"), "A & B");
        assert_eq!(normalize("AおよびB"), "A & B");
        assert_eq!(normalize("A及びB"), "A & B");
    }

    #[test]
    fn test_interval_and_keeps_interval_marker() {
        assert_eq!(
            normalize("札幌～桑園駅間と琴似～発寒駅間で"),
            "札幌～桑園駅間 & 琴似～発寒駅間で"
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(normalize(""), "");
    }
}
