//! Splitting a bulletin into independent incident clauses

/// Connective joining fully independent incidents ("and also")
pub const INCIDENT_CONNECTIVE: &str = "ならびに";

/// Split normalized text into one candidate clause per incident
///
/// Pieces that are blank once trimmed are discarded, so text made only of
/// connectives yields no segments. Text without the connective yields
/// exactly one segment, the text itself.
pub fn segment(text: &str) -> Vec<String> {
    if !text.contains(INCIDENT_CONNECTIVE) {
        return vec![text.to_string()];
    }

    text.split(INCIDENT_CONNECTIVE)
        .filter(|piece| !piece.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_connective_yields_whole_text() {
        let text = "列車が鹿と衝突 & 遅れ";
        assert_eq!(segment(text), vec![text.to_string()]);
    }

    #[test]
    fn test_split_preserves_order() {
        let segments = segment("一件目ならびに二件目ならびに三件目");
        assert_eq!(segments, vec!["一件目", "二件目", "三件目"]);
    }

    #[test]
    fn test_blank_pieces_dropped() {
        assert_eq!(segment("ならびに一件目ならびに "), vec!["一件目"]);
    }

    #[test]
    fn test_only_connectives_yield_nothing() {
        assert!(segment("ならびに").is_empty());
        assert!(segment(" ならびに ならびに").is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(segment(""), vec![String::new()]);
    }
}
