//! Object classification

use shika_domain::ObjectCategory;

/// Known object tokens. Exact match only; anything else is `Other`.
const OBJECT_TABLE: &[(&str, ObjectCategory)] = &[
    ("鹿", ObjectCategory::Deer),
    ("シカ", ObjectCategory::Deer),
    ("しか", ObjectCategory::Deer),
    ("エゾシカ", ObjectCategory::Deer),
    ("熊", ObjectCategory::Bear),
    ("クマ", ObjectCategory::Bear),
    ("くま", ObjectCategory::Bear),
    ("ヒグマ", ObjectCategory::Bear),
    ("鳥", ObjectCategory::Bird),
    ("野鳥", ObjectCategory::Bird),
    ("カラス", ObjectCategory::Bird),
    ("ハト", ObjectCategory::Bird),
    ("倒木", ObjectCategory::FallenTree),
    ("木", ObjectCategory::FallenTree),
    ("車", ObjectCategory::Vehicle),
    ("自動車", ObjectCategory::Vehicle),
    ("乗用車", ObjectCategory::Vehicle),
    ("トラック", ObjectCategory::Vehicle),
];

/// Map an object token to its category
pub fn classify(object_token: &str) -> ObjectCategory {
    OBJECT_TABLE
        .iter()
        .find(|(token, _)| *token == object_token)
        .map(|(_, category)| *category)
        .unwrap_or(ObjectCategory::Other)
}
