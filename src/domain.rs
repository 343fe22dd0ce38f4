//! Query-domain classifier for East Kazakhstan (VKO) tourism.
//!
//! A query is in-domain iff it mentions at least one VKO keyword and no
//! competing destination. Matching is case-insensitive substring containment,
//! not word-boundary matching; a keyword buried inside an unrelated word
//! still counts. That looseness is part of the observable contract.

/// Region and landmark terms that mark a query as VKO tourism.
const VKO_KEYWORDS: &[&str] = &[
    "vko",
    "east kazakhstan",
    "east-kazakhstan",
    "zaisan",
    "irtysh",
    "semey",
    "ust-kamenogorsk",
    "oskemen",
    "bukhtarma",
    "markakol",
];

/// Competing destinations that disqualify a query outright.
const EXCLUDED_DESTINATIONS: &[&str] = &[
    "russia",
    "moscow",
    "baikal",
    "sochi",
    "crimea",
    "turkey",
    "egypt",
    "thailand",
    "maldiv",
];

/// Returns true iff the query should be treated as a VKO tourism query.
///
/// Binary verdict only; no scoring. Known false negatives (valid queries
/// that never name the region) and false positives (accidental substrings)
/// are accepted.
pub fn is_vko_query(query: &str) -> bool {
    let query = query.to_lowercase();

    let has_vko_keyword = VKO_KEYWORDS.iter().any(|kw| query.contains(kw));
    if !has_vko_keyword {
        return false;
    }

    let has_excluded = EXCLUDED_DESTINATIONS.iter().any(|d| query.contains(d));
    !has_excluded
}
