//! String distance and similarity metrics.
//!
//! Two complementary families feed the ranker: a character-level normalized
//! Damerau-Levenshtein distance (strict about spelling, strict about word
//! order) and token-set similarity ratios (tolerant of word reordering and,
//! in the partial variants, of extra surrounding text). Distances are in
//! `[0, 1]` with 0 a perfect match; ratios are in `[0, 100]` with 100 a
//! perfect match.

/// Character-level normalized Damerau-Levenshtein distance in `[0, 1]`.
pub fn edit_distance(a: &str, b: &str) -> f64 {
    1.0 - strsim::normalized_damerau_levenshtein(a, b)
}

/// Plain similarity ratio in `[0, 100]`.
fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Best similarity ratio of `shorter` against any equally long character
/// window of `longer`, in `[0, 100]`.
fn partial_ratio(a: &str, b: &str) -> f64 {
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    if shorter.is_empty() {
        return if longer.is_empty() { 100.0 } else { 0.0 };
    }

    let short_len = shorter.chars().count();
    let long_chars: Vec<char> = longer.chars().collect();
    let mut best: f64 = 0.0;
    for start in 0..=(long_chars.len() - short_len) {
        let window: String = long_chars[start..start + short_len].iter().collect();
        best = best.max(ratio(shorter, &window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

/// Shared skeleton of the token-set ratios: compare the token intersection
/// against each side's full token string, scoring with `score`.
fn token_set_with<F>(a: &str, b: &str, score: F) -> f64
where
    F: Fn(&str, &str) -> f64,
{
    let tokens_a = crate::normalize::tokens(a);
    let tokens_b = crate::normalize::tokens(b);
    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 100.0;
    }
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&str> = tokens_a
        .intersection(&tokens_b)
        .map(String::as_str)
        .collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).map(String::as_str).collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).map(String::as_str).collect();

    let joined_intersection = intersection.join(" ");
    let combined_a = format!("{joined_intersection} {}", only_a.join(" "))
        .trim()
        .to_string();
    let combined_b = format!("{joined_intersection} {}", only_b.join(" "))
        .trim()
        .to_string();

    score(&joined_intersection, &combined_a)
        .max(score(&joined_intersection, &combined_b))
        .max(score(&combined_a, &combined_b))
}

/// Token-set similarity in `[0, 100]`: compares unordered token sets, so
/// word reordering costs nothing.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    token_set_with(a, b, ratio)
}

/// Token-set similarity with partial (best-window) alignment, in `[0, 100]`.
/// Used for definition search, where the query is typically much shorter
/// than the field.
pub fn partial_token_set_ratio(a: &str, b: &str) -> f64 {
    token_set_with(a, b, partial_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_identical_is_zero() {
        assert_eq!(edit_distance("banking", "banking"), 0.0);
    }

    #[test]
    fn test_edit_distance_disjoint_is_high() {
        assert!(edit_distance("banking", "zzz") > 0.8);
    }

    #[test]
    fn test_edit_distance_transposition_is_cheap() {
        // Damerau counts a transposition as one edit.
        let d = edit_distance("bankign", "banking");
        assert!(d > 0.0 && d < 0.2, "got {d}");
    }

    #[test]
    fn test_edit_distance_both_empty_is_zero() {
        assert_eq!(edit_distance("", ""), 0.0);
    }

    #[test]
    fn test_edit_distance_in_unit_range() {
        for (a, b) in [("a", "b"), ("abc", ""), ("tax", "taxation")] {
            let d = edit_distance(a, b);
            assert!((0.0..=1.0).contains(&d), "{a} vs {b} gave {d}");
        }
    }

    #[test]
    fn test_token_set_ratio_reordering_is_free() {
        assert_eq!(token_set_ratio("maritime admiralty", "admiralty maritime"), 100.0);
    }

    #[test]
    fn test_token_set_ratio_subset_scores_high() {
        let score = token_set_ratio("maritime", "admiralty maritime");
        assert!(score >= 50.0, "got {score}");
    }

    #[test]
    fn test_token_set_ratio_disjoint_scores_low() {
        let score = token_set_ratio("banking", "zoning permits");
        assert!(score < 50.0, "got {score}");
    }

    #[test]
    fn test_token_set_ratio_empty_handling() {
        assert_eq!(token_set_ratio("", ""), 100.0);
        assert_eq!(token_set_ratio("banking", ""), 0.0);
    }

    #[test]
    fn test_partial_ratio_substring_is_perfect() {
        assert_eq!(partial_ratio("bank", "interstate banking rules"), 100.0);
    }

    #[test]
    fn test_partial_token_set_ratio_query_inside_definition() {
        let definition = "rules governing banks and financial institutions";
        let score = partial_token_set_ratio("banks", definition);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_partial_token_set_ratio_unrelated_text() {
        let score = partial_token_set_ratio("maritime shipping", "criminal sentencing rules");
        assert!(score < 60.0, "got {score}");
    }

    #[test]
    fn test_ratios_bounded() {
        for (a, b) in [("tax", "taxation rules"), ("x", "y"), ("a b c", "c b a")] {
            for score in [token_set_ratio(a, b), partial_token_set_ratio(a, b)] {
                assert!((0.0..=100.0).contains(&score), "{a} vs {b} gave {score}");
            }
        }
    }
}
