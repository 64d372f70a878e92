//! Subsequence matching and match-quality scoring.
//!
//! The scorer is the fzy dynamic program: contiguous runs beat dispersed
//! matches, and matches anchored at the start of the haystack or at word
//! boundaries beat matches buried mid-string. Scores are deterministic for
//! identical inputs. Neither function folds case; the caller fixes the
//! comparison mode by folding (or not) before calling.

/// Score of anything unmatchable; sorts below every real match.
pub const SCORE_MIN: f64 = f64::NEG_INFINITY;
/// Score of an exact match; sorts above every partial match.
pub const SCORE_MAX: f64 = f64::INFINITY;

const SCORE_GAP_LEADING: f64 = -0.005;
const SCORE_GAP_TRAILING: f64 = -0.005;
const SCORE_GAP_INNER: f64 = -0.01;
const SCORE_MATCH_CONSECUTIVE: f64 = 1.0;
const SCORE_MATCH_SLASH: f64 = 0.9;
const SCORE_MATCH_WORD: f64 = 0.8;
const SCORE_MATCH_CAPITAL: f64 = 0.7;
const SCORE_MATCH_DOT: f64 = 0.6;

/// Haystacks longer than this score [`SCORE_MIN`] outright; the quadratic
/// scoring table is not worth filling for degenerate inputs.
const MATCH_MAX_LENGTH: usize = 1024;

/// True iff `needle`'s characters occur in `haystack` in order. The empty
/// needle matches everything.
pub fn has_match(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack;
    for ch in needle.chars() {
        match rest.find(ch) {
            Some(at) => rest = &rest[at + ch.len_utf8()..],
            None => return false,
        }
    }
    true
}

/// Match quality of `needle` against `haystack`; higher is better.
///
/// Only meaningful when [`has_match`] holds; non-matching pairs come out
/// at or near [`SCORE_MIN`].
pub fn score(needle: &str, haystack: &str) -> f64 {
    let needle: Vec<char> = needle.chars().collect();
    let haystack: Vec<char> = haystack.chars().collect();

    if needle.is_empty() || haystack.len() > MATCH_MAX_LENGTH {
        return SCORE_MIN;
    }
    if needle.len() == haystack.len() {
        // A subsequence of equal length is the whole haystack.
        return SCORE_MAX;
    }

    let bonus = match_bonus(&haystack);
    let width = haystack.len();

    // Rolling rows of the fzy table: `ends` is the best score for a match
    // ending exactly at this haystack position, `best` the best score up to
    // and including it.
    let mut ends_prev = vec![SCORE_MIN; width];
    let mut best_prev = vec![SCORE_MIN; width];

    for (i, &nc) in needle.iter().enumerate() {
        let mut ends = vec![SCORE_MIN; width];
        let mut best = vec![SCORE_MIN; width];
        let gap = if i == needle.len() - 1 {
            SCORE_GAP_TRAILING
        } else {
            SCORE_GAP_INNER
        };
        let mut running = SCORE_MIN;

        for (j, &hc) in haystack.iter().enumerate() {
            if nc == hc {
                let here = if i == 0 {
                    (j as f64).mul_add(SCORE_GAP_LEADING, bonus[j])
                } else if j > 0 {
                    let fresh = best_prev[j - 1] + bonus[j];
                    let run = ends_prev[j - 1] + SCORE_MATCH_CONSECUTIVE;
                    fresh.max(run)
                } else {
                    SCORE_MIN
                };
                ends[j] = here;
                running = here.max(running + gap);
            } else {
                running += gap;
            }
            best[j] = running;
        }

        ends_prev = ends;
        best_prev = best;
    }

    best_prev[width - 1]
}

/// Positional bonus for matching each haystack character, derived from the
/// character before it. The first character counts as following a slash.
fn match_bonus(haystack: &[char]) -> Vec<f64> {
    let mut previous = '/';
    haystack
        .iter()
        .map(|&ch| {
            let bonus = bonus_for(previous, ch);
            previous = ch;
            bonus
        })
        .collect()
}

fn bonus_for(previous: char, ch: char) -> f64 {
    if !ch.is_alphanumeric() {
        return 0.0;
    }
    match previous {
        '/' => SCORE_MATCH_SLASH,
        '-' | '_' | ' ' => SCORE_MATCH_WORD,
        '.' => SCORE_MATCH_DOT,
        _ if previous.is_lowercase() && ch.is_uppercase() => SCORE_MATCH_CAPITAL,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle_matches_everything() {
        assert!(has_match("", ""));
        assert!(has_match("", "anything"));
    }

    #[test]
    fn subsequences_match_in_order_only() {
        assert!(has_match("gtk", "gtk_widget_show"));
        assert!(has_match("gws", "gtk_widget_show"));
        assert!(!has_match("swg", "gtk_widget_show"));
        assert!(!has_match("gtkk", "gtk"));
    }

    #[test]
    fn no_case_folding_happens_internally() {
        assert!(has_match("GTK", "GTK"));
        assert!(!has_match("GTK", "gtk"));
    }

    #[test]
    fn exact_match_scores_max() {
        assert_eq!(score("GtkButton", "GtkButton"), SCORE_MAX);
    }

    #[test]
    fn empty_needle_and_oversized_haystack_score_min() {
        assert_eq!(score("", "anything"), SCORE_MIN);
        let huge = "x".repeat(2000);
        assert_eq!(score("x", &huge), SCORE_MIN);
    }

    #[test]
    fn contiguous_beats_dispersed() {
        // Same needle, same haystack length; only dispersion differs.
        assert!(score("abc", "xxabcx") > score("abc", "axbxcx"));
    }

    #[test]
    fn start_anchored_beats_buried() {
        assert!(score("foo", "foo_bar") > score("foo", "bar_foo"));
    }

    #[test]
    fn word_boundary_beats_mid_word() {
        assert!(score("b", "foo_bar") > score("b", "fooxbar"));
    }

    #[test]
    fn capital_boundary_beats_mid_word() {
        assert!(score("B", "GtkButton") > score("B", "GTKBUTTON"));
    }

    #[test]
    fn scores_are_deterministic() {
        let first = score("gbsl", "gtk_button_set_label");
        let second = score("gbsl", "gtk_button_set_label");
        assert_eq!(first, second);
    }
}
