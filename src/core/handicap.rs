/// Returned by [`calculate_handicap`] when there are too few rounds.
/// Callers detect "no handicap" by comparing against this value.
pub const INSUFFICIENT_DATA_HCP: f64 = 55.0;

pub const MIN_ROUNDS_FOR_HCP: usize = 3;
pub const MAX_COUNTED_ROUNDS: usize = 5;

/// Mean of the best (lowest) five scores, or [`INSUFFICIENT_DATA_HCP`] with
/// fewer than three scores.
pub fn calculate_handicap(scores: &[i32]) -> f64 {
    if scores.len() < MIN_ROUNDS_FOR_HCP {
        return INSUFFICIENT_DATA_HCP;
    }

    let mut sorted = scores.to_vec();
    sorted.sort_unstable();

    let counted = &sorted[..scores.len().min(MAX_COUNTED_ROUNDS)];
    let sum: i64 = counted.iter().map(|&score| i64::from(score)).sum();
    sum as f64 / counted.len() as f64
}

pub fn has_handicap(hcp: f64) -> bool {
    hcp != INSUFFICIENT_DATA_HCP
}

/// Whole values print without a decimal point, anything else with one decimal.
pub fn format_handicap(hcp: f64) -> String {
    if hcp.fract() == 0.0 {
        format!("{}", hcp as i64)
    } else {
        format!("{:.1}", hcp)
    }
}

/// Scores above par get an explicit `+`.
pub fn format_score(score: i32) -> String {
    if score > 0 {
        format!("+{}", score)
    } else {
        score.to_string()
    }
}
