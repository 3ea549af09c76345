/// Maps a list of adjusted 1-7 scores onto the 0-100 scale.
///
/// The mean of an empty list is taken as 0, which the round-then-clamp step
/// lands on a score of 0; unanswered categories and dimensions therefore
/// surface as 0 rather than an error.
pub(crate) fn normalized_score(scores: &[u8]) -> u8 {
    let mean = if scores.is_empty() {
        0.0
    } else {
        scores.iter().map(|s| f64::from(*s)).sum::<f64>() / scores.len() as f64
    };

    let normalized = ((mean - 1.0) / 6.0) * 100.0;
    normalized.round().clamp(0.0, 100.0) as u8
}
