/// Headline 0-100 figure describing how widely the category scores vary.
///
/// Population variance of the integer scores, times ten, rounded and clamped.
/// Fewer than two scores yields 0 by convention.
pub fn pattern_complexity(scores: &[u8]) -> u8 {
    if scores.len() < 2 {
        return 0;
    }

    let count = scores.len() as f64;
    let mean = scores.iter().map(|s| f64::from(*s)).sum::<f64>() / count;
    let variance = scores
        .iter()
        .map(|s| (f64::from(*s) - mean).powi(2))
        .sum::<f64>()
        / count;

    (variance * 10.0).round().clamp(0.0, 100.0) as u8
}
