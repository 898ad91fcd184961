use crate::domain::RandomSource;

pub const MIN_RATING: f64 = 3.5;
pub const MAX_RATING: f64 = 5.0;
pub const MIN_REVIEWS: i64 = 50;
pub const MAX_REVIEWS: i64 = 300;

/// Rating in `[3.5, 5.0]`, rounded to one decimal place.
pub fn random_rating(random: &dyn RandomSource) -> f64 {
    let unit = clamp_unit(random.next_unit());
    let raw = unit * (MAX_RATING - MIN_RATING) + MIN_RATING;
    ((raw * 10.0).round() / 10.0).clamp(MIN_RATING, MAX_RATING)
}

/// Review count in `[50, 300]` inclusive.
pub fn random_review_count(random: &dyn RandomSource) -> i64 {
    let span = (MAX_REVIEWS - MIN_REVIEWS + 1) as f64;
    let offset = (clamp_unit(random.next_unit()) * span).floor() as i64;
    (MIN_REVIEWS + offset).min(MAX_REVIEWS)
}

pub(crate) fn clamp_unit(sample: f64) -> f64 {
    if sample.is_nan() {
        0.0
    } else {
        sample.clamp(0.0, 1.0)
    }
}
