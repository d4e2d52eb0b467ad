use chrono::{Local, NaiveDate};

/// Days remaining at which urgency drops to 0.5.
pub const DEFAULT_HALF_POINT_DAYS: f64 = 7.0;

/// Current local calendar date, the default reference for urgency.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Maps deadline proximity to `[0, 1]`.
///
/// No deadline is 0.0, a deadline today or in the past is 1.0, otherwise
/// `1 / (1 + days_left / half_point_days)`.
pub fn deadline_urgency(deadline: Option<NaiveDate>, today: NaiveDate, half_point_days: f64) -> f64 {
    let Some(deadline) = deadline else {
        return 0.0;
    };

    let days_left = (deadline - today).num_days();
    if days_left <= 0 {
        return 1.0;
    }

    let score = 1.0 / (1.0 + days_left as f64 / half_point_days);
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
