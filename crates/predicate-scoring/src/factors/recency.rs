use chrono::NaiveDate;
use predicate_core::config::scoring_config::RecencyPoints;
use predicate_core::models::age_in_years;

/// Calendar age in years at `as_of`. Future dates count as age 0.
pub fn age_years(decision_date: NaiveDate, as_of: NaiveDate) -> f64 {
    age_in_years(decision_date, as_of)
}

/// Half-open age bands; unknown dates get the moderate default, never 0.
pub fn calculate(decision_date: Option<NaiveDate>, as_of: NaiveDate, points: &RecencyPoints) -> u32 {
    let Some(date) = decision_date else {
        return points.unknown;
    };
    let age = age_years(date, as_of);
    points
        .bands
        .iter()
        .find(|band| age < band.under_years)
        .map_or(points.beyond, |band| band.points)
}
