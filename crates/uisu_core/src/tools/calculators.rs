//! Small numeric calculators.

const CM_TO_INCHES: f64 = 0.393701;
const LOAN_INTEREST_FACTOR: f64 = 1.05;
const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
const MS_PER_YEAR: f64 = MS_PER_DAY as f64 * 365.25;

/// Body mass index to one decimal.
pub fn bmi(weight_kg: f64, height_cm: f64) -> String {
    let meters = height_cm / 100.0;
    format!("{:.1}", weight_kg / (meters * meters))
}

/// `percent` percent of `value`.
pub fn percentage_of(value: f64, percent: f64) -> f64 {
    value * percent / 100.0
}

/// Centimeters to inches, two decimals.
pub fn cm_to_inches(cm: f64) -> String {
    format!("{:.2}", cm * CM_TO_INCHES)
}

/// Total repayment with flat 5% interest, rounded to a whole amount.
pub fn loan_repayment(amount: f64) -> String {
    format!("{:.0}", amount * LOAN_INTEREST_FACTOR)
}

/// Whole years elapsed over `elapsed_ms`, counting 365.25-day years.
pub fn age_in_years(elapsed_ms: i64) -> i64 {
    (elapsed_ms as f64 / MS_PER_YEAR).floor() as i64
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

/// Splits the time remaining until a target; past targets read as zero.
pub fn countdown(remaining_ms: i64) -> Countdown {
    let remaining = remaining_ms.max(0);
    Countdown {
        days: remaining / MS_PER_DAY,
        hours: (remaining % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (remaining % MS_PER_HOUR) / MS_PER_MINUTE,
    }
}

/// Stopwatch display `MM:SS.cc`.
pub fn format_stopwatch(elapsed_ms: u64) -> String {
    let minutes = elapsed_ms / 60_000;
    let seconds = (elapsed_ms % 60_000) / 1000;
    let centis = (elapsed_ms % 1000) / 10;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}
