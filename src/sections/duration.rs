//! Duration section - renders a crack time as human-readable text.

use std::fmt;

use num_bigint::BigUint;
use num_integer::Integer;

use crate::config::FormattingMode;
use crate::sections::KeyspaceEstimate;

const SECONDS_PER_MINUTE: u128 = 60;
const SECONDS_PER_HOUR: u128 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u128 = 24 * SECONDS_PER_HOUR;
/// 365-day year, no leap correction.
const SECONDS_PER_YEAR: u128 = 365 * SECONDS_PER_DAY;

const SENTINEL: &str = "less than a second";
const SATURATED_SUFFIX: &str = "(effectively uncrackable)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    QuintillionYears,
    QuadrillionYears,
    TrillionYears,
    BillionYears,
    MillionYears,
    Centuries,
    Decades,
    Years,
    Days,
    Hours,
    Minutes,
    Seconds,
}

const STANDARD_SCALE: [TimeUnit; 10] = [
    TimeUnit::QuintillionYears,
    TimeUnit::QuadrillionYears,
    TimeUnit::TrillionYears,
    TimeUnit::BillionYears,
    TimeUnit::MillionYears,
    TimeUnit::Years,
    TimeUnit::Days,
    TimeUnit::Hours,
    TimeUnit::Minutes,
    TimeUnit::Seconds,
];

const EXTENDED_SCALE: [TimeUnit; 12] = [
    TimeUnit::QuintillionYears,
    TimeUnit::QuadrillionYears,
    TimeUnit::TrillionYears,
    TimeUnit::BillionYears,
    TimeUnit::MillionYears,
    TimeUnit::Centuries,
    TimeUnit::Decades,
    TimeUnit::Years,
    TimeUnit::Days,
    TimeUnit::Hours,
    TimeUnit::Minutes,
    TimeUnit::Seconds,
];

impl TimeUnit {
    /// Length of the unit in seconds.
    pub const fn seconds(self) -> u128 {
        match self {
            TimeUnit::QuintillionYears => 1_000_000_000_000_000_000 * SECONDS_PER_YEAR,
            TimeUnit::QuadrillionYears => 1_000_000_000_000_000 * SECONDS_PER_YEAR,
            TimeUnit::TrillionYears => 1_000_000_000_000 * SECONDS_PER_YEAR,
            TimeUnit::BillionYears => 1_000_000_000 * SECONDS_PER_YEAR,
            TimeUnit::MillionYears => 1_000_000 * SECONDS_PER_YEAR,
            TimeUnit::Centuries => 100 * SECONDS_PER_YEAR,
            TimeUnit::Decades => 10 * SECONDS_PER_YEAR,
            TimeUnit::Years => SECONDS_PER_YEAR,
            TimeUnit::Days => SECONDS_PER_DAY,
            TimeUnit::Hours => SECONDS_PER_HOUR,
            TimeUnit::Minutes => SECONDS_PER_MINUTE,
            TimeUnit::Seconds => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TimeUnit::QuintillionYears => "quintillion years",
            TimeUnit::QuadrillionYears => "quadrillion years",
            TimeUnit::TrillionYears => "trillion years",
            TimeUnit::BillionYears => "billion years",
            TimeUnit::MillionYears => "million years",
            TimeUnit::Centuries => "centuries",
            TimeUnit::Decades => "decades",
            TimeUnit::Years => "years",
            TimeUnit::Days => "days",
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
        }
    }

    /// Units from largest to smallest.
    pub fn scale(extended: bool) -> &'static [TimeUnit] {
        if extended {
            &EXTENDED_SCALE
        } else {
            &STANDARD_SCALE
        }
    }

    fn as_biguint(self) -> BigUint {
        BigUint::from(self.seconds())
    }
}

/// One `<count> <unit>` term of a cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationTerm {
    pub count: BigUint,
    pub unit: TimeUnit,
}

impl fmt::Display for DurationTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.unit.label())
    }
}

/// A crack time ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedDuration {
    /// No unit reaches a count of one.
    LessThanASecond,
    /// Non-empty, strictly descending units, every count non-zero.
    Cascade(Vec<DurationTerm>),
    /// A single unit with a value of hundredths.
    Rounded { hundredths: BigUint, unit: TimeUnit },
    /// Lower bound for an estimate whose length was capped.
    AtLeast(Box<FormattedDuration>),
}

impl FormattedDuration {
    /// Cascade terms, empty for the other forms.
    pub fn terms(&self) -> &[DurationTerm] {
        match self {
            FormattedDuration::Cascade(terms) => terms,
            FormattedDuration::AtLeast(inner) => inner.terms(),
            _ => &[],
        }
    }

    /// True for a lower bound produced from a capped estimate.
    pub fn is_lower_bound(&self) -> bool {
        matches!(self, FormattedDuration::AtLeast(_))
    }

    pub fn leading_unit(&self) -> Option<TimeUnit> {
        match self {
            FormattedDuration::LessThanASecond => None,
            FormattedDuration::Cascade(terms) => terms.first().map(|t| t.unit),
            FormattedDuration::Rounded { unit, .. } => Some(*unit),
            FormattedDuration::AtLeast(inner) => inner.leading_unit(),
        }
    }

    /// Seconds rebuilt from the leading term alone, rounded down.
    ///
    /// Smaller terms of a cascade are ignored, so `2 days 3 hours` gives
    /// exactly two days.
    pub fn leading_term_seconds(&self) -> BigUint {
        match self {
            FormattedDuration::LessThanASecond => BigUint::default(),
            FormattedDuration::Cascade(terms) => terms
                .first()
                .map(|t| &t.count * t.unit.as_biguint())
                .unwrap_or_default(),
            FormattedDuration::Rounded { hundredths, unit } => {
                hundredths * unit.as_biguint() / 100u32
            }
            FormattedDuration::AtLeast(inner) => inner.leading_term_seconds(),
        }
    }
}

impl fmt::Display for FormattedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedDuration::LessThanASecond => f.write_str(SENTINEL),
            FormattedDuration::Cascade(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", term)?;
                }
                Ok(())
            }
            FormattedDuration::Rounded { hundredths, unit } => {
                let (whole, fraction) = hundredths.div_rem(&BigUint::from(100u32));
                let fraction = u32::try_from(&fraction).unwrap_or(0);
                write!(f, "{}.{:02} {}", whole, fraction, unit.label())
            }
            FormattedDuration::AtLeast(inner) => {
                write!(f, "at least {} {}", inner, SATURATED_SUFFIX)
            }
        }
    }
}

/// Formats the crack time of a keyspace estimate.
///
/// # Arguments
/// * `estimate` - Guess count and guessing rate from the keyspace section
/// * `mode` - Cascade of units or a single rounded unit
/// * `extended_scale` - Whether centuries and decades are part of the table
///
/// # Returns
/// The formatted crack time. A saturated estimate is wrapped in
/// `FormattedDuration::AtLeast`, since the real value is larger.
pub fn duration_section(
    estimate: &KeyspaceEstimate,
    mode: FormattingMode,
    extended_scale: bool,
) -> FormattedDuration {
    let formatted = format_fraction(
        estimate.guess_count(),
        estimate.guesses_per_second(),
        mode,
        TimeUnit::scale(extended_scale),
    );

    if estimate.is_saturated() && formatted != FormattedDuration::LessThanASecond {
        FormattedDuration::AtLeast(Box::new(formatted))
    } else {
        formatted
    }
}

/// Formats a whole number of seconds.
pub fn format_seconds(
    seconds: &BigUint,
    mode: FormattingMode,
    extended_scale: bool,
) -> FormattedDuration {
    format_fraction(seconds, 1, mode, TimeUnit::scale(extended_scale))
}

/// Formats `numerator / denominator` seconds.
fn format_fraction(
    numerator: &BigUint,
    denominator: u64,
    mode: FormattingMode,
    scale: &[TimeUnit],
) -> FormattedDuration {
    match mode {
        FormattingMode::Cascade => cascade(&(numerator / denominator), scale),
        FormattingMode::Rounded => rounded(numerator, denominator, scale),
    }
}

fn cascade(seconds: &BigUint, scale: &[TimeUnit]) -> FormattedDuration {
    let zero = BigUint::default();
    let mut remaining = seconds.clone();
    let mut terms = Vec::new();

    for &unit in scale {
        let (count, rest) = remaining.div_rem(&unit.as_biguint());
        if count > zero {
            terms.push(DurationTerm { count, unit });
            remaining = rest;
        }
    }

    if terms.is_empty() {
        FormattedDuration::LessThanASecond
    } else {
        FormattedDuration::Cascade(terms)
    }
}

fn rounded(numerator: &BigUint, denominator: u64, scale: &[TimeUnit]) -> FormattedDuration {
    let whole_seconds = numerator / denominator;

    for &unit in scale {
        let unit_seconds = unit.as_biguint();
        if whole_seconds >= unit_seconds {
            // thousandths of the unit, then half-up to hundredths
            let thousandths = numerator * 1000u32 / (unit_seconds * denominator);
            let hundredths = (thousandths + 5u32) / 10u32;
            return FormattedDuration::Rounded { hundredths, unit };
        }
    }

    FormattedDuration::LessThanASecond
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{keyspace_section, rules_section};
    use secrecy::SecretString;

    fn cascade_of(seconds: u128) -> FormattedDuration {
        format_seconds(&BigUint::from(seconds), FormattingMode::Cascade, false)
    }

    fn rounded_of(seconds: u128) -> FormattedDuration {
        format_seconds(&BigUint::from(seconds), FormattingMode::Rounded, false)
    }

    #[test]
    fn test_zero_is_less_than_a_second() {
        assert_eq!(cascade_of(0), FormattedDuration::LessThanASecond);
        assert_eq!(cascade_of(0).to_string(), "less than a second");
        assert_eq!(rounded_of(0).to_string(), "less than a second");
    }

    #[test]
    fn test_cascade_breaks_into_units() {
        assert_eq!(
            cascade_of(90_061).to_string(),
            "1 days 1 hours 1 minutes 1 seconds"
        );
    }

    #[test]
    fn test_cascade_omits_zero_units() {
        assert_eq!(cascade_of(3_600 + 5).to_string(), "1 hours 5 seconds");
        assert_eq!(cascade_of(59).to_string(), "59 seconds");
    }

    #[test]
    fn test_cascade_years() {
        let seconds = 2 * SECONDS_PER_YEAR + 3 * SECONDS_PER_DAY;
        assert_eq!(cascade_of(seconds).to_string(), "2 years 3 days");
    }

    #[test]
    fn test_cascade_extended_scale() {
        let seconds = BigUint::from(123 * SECONDS_PER_YEAR);
        let standard = format_seconds(&seconds, FormattingMode::Cascade, false);
        let extended = format_seconds(&seconds, FormattingMode::Cascade, true);
        assert_eq!(standard.to_string(), "123 years");
        assert_eq!(extended.to_string(), "1 centuries 2 decades 3 years");
    }

    #[test]
    fn test_cascade_beyond_largest_unit() {
        let seconds = BigUint::from(TimeUnit::QuintillionYears.seconds()) * 5000u32;
        let formatted = format_seconds(&seconds, FormattingMode::Cascade, false);
        assert_eq!(formatted.to_string(), "5000 quintillion years");
    }

    #[test]
    fn test_cascade_terms_account_for_every_second() {
        let samples: [u128; 8] = [
            1,
            61,
            86_399,
            90_061,
            SECONDS_PER_YEAR - 1,
            7 * SECONDS_PER_YEAR + 12_345,
            TimeUnit::BillionYears.seconds() + 3,
            3 * TimeUnit::QuintillionYears.seconds() + 42 * SECONDS_PER_DAY + 17,
        ];
        for s in samples {
            let formatted = cascade_of(s);
            let total: BigUint = formatted
                .terms()
                .iter()
                .map(|t| &t.count * BigUint::from(t.unit.seconds()))
                .sum();
            assert_eq!(total, BigUint::from(s), "terms of {} do not add up", s);

            let units: Vec<_> = formatted.terms().iter().map(|t| t.unit.seconds()).collect();
            assert!(units.windows(2).all(|w| w[0] > w[1]), "units not descending for {}", s);
        }
    }

    #[test]
    fn test_cascade_fraction_drops_sub_second() {
        // 2.5 seconds
        let formatted = format_fraction(
            &BigUint::from(5u32),
            2,
            FormattingMode::Cascade,
            TimeUnit::scale(false),
        );
        assert_eq!(formatted.to_string(), "2 seconds");
    }

    #[test]
    fn test_rounded_two_decimals() {
        assert_eq!(rounded_of(90_061).to_string(), "1.04 days");
        assert_eq!(rounded_of(90).to_string(), "1.50 minutes");
        assert_eq!(rounded_of(1).to_string(), "1.00 seconds");
    }

    #[test]
    fn test_rounded_fractional_seconds() {
        // 78_074_896 guesses at 1e9 per second
        let formatted = format_fraction(
            &BigUint::from(78_074_896u64),
            1_000_000_000,
            FormattingMode::Rounded,
            TimeUnit::scale(false),
        );
        assert_eq!(formatted, FormattedDuration::LessThanASecond);

        // 1.999 seconds rounds up
        let formatted = format_fraction(
            &BigUint::from(1_999u32),
            1_000,
            FormattingMode::Rounded,
            TimeUnit::scale(false),
        );
        assert_eq!(formatted.to_string(), "2.00 seconds");
    }

    #[test]
    fn test_leading_term_seconds_ignores_smaller_terms() {
        let seconds = 2 * SECONDS_PER_DAY + 3 * SECONDS_PER_HOUR;
        let formatted = cascade_of(seconds);
        assert_eq!(formatted.to_string(), "2 days 3 hours");
        assert_eq!(formatted.leading_unit(), Some(TimeUnit::Days));
        assert_eq!(
            formatted.leading_term_seconds(),
            BigUint::from(2 * SECONDS_PER_DAY)
        );
    }

    #[test]
    fn test_saturated_estimate_is_labelled() {
        let pwd = SecretString::new("abcdefgh".to_string().into());
        let conditions = rules_section(&pwd, 8);

        // 26^4 / 1 guess per second = 456976 s
        let capped = keyspace_section(&pwd, &conditions, 1, 4);
        let formatted = duration_section(&capped, FormattingMode::Cascade, false);
        assert!(formatted.is_lower_bound());
        assert_eq!(
            formatted.to_string(),
            "at least 5 days 6 hours 56 minutes 16 seconds (effectively uncrackable)"
        );
        assert_eq!(formatted.leading_unit(), Some(TimeUnit::Days));
        assert_eq!(formatted.leading_term_seconds(), BigUint::from(5 * SECONDS_PER_DAY));
        assert_eq!(formatted.terms().len(), 4);

        let exact = keyspace_section(&pwd, &conditions, 1, 8);
        let formatted = duration_section(&exact, FormattingMode::Cascade, false);
        assert!(!formatted.is_lower_bound());
        assert!(!formatted.to_string().contains("at least"));
    }

    #[test]
    fn test_leading_term_seconds_rounded() {
        // "1.04 days" rescales to 1.04 * 86400
        assert_eq!(
            rounded_of(90_061).leading_term_seconds(),
            BigUint::from(89_856u32)
        );
        assert_eq!(
            FormattedDuration::LessThanASecond.leading_term_seconds(),
            BigUint::default()
        );
    }
}
