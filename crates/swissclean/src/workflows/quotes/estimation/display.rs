use serde::{Deserialize, Serialize};

use super::super::domain::PricingUnit;
use super::rules::PricingRule;

/// Localized price-line templates, injected by the caller. Placeholders are
/// `{amount}`, `{low}`, `{high}`, `{rate}`, and `{min}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTexts {
    pub on_request: String,
    pub from_amount: String,
    pub hourly_range: String,
    pub hourly_range_per_person: String,
    pub hourly_from: String,
    pub sqm_range: String,
    pub construction: String,
    pub fixed_range: String,
    pub per_window_range: String,
    pub per_m3_from: String,
}

impl PriceTexts {
    /// Swiss-German strings used on the public website.
    pub fn de() -> Self {
        Self {
            on_request: "Preis auf Anfrage".to_string(),
            from_amount: "ab CHF {amount}".to_string(),
            hourly_range: "CHF {low}–{high}/Stunde".to_string(),
            hourly_range_per_person: "CHF {low}–{high}/Std. pro Mitarbeiter".to_string(),
            hourly_from: "ab CHF {rate}/Stunde".to_string(),
            sqm_range: "CHF {low}–{high}/m²".to_string(),
            construction: "CHF {low}–{high}/m², Mindestpauschale CHF {min}".to_string(),
            fixed_range: "CHF {low}–{high}".to_string(),
            per_window_range: "CHF {low}–{high} pro Fenster".to_string(),
            per_m3_from: "ab CHF {rate}/m³".to_string(),
        }
    }

    pub fn en() -> Self {
        Self {
            on_request: "price on request".to_string(),
            from_amount: "from CHF {amount}".to_string(),
            hourly_range: "CHF {low}–{high}/hour".to_string(),
            hourly_range_per_person: "CHF {low}–{high}/hour per staff".to_string(),
            hourly_from: "from CHF {rate}/hour".to_string(),
            sqm_range: "CHF {low}–{high}/m²".to_string(),
            construction: "CHF {low}–{high}/m², site minimum CHF {min}".to_string(),
            fixed_range: "CHF {low}–{high}".to_string(),
            per_window_range: "CHF {low}–{high} per window".to_string(),
            per_m3_from: "from CHF {rate}/m³".to_string(),
        }
    }

    /// German is the website default; anything unrecognized falls back to it.
    pub fn for_locale(locale: &str) -> Self {
        match locale.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Self::en(),
            _ => Self::de(),
        }
    }
}

/// Swiss thousands grouping: CHF 1'150.
pub fn format_chf(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(ch);
    }
    grouped
}

/// Rates print without trailing zeros unless they carry centimes (0.60).
fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{}", rate as u64)
    } else {
        format!("{rate:.2}")
    }
}

/// Render the advertised price line for a rule that produced `base`.
///
/// Range templates always name the upper bound of the rate even though only
/// the lower bound feeds the numeric floor; that is the website's "starting
/// at" disclosure, not a computation error.
pub(crate) fn render(
    unit: PricingUnit,
    rule: &PricingRule,
    base: u32,
    texts: &PriceTexts,
) -> String {
    let (rate, rate_high, minimum) = match rule {
        PricingRule::Tiered { .. } => (f64::from(base), None, None),
        PricingRule::Formula {
            rate,
            rate_high,
            minimum,
            ..
        } => (*rate, *rate_high, *minimum),
    };
    let high = rate_high.unwrap_or(rate);

    match unit {
        PricingUnit::Rooms | PricingUnit::Fixed | PricingUnit::FixedFrom => {
            texts.from_amount.replace("{amount}", &format_chf(base))
        }
        PricingUnit::HourlyRange => fill_range(&texts.hourly_range, rate, high),
        PricingUnit::HourlyRangePerPerson => {
            fill_range(&texts.hourly_range_per_person, rate, high)
        }
        PricingUnit::HourlyFrom => texts.hourly_from.replace("{rate}", &format_rate(rate)),
        PricingUnit::SqmRange => fill_range(&texts.sqm_range, rate, high),
        PricingUnit::Construction => texts
            .construction
            .replace("{low}", &format_rate(rate))
            .replace("{high}", &format_rate(high))
            .replace("{min}", &format_chf(minimum.unwrap_or(base))),
        PricingUnit::FixedRange => texts
            .fixed_range
            .replace("{low}", &format_chf(rate as u32))
            .replace("{high}", &format_chf(high as u32)),
        PricingUnit::PerWindowRange => fill_range(&texts.per_window_range, rate, high),
        PricingUnit::PerM3From => texts.per_m3_from.replace("{rate}", &format_rate(rate)),
    }
}

fn fill_range(template: &str, low: f64, high: f64) -> String {
    template
        .replace("{low}", &format_rate(low))
        .replace("{high}", &format_rate(high))
}
