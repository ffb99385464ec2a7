//! Age-unit conversion to years.

const HOURS_PER_YEAR: f64 = 365.0 * 24.0;

/// Convert a raw (value, unit) pair into years, retaining the raw unit.
///
/// Unit matching uses the exact FAERS vocabularies (short code plus
/// singular/plural spellings). An unrecognized unit passes the value
/// through unchanged, treating it as already in years; an unparsable
/// value yields an absent age but keeps the unit string.
pub fn age_to_years(value: Option<&str>, unit: Option<&str>) -> (Option<f64>, String) {
    let raw_unit = unit.unwrap_or("").to_string();
    let Some(value) = value else {
        return (None, raw_unit);
    };
    let Ok(parsed) = value.trim().parse::<f64>() else {
        return (None, raw_unit);
    };
    let unit_key = raw_unit.trim().to_uppercase();
    let years = match unit_key.as_str() {
        "YR" | "YEAR" | "YEARS" => parsed,
        "MON" | "MONTH" | "MONTHS" => parsed / 12.0,
        "WK" | "WEEK" | "WEEKS" => parsed / 52.0,
        "DY" | "DAY" | "DAYS" => parsed / 365.0,
        "HR" | "HOUR" | "HOURS" => parsed / HOURS_PER_YEAR,
        _ => parsed,
    };
    (Some(years), raw_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_conversions() {
        assert_eq!(age_to_years(Some("5"), Some("YR")), (Some(5.0), "YR".to_string()));
        assert_eq!(
            age_to_years(Some("24"), Some("MON")),
            (Some(2.0), "MON".to_string())
        );
        assert_eq!(
            age_to_years(Some("730"), Some("DAY")),
            (Some(2.0), "DAY".to_string())
        );
        assert_eq!(
            age_to_years(Some("104"), Some("WEEKS")),
            (Some(2.0), "WEEKS".to_string())
        );
        assert_eq!(
            age_to_years(Some("8760"), Some("HR")),
            (Some(1.0), "HR".to_string())
        );
    }

    #[test]
    fn unknown_unit_passes_through() {
        assert_eq!(
            age_to_years(Some("42"), Some("DECADES")),
            (Some(42.0), "DECADES".to_string())
        );
        assert_eq!(age_to_years(Some("42"), None), (Some(42.0), String::new()));
    }

    #[test]
    fn unparsable_value_keeps_unit() {
        assert_eq!(
            age_to_years(Some("forty"), Some("YR")),
            (None, "YR".to_string())
        );
        assert_eq!(age_to_years(None, Some("MON")), (None, "MON".to_string()));
    }
}
