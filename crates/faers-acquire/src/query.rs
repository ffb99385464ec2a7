//! openFDA search query construction.

/// Fetch window and filters for one acquisition run.
#[derive(Debug, Clone)]
pub struct FetchParams {
    /// Generic drug names matched against `patient.drug.medicinalproduct`.
    pub drugs: Vec<String>,
    /// Brand names, matched against the same field.
    pub brands: Vec<String>,
    /// Inclusive receivedate window, `YYYY-MM-DD`.
    pub start_date: String,
    pub end_date: String,
    pub country: String,
}

/// Build the openFDA `search` expression: drug/brand terms OR'd together,
/// AND'd with the receivedate window and the occurrence country.
pub fn build_search_query(params: &FetchParams) -> String {
    let terms: Vec<String> = params
        .drugs
        .iter()
        .chain(params.brands.iter())
        .map(|name| format!("patient.drug.medicinalproduct:\"{name}\""))
        .collect();
    let drug_clause = format!("({})", terms.join(" OR "));
    let date_clause = format!(
        "(receivedate:[{} TO {}])",
        compact_date(&params.start_date),
        compact_date(&params.end_date)
    );
    let country_clause = format!("(occurcountry:\"{}\")", params.country);
    format!("{drug_clause} AND {date_clause} AND {country_clause}")
}

fn compact_date(date: &str) -> String {
    date.replace('-', "")
}
