//! Field normalization for raw FAERS values: compact dates, coded
//! demographics, age unit conversion, drug roles, and reaction terms.

pub mod normalization;

pub use normalization::{
    DEFAULT_TARGET_DRUGS, age_to_years, clean_term, is_target_drug, parse_faers_date,
    parse_faers_date_opt, standardize_country, standardize_reporter, standardize_role,
    standardize_sex,
};
