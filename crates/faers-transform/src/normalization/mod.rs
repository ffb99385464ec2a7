//! Field-level normalization for raw FAERS values.
//!
//! Every function here is pure and total: malformed or absent input maps
//! to a neutral value (`None`, `U`, empty string), never an error.

pub mod age;
pub mod datetime;
pub mod demographics;
pub mod drug;
pub mod text;

pub use age::age_to_years;
pub use datetime::{parse_faers_date, parse_faers_date_opt};
pub use demographics::{standardize_country, standardize_reporter, standardize_sex};
pub use drug::{DEFAULT_TARGET_DRUGS, is_target_drug, standardize_role};
pub use text::clean_term;
