pub mod enums;
pub mod raw;
pub mod rows;
pub mod validation;

pub use enums::{DrugRole, ReporterType, Sex};
pub use rows::{CanonicalDrugEntry, CanonicalReactionEntry, CanonicalReport, CuratedTables};
pub use validation::{RejectReason, ValidationOutcome};
