//! Derived metrics - pure functions computing display values from catalog and
//! ledger records. Nothing here is stored.

mod calculations;
mod formatting;

pub use calculations::{impact_estimate, progress_percentage, tax_benefit, ImpactEstimate};
pub use formatting::{format_compact_number, format_currency, format_date, format_file_size};
