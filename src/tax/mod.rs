//! Salary tax for the developer registry.
//!
//! Each experience level maps to one tier of a three-tier tax table
//! (simple, middle, upper). Creating a developer converts the submitted
//! gross salary into a net salary with the tier's rate.

mod net_salary;
mod rates;

pub use net_salary::{apply_tax, net_salary};
pub use rates::{TaxRates, TaxTable, tax_rate_for};
