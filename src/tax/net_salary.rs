//! Net salary calculation.
//!
//! Converts a submitted gross salary into the net salary stored for a
//! developer, using the rate of the developer's experience tier.

use rust_decimal::Decimal;

use crate::models::Developer;

use super::rates::TaxRates;

/// Computes `gross * (1 - rate / 100)`.
///
/// # Examples
///
/// ```
/// use developer_registry::tax::net_salary;
/// use rust_decimal::Decimal;
///
/// let net = net_salary(Decimal::new(5000, 0), Decimal::new(15, 0));
/// assert_eq!(net, Decimal::new(4250, 0));
/// ```
pub fn net_salary(gross: Decimal, rate: Decimal) -> Decimal {
    gross * (Decimal::ONE - rate / Decimal::ONE_HUNDRED)
}

/// Replaces the developer's gross salary with the net salary for its tier.
///
/// All other fields are carried over unchanged.
pub fn apply_tax<R>(developer: Developer, rates: &R) -> Developer
where
    R: TaxRates + ?Sized,
{
    let rate = rates.rate_for(developer.experience);
    Developer {
        salary: net_salary(developer.salary, rate),
        ..developer
    }
}
