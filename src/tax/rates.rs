//! Tax rate lookup keyed by experience level.

use rust_decimal::Decimal;

use crate::error::{ServiceError, ServiceResult};
use crate::models::Experience;

/// Source of the tax rate applied to each experience tier.
///
/// Rates are percentages between 0 and 100. The registry receives an
/// implementation through its application state, so tests can inject
/// fixed tables.
pub trait TaxRates {
    /// Returns the percentage rate for the given experience level.
    fn rate_for(&self, experience: Experience) -> Decimal;
}

/// The standard three-tier tax table.
///
/// # Examples
///
/// ```
/// use developer_registry::models::Experience;
/// use developer_registry::tax::{TaxRates, TaxTable};
/// use rust_decimal::Decimal;
///
/// let table = TaxTable::new(Decimal::new(15, 0), Decimal::new(25, 0), Decimal::new(35, 0))?;
/// assert_eq!(table.rate_for(Experience::Mid), Decimal::new(25, 0));
/// # Ok::<(), developer_registry::error::ServiceError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxTable {
    simple: Decimal,
    middle: Decimal,
    upper: Decimal,
}

impl TaxTable {
    /// Creates a table from the simple, middle and upper rates.
    ///
    /// Returns `InvalidTaxRate` if any rate lies outside 0 to 100.
    pub fn new(simple: Decimal, middle: Decimal, upper: Decimal) -> ServiceResult<Self> {
        for (tier, rate) in [("simple", simple), ("middle", middle), ("upper", upper)] {
            validate_rate(tier, rate)?;
        }
        Ok(Self {
            simple,
            middle,
            upper,
        })
    }

    /// Rate applied to junior developers.
    pub fn simple_rate(&self) -> Decimal {
        self.simple
    }

    /// Rate applied to mid-level developers.
    pub fn middle_rate(&self) -> Decimal {
        self.middle
    }

    /// Rate applied to senior developers.
    pub fn upper_rate(&self) -> Decimal {
        self.upper
    }
}

impl TaxRates for TaxTable {
    fn rate_for(&self, experience: Experience) -> Decimal {
        tax_rate_for(self, experience)
    }
}

/// Maps an experience level to its tier in the table.
pub fn tax_rate_for(table: &TaxTable, experience: Experience) -> Decimal {
    match experience {
        Experience::Junior => table.simple_rate(),
        Experience::Mid => table.middle_rate(),
        Experience::Senior => table.upper_rate(),
    }
}

fn validate_rate(tier: &str, rate: Decimal) -> ServiceResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
        return Err(ServiceError::InvalidTaxRate {
            tier: tier.to_string(),
            rate,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn standard_table() -> TaxTable {
        TaxTable::new(dec(15), dec(25), dec(35)).unwrap()
    }

    #[test]
    fn test_each_experience_maps_to_its_tier() {
        let table = standard_table();

        assert_eq!(table.rate_for(Experience::Junior), dec(15));
        assert_eq!(table.rate_for(Experience::Mid), dec(25));
        assert_eq!(table.rate_for(Experience::Senior), dec(35));
    }

    #[test]
    fn test_getters_expose_configured_rates() {
        let table = standard_table();

        assert_eq!(table.simple_rate(), dec(15));
        assert_eq!(table.middle_rate(), dec(25));
        assert_eq!(table.upper_rate(), dec(35));
    }

    #[test]
    fn test_boundary_rates_are_accepted() {
        let table = TaxTable::new(dec(0), dec(50), dec(100));
        assert!(table.is_ok());
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let result = TaxTable::new(dec(-1), dec(25), dec(35));

        match result {
            Err(ServiceError::InvalidTaxRate { tier, rate }) => {
                assert_eq!(tier, "simple");
                assert_eq!(rate, dec(-1));
            }
            _ => panic!("Expected InvalidTaxRate error"),
        }
    }

    #[test]
    fn test_rate_above_hundred_is_rejected() {
        let result = TaxTable::new(dec(15), dec(25), Decimal::new(1001, 1));

        match result {
            Err(ServiceError::InvalidTaxRate { tier, .. }) => assert_eq!(tier, "upper"),
            _ => panic!("Expected InvalidTaxRate error"),
        }
    }

    #[test]
    fn test_custom_rates_implementation() {
        struct FlatRate(Decimal);

        impl TaxRates for FlatRate {
            fn rate_for(&self, _experience: Experience) -> Decimal {
                self.0
            }
        }

        let flat = FlatRate(dec(20));
        for experience in [Experience::Junior, Experience::Mid, Experience::Senior] {
            assert_eq!(flat.rate_for(experience), dec(20));
        }
    }
}
