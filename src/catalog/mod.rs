//! Power catalog - rated wattage lookup per appliance kind
//!
//! Air-conditioners resolve their wattage through a capacity sub-table;
//! every other kind maps to a single fixed constant.

use crate::core::{AcCapacity, ApplianceKind, Error, Result};

/// Rated power in watts for the given appliance.
///
/// An air-conditioner without a capacity variant cannot be resolved and is
/// a caller error, never silently defaulted.
pub fn rated_power(kind: ApplianceKind, variant: Option<AcCapacity>) -> Result<f64> {
    match kind {
        ApplianceKind::Fan => Ok(50.0),
        ApplianceKind::Computer => Ok(400.0),
        ApplianceKind::Refrigerator => Ok(100.0),
        ApplianceKind::Tv => Ok(100.0),
        ApplianceKind::Lamp => Ok(10.0),
        ApplianceKind::AirConditioner => match variant {
            Some(AcCapacity::Pk0_5) => Ok(400.0),
            Some(AcCapacity::Pk1) => Ok(750.0),
            Some(AcCapacity::Pk1_5) => Ok(1100.0),
            Some(AcCapacity::Pk2) => Ok(1500.0),
            None => Err(Error::UnresolvedPower(kind.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_wattages() {
        assert_eq!(rated_power(ApplianceKind::Fan, None).unwrap(), 50.0);
        assert_eq!(rated_power(ApplianceKind::Computer, None).unwrap(), 400.0);
        assert_eq!(rated_power(ApplianceKind::Refrigerator, None).unwrap(), 100.0);
        assert_eq!(rated_power(ApplianceKind::Tv, None).unwrap(), 100.0);
        assert_eq!(rated_power(ApplianceKind::Lamp, None).unwrap(), 10.0);
    }

    #[test]
    fn test_ac_capacity_table() {
        let table = [
            (AcCapacity::Pk0_5, 400.0),
            (AcCapacity::Pk1, 750.0),
            (AcCapacity::Pk1_5, 1100.0),
            (AcCapacity::Pk2, 1500.0),
        ];
        for (capacity, watts) in table {
            assert_eq!(
                rated_power(ApplianceKind::AirConditioner, Some(capacity)).unwrap(),
                watts
            );
        }
    }

    #[test]
    fn test_ac_without_variant_is_unresolved() {
        let err = rated_power(ApplianceKind::AirConditioner, None).unwrap_err();
        assert!(matches!(err, Error::UnresolvedPower(_)));
    }

    #[test]
    fn test_variant_ignored_for_fixed_kinds() {
        // A stray variant on a non-AC kind does not change the lookup
        assert_eq!(
            rated_power(ApplianceKind::Lamp, Some(AcCapacity::Pk2)).unwrap(),
            10.0
        );
    }
}
