//! Emission calculator
//!
//! Pure mapping from (appliance, capacity, hours, quantity) to daily energy
//! and daily/monthly/yearly carbon emissions. No rounding is applied here;
//! rounding to two decimals is a presentation concern.

use crate::catalog;
use crate::core::{AcCapacity, ApplianceKind, EmissionConfig, Error, Result};

/// Computed usage and emission figures for one calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionFigures {
    /// Rated power resolved from the catalog, in watts
    pub power_watts: f64,
    /// Quantity after the permissive fallback (always >= 1)
    pub quantity: u32,
    pub daily_energy_kwh: f64,
    pub daily_emission_kg: f64,
    pub monthly_emission_kg: f64,
    pub yearly_emission_kg: f64,
}

/// Calculator that turns appliance usage into emission figures
pub struct EmissionCalculator {
    config: EmissionConfig,
}

impl EmissionCalculator {
    /// Create a new calculator with the given emission constants
    pub fn new(config: &EmissionConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Update the emission constants
    pub fn update_config(&mut self, config: &EmissionConfig) {
        self.config = config.clone();
    }

    /// The carbon intensity in kg CO2 per kWh currently in effect
    pub fn carbon_factor(&self) -> f64 {
        self.config.carbon_factor
    }

    /// Compute the emission figures for one appliance usage.
    ///
    /// Hours must be finite and non-negative. A missing or zero quantity
    /// falls back to 1 rather than erroring; negative quantities cannot be
    /// expressed by the type.
    pub fn compute(
        &self,
        kind: ApplianceKind,
        variant: Option<AcCapacity>,
        hours: f64,
        quantity: Option<u32>,
    ) -> Result<EmissionFigures> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(Error::InvalidHours(hours.to_string()));
        }

        let power_watts = catalog::rated_power(kind, variant)?;
        let quantity = quantity.filter(|q| *q >= 1).unwrap_or(1);

        let daily_energy_kwh = power_watts * hours * quantity as f64 / 1000.0;
        let daily_emission_kg = daily_energy_kwh * self.config.carbon_factor;
        let monthly_emission_kg = daily_emission_kg * self.config.days_per_month;
        let yearly_emission_kg = monthly_emission_kg * self.config.months_per_year;

        Ok(EmissionFigures {
            power_watts,
            quantity,
            daily_energy_kwh,
            daily_emission_kg,
            monthly_emission_kg,
            yearly_emission_kg,
        })
    }
}

impl Default for EmissionCalculator {
    fn default() -> Self {
        Self::new(&EmissionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_fan_scenario() {
        // 2 fans, 5 hours per day
        let calc = EmissionCalculator::default();
        let figures = calc
            .compute(ApplianceKind::Fan, None, 5.0, Some(2))
            .unwrap();

        assert!((figures.daily_energy_kwh - 0.5).abs() < EPS);
        assert!((figures.daily_emission_kg - 0.435).abs() < EPS);
        assert!((figures.monthly_emission_kg - 13.05).abs() < EPS);
        assert!((figures.yearly_emission_kg - 156.6).abs() < EPS);
    }

    #[test]
    fn test_ac_one_pk_scenario() {
        let calc = EmissionCalculator::default();
        let figures = calc
            .compute(
                ApplianceKind::AirConditioner,
                Some(AcCapacity::Pk1),
                8.0,
                Some(1),
            )
            .unwrap();

        assert_eq!(figures.power_watts, 750.0);
        assert!((figures.daily_energy_kwh - 6.0).abs() < EPS);
        assert!((figures.daily_emission_kg - 5.22).abs() < EPS);
        assert!((figures.monthly_emission_kg - 156.6).abs() < EPS);
        assert!((figures.yearly_emission_kg - 1879.2).abs() < EPS);
    }

    #[test]
    fn test_emission_chain() {
        let calc = EmissionCalculator::default();
        let figures = calc
            .compute(ApplianceKind::Refrigerator, None, 24.0, Some(1))
            .unwrap();

        assert!((figures.daily_emission_kg - figures.daily_energy_kwh * 0.87).abs() < EPS);
        assert!((figures.monthly_emission_kg - figures.daily_emission_kg * 30.0).abs() < EPS);
        assert!((figures.yearly_emission_kg - figures.monthly_emission_kg * 12.0).abs() < EPS);
    }

    #[test]
    fn test_quantity_fallback() {
        let calc = EmissionCalculator::default();
        let explicit = calc
            .compute(ApplianceKind::Lamp, None, 3.0, Some(1))
            .unwrap();
        let missing = calc.compute(ApplianceKind::Lamp, None, 3.0, None).unwrap();
        let zero = calc.compute(ApplianceKind::Lamp, None, 3.0, Some(0)).unwrap();

        assert_eq!(missing.quantity, 1);
        assert_eq!(zero.quantity, 1);
        assert_eq!(missing.daily_energy_kwh, explicit.daily_energy_kwh);
        assert_eq!(zero.daily_energy_kwh, explicit.daily_energy_kwh);
    }

    #[test]
    fn test_zero_hours_is_valid() {
        let calc = EmissionCalculator::default();
        let figures = calc.compute(ApplianceKind::Tv, None, 0.0, Some(3)).unwrap();
        assert_eq!(figures.daily_energy_kwh, 0.0);
        assert_eq!(figures.yearly_emission_kg, 0.0);
    }

    #[test]
    fn test_invalid_hours() {
        let calc = EmissionCalculator::default();
        assert!(matches!(
            calc.compute(ApplianceKind::Tv, None, -1.0, Some(1)),
            Err(Error::InvalidHours(_))
        ));
        assert!(matches!(
            calc.compute(ApplianceKind::Tv, None, f64::NAN, Some(1)),
            Err(Error::InvalidHours(_))
        ));
    }

    #[test]
    fn test_missing_ac_variant_propagates() {
        let calc = EmissionCalculator::default();
        assert!(matches!(
            calc.compute(ApplianceKind::AirConditioner, None, 8.0, Some(1)),
            Err(Error::UnresolvedPower(_))
        ));
    }

    #[test]
    fn test_custom_carbon_factor() {
        let config = EmissionConfig {
            carbon_factor: 0.5,
            ..Default::default()
        };
        let calc = EmissionCalculator::new(&config);
        let figures = calc
            .compute(ApplianceKind::Computer, None, 10.0, Some(1))
            .unwrap();

        assert!((figures.daily_energy_kwh - 4.0).abs() < EPS);
        assert!((figures.daily_emission_kg - 2.0).abs() < EPS);
    }
}
