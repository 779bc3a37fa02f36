//! Aggregation over the ledger
//!
//! Totals and device counts are always rebuilt by a full scan after each
//! ledger mutation, never adjusted incrementally, so they cannot drift from
//! the entries they summarize.

use std::collections::BTreeMap;

use crate::core::Totals;
use crate::ledger::Ledger;

/// Sum usage and emission figures across all current entries
pub fn recompute_totals(ledger: &Ledger) -> Totals {
    let mut totals = Totals::default();
    for entry in ledger.all() {
        totals.daily_energy_kwh += entry.daily_energy_kwh;
        totals.daily_emission_kg += entry.daily_emission_kg;
        totals.monthly_emission_kg += entry.monthly_emission_kg;
        totals.yearly_emission_kg += entry.yearly_emission_kg;
    }
    totals
}

/// Rebuild the label -> cumulative quantity mapping. Labels with no
/// surviving entries are simply absent.
pub fn recompute_device_counts(ledger: &Ledger) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for entry in ledger.all() {
        *counts.entry(entry.label.clone()).or_insert(0) += entry.quantity;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::EmissionCalculator;
    use crate::core::{ApplianceKind, CalculationEntry};
    use chrono::Utc;

    const EPS: f64 = 1e-9;

    fn push(ledger: &mut Ledger, kind: ApplianceKind, label: &str, hours: f64, quantity: u32) {
        let figures = EmissionCalculator::default()
            .compute(kind, None, hours, Some(quantity))
            .unwrap();
        ledger.append(CalculationEntry {
            id: 0,
            label: label.to_string(),
            kind,
            variant: None,
            quantity: figures.quantity,
            hours,
            power_watts: figures.power_watts,
            daily_energy_kwh: figures.daily_energy_kwh,
            daily_emission_kg: figures.daily_emission_kg,
            monthly_emission_kg: figures.monthly_emission_kg,
            yearly_emission_kg: figures.yearly_emission_kg,
            created_at: Utc::now(),
        });
    }

    #[test]
    fn test_totals_equal_sum_of_entries() {
        let mut ledger = Ledger::new();
        push(&mut ledger, ApplianceKind::Fan, "Kipas Angin", 5.0, 2);
        push(&mut ledger, ApplianceKind::Lamp, "Lampu", 6.0, 4);

        let totals = recompute_totals(&ledger);
        let expected_daily: f64 = ledger.all().iter().map(|e| e.daily_emission_kg).sum();
        assert!((totals.daily_emission_kg - expected_daily).abs() < EPS);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut ledger = Ledger::new();
        push(&mut ledger, ApplianceKind::Tv, "TV", 4.0, 1);
        push(&mut ledger, ApplianceKind::Computer, "Komputer", 8.0, 2);

        let first = recompute_totals(&ledger);
        let second = recompute_totals(&ledger);
        assert_eq!(first, second);
        assert_eq!(recompute_device_counts(&ledger), recompute_device_counts(&ledger));
    }

    #[test]
    fn test_empty_ledger_yields_zero() {
        let ledger = Ledger::new();
        assert!(recompute_totals(&ledger).is_zero());
        assert!(recompute_device_counts(&ledger).is_empty());
    }

    #[test]
    fn test_device_counts_accumulate_per_label() {
        let mut ledger = Ledger::new();
        push(&mut ledger, ApplianceKind::Lamp, "Lampu", 3.0, 1);
        push(&mut ledger, ApplianceKind::Lamp, "Lampu", 5.0, 2);
        push(&mut ledger, ApplianceKind::Fan, "Kipas Angin", 2.0, 1);

        let counts = recompute_device_counts(&ledger);
        assert_eq!(counts.get("Lampu"), Some(&3));
        assert_eq!(counts.get("Kipas Angin"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_removed_label_disappears_from_counts() {
        let mut ledger = Ledger::new();
        push(&mut ledger, ApplianceKind::Lamp, "Lampu", 3.0, 2);
        let id = ledger.all()[0].id;
        ledger.remove_by_id(id).unwrap();

        let counts = recompute_device_counts(&ledger);
        assert!(!counts.contains_key("Lampu"));
    }
}
