//! Session controller
//!
//! Owns the ledger and its derived aggregates and drives the
//! calculate/edit/delete/reset operations as atomic units. The presentation
//! layer only ever sees the snapshots returned here; confirmation decisions
//! for destructive operations arrive as booleans supplied by the caller.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::Utc;

use crate::aggregator;
use crate::calculator::EmissionCalculator;
use crate::core::{
    AcCapacity, ApplianceKind, CalculationEntry, Config, Error, HistoryRow, Result, Snapshot,
    Totals,
};
use crate::i18n::I18n;
use crate::ledger::Ledger;

/// Validated input for one calculation
#[derive(Debug, Clone)]
pub struct CalculationRequest {
    pub kind: ApplianceKind,
    pub variant: Option<AcCapacity>,
    pub hours: f64,
    /// None or Some(0) falls back to 1 in the calculator
    pub quantity: Option<u32>,
}

impl CalculationRequest {
    pub fn new(
        kind: ApplianceKind,
        variant: Option<AcCapacity>,
        hours: f64,
        quantity: Option<u32>,
    ) -> Self {
        Self {
            kind,
            variant,
            hours,
            quantity,
        }
    }

    /// Build a request from the raw form strings of the presentation layer.
    ///
    /// An unknown appliance or capacity string is an unresolved-power error
    /// and a non-numeric hours field an invalid-hours error. An unparseable
    /// quantity is not an error; it takes the permissive fallback to 1.
    pub fn from_form(
        kind: &str,
        variant: Option<&str>,
        hours: &str,
        quantity: &str,
    ) -> Result<Self> {
        let kind = ApplianceKind::from_str(kind.trim())?;

        let variant = if kind.requires_variant() {
            variant
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(AcCapacity::from_str)
                .transpose()?
        } else {
            None
        };

        let hours = hours
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidHours(hours.to_string()))?;

        let quantity = quantity.trim().parse::<u32>().ok();

        Ok(Self::new(kind, variant, hours, quantity))
    }
}

/// State machine over one ledger plus its derived totals and device counts
pub struct SessionController {
    ledger: Ledger,
    totals: Totals,
    device_counts: BTreeMap<String, u32>,
    calculator: EmissionCalculator,
    i18n: I18n,
}

impl SessionController {
    /// Create a controller from the application configuration
    pub fn new(config: &Config) -> Self {
        Self {
            ledger: Ledger::new(),
            totals: Totals::default(),
            device_counts: BTreeMap::new(),
            calculator: EmissionCalculator::new(&config.emission),
            i18n: I18n::new(&config.general.language),
        }
    }

    /// Validate inputs, compute a new entry, append it and refresh the
    /// aggregates. A validation failure aborts before any mutation.
    pub fn calculate(&mut self, request: &CalculationRequest) -> Result<Snapshot> {
        let figures = self.calculator.compute(
            request.kind,
            request.variant,
            request.hours,
            request.quantity,
        )?;

        let label = self.resolve_label(request.kind, request.variant);
        let entry = CalculationEntry {
            id: 0,
            label,
            kind: request.kind,
            variant: request.variant,
            quantity: figures.quantity,
            hours: request.hours,
            power_watts: figures.power_watts,
            daily_energy_kwh: figures.daily_energy_kwh,
            daily_emission_kg: figures.daily_emission_kg,
            monthly_emission_kg: figures.monthly_emission_kg,
            yearly_emission_kg: figures.yearly_emission_kg,
            created_at: Utc::now(),
        };

        let id = self.ledger.append(entry);
        self.refresh_aggregates();

        log::debug!(
            "Calculated entry {} ({:.3} kWh/day, ledger size {})",
            id,
            figures.daily_energy_kwh,
            self.ledger.len()
        );

        let result = self.ledger.find_by_id(id).cloned();
        Ok(self.snapshot_with(result))
    }

    /// Remove the entry with the given id. Not confirming is a no-op that
    /// still returns the current snapshot; a missing id is an error and
    /// leaves everything unchanged.
    pub fn delete(&mut self, id: i64, confirmed: bool) -> Result<Snapshot> {
        if !confirmed {
            return Ok(self.snapshot());
        }

        self.ledger.remove_by_id(id).ok_or(Error::NotFound(id))?;
        self.refresh_aggregates();

        log::debug!("Deleted entry {} (ledger size {})", id, self.ledger.len());
        Ok(self.snapshot())
    }

    /// Delete-then-recreate. The recreated entry receives a new identifier
    /// and moves to the front of the recency ordering. If the id is absent
    /// no calculation is performed.
    pub fn edit(
        &mut self,
        id: i64,
        request: &CalculationRequest,
        confirmed: bool,
    ) -> Result<Snapshot> {
        if !confirmed {
            return Ok(self.snapshot());
        }

        self.ledger.remove_by_id(id).ok_or(Error::NotFound(id))?;
        self.refresh_aggregates();
        self.calculate(request)
    }

    /// Clear the ledger, totals and device counts together. Not confirming
    /// is a no-op.
    pub fn reset(&mut self, confirmed: bool) -> Snapshot {
        if confirmed {
            self.ledger.clear();
            self.refresh_aggregates();
            log::info!("Session reset, all calculations cleared");
        }
        self.snapshot()
    }

    /// Read-only snapshot of the current state
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_with(None)
    }

    /// Translated confirmation prompt or message text for the caller
    pub fn message(&self, key: &str) -> String {
        self.i18n.get(key)
    }

    fn snapshot_with(&self, result: Option<CalculationEntry>) -> Snapshot {
        let history = self
            .ledger
            .all()
            .iter()
            .rev()
            .enumerate()
            .map(|(i, entry)| HistoryRow {
                row: i + 1,
                entry: entry.clone(),
            })
            .collect();

        Snapshot {
            result,
            totals: self.totals.clone(),
            history,
            device_counts: self.device_counts.clone(),
        }
    }

    fn refresh_aggregates(&mut self) {
        self.totals = aggregator::recompute_totals(&self.ledger);
        self.device_counts = aggregator::recompute_device_counts(&self.ledger);
    }

    fn resolve_label(&self, kind: ApplianceKind, variant: Option<AcCapacity>) -> String {
        let name = self.i18n.get(kind.label_key());
        match variant {
            Some(capacity) if kind.requires_variant() => {
                format!("{} {} PK", name, capacity)
            }
            _ => name,
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
