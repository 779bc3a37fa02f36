//! Common types used across the application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::core::{Error, Result};

/// Kind of household appliance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplianceKind {
    Fan,
    Computer,
    Refrigerator,
    Tv,
    Lamp,
    #[serde(rename = "ac")]
    AirConditioner,
}

impl ApplianceKind {
    /// Translation key for the display label
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Fan => "appliance.fan",
            Self::Computer => "appliance.computer",
            Self::Refrigerator => "appliance.refrigerator",
            Self::Tv => "appliance.tv",
            Self::Lamp => "appliance.lamp",
            Self::AirConditioner => "appliance.ac",
        }
    }

    /// Form value as used by the presentation layer
    pub fn form_value(&self) -> &'static str {
        match self {
            Self::Fan => "fan",
            Self::Computer => "computer",
            Self::Refrigerator => "refrigerator",
            Self::Tv => "tv",
            Self::Lamp => "lamp",
            Self::AirConditioner => "ac",
        }
    }

    /// Whether this kind needs a capacity variant to resolve its wattage
    pub fn requires_variant(&self) -> bool {
        matches!(self, Self::AirConditioner)
    }
}

impl FromStr for ApplianceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fan" => Ok(Self::Fan),
            "computer" => Ok(Self::Computer),
            "refrigerator" => Ok(Self::Refrigerator),
            "tv" => Ok(Self::Tv),
            "lamp" => Ok(Self::Lamp),
            "ac" => Ok(Self::AirConditioner),
            other => Err(Error::UnresolvedPower(other.to_string())),
        }
    }
}

impl fmt::Display for ApplianceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_value())
    }
}

/// Air-conditioner capacity class (PK) selecting its rated wattage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcCapacity {
    #[serde(rename = "0.5")]
    Pk0_5,
    #[serde(rename = "1")]
    Pk1,
    #[serde(rename = "1.5")]
    Pk1_5,
    #[serde(rename = "2")]
    Pk2,
}

impl AcCapacity {
    /// Capacity in PK units, as shown in labels
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pk0_5 => "0.5",
            Self::Pk1 => "1",
            Self::Pk1_5 => "1.5",
            Self::Pk2 => "2",
        }
    }
}

impl FromStr for AcCapacity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "0.5" => Ok(Self::Pk0_5),
            "1" => Ok(Self::Pk1),
            "1.5" => Ok(Self::Pk1_5),
            "2" => Ok(Self::Pk2),
            other => Err(Error::UnresolvedPower(format!("ac {} PK", other))),
        }
    }
}

impl fmt::Display for AcCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single stored calculation. Immutable once created; edits are modeled
/// as delete-then-recreate by the session controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationEntry {
    /// Unique, monotonically assigned identifier (0 = not yet assigned)
    pub id: i64,
    /// Display label, capacity suffix included for air-conditioners
    pub label: String,
    /// Appliance kind
    pub kind: ApplianceKind,
    /// Capacity variant, air-conditioners only
    pub variant: Option<AcCapacity>,
    /// Number of devices
    pub quantity: u32,
    /// Usage hours per day
    pub hours: f64,
    /// Rated power in watts
    pub power_watts: f64,
    /// Daily energy consumption in kWh
    pub daily_energy_kwh: f64,
    /// Daily carbon emission in kg CO2
    pub daily_emission_kg: f64,
    /// Monthly carbon emission in kg CO2
    pub monthly_emission_kg: f64,
    /// Yearly carbon emission in kg CO2
    pub yearly_emission_kg: f64,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Running totals over the whole ledger, always recomputed by full scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub daily_energy_kwh: f64,
    pub daily_emission_kg: f64,
    pub monthly_emission_kg: f64,
    pub yearly_emission_kg: f64,
}

impl Totals {
    pub fn is_zero(&self) -> bool {
        self.daily_energy_kwh == 0.0
            && self.daily_emission_kg == 0.0
            && self.monthly_emission_kg == 0.0
            && self.yearly_emission_kg == 0.0
    }
}

/// History entry paired with its display row number
/// (most-recent-first, 1-based)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRow {
    pub row: usize,
    pub entry: CalculationEntry,
}

/// Complete state bundle returned by every controller operation,
/// sufficient for the presentation layer to redraw without further queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// The entry produced by the operation, if it created one
    pub result: Option<CalculationEntry>,
    /// Running totals over the current ledger
    pub totals: Totals,
    /// Full history, most recent first
    pub history: Vec<HistoryRow>,
    /// Cumulative device quantity per display label
    pub device_counts: BTreeMap<String, u32>,
}
