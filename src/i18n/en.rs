//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Carbon Emission Calculator".into());
    t.insert("app.version".into(), "Version".into());

    // Appliance names
    t.insert("appliance.fan".into(), "Fan".into());
    t.insert("appliance.computer".into(), "Computer".into());
    t.insert("appliance.refrigerator".into(), "Refrigerator".into());
    t.insert("appliance.tv".into(), "TV".into());
    t.insert("appliance.lamp".into(), "Lamp".into());
    t.insert("appliance.ac".into(), "AC".into());

    // Results
    t.insert("result.title".into(), "Calculation Result".into());
    t.insert("result.power_usage".into(), "Daily Power Usage".into());
    t.insert("result.daily_emission".into(), "Daily Carbon Emission".into());
    t.insert("result.monthly_emission".into(), "Monthly Carbon Emission".into());
    t.insert("result.yearly_emission".into(), "Yearly Carbon Emission".into());

    // Totals
    t.insert("total.title".into(), "Running Totals".into());
    t.insert("total.power_usage".into(), "Total Power Usage".into());
    t.insert("total.daily_emission".into(), "Total Daily Emission".into());
    t.insert("total.monthly_emission".into(), "Total Monthly Emission".into());
    t.insert("total.yearly_emission".into(), "Total Yearly Emission".into());

    // History table
    t.insert("history.title".into(), "Calculation History".into());
    t.insert("history.no".into(), "No".into());
    t.insert("history.time".into(), "Time".into());
    t.insert("history.appliance".into(), "Appliance".into());
    t.insert("history.quantity".into(), "Quantity".into());
    t.insert("history.hours".into(), "Hours".into());
    t.insert("history.empty".into(), "No calculations yet".into());

    // Device list
    t.insert("devices.title".into(), "Device Count".into());

    // Confirmation prompts
    t.insert(
        "confirm.delete".into(),
        "Are you sure you want to delete this calculation?".into(),
    );
    t.insert(
        "confirm.reset".into(),
        "Are you sure you want to reset all calculations?".into(),
    );

    // Errors
    t.insert(
        "error.unresolved_power".into(),
        "Appliance power could not be resolved, select an AC capacity".into(),
    );
    t.insert("error.not_found".into(), "Calculation not found".into());
    t.insert("error.invalid_hours".into(), "Invalid usage hours".into());

    // Units
    t.insert("unit.kwh".into(), "kWh".into());
    t.insert("unit.kg_co2".into(), "kg CO2".into());
    t.insert("unit.watts".into(), "W".into());

    t
}
