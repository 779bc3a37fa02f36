//! Emission Tracker - CLI entry point
//!
//! Thin presentation layer over the calculation engine: runs a scripted
//! session, renders each snapshot as tables, and supplies the confirmation
//! decisions for the destructive operations.

mod aggregator;
mod calculator;
mod catalog;
mod core;
mod i18n;
mod ledger;
mod session;

use anyhow::Context;

use crate::core::Config;
use crate::session::{CalculationRequest, SessionController};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Emission Tracker v{}", env!("CARGO_PKG_VERSION"));

    // Load or create configuration
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let mut controller = SessionController::new(&config);

    println!("==============================================");
    println!("   {}", controller.message("app.title"));
    println!("==============================================\n");

    // Scripted session: the inputs a user would submit through the form
    let submissions = [
        ("fan", None, "5", "2"),
        ("ac", Some("1"), "8", "1"),
        ("lamp", None, "6", "4"),
        ("refrigerator", None, "24", "1"),
    ];

    let mut last_id = 0;
    for (kind, variant, hours, quantity) in submissions {
        let request = CalculationRequest::from_form(kind, variant, hours, quantity)
            .with_context(|| format!("invalid input for {}", kind))?;
        let snapshot = controller
            .calculate(&request)
            .with_context(|| format!("calculation failed for {}", kind))?;

        if let Some(entry) = &snapshot.result {
            last_id = entry.id;
            println!(
                "  + {:<12} x{}  {:>5} h/day  ->  {:.2} kWh, {:.2} kg CO2/day",
                entry.label,
                entry.quantity,
                entry.hours,
                entry.daily_energy_kwh,
                entry.daily_emission_kg
            );
        }
    }

    // Correct the last calculation: the refrigerator runs half the day
    println!("\n  ~ {}", controller.message("confirm.delete"));
    let request = CalculationRequest::from_form("refrigerator", None, "12", "1")?;
    let snapshot = controller.edit(last_id, &request, true)?;
    if let Some(entry) = &snapshot.result {
        println!(
            "  ~ edited -> {} {:.0} h/day, {:.2} kg CO2/day",
            entry.label, entry.hours, entry.daily_emission_kg
        );
    }

    // Delete the oldest calculation
    let oldest_id = snapshot.history.last().map(|row| row.entry.id);
    if let Some(id) = oldest_id {
        let snapshot = controller.delete(id, true)?;
        println!("  - deleted oldest entry ({} rows left)\n", snapshot.history.len());
    }

    render(&controller);

    // Reset the whole session
    println!("\n  ~ {}", controller.message("confirm.reset"));
    let snapshot = controller.reset(true);
    println!(
        "  - reset done: {} rows, totals zero: {}\n",
        snapshot.history.len(),
        snapshot.totals.is_zero()
    );

    Ok(())
}

/// Render the current snapshot: history table, totals, and device counts
fn render(controller: &SessionController) {
    let snapshot = controller.snapshot();

    println!("--- {} ---", controller.message("history.title"));
    println!(
        "  {:>2} | {:<16} | {:>6} | {:>5} | {:>8} | {:>10}",
        controller.message("history.no"),
        controller.message("history.appliance"),
        controller.message("history.quantity"),
        controller.message("history.hours"),
        "kWh",
        "kg CO2/day"
    );
    for row in &snapshot.history {
        println!(
            "  {:>2} | {:<16} | {:>6} | {:>5} | {:>8.2} | {:>10.2}",
            row.row,
            row.entry.label,
            row.entry.quantity,
            row.entry.hours,
            row.entry.daily_energy_kwh,
            row.entry.daily_emission_kg
        );
    }

    println!("\n--- {} ---", controller.message("total.title"));
    println!(
        "  {:<24} {:.2} kWh",
        controller.message("total.power_usage"),
        snapshot.totals.daily_energy_kwh
    );
    println!(
        "  {:<24} {:.2} kg CO2",
        controller.message("total.daily_emission"),
        snapshot.totals.daily_emission_kg
    );
    println!(
        "  {:<24} {:.2} kg CO2",
        controller.message("total.monthly_emission"),
        snapshot.totals.monthly_emission_kg
    );
    println!(
        "  {:<24} {:.2} kg CO2",
        controller.message("total.yearly_emission"),
        snapshot.totals.yearly_emission_kg
    );

    println!("\n--- {} ---", controller.message("devices.title"));
    for (label, count) in &snapshot.device_counts {
        println!("  {:<20} {}", label, count);
    }

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => log::debug!("snapshot: {}", json),
        Err(e) => log::warn!("Failed to serialize snapshot: {}", e),
    }
}
