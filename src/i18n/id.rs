//! Indonesian translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Kalkulator Emisi Karbon".into());
    t.insert("app.version".into(), "Versi".into());

    // Appliance names
    t.insert("appliance.fan".into(), "Kipas Angin".into());
    t.insert("appliance.computer".into(), "Komputer".into());
    t.insert("appliance.refrigerator".into(), "Kulkas".into());
    t.insert("appliance.tv".into(), "TV".into());
    t.insert("appliance.lamp".into(), "Lampu".into());
    t.insert("appliance.ac".into(), "AC".into());

    // Results
    t.insert("result.title".into(), "Hasil Perhitungan".into());
    t.insert("result.power_usage".into(), "Pemakaian Listrik Harian".into());
    t.insert("result.daily_emission".into(), "Emisi Karbon Harian".into());
    t.insert("result.monthly_emission".into(), "Emisi Karbon Bulanan".into());
    t.insert("result.yearly_emission".into(), "Emisi Karbon Tahunan".into());

    // Totals
    t.insert("total.title".into(), "Total Keseluruhan".into());
    t.insert("total.power_usage".into(), "Total Pemakaian Listrik".into());
    t.insert("total.daily_emission".into(), "Total Emisi Harian".into());
    t.insert("total.monthly_emission".into(), "Total Emisi Bulanan".into());
    t.insert("total.yearly_emission".into(), "Total Emisi Tahunan".into());

    // History table
    t.insert("history.title".into(), "Riwayat Perhitungan".into());
    t.insert("history.no".into(), "No".into());
    t.insert("history.time".into(), "Waktu".into());
    t.insert("history.appliance".into(), "Peralatan".into());
    t.insert("history.quantity".into(), "Jumlah".into());
    t.insert("history.hours".into(), "Jam".into());
    t.insert("history.empty".into(), "Belum ada perhitungan".into());

    // Device list
    t.insert("devices.title".into(), "Jumlah Perangkat".into());

    // Confirmation prompts
    t.insert(
        "confirm.delete".into(),
        "Apakah Anda yakin ingin menghapus perhitungan ini?".into(),
    );
    t.insert(
        "confirm.reset".into(),
        "Apakah Anda yakin ingin mereset semua perhitungan?".into(),
    );

    // Errors
    t.insert(
        "error.unresolved_power".into(),
        "Daya peralatan tidak dikenali, pilih kapasitas AC".into(),
    );
    t.insert("error.not_found".into(), "Perhitungan tidak ditemukan".into());
    t.insert("error.invalid_hours".into(), "Jam pemakaian tidak valid".into());

    // Units
    t.insert("unit.kwh".into(), "kWh".into());
    t.insert("unit.kg_co2".into(), "kg CO2".into());
    t.insert("unit.watts".into(), "W".into());

    t
}
