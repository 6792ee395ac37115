//! Named sample records for quick experimentation.

use super::record::InputRecord;

/// Names accepted by [`lookup`], in display order.
pub const PRESET_NAMES: [&str; 3] = ["wheat-kharif-loam", "rice-kharif-clay", "maize-rabi-sandy"];

/// Look up a sample record by preset name.
pub fn lookup(name: &str) -> Option<InputRecord> {
    let builder = match name {
        "wheat-kharif-loam" => InputRecord::builder()
            .n(100.0)
            .p(50.0)
            .k(30.0)
            .temperature(25.0)
            .humidity(60.0)
            .ph(6.5)
            .rainfall(50.0)
            .crop("Wheat")
            .season("Kharif")
            .soil_type("Loamy"),
        "rice-kharif-clay" => InputRecord::builder()
            .n(140.0)
            .p(60.0)
            .k(40.0)
            .temperature(28.0)
            .humidity(75.0)
            .ph(6.2)
            .rainfall(120.0)
            .crop("Rice")
            .season("Kharif")
            .soil_type("Clayey"),
        "maize-rabi-sandy" => InputRecord::builder()
            .n(80.0)
            .p(40.0)
            .k(25.0)
            .temperature(22.0)
            .humidity(55.0)
            .ph(6.8)
            .rainfall(35.0)
            .crop("Maize")
            .season("Rabi")
            .soil_type("Sandy"),
        _ => return None,
    };

    // Preset values are within the builder's domain bounds.
    Some(builder.build().expect("preset values are in range"))
}

/// All presets paired with their names, in display order.
pub fn all() -> Vec<(&'static str, InputRecord)> {
    PRESET_NAMES
        .iter()
        .map(|name| (*name, lookup(name).expect("listed preset exists")))
        .collect()
}
