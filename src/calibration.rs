//! Conversion of raw SHT1x codes into physical units.
//!
//! Coefficients are taken from the Sensirion SHT1x datasheet. Every function here
//! is pure: the same raw code and configuration always give the same value.
//! A raw code equal to [`RAW_DATA_ERROR`] converts to `f32::NAN`.

use crate::config::{HumidityResolution, SupplyVoltage, TemperatureResolution};

/// Raw code standing for "no valid reading".
///
/// The sensor produces at most 14 significant bits, so this value can never be a
/// real measurement.
pub const RAW_DATA_ERROR: u16 = 0xFFFF;

// Indexed by `SupplyVoltage`.
const D1_CELSIUS: [f64; 6] = [-40.1, -39.8, -39.7, -39.66, -39.6, -39.4];
const D1_FAHRENHEIT: [f64; 6] = [-40.2, -39.6, -39.5, -39.42, -39.3, -38.9];

// Indexed by `TemperatureResolution`.
const D2_CELSIUS: [f64; 2] = [0.01, 0.04];
const D2_FAHRENHEIT: [f64; 2] = [0.018, 0.072];

// Indexed by `HumidityResolution`.
const C1: [f64; 2] = [-2.0468, -2.0468];
const C2: [f64; 2] = [0.0367, 0.5872];
const C3: [f64; 2] = [-1.5955e-6, -4.0845e-4];
const T1: [f64; 2] = [0.01, 0.01];
const T2: [f64; 2] = [0.00008, 0.00128];

/// Temperature in degrees Celsius: `D1 + D2 * raw`.
pub fn celsius(raw: u16, voltage: SupplyVoltage, resolution: TemperatureResolution) -> f32 {
    if raw == RAW_DATA_ERROR {
        return f32::NAN;
    }
    let d1 = D1_CELSIUS[voltage as usize];
    let d2 = D2_CELSIUS[resolution as usize];
    (d1 + d2 * f64::from(raw)) as f32
}

/// Temperature in degrees Fahrenheit, using the datasheet's own Fahrenheit coefficients.
pub fn fahrenheit(raw: u16, voltage: SupplyVoltage, resolution: TemperatureResolution) -> f32 {
    if raw == RAW_DATA_ERROR {
        return f32::NAN;
    }
    let d1 = D1_FAHRENHEIT[voltage as usize];
    let d2 = D2_FAHRENHEIT[resolution as usize];
    (d1 + d2 * f64::from(raw)) as f32
}

/// Relative humidity in percent, uncompensated for temperature.
pub fn linear_humidity(raw: u16, resolution: HumidityResolution) -> f32 {
    if raw == RAW_DATA_ERROR {
        return f32::NAN;
    }
    linear_humidity_f64(f64::from(raw), resolution as usize) as f32
}

/// Relative humidity in percent, compensated for the temperature at which it was
/// measured.
///
/// `temperature` is in degrees Celsius. A NaN temperature gives a NaN result.
pub fn humidity(raw: u16, temperature: f32, resolution: HumidityResolution) -> f32 {
    if raw == RAW_DATA_ERROR || temperature.is_nan() {
        return f32::NAN;
    }
    let i = resolution as usize;
    let raw = f64::from(raw);
    let linear = linear_humidity_f64(raw, i);
    ((f64::from(temperature) - 25.0) * (T1[i] + T2[i] * raw) + linear) as f32
}

fn linear_humidity_f64(raw: f64, i: usize) -> f64 {
    C1[i] + C2[i] * raw + C3[i] * raw * raw
}
