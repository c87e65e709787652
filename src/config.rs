//! Sensor commands and measurement configuration.

/// Commands understood by the SHT1x.
///
/// Only the two measurement commands are used; the status register and soft
/// reset commands are not exposed.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Start a temperature measurement.
    MeasureTemperature = 0b0000_0011,
    /// Start a relative humidity measurement.
    MeasureRelativeHumidity = 0b0000_0101,
}

impl Command {
    /// The 8-bit code clocked out on the data line.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Supply voltage of the sensor.
///
/// Selects the temperature offset coefficient (D1), which drifts with VDD.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupplyVoltage {
    /// 5.0 V
    Vdd5_0 = 0,
    /// 4.0 V
    Vdd4_0 = 1,
    /// 3.5 V
    Vdd3_5 = 2,
    /// 3.3 V
    Vdd3_3 = 3,
    /// 3.0 V
    Vdd3_0 = 4,
    /// 2.5 V
    Vdd2_5 = 5,
}

/// Temperature measurement resolution.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemperatureResolution {
    /// 14-bit measurement (sensor default).
    Bits14 = 0,
    /// 12-bit measurement.
    Bits12 = 1,
}

/// Relative humidity measurement resolution.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumidityResolution {
    /// 12-bit measurement (sensor default).
    Bits12 = 0,
    /// 8-bit measurement.
    Bits8 = 1,
}

/// Measurement configuration, fixed when the driver is constructed.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Supply voltage of the sensor.
    pub voltage: SupplyVoltage,
    /// Resolution the sensor is configured for when measuring temperature.
    pub temperature_resolution: TemperatureResolution,
    /// Resolution the sensor is configured for when measuring humidity.
    pub humidity_resolution: HumidityResolution,
}

impl Config {
    /// 3.5 V supply, 14-bit temperature and 12-bit humidity.
    pub const fn new() -> Self {
        Config {
            voltage: SupplyVoltage::Vdd3_5,
            temperature_resolution: TemperatureResolution::Bits14,
            humidity_resolution: HumidityResolution::Bits12,
        }
    }

    pub const fn with_voltage(mut self, voltage: SupplyVoltage) -> Self {
        self.voltage = voltage;
        self
    }

    pub const fn with_temperature_resolution(mut self, resolution: TemperatureResolution) -> Self {
        self.temperature_resolution = resolution;
        self
    }

    pub const fn with_humidity_resolution(mut self, resolution: HumidityResolution) -> Self {
        self.humidity_resolution = resolution;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_codes() {
        assert_eq!(Command::MeasureTemperature.code(), 0x03);
        assert_eq!(Command::MeasureRelativeHumidity.code(), 0x05);
    }

    #[test]
    fn test_config_builders() {
        let config = Config::default()
            .with_voltage(SupplyVoltage::Vdd5_0)
            .with_temperature_resolution(TemperatureResolution::Bits12)
            .with_humidity_resolution(HumidityResolution::Bits8);

        assert_eq!(config.voltage, SupplyVoltage::Vdd5_0);
        assert_eq!(config.temperature_resolution, TemperatureResolution::Bits12);
        assert_eq!(config.humidity_resolution, HumidityResolution::Bits8);
        assert_eq!(Config::default(), Config::new());
    }
}
