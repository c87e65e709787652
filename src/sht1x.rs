use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::calibration;
use crate::config::{Command, Config};
use crate::error::ShtError;

/// Width (in microseconds) of each clock phase.
const CLOCK_PHASE_US: u32 = 1;

/// Time (in microseconds) the sensor gets to release the data line after the
/// acknowledge pulse.
const ACK_RELEASE_US: u32 = 10;

/// Interval (in milliseconds) between polls for the measurement-ready signal.
const POLL_INTERVAL_MS: u32 = 10;

/// Maximum time (in milliseconds) to wait for a measurement to complete.
///
/// A 14-bit measurement takes about 320 ms.
const RESULT_TIMEOUT_MS: u32 = 1000;

/// Driver for the SHT1x temperature and humidity sensors.
///
/// The sensor speaks a two-wire protocol that resembles, but is not, I2C.
/// The driver clocks it by hand, so every read blocks until the sensor answers
/// or [`ShtError::Timeout`] is hit (about one second).
pub struct Sht1x<DATA, CLK, D> {
    data: DATA,
    clock: CLK,
    delay: D,
    config: Config,
}

/// Reading returned by [`Sht1x::read`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Temperature-compensated relative humidity in percent.
    pub relative_humidity: f32,
}

impl<DATA, CLK, DELAY, E> Sht1x<DATA, CLK, DELAY>
where
    DATA: InputPin<Error = E> + OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a new instance of the SHT1x driver with the default [`Config`].
    ///
    /// # Arguments
    ///
    /// * `data` - The GPIO pin connected to DATA. Must support both input and output,
    ///   typically an open-drain pin with a pull-up.
    /// * `clock` - The GPIO pin connected to SCK.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    pub fn new(data: DATA, clock: CLK, delay: DELAY) -> Self {
        Self::with_config(data, clock, delay, Config::default())
    }

    /// Creates a new instance of the SHT1x driver for a sensor with the given
    /// supply voltage and resolutions.
    pub fn with_config(data: DATA, clock: CLK, delay: DELAY, config: Config) -> Self {
        Sht1x {
            data,
            clock,
            delay,
            config,
        }
    }

    /// The configuration the driver was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Destroys the driver, returning the data pin, clock pin and delay provider.
    pub fn release(self) -> (DATA, CLK, DELAY) {
        (self.data, self.clock, self.delay)
    }

    /// Measures the temperature in degrees Celsius.
    pub fn read_temperature_celsius(&mut self) -> Result<f32, ShtError<E>> {
        let raw = self.read_raw(Command::MeasureTemperature)?;
        Ok(calibration::celsius(
            raw,
            self.config.voltage,
            self.config.temperature_resolution,
        ))
    }

    /// Measures the temperature in degrees Fahrenheit.
    pub fn read_temperature_fahrenheit(&mut self) -> Result<f32, ShtError<E>> {
        let raw = self.read_raw(Command::MeasureTemperature)?;
        Ok(calibration::fahrenheit(
            raw,
            self.config.voltage,
            self.config.temperature_resolution,
        ))
    }

    /// Measures the relative humidity in percent.
    ///
    /// Compensation needs the current temperature, so this performs a humidity
    /// measurement followed by a temperature measurement. If either fails, the
    /// whole read fails.
    pub fn read_humidity(&mut self) -> Result<f32, ShtError<E>> {
        self.read().map(|reading| reading.relative_humidity)
    }

    /// Measures relative humidity and the temperature used to compensate it.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if both measurements succeed.
    /// * `Err(ShtError)` if either exchange with the sensor fails.
    pub fn read(&mut self) -> Result<Reading, ShtError<E>> {
        let raw_humidity = self.read_raw(Command::MeasureRelativeHumidity)?;
        let temperature = self.read_temperature_celsius()?;
        let relative_humidity = calibration::humidity(
            raw_humidity,
            temperature,
            self.config.humidity_resolution,
        );

        Ok(Reading {
            temperature,
            relative_humidity,
        })
    }

    /// Runs one complete measurement exchange and returns the raw sensor code.
    ///
    /// This sends the command, waits for the sensor to finish measuring, shifts in
    /// the two data bytes and ends the transaction without reading the CRC.
    /// The CRC is not checked.
    pub fn read_raw(&mut self, command: Command) -> Result<u16, ShtError<E>> {
        self.send_command(command)?;
        self.wait_for_result()?;
        let raw = self.read_data16()?;
        self.skip_crc()?;

        #[cfg(feature = "defmt")]
        defmt::trace!("SHT1x: {} -> raw {=u16}", command, raw);

        Ok(raw)
    }

    /// Sends the transmission start sequence followed by an 8-bit command.
    ///
    /// The start sequence lowers DATA while SCK is high, pulses SCK, then raises
    /// DATA while SCK is high again:
    ///
    /// ```text
    ///       _____         ________
    /// DATA:      |_______|
    ///           ___     ___
    /// SCK : ___|   |___|   |______
    /// ```
    ///
    /// After the command bits the sensor acknowledges by pulling DATA low during
    /// the ninth clock pulse and releasing it once SCK falls.
    fn send_command(&mut self, command: Command) -> Result<(), ShtError<E>> {
        // Transmission start
        self.release_data()?;
        self.delay.delay_us(CLOCK_PHASE_US);
        self.clock.set_high()?;
        self.drive_data_low()?;
        self.delay.delay_us(CLOCK_PHASE_US);
        self.clock.set_low()?;
        self.delay.delay_us(CLOCK_PHASE_US);
        self.clock.set_high()?;
        self.release_data()?;
        self.delay.delay_us(CLOCK_PHASE_US);
        self.clock.set_low()?;
        self.delay.delay_us(CLOCK_PHASE_US);

        let code = command.code();
        for i in 0..8 {
            let bit_mask = 1 << (7 - i);
            self.write_data(code & bit_mask != 0)?;
            self.pulse_clock()?;
        }

        // Acknowledge
        self.release_data()?;
        self.clock.set_high()?;
        self.delay.delay_us(CLOCK_PHASE_US);
        if !self.data.is_low()? {
            #[cfg(feature = "defmt")]
            defmt::warn!("SHT1x: no acknowledge for {}", command);
            return Err(ShtError::NoAcknowledge);
        }
        self.clock.set_low()?;
        self.delay.delay_us(ACK_RELEASE_US);
        if !self.data.is_high()? {
            #[cfg(feature = "defmt")]
            defmt::warn!("SHT1x: acknowledge not released for {}", command);
            return Err(ShtError::NoAcknowledge);
        }

        Ok(())
    }

    /// Waits for the sensor to pull DATA low, signalling the measurement is done.
    ///
    /// # Errors
    ///
    /// Returns `ShtError::Timeout` once `RESULT_TIMEOUT_MS` have elapsed.
    fn wait_for_result(&mut self) -> Result<(), ShtError<E>> {
        self.release_data()?;

        let mut elapsed_ms = 0;
        while elapsed_ms < RESULT_TIMEOUT_MS {
            self.delay.delay_ms(POLL_INTERVAL_MS);
            elapsed_ms += POLL_INTERVAL_MS;
            if self.data.is_low()? {
                return Ok(());
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("SHT1x: measurement not ready after {=u32} ms", elapsed_ms);
        Err(ShtError::Timeout)
    }

    /// Reads the two data bytes, most significant byte first.
    ///
    /// Between the bytes DATA is held low for one clock pulse to ask the sensor
    /// for the next byte.
    fn read_data16(&mut self) -> Result<u16, ShtError<E>> {
        let msb = self.read_byte()?;

        self.drive_data_low()?;
        self.clock.set_high()?;
        self.delay.delay_us(CLOCK_PHASE_US);
        self.clock.set_low()?;
        self.release_data()?;

        let lsb = self.read_byte()?;

        Ok(u16::from_be_bytes([msb, lsb]))
    }

    /// Reads one byte (8 bits) from the sensor, sampling DATA while SCK is high.
    fn read_byte(&mut self) -> Result<u8, ShtError<E>> {
        let mut byte: u8 = 0;

        for i in 0..8 {
            let bit_mask = 1 << (7 - i);
            self.clock.set_high()?;
            self.delay.delay_us(CLOCK_PHASE_US);
            if self.data.is_high()? {
                byte |= bit_mask;
            }
            self.clock.set_low()?;
            self.delay.delay_us(CLOCK_PHASE_US);
        }

        Ok(byte)
    }

    /// Ends the transaction, leaving DATA high during the acknowledge pulse so
    /// the sensor skips the CRC byte.
    fn skip_crc(&mut self) -> Result<(), ShtError<E>> {
        self.release_data()?;
        self.clock.set_high()?;
        self.delay.delay_us(CLOCK_PHASE_US);
        self.clock.set_low()?;
        Ok(())
    }

    /// One full clock pulse: high, then low.
    fn pulse_clock(&mut self) -> Result<(), ShtError<E>> {
        self.clock.set_high()?;
        self.delay.delay_us(CLOCK_PHASE_US);
        self.clock.set_low()?;
        self.delay.delay_us(CLOCK_PHASE_US);
        Ok(())
    }

    fn write_data(&mut self, high: bool) -> Result<(), ShtError<E>> {
        if high {
            self.release_data()
        } else {
            self.drive_data_low()
        }
    }

    // DATA is open-drain: high means released to the pull-up, so the sensor can
    // drive it.
    fn release_data(&mut self) -> Result<(), ShtError<E>> {
        self.data.set_high()?;
        Ok(())
    }

    fn drive_data_low(&mut self) -> Result<(), ShtError<E>> {
        self.data.set_low()?;
        Ok(())
    }
}
