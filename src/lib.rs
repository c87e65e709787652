//! SHT1x Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the Sensirion SHT1x family
//! (SHT10, SHT11, SHT15) of temperature and humidity sensors, built on top of the
//! [`embedded-hal`] traits.
//!
//! The SHT1x uses a two-wire serial interface (DATA and SCK) that is not I2C, so the
//! driver bit-bangs it over two GPIO pins.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Temperature in Celsius or Fahrenheit, temperature-compensated relative humidity
//! - Coefficients for every supply voltage and resolution listed in the datasheet
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access
//! - [`DelayNs`] for accurate timing
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for logging support and logs protocol failures
//!
//! # Failed reads
//! All reads return a [`Result`]. Callers that prefer the Arduino-style convention of a
//! NaN reading on failure can use [`OrNan::or_nan`].
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

pub mod calibration;
pub mod config;
pub mod error;
pub mod sht1x;

pub use config::{Command, Config, HumidityResolution, SupplyVoltage, TemperatureResolution};
pub use error::{OrNan, ShtError};
pub use sht1x::{Reading, Sht1x};
