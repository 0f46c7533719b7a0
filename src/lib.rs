#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Blocking, `no_std` driver for the Analog Devices AD9833 programmable
//! waveform generator.
//!
//! The AD9833 is a low power DDS chip with two 28-bit frequency registers, two
//! 12-bit phase registers and a single 16-bit control register, all reached
//! through a write-only SPI-style interface. This crate provides:
//!
//! - Frequency and phase conversion from Hz, degrees and radians against a
//!   configurable reference clock
//! - A shadow copy of the chip configuration, since nothing can be read back
//! - Correct sequencing of multi-word writes: control word with B28 before
//!   every frequency load, LSB word before MSB word
//! - A glitch-free [`Ad9833::generate`] that holds the output in reset while
//!   the new shape and frequency are loaded
//! - `embedded-hal` 1.0 [`SpiDevice`] so the driver shares a bus with other
//!   peripherals without extra locking
//!
//! The `SpiDevice` must be set up for 16-bit words, MSB first, [`SPI_MODE`]
//! and at most [`MAX_SPI_CLOCK_HZ`], with the FSYNC pin as chip-select.
//!
//! ```no_run
//! use ad9833::{Ad9833, Config, Register, Waveform};
//! use embedded_hal::spi::SpiDevice;
//!
//! fn example<SPI, E>(spi: SPI) -> Result<(), ad9833::Error<E>>
//! where
//!   SPI: SpiDevice<u16, Error = E>,
//! {
//!   let mut dds = Ad9833::new(spi, Config::default());
//!   dds.initialize()?;
//!   dds.generate(Register::Reg0, 440.0, Waveform::Sine)?;
//!   Ok(())
//! }
//! ```
mod config;
mod control;
mod defs;
pub mod encode;
mod state;

use embedded_hal::spi::SpiDevice;

pub use config::*;
pub use defs::{ControlWord, MAX_FREQUENCY_CODE, PHASE_STEPS};
pub use encode::{FrequencyWords, InvalidFrequency};
pub use state::*;

/// Errors that can occur while driving the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// SPI transfer failed with the underlying driver error. The shadow state
  /// may be ahead of the hardware; call [`Ad9833::initialize`] to resync.
  Spi(E),
  /// Requested frequency is negative, not a number, or above what the 28-bit
  /// register can represent with the configured reference clock.
  InvalidFrequency,
}

impl<E> From<InvalidFrequency> for Error<E> {
  fn from(_: InvalidFrequency) -> Self {
    Self::InvalidFrequency
  }
}

/// Driver for one AD9833.
///
/// Owns the SPI device and the shadow [`DeviceState`]. Create it with
/// [`Ad9833::new`] and call [`Ad9833::initialize`] before anything else so the
/// chip and the shadow state agree.
pub struct Ad9833<SPI> {
  spi: SPI,
  config: Config,
  state: DeviceState,
}

impl<SPI, E> Ad9833<SPI>
where
  SPI: SpiDevice<u16, Error = E>,
{
  /// Create a driver instance. Nothing is sent until [`Ad9833::initialize`].
  pub fn new(spi: SPI, config: Config) -> Self {
    Self { spi, config, state: DeviceState::new() }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// The configuration last written to the chip.
  pub fn state(&self) -> &DeviceState {
    &self.state
  }

  /// Consume the driver and hand back the SPI device.
  pub fn release(self) -> SPI {
    self.spi
  }

  /// Send the frames of one operation, in order.
  ///
  /// With [`Framing::Burst`] the whole slice is a single transaction, so the
  /// bus is claimed once and released by the `SpiDevice` on every path.
  pub(crate) fn transmit(&mut self, frames: &[u16]) -> Result<(), Error<E>> {
    #[cfg(feature = "defmt")]
    defmt::trace!("AD9833 <- {:#x}", frames);

    match self.config.framing {
      Framing::Burst => self.spi.write(frames).map_err(Error::Spi),
      Framing::PerFrame => {
        for frame in frames {
          self.spi.write(core::slice::from_ref(frame)).map_err(Error::Spi)?;
        }
        Ok(())
      }
    }
  }
}
