use embedded_hal::spi::SpiDevice;

use crate::encode::*;
use crate::{Ad9833, DeviceState, Error, Register, SleepMode, Waveform};

impl<SPI, E> Ad9833<SPI>
where
  SPI: SpiDevice<u16, Error = E>,
{
  /// Return the shadow state to power-on defaults and push it to the chip.
  ///
  /// Leaves the output held in reset with sine shape, no power-down and
  /// register 0 selected for both frequency and phase. Safe to call again at
  /// any time, in particular after an [`Error::Spi`].
  pub fn initialize(&mut self) -> Result<(), Error<E>> {
    #[cfg(feature = "defmt")]
    defmt::debug!("AD9833 initialize");

    self.state = DeviceState::new();
    self.write_control()
  }

  /// Load `hz` into a frequency register without changing which register
  /// drives the output.
  ///
  /// Sends the control word (B28 must be set before a 28-bit load), then the
  /// LSB word, then the MSB word.
  pub fn set_frequency(&mut self, register: Register, hz: f64) -> Result<(), Error<E>> {
    let code = encode_frequency(hz, self.config.reference_clock_hz)?;

    #[cfg(feature = "defmt")]
    defmt::debug!("AD9833 {} <- {} ({:#x})", register, hz, code);

    self.state.set_frequency_code(register, code);
    let [lsb, msb] = encode_frequency_words(code, register).in_write_order();
    self.transmit(&[encode_control_word(&self.state), lsb, msb])
  }

  /// Choose which frequency register drives the phase accumulator.
  pub fn select_frequency_register(&mut self, register: Register) -> Result<(), Error<E>> {
    self.state.frequency_source = register;
    self.write_control()
  }

  pub fn set_phase_radians(&mut self, register: Register, radians: f32) -> Result<(), Error<E>> {
    self.write_phase(register, encode_phase_radians(radians))
  }

  pub fn set_phase_degrees(&mut self, register: Register, degrees: f32) -> Result<(), Error<E>> {
    self.write_phase(register, encode_phase_degrees(degrees))
  }

  /// Choose which phase register is added to the accumulator output.
  pub fn select_phase_register(&mut self, register: Register) -> Result<(), Error<E>> {
    self.state.phase_source = register;
    self.write_control()
  }

  pub fn set_waveform(&mut self, waveform: Waveform) -> Result<(), Error<E>> {
    self.state.waveform = waveform;
    self.write_control()
  }

  pub fn set_sleep_mode(&mut self, mode: SleepMode) -> Result<(), Error<E>> {
    self.state.sleep_mode = mode;
    self.write_control()
  }

  /// Release (`true`) or assert (`false`) the internal reset.
  pub fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Error<E>> {
    self.state.output_enabled = enabled;
    self.write_control()
  }

  /// Switch to a new frequency and shape without emitting a transitional signal.
  ///
  /// Five frames, in this order:
  /// 1. control word with the output held in reset
  /// 2. control word with `waveform` and `register` as phase source
  /// 3. LSB word of `hz` for `register`
  /// 4. MSB word of `hz` for `register`
  /// 5. control word with the output released
  ///
  /// Frame 2 already carries B28, so it doubles as the control word required
  /// ahead of the frequency load. An invalid `hz` is rejected before anything
  /// is sent.
  pub fn generate(&mut self, register: Register, hz: f64, waveform: Waveform) -> Result<(), Error<E>> {
    let code = encode_frequency(hz, self.config.reference_clock_hz)?;

    #[cfg(feature = "defmt")]
    defmt::debug!("AD9833 generate {} {} on {}", waveform, hz, register);

    self.state.output_enabled = false;
    let held = encode_control_word(&self.state);

    self.state.phase_source = register;
    self.state.waveform = waveform;
    let shaped = encode_control_word(&self.state);

    self.state.set_frequency_code(register, code);
    let [lsb, msb] = encode_frequency_words(code, register).in_write_order();

    self.state.output_enabled = true;
    let released = encode_control_word(&self.state);

    self.transmit(&[held, shaped, lsb, msb, released])
  }

  /// Frequency held in a register according to the shadow state.
  pub fn frequency_hz(&self, register: Register) -> f64 {
    decode_frequency(self.state.frequency_code(register), self.config.reference_clock_hz)
  }

  /// Phase offset held in a register according to the shadow state.
  pub fn phase_degrees(&self, register: Register) -> f32 {
    decode_phase_degrees(self.state.phase_code(register))
  }

  fn write_phase(&mut self, register: Register, code: u16) -> Result<(), Error<E>> {
    self.state.set_phase_code(register, code);
    self.transmit(&[encode_phase_word(code, register)])
  }

  fn write_control(&mut self) -> Result<(), Error<E>> {
    let word = encode_control_word(&self.state);
    self.transmit(&[word])
  }
}
