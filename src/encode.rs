//! Conversions between physical quantities and the AD9833 register formats.
//!
//! Everything here is pure; the driver in [`crate::Ad9833`] decides when and in
//! which order the resulting frames are sent.

use core::f64::consts::TAU;

use crate::defs::*;
use crate::{DeviceState, Register, SleepMode, Waveform};

const FREQUENCY_SCALE: f64 = (1u64 << 28) as f64;

/// The requested frequency does not fit the 28-bit frequency register for the
/// configured reference clock, is negative, or is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidFrequency;

/// Convert an output frequency to the 28-bit tuning word
/// `round(freq_hz * 2^28 / reference_clock_hz)`.
///
/// Frequency is not cyclic, so anything outside `0..=MAX_FREQUENCY_CODE` after
/// scaling is rejected instead of wrapped.
pub fn encode_frequency(freq_hz: f64, reference_clock_hz: u32) -> Result<u32, InvalidFrequency> {
  let scaled = freq_hz * FREQUENCY_SCALE / reference_clock_hz as f64;
  // NaN fails both comparisons
  if !(scaled >= 0.0) {
    return Err(InvalidFrequency);
  }
  let code = round_half_up(scaled);
  if code > MAX_FREQUENCY_CODE as i64 {
    return Err(InvalidFrequency);
  }
  Ok(code as u32)
}

/// Inverse of [`encode_frequency`]: the output frequency a tuning word produces.
pub fn decode_frequency(code: u32, reference_clock_hz: u32) -> f64 {
  (code & MAX_FREQUENCY_CODE) as f64 * reference_clock_hz as f64 / FREQUENCY_SCALE
}

/// The two frames that load a 28-bit code into a frequency register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrequencyWords {
  /// Access tag plus bits 13:0 of the code.
  pub lsb: u16,
  /// Access tag plus bits 27:14 of the code.
  pub msb: u16,
}

impl FrequencyWords {
  /// LSB word first, as the chip expects with B28 set.
  pub const fn in_write_order(self) -> [u16; 2] {
    [self.lsb, self.msb]
  }

  /// Reassemble the 28-bit code carried by both words.
  pub const fn code(self) -> u32 {
    ((self.msb as u32 & FREQ_FIELD_MASK) << FREQ_FIELD_BITS) | (self.lsb as u32 & FREQ_FIELD_MASK)
  }
}

/// Split a 28-bit code into two tagged 14-bit frames for `register`.
pub const fn encode_frequency_words(code: u32, register: Register) -> FrequencyWords {
  let tag = frequency_access(register);
  FrequencyWords {
    lsb: tag | (code & FREQ_FIELD_MASK) as u16,
    msb: tag | ((code >> FREQ_FIELD_BITS) & FREQ_FIELD_MASK) as u16,
  }
}

/// `round(deg * 4096 / 360)` wrapped into the 12-bit phase space.
pub fn encode_phase_degrees(deg: f32) -> u16 {
  wrap_phase(deg as f64, 360.0)
}

/// `round(rad * 4096 / 2π)` wrapped into the 12-bit phase space.
pub fn encode_phase_radians(rad: f32) -> u16 {
  wrap_phase(rad as f64, TAU)
}

/// Phase offset in degrees represented by a 12-bit code.
pub fn decode_phase_degrees(code: u16) -> f32 {
  (code & PHASE_FIELD_MASK) as f32 * 360.0 / PHASE_STEPS as f32
}

pub fn degrees_to_radians(deg: f32) -> f32 {
  deg * (core::f32::consts::PI / 180.0)
}

/// Tag a 12-bit phase code for `register`.
pub const fn encode_phase_word(code: u16, register: Register) -> u16 {
  phase_access(register) | (code & PHASE_FIELD_MASK)
}

/// Build the control register image for `state`.
///
/// B28 is always set: this driver only ever loads full 28-bit frequencies.
pub fn control_word(state: &DeviceState) -> ControlWord {
  let (opbiten, div2, mode) = waveform_bits(state.waveform);
  let (sleep1, sleep12) = sleep_bits(state.sleep_mode);

  ControlWord::new()
    .with_b28(true)
    .with_hlb(false)
    .with_fselect(state.frequency_source == Register::Reg1)
    .with_pselect(state.phase_source == Register::Reg1)
    .with_reset(reset_asserted(state.output_enabled))
    .with_sleep1(sleep1)
    .with_sleep12(sleep12)
    .with_opbiten(opbiten)
    .with_div2(div2)
    .with_mode(mode)
}

pub fn encode_control_word(state: &DeviceState) -> u16 {
  control_word(state).into_bits()
}

/// The chip has no enable bit; output is off while RESET is held.
pub const fn reset_asserted(output_enabled: bool) -> bool {
  !output_enabled
}

/// `(OPBITEN, DIV2, MODE)`
const fn waveform_bits(waveform: Waveform) -> (bool, bool, bool) {
  match waveform {
    Waveform::Sine => (false, false, false),
    Waveform::Triangle => (false, false, true),
    Waveform::Square => (true, true, false),
    Waveform::SquareHalf => (true, false, false),
  }
}

/// `(SLEEP1, SLEEP12)`
const fn sleep_bits(mode: SleepMode) -> (bool, bool) {
  match mode {
    SleepMode::Active => (false, false),
    SleepMode::DacOff => (false, true),
    SleepMode::ClockOff => (true, false),
    SleepMode::FullOff => (true, true),
  }
}

const fn frequency_access(register: Register) -> u16 {
  match register {
    Register::Reg0 => FREQ0_ACCESS,
    Register::Reg1 => FREQ1_ACCESS,
  }
}

const fn phase_access(register: Register) -> u16 {
  match register {
    Register::Reg0 => PHASE0_ACCESS,
    Register::Reg1 => PHASE1_ACCESS,
  }
}

// Reduce to one turn before scaling so large angles keep their position,
// then round half up so `angle` and `angle + turn` land on the same code.
fn wrap_phase(angle: f64, turn: f64) -> u16 {
  let mut steps = angle % turn * PHASE_STEPS as f64 / turn;
  if !steps.is_finite() {
    return 0;
  }
  if steps < 0.0 {
    steps += PHASE_STEPS as f64;
  }
  round_half_up(steps).rem_euclid(PHASE_STEPS as i64) as u16
}

// core has no f64::round; only called with x >= 0, saturates at i64::MAX
fn round_half_up(x: f64) -> i64 {
  (x + 0.5) as i64
}
