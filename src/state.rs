/// Output shape selected through the control word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Waveform {
  #[default]
  Sine,
  Triangle,
  /// DAC MSB routed to the output.
  Square,
  /// DAC MSB divided by two, i.e. a square wave at half the programmed frequency.
  SquareHalf,
}

/// Power-down combination applied through SLEEP1/SLEEP12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepMode {
  #[default]
  Active,
  /// DAC powered down, internal clock still running.
  DacOff,
  /// Internal MCLK disabled, DAC output holds its present value.
  ClockOff,
  /// Both DAC and clock powered down.
  FullOff,
}

/// One of the two frequency or phase registers on the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
  #[default]
  Reg0,
  Reg1,
}

impl Register {
  /// The register that is not `self`.
  pub const fn other(self) -> Self {
    match self {
      Self::Reg0 => Self::Reg1,
      Self::Reg1 => Self::Reg0,
    }
  }

  pub(crate) const fn index(self) -> usize {
    self as usize
  }
}

impl From<bool> for Register {
  /// `false` is `Reg0`, `true` is `Reg1`.
  fn from(v: bool) -> Self {
    if v {
      Self::Reg1
    } else {
      Self::Reg0
    }
  }
}

/// Shadow copy of everything the driver has written to the chip.
///
/// The AD9833 is write-only, so this is the only record of its
/// configuration. [`DeviceState::default`] matches the state pushed by
/// [`crate::Ad9833::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
  pub waveform: Waveform,
  pub sleep_mode: SleepMode,
  pub frequency_source: Register,
  pub phase_source: Register,
  /// `false` while the chip is held in reset.
  pub output_enabled: bool,
  pub(crate) frequency: [u32; 2],
  pub(crate) phase: [u16; 2],
}

impl DeviceState {
  pub const fn new() -> Self {
    Self {
      waveform: Waveform::Sine,
      sleep_mode: SleepMode::Active,
      frequency_source: Register::Reg0,
      phase_source: Register::Reg0,
      output_enabled: false,
      frequency: [0; 2],
      phase: [0; 2],
    }
  }

  /// Last 28-bit code written to a frequency register.
  pub const fn frequency_code(&self, register: Register) -> u32 {
    self.frequency[register.index()]
  }

  /// Last 12-bit code written to a phase register.
  pub const fn phase_code(&self, register: Register) -> u16 {
    self.phase[register.index()]
  }

  pub(crate) fn set_frequency_code(&mut self, register: Register, code: u32) {
    self.frequency[register.index()] = code;
  }

  pub(crate) fn set_phase_code(&mut self, register: Register, code: u16) {
    self.phase[register.index()] = code;
  }
}

impl Default for DeviceState {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn power_on_defaults() {
    let state = DeviceState::default();
    assert_eq!(state.waveform, Waveform::Sine);
    assert_eq!(state.sleep_mode, SleepMode::Active);
    assert_eq!(state.frequency_source, Register::Reg0);
    assert_eq!(state.phase_source, Register::Reg0);
    assert!(!state.output_enabled);
    assert_eq!(state.frequency_code(Register::Reg1), 0);
    assert_eq!(state.phase_code(Register::Reg1), 0);
  }

  #[test]
  fn register_slots_are_independent() {
    let mut state = DeviceState::new();
    state.set_frequency_code(Register::Reg1, 0xA3D70A);
    state.set_phase_code(Register::Reg0, 2048);
    assert_eq!(state.frequency_code(Register::Reg0), 0);
    assert_eq!(state.frequency_code(Register::Reg1), 0xA3D70A);
    assert_eq!(state.phase_code(Register::Reg0), 2048);
    assert_eq!(state.phase_code(Register::Reg1), 0);
  }

  #[test]
  fn register_from_bool() {
    assert_eq!(Register::from(false), Register::Reg0);
    assert_eq!(Register::from(true), Register::Reg1);
    assert_eq!(Register::Reg0.other(), Register::Reg1);
  }
}
