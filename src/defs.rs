/******************************************************************************
 * Refer to AD9833 datasheet for more information, available here:            *
 * - https://www.analog.com/en/products/ad9833.html                           *
 * ========================================================================== *
 *                       AD9833 - Control Word & Register Access              *
*******************************************************************************/

use bitfield_struct::bitfield;

// Register access tags in the top bits of a frame
pub(crate) const FREQ0_ACCESS: u16 = 0x4000;
pub(crate) const FREQ1_ACCESS: u16 = 0x8000;
pub(crate) const PHASE0_ACCESS: u16 = 0xC000;
pub(crate) const PHASE1_ACCESS: u16 = 0xE000;

pub(crate) const FREQ_FIELD_MASK: u32 = 0x3FFF;
pub(crate) const FREQ_FIELD_BITS: u32 = 14;
pub(crate) const PHASE_FIELD_MASK: u16 = 0x0FFF;

/// Largest value a 28-bit frequency register can hold.
pub const MAX_FREQUENCY_CODE: u32 = (1 << 28) - 1;
/// Number of steps in one full turn of a 12-bit phase register.
pub const PHASE_STEPS: u16 = 1 << 12;

/// The 16-bit control register.
///
/// Bits 15:14 are `00`, which addresses the control register itself. Field
/// names follow the datasheet mnemonics.
#[bitfield(u16, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct ControlWord {
  #[bits(1)]
  __reserved0: u8,
  /// MODE: triangle output when OPBITEN is clear.
  pub mode: bool,
  #[bits(1)]
  __reserved2: u8,
  /// DIV2: square output at full DAC MSB rate when set, half rate when clear.
  pub div2: bool,
  #[bits(1)]
  __reserved4: u8,
  /// OPBITEN: route the DAC MSB to VOUT (square output).
  pub opbiten: bool,
  /// SLEEP12: power down the DAC.
  pub sleep12: bool,
  /// SLEEP1: disable the internal MCLK.
  pub sleep1: bool,
  /// RESET: hold the phase accumulator at zero, output at midscale.
  pub reset: bool,
  #[bits(1)]
  __reserved9: u8,
  /// PSELECT: phase register feeding the accumulator.
  pub pselect: bool,
  /// FSELECT: frequency register feeding the accumulator.
  pub fselect: bool,
  /// HLB: which half of a frequency register is written when B28 is clear.
  pub hlb: bool,
  /// B28: frequency registers are loaded as two consecutive 14-bit words.
  pub b28: bool,
  #[bits(2)]
  __address: u8,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn control_word_bits_match_datasheet() {
    assert_eq!(ControlWord::new().with_b28(true).into_bits(), 1 << 13);
    assert_eq!(ControlWord::new().with_hlb(true).into_bits(), 1 << 12);
    assert_eq!(ControlWord::new().with_fselect(true).into_bits(), 1 << 11);
    assert_eq!(ControlWord::new().with_pselect(true).into_bits(), 1 << 10);
    assert_eq!(ControlWord::new().with_reset(true).into_bits(), 1 << 8);
    assert_eq!(ControlWord::new().with_sleep1(true).into_bits(), 1 << 7);
    assert_eq!(ControlWord::new().with_sleep12(true).into_bits(), 1 << 6);
    assert_eq!(ControlWord::new().with_opbiten(true).into_bits(), 1 << 5);
    assert_eq!(ControlWord::new().with_div2(true).into_bits(), 1 << 3);
    assert_eq!(ControlWord::new().with_mode(true).into_bits(), 1 << 1);
  }

  #[test]
  fn control_word_addresses_control_register() {
    let all = ControlWord::new()
      .with_b28(true)
      .with_hlb(true)
      .with_fselect(true)
      .with_pselect(true)
      .with_reset(true)
      .with_sleep1(true)
      .with_sleep12(true)
      .with_opbiten(true)
      .with_div2(true)
      .with_mode(true);
    assert_eq!(all.into_bits() & 0xC000, 0);
  }
}
