//! Two-tone keying between the frequency registers.
#![allow(unused)]
use ad9833::{Ad9833, Config, Register, SleepMode, Waveform};
use embedded_hal::spi::SpiDevice;

#[allow(dead_code)]
fn run<SPI, E>(spi: SPI) -> Result<SPI, ad9833::Error<E>>
where
  SPI: SpiDevice<u16, Error = E>,
{
  let mut dds = Ad9833::new(spi, Config::default());
  dds.initialize()?;

  // Mark/space tones preloaded, output starts on the mark
  dds.generate(Register::Reg0, 1_200.0, Waveform::Sine)?;
  dds.set_frequency(Register::Reg1, 2_200.0)?;
  dds.set_phase_degrees(Register::Reg1, 90.0)?;

  let mut active = Register::Reg0;
  for bit in [true, false, true, true, false] {
    if Register::from(!bit) != active {
      active = active.other();
      dds.select_frequency_register(active)?;
      dds.select_phase_register(active)?;
    }
  }

  dds.set_output_enabled(false)?;
  dds.set_sleep_mode(SleepMode::FullOff)?;
  Ok(dds.release())
}

fn main() {}
