use embedded_hal::spi::{Mode, MODE_2};

/// SPI mode the AD9833 samples in: clock idles high, data latched on the falling edge.
pub const SPI_MODE: Mode = MODE_2;
/// Datasheet maximum serial clock used by this driver.
pub const MAX_SPI_CLOCK_HZ: u32 = 8_000_000;
/// Reference clock on the common AD9833 breakout boards.
pub const DEFAULT_REFERENCE_CLOCK_HZ: u32 = 25_000_000;

/// How the frames of a single driver operation are grouped on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Framing {
  /// One SPI transaction per operation. FSYNC stays low across all frames and
  /// the chip latches each word after 16 clocks.
  #[default]
  Burst,
  /// One SPI transaction per 16-bit frame, FSYNC released between frames.
  PerFrame,
}

/// Driver configuration.
///
/// The bus itself (clock rate, [`SPI_MODE`], chip-select) is configured when
/// building the `SpiDevice`; this only covers what the driver needs to know
/// about the board.
///
/// # Example
/// ```no_run
/// use ad9833::{Config, Framing};
///
/// let config = Config::default()
///   .with_reference_clock(16_000_000)
///   .with_framing(Framing::PerFrame);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
  /// MCLK frequency in Hz, used to scale frequency requests.
  pub reference_clock_hz: u32,
  pub framing: Framing,
}

impl Config {
  pub const fn new() -> Self {
    Self { reference_clock_hz: DEFAULT_REFERENCE_CLOCK_HZ, framing: Framing::Burst }
  }

  pub const fn with_reference_clock(mut self, hz: u32) -> Self {
    self.reference_clock_hz = hz;
    self
  }

  pub const fn with_framing(mut self, framing: Framing) -> Self {
    self.framing = framing;
    self
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new()
  }
}
