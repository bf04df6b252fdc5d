//! Command-line surface.

use clap::Parser;

use crate::sdr::tone::SDR_INACTIVITY_TIMEOUT;

/// Default window size in samples.
pub const DEFAULT_WINDOW_SIZE: usize = 1024;
/// Default window hop in samples.
pub const DEFAULT_WINDOW_HOP: usize = 512;
/// Default SDR read buffer size in samples.
pub const DEFAULT_BUFFER_SIZE: usize = 16384;

/// Capture a stream of complex baseband samples and continuously render it
/// as a sequence of PGM spectrogram frames.
#[derive(Parser, Debug, Clone)]
#[command(name = "spectrel", version, about)]
pub struct Args {
    /// Output directory (default: current directory, overridable by
    /// SPECTREL_DATA_DIR_PATH).
    #[arg(short = 'd', long = "dir")]
    pub dir: Option<String>,

    /// SDR driver identifier.
    #[arg(short = 'r', long = "driver")]
    pub driver: String,

    /// Center frequency, in Hz.
    #[arg(short = 'f', long = "frequency")]
    pub frequency: f64,

    /// Sample rate, in Hz.
    #[arg(short = 's', long = "sample-rate")]
    pub sample_rate: f64,

    /// Bandwidth, in Hz.
    #[arg(short = 'b', long = "bandwidth")]
    pub bandwidth: f64,

    /// Gain, in dB.
    #[arg(short = 'g', long = "gain")]
    pub gain: f64,

    /// Total capture duration, in seconds.
    #[arg(short = 'T', long = "duration")]
    pub duration: f64,

    /// Window size, in samples.
    #[arg(short = 'w', long = "window-size", default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window_size: usize,

    /// Window hop, in samples.
    #[arg(short = 'h', long = "window-hop", default_value_t = DEFAULT_WINDOW_HOP)]
    pub window_hop: usize,

    /// SDR read buffer size, in samples.
    #[arg(short = 'B', long = "buffer-size", default_value_t = DEFAULT_BUFFER_SIZE)]
    pub buffer_size: usize,
}

impl Args {
    /// The SDR inactivity timeout enforced by the collaborator. Not
    /// user-configurable; exposed for diagnostics.
    pub fn sdr_inactivity_timeout(&self) -> std::time::Duration {
        SDR_INACTIVITY_TIMEOUT
    }
}
