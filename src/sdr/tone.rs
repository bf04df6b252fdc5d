//! A deterministic, in-process [`Receiver`] implementation that synthesises
//! a complex cosine tone instead of talking to hardware.
//!
//! This is the minimal concrete collaborator a compiling, testable binary
//! needs. It never blocks, so the inactivity timeout is a no-op here; a
//! real vendor adapter must enforce [`SDR_INACTIVITY_TIMEOUT`] itself.

use std::time::Duration;

use tracing::{debug, info};

use super::{Receiver, ReceiverParams};
use crate::dsp::signal::{Signal, SignalSpec};
use crate::error::Result;

/// The maximum length of receiver inactivity before a real adapter must
/// surface [`crate::error::SpectrelError::SdrFailure`].
pub const SDR_INACTIVITY_TIMEOUT: Duration = Duration::from_secs(1);

/// Tone fraction of the sample rate used when no explicit test frequency is
/// requested.
pub const DEFAULT_TONE_FRACTION: f64 = 0.25;

/// Synthesises `amplitude * cos(2*pi*(frequency/sample_rate)*n + phase)` as
/// a continuous stream, picking up the running sample index across calls to
/// [`Receiver::read_into`] so consecutive buffers form one coherent tone.
pub struct ToneReceiver {
    params: ReceiverParams,
    tone_frequency: f64,
    amplitude: f64,
    samples_produced: u64,
    active: bool,
}

impl ToneReceiver {
    /// Build a tone receiver whose tone frequency is `tone_fraction *
    /// params.sample_rate`.
    pub fn with_tone_fraction(
        driver: &str,
        params: ReceiverParams,
        tone_fraction: f64,
        amplitude: f64,
    ) -> Result<Self> {
        info!(target: "spectrel::sdr", driver, frequency = params.frequency, sample_rate = params.sample_rate, "opening tone receiver");
        Ok(Self {
            params,
            tone_frequency: tone_fraction * params.sample_rate,
            amplitude,
            samples_produced: 0,
            active: false,
        })
    }

    pub fn params(&self) -> ReceiverParams {
        self.params
    }
}

impl Receiver for ToneReceiver {
    fn open(driver: &str, params: ReceiverParams) -> Result<Self> {
        Self::with_tone_fraction(driver, params, DEFAULT_TONE_FRACTION, 1.0)
    }

    fn activate(&mut self) -> Result<()> {
        debug!(target: "spectrel::sdr", "activating stream");
        self.active = true;
        Ok(())
    }

    fn deactivate(&mut self) -> Result<()> {
        debug!(target: "spectrel::sdr", "deactivating stream");
        self.active = false;
        Ok(())
    }

    fn read_into(&mut self, buffer: &mut Signal) -> Result<()> {
        let n = buffer.num_samples();
        let tone = Signal::new(
            SignalSpec::Cosine {
                sample_rate: self.params.sample_rate,
                frequency: self.tone_frequency,
                amplitude: self.amplitude,
                phase: phase_offset(
                    self.samples_produced,
                    self.tone_frequency,
                    self.params.sample_rate,
                ),
            },
            n,
        )?;
        buffer.samples_mut().copy_from_slice(tone.samples());
        self.samples_produced += n as u64;
        Ok(())
    }
}

impl Drop for ToneReceiver {
    fn drop(&mut self) {
        debug!(target: "spectrel::sdr", "releasing receiver");
    }
}

fn phase_offset(samples_produced: u64, frequency: f64, sample_rate: f64) -> f64 {
    use std::f64::consts::PI;
    let theta = 2.0 * PI * (frequency / sample_rate) * samples_produced as f64;
    theta % (2.0 * PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ReceiverParams {
        ReceiverParams {
            frequency: 100_000_000.0,
            sample_rate: 8.0,
            bandwidth: 8.0,
            gain: 0.0,
        }
    }

    #[test]
    fn read_into_fills_the_requested_length() {
        let mut receiver = ToneReceiver::open("mock", params()).unwrap();
        receiver.activate().unwrap();
        let mut buffer = Signal::empty(16).unwrap();
        receiver.read_into(&mut buffer).unwrap();
        assert_eq!(buffer.num_samples(), 16);
    }

    #[test]
    fn successive_reads_are_phase_continuous() {
        let mut receiver = ToneReceiver::with_tone_fraction("mock", params(), 0.25, 1.0).unwrap();
        receiver.activate().unwrap();

        let mut first = Signal::empty(8).unwrap();
        receiver.read_into(&mut first).unwrap();
        let mut second = Signal::empty(8).unwrap();
        receiver.read_into(&mut second).unwrap();

        // sample 8 of the continuous tone should equal the first sample of
        // the second buffer (one full period at fs/4 over 8 samples wraps).
        assert!((first[0].re - second[0].re).abs() < 1e-9);
    }
}
