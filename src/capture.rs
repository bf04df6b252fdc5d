//! The capture loop: drives the pipeline SDR -> STFT -> PGM until the
//! configured capture duration's worth of samples has elapsed.

use tracing::{info, warn};

use crate::dsp::plan::Plan;
use crate::dsp::signal::Signal;
use crate::dsp::stft;
use crate::dsp::window::Window;
use crate::error::Result;
use crate::output::path::{OutputFile, OutputFormat};
use crate::output::pgm;
use crate::sdr::Receiver;

/// Everything the capture loop needs, already validated and allocated.
pub struct CaptureConfig {
    pub driver: String,
    pub sample_rate: f64,
    pub duration: f64,
    pub window_hop: usize,
}

/// Run the capture loop: repeatedly fill `buffer` from `receiver`, run the
/// STFT against `plan`/`window`, and append each resulting spectrogram to
/// `output` until `samples_target` samples have been processed.
///
/// The loop releases the current spectrogram before the next iteration (at
/// most one live spectrogram) -- a natural consequence of each iteration's
/// spectrogram going out of scope before the next is allocated.
pub fn run<R: Receiver>(
    config: &CaptureConfig,
    receiver: &mut R,
    plan: &mut Plan,
    window: &Window,
    buffer: &mut Signal,
    output: &mut OutputFile,
) -> Result<()> {
    let samples_target = (config.duration * config.sample_rate).ceil() as u64;

    receiver.activate()?;
    info!(
        target: "spectrel::capture",
        driver = %config.driver,
        samples_target,
        "starting capture"
    );

    let result = drive_loop(config, receiver, plan, window, buffer, output, samples_target);

    if let Err(err) = receiver.deactivate() {
        warn!(target: "spectrel::capture", %err, "failed to deactivate stream cleanly");
    }

    match &result {
        Ok(()) => info!(target: "spectrel::capture", "capture complete"),
        Err(err) => warn!(target: "spectrel::capture", %err, "capture aborted"),
    }

    result
}

/// The steady-state loop body, isolated so [`run`] can always deactivate the
/// stream on the way out regardless of how this returns.
fn drive_loop<R: Receiver>(
    config: &CaptureConfig,
    receiver: &mut R,
    plan: &mut Plan,
    window: &Window,
    buffer: &mut Signal,
    output: &mut OutputFile,
    samples_target: u64,
) -> Result<()> {
    let mut samples_elapsed: u64 = 0;

    loop {
        receiver.read_into(buffer)?;

        let spectrogram = stft::compute(plan, window, buffer, config.window_hop, config.sample_rate)?;
        pgm::write_pgm(&spectrogram, output.writer())?;
        // `spectrogram` is dropped here, before the next iteration
        // allocates a new one.

        samples_elapsed += buffer.num_samples() as u64;
        if samples_elapsed >= samples_target {
            return Ok(());
        }
    }
}
