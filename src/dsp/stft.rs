//! The short-time Fourier transform reducer: walks a signal with a sliding
//! window, drives the plan's in-place DFT, and assembles a [`Spectrogram`]
//! with correctly computed time/frequency axes.

use rustfft::num_complex::Complex64;
use tracing::trace;

use super::plan::Plan;
use super::signal::Signal;
use super::spectrogram::Spectrogram;
use super::window::Window;
use crate::error::{Result, SpectrelError};

/// Number of frames produced by [`compute`] for a signal of `num_samples`
/// against a window of `window_size` advanced by `hop`.
///
/// `F = floor((S - ceil(W/2)) / H) + 1`. The first frame is centered at
/// signal index 0 (so its left half dangles past the start); the last
/// frame's centre is the greatest multiple of `H` whose window right edge
/// does not exceed `S - 1`.
fn frame_count(num_samples: usize, window_size: usize, hop: usize) -> usize {
    let half_ceil = window_size.div_ceil(2);
    (num_samples - half_ceil) / hop + 1
}

/// Run the STFT of `signal` against `window` using `plan`'s scratch buffer,
/// advancing by `window_hop` samples per frame at `sample_rate` Hz.
///
/// # Errors
/// Returns [`SpectrelError::InvalidArgument`] if `plan.window_size() !=
/// window.num_samples()`, if the window does not fit in the signal, or if
/// `window_hop` is zero.
pub fn compute(
    plan: &mut Plan,
    window: &Window,
    signal: &Signal,
    window_hop: usize,
    sample_rate: f64,
) -> Result<Spectrogram> {
    let w = plan.window_size();
    let s = signal.num_samples();
    let h = window_hop;

    if w != window.num_samples() {
        return Err(SpectrelError::InvalidArgument(format!(
            "plan scratch length ({w}) must equal window length ({})",
            window.num_samples()
        )));
    }
    if w == 0 {
        return Err(SpectrelError::InvalidArgument(
            "window length must be >= 1".into(),
        ));
    }
    if h == 0 {
        return Err(SpectrelError::InvalidArgument(
            "window_hop must be >= 1".into(),
        ));
    }
    if w > s {
        return Err(SpectrelError::InvalidArgument(format!(
            "window length ({w}) must not exceed signal length ({s})"
        )));
    }

    let num_frames = frame_count(s, w, h);
    let mut spectrogram = Spectrogram::empty(num_frames, w)?;
    let half_floor = w / 2;

    trace!(
        target: "spectrel::dsp::stft",
        num_frames,
        window_size = w,
        hop = h,
        "running STFT"
    );

    for k in 0..num_frames {
        let centre = (k * h) as i64;
        let scratch = plan.scratch_mut().samples_mut();
        for m in 0..w {
            let i = centre - half_floor as i64 + m as i64;
            scratch[m] = if i < 0 || i as usize >= s {
                Complex64::new(0.0, 0.0)
            } else {
                signal[i as usize] * window.samples()[m]
            };
        }

        plan.execute();
        spectrogram.row_mut(k).copy_from_slice(plan.scratch().samples());
    }

    for (k, t) in spectrogram.times_mut().iter_mut().enumerate() {
        *t = (k * h) as f64 / sample_rate;
    }
    for (m, f) in spectrogram.frequencies_mut().iter_mut().enumerate() {
        *f = if 2 * m < w {
            (m as f64 / w as f64) * sample_rate
        } else {
            -(1.0 - m as f64 / w as f64) * sample_rate
        };
    }

    Ok(spectrogram)
}
