//! A pre-configured, reusable in-place forward DFT bound to an owned scratch
//! buffer.
//!
//! Planning is the heavy step; [`Plan`] is built once per capture run and
//! reused across every STFT frame. The scratch buffer is exclusively owned
//! and exclusively mutated by the STFT engine.

use std::sync::Arc;

use rustfft::{Fft, FftPlanner};

use super::signal::Signal;
use crate::error::{Result, SpectrelError};

/// An opaque, pre-planned in-place 1-D forward DFT over a fixed-size scratch
/// buffer. Internals are private; the only operations exposed are creation,
/// scratch access, and execution. Nothing outside this module may alias the
/// scratch buffer handed to the FFT backend.
pub struct Plan {
    scratch: Signal,
    fft: Arc<dyn Fft<f64>>,
}

impl Plan {
    /// Allocate an empty scratch buffer of `window_size` samples and bind an
    /// in-place forward 1-D DFT descriptor to it.
    pub fn make(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(SpectrelError::InvalidArgument(
                "plan window_size must be >= 1".into(),
            ));
        }

        let scratch = Signal::empty(window_size)?;
        let fft = FftPlanner::<f64>::new().plan_fft_forward(window_size);

        Ok(Self { scratch, fft })
    }

    pub fn window_size(&self) -> usize {
        self.scratch.num_samples()
    }

    /// Mutable access to the scratch buffer, for the STFT engine to fill
    /// with windowed, zero-padded taps before calling [`Plan::execute`].
    pub fn scratch_mut(&mut self) -> &mut Signal {
        &mut self.scratch
    }

    pub fn scratch(&self) -> &Signal {
        &self.scratch
    }

    /// Execute the bound in-place forward DFT over the current scratch
    /// contents.
    pub fn execute(&mut self) {
        self.fft.process(self.scratch.samples_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfft::num_complex::Complex64;

    #[test]
    fn plan_rejects_zero_length() {
        assert!(Plan::make(0).is_err());
    }

    #[test]
    fn dc_signal_transforms_to_single_bin() {
        let mut plan = Plan::make(8).unwrap();
        for s in plan.scratch_mut().samples_mut() {
            *s = Complex64::new(1.0, 0.0);
        }
        plan.execute();
        let scratch = plan.scratch();
        assert!((scratch.samples()[0].re - 8.0).abs() < 1e-9);
        for bin in &scratch.samples()[1..] {
            assert!(bin.norm() < 1e-9);
        }
    }
}
