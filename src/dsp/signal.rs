//! Owned, finite sequences of complex-double samples.
//!
//! [`Signal`] backs input signals, windows, and the [`super::plan::Plan`]
//! scratch buffer alike. `rustfft::num_complex::Complex<f64>` is `#[repr(C)]`
//! as two adjacent `f64`s, so a `Vec<Complex<f64>>` is naturally 16-byte
//! aligned without a custom allocator.

use std::f64::consts::PI;

use rustfft::num_complex::Complex64;

use crate::error::{Result, SpectrelError};

/// An owned, finite, complex-double sample sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<Complex64>,
}

/// Construction tags for [`Signal`]: a variant tag plus its own parameter
/// record, dispatched in [`Signal::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalSpec {
    /// Samples are uninitialised (zeroed in this safe rewrite); caller must
    /// fill before first read.
    Empty,
    /// Every sample equals `value + 0i`.
    Constant(f64),
    /// Sample `n` equals `amplitude * cos(2*pi*(frequency/sample_rate)*n + phase)`.
    Cosine {
        sample_rate: f64,
        frequency: f64,
        amplitude: f64,
        phase: f64,
    },
}

impl Signal {
    /// Build a signal of `num_samples` complex-double samples per `spec`.
    pub fn new(spec: SignalSpec, num_samples: usize) -> Result<Self> {
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(num_samples)
            .map_err(|e| SpectrelError::AllocationFailed(e.to_string()))?;
        samples.resize(num_samples, Complex64::new(0.0, 0.0));

        match spec {
            SignalSpec::Empty => {}
            SignalSpec::Constant(value) => {
                for s in samples.iter_mut() {
                    *s = Complex64::new(value, 0.0);
                }
            }
            SignalSpec::Cosine {
                sample_rate,
                frequency,
                amplitude,
                phase,
            } => {
                for (n, s) in samples.iter_mut().enumerate() {
                    let theta = 2.0 * PI * (frequency / sample_rate) * n as f64 + phase;
                    *s = Complex64::new(amplitude * theta.cos(), 0.0);
                }
            }
        }

        Ok(Self { samples })
    }

    /// Convenience constructor for [`SignalSpec::Empty`].
    pub fn empty(num_samples: usize) -> Result<Self> {
        Self::new(SignalSpec::Empty, num_samples)
    }

    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [Complex64] {
        &mut self.samples
    }
}

impl std::ops::Index<usize> for Signal {
    type Output = Complex64;
    fn index(&self, idx: usize) -> &Complex64 {
        &self.samples[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_signal_is_zeroed_and_sized() {
        let signal = Signal::empty(8).unwrap();
        assert_eq!(signal.num_samples(), 8);
        assert!(signal.samples().iter().all(|s| *s == Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn constant_signal_has_zero_imaginary_part() {
        let signal = Signal::new(SignalSpec::Constant(3.0), 4).unwrap();
        for s in signal.samples() {
            assert_eq!(*s, Complex64::new(3.0, 0.0));
        }
    }

    #[test]
    fn cosine_signal_matches_closed_form() {
        let signal = Signal::new(
            SignalSpec::Cosine {
                sample_rate: 8.0,
                frequency: 1.0,
                amplitude: 1.0,
                phase: 0.0,
            },
            4,
        )
        .unwrap();
        for (n, s) in signal.samples().iter().enumerate() {
            let expected = (2.0 * PI * (1.0 / 8.0) * n as f64).cos();
            assert!((s.re - expected).abs() < 1e-12);
            assert_eq!(s.im, 0.0);
        }
    }

    #[test]
    fn zero_length_signal_is_valid() {
        let signal = Signal::empty(0).unwrap();
        assert_eq!(signal.num_samples(), 0);
    }
}
