//! Real-valued tapers applied to each STFT analysis frame.

use std::f64::consts::PI;

use rustfft::num_complex::Complex64;

use super::signal::Signal;
use crate::error::{Result, SpectrelError};

/// Default Gaussian width used by [`WindowType::Gaussian`].
pub const DEFAULT_GAUSSIAN_SIGMA: f64 = 0.25;

/// A supported window shape. `Boxcar` is the only variant the STFT engine
/// requires; `Hanning` and `Gaussian` extend the set without changing the
/// engine's contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowType {
    /// Equivalent to `Constant(1.0)`.
    Boxcar,
    Hanning,
    Gaussian { sigma: f64 },
}

/// A specialisation of [`Signal`] carrying a real-valued taper.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    signal: Signal,
}

impl Window {
    /// Build a window of `num_samples` taps for `window_type`.
    pub fn make(window_type: WindowType, num_samples: usize) -> Result<Self> {
        if num_samples == 0 {
            return Err(SpectrelError::InvalidArgument(
                "window length must be > 0".into(),
            ));
        }

        let mut signal = Signal::empty(num_samples)?;
        match window_type {
            WindowType::Boxcar => {
                for s in signal.samples_mut() {
                    *s = Complex64::new(1.0, 0.0);
                }
            }
            WindowType::Hanning => {
                let denom = (num_samples - 1).max(1) as f64;
                for (n, s) in signal.samples_mut().iter_mut().enumerate() {
                    let tap = 0.5 * (1.0 - (2.0 * PI * n as f64 / denom).cos());
                    *s = Complex64::new(tap, 0.0);
                }
            }
            WindowType::Gaussian { sigma } => {
                let center = (num_samples as f64 - 1.0) / 2.0;
                let center = if center == 0.0 { 1.0 } else { center };
                for (n, s) in signal.samples_mut().iter_mut().enumerate() {
                    let x = (n as f64 - center) / (sigma * center);
                    let tap = (-0.5 * x * x).exp();
                    *s = Complex64::new(tap, 0.0);
                }
            }
        }

        Ok(Self { signal })
    }

    /// Convenience constructor for [`WindowType::Boxcar`].
    pub fn boxcar(num_samples: usize) -> Result<Self> {
        Self::make(WindowType::Boxcar, num_samples)
    }

    pub fn num_samples(&self) -> usize {
        self.signal.num_samples()
    }

    pub fn samples(&self) -> &[Complex64] {
        self.signal.samples()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxcar_is_all_ones_real() {
        let window = Window::boxcar(8).unwrap();
        for s in window.samples() {
            assert_eq!(*s, Complex64::new(1.0, 0.0));
        }
    }

    #[test]
    fn every_window_type_is_real_valued() {
        for window_type in [
            WindowType::Boxcar,
            WindowType::Hanning,
            WindowType::Gaussian {
                sigma: DEFAULT_GAUSSIAN_SIGMA,
            },
        ] {
            let window = Window::make(window_type, 16).unwrap();
            assert!(window.samples().iter().all(|s| s.im == 0.0));
        }
    }

    #[test]
    fn hanning_window_endpoints_are_near_zero() {
        let window = Window::make(WindowType::Hanning, 8).unwrap();
        assert!(window.samples()[0].re.abs() < 1e-12);
    }

    #[test]
    fn zero_length_window_is_rejected() {
        assert!(Window::boxcar(0).is_err());
    }
}
