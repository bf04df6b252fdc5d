//! The dense, row-major time-frequency representation produced by one STFT
//! call.

use rustfft::num_complex::Complex64;

use crate::error::{Result, SpectrelError};

/// A 2-D array of complex DFT bins (spectrums x bins), plus the two physical
/// axis vectors. Row `k` is the spectrum produced by frame `k`; column `m`
/// is DFT bin `m` in natural FFT order.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    num_spectrums: usize,
    num_bins: usize,
    samples: Vec<Complex64>,
    times: Vec<f64>,
    frequencies: Vec<f64>,
}

impl Spectrogram {
    /// Allocate an empty (zeroed) spectrogram. Allocation is all-or-nothing:
    /// if any component cannot be allocated, nothing is left partially
    /// constructed.
    pub fn empty(num_spectrums: usize, num_bins: usize) -> Result<Self> {
        let alloc_err = |e: std::collections::TryReserveError| {
            SpectrelError::AllocationFailed(e.to_string())
        };

        let mut samples = Vec::new();
        samples
            .try_reserve_exact(num_spectrums * num_bins)
            .map_err(alloc_err)?;
        samples.resize(num_spectrums * num_bins, Complex64::new(0.0, 0.0));

        let mut times = Vec::new();
        times.try_reserve_exact(num_spectrums).map_err(alloc_err)?;
        times.resize(num_spectrums, 0.0);

        let mut frequencies = Vec::new();
        frequencies.try_reserve_exact(num_bins).map_err(alloc_err)?;
        frequencies.resize(num_bins, 0.0);

        Ok(Self {
            num_spectrums,
            num_bins,
            samples,
            times,
            frequencies,
        })
    }

    pub fn num_spectrums(&self) -> usize {
        self.num_spectrums
    }

    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn times_mut(&mut self) -> &mut [f64] {
        &mut self.times
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn frequencies_mut(&mut self) -> &mut [f64] {
        &mut self.frequencies
    }

    /// Bin `m` of frame `k`.
    pub fn bin(&self, k: usize, m: usize) -> Complex64 {
        self.samples[k * self.num_bins + m]
    }

    /// The entire row for frame `k`, for bulk copy from the plan's scratch
    /// buffer.
    pub fn row_mut(&mut self, k: usize) -> &mut [Complex64] {
        let start = k * self.num_bins;
        &mut self.samples[start..start + self.num_bins]
    }

    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }
}
