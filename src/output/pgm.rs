//! Normalises spectrogram magnitudes to 8-bit gray and writes binary P5
//! (raw) portable gray-map documents.
//!
//! Dimensions: `width = num_spectrums` (time axis), `height = num_bins`
//! (frequency axis). Byte `j*width + i` holds the magnitude of bin `j` in
//! frame `i`; this orientation must never be transposed.

use std::io::Write;

use crate::dsp::spectrogram::Spectrogram;
use crate::error::{Result, SpectrelError};

/// Normalise and serialise one spectrogram as a binary P5 PGM document,
/// writing it to `writer`. Multiple calls against the same open writer
/// append further documents, producing a concatenated-documents stream.
pub fn write_pgm<W: Write>(spectrogram: &Spectrogram, writer: &mut W) -> Result<()> {
    let width = spectrogram.num_spectrums();
    let height = spectrogram.num_bins();

    let mut magnitudes = Vec::new();
    magnitudes
        .try_reserve_exact(width * height)
        .map_err(|e| SpectrelError::AllocationFailed(e.to_string()))?;

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for k in 0..width {
        for m in 0..height {
            let mag = spectrogram.bin(k, m).norm();
            magnitudes.push(mag);
            min = min.min(mag);
            max = max.max(mag);
        }
    }

    let mut raster = Vec::new();
    raster
        .try_reserve_exact(width * height)
        .map_err(|e| SpectrelError::AllocationFailed(e.to_string()))?;
    raster.resize(width * height, 0u8);

    let range = max - min;
    for j in 0..height {
        for i in 0..width {
            // magnitudes is indexed [k * height + m] = [frame i][bin j]
            let mag = magnitudes[i * height + j];
            let byte = if range == 0.0 {
                0u8
            } else {
                (((mag - min) / range) * 255.0).floor() as u8
            };
            raster[j * width + i] = byte;
        }
    }

    writer
        .write_all(format!("P5\n{width} {height}\n255\n").as_bytes())
        .map_err(SpectrelError::Io)?;
    writer.write_all(&raster).map_err(SpectrelError::Io)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfft::num_complex::Complex64;

    fn spectrogram_with_magnitudes(width: usize, height: usize, mags: &[f64]) -> Spectrogram {
        let mut spectrogram = Spectrogram::empty(width, height).unwrap();
        for k in 0..width {
            for m in 0..height {
                spectrogram.row_mut(k)[m] = Complex64::new(mags[k * height + m], 0.0);
            }
        }
        spectrogram
    }

    #[test]
    fn pgm_header_and_body_for_a_2x3_grid() {
        // 2x3 grid (width=2, height=3) with magnitudes {0.0, 0.5, 1.0}
        let mags = [0.0, 0.5, 1.0, 0.5, 1.0, 0.0];
        let spectrogram = spectrogram_with_magnitudes(2, 3, &mags);

        let mut out = Vec::new();
        write_pgm(&spectrogram, &mut out).unwrap();

        let header = b"P5\n2 3\n255\n";
        assert!(out.starts_with(header));
        let body = &out[header.len()..];
        assert_eq!(body.len(), 6);
        for byte in body {
            assert!(*byte == 0 || *byte == 127 || *byte == 255);
        }
    }

    #[test]
    fn raster_byte_count_matches_width_times_height() {
        let spectrogram = Spectrogram::empty(4, 5).unwrap();
        let mut out = Vec::new();
        write_pgm(&spectrogram, &mut out).unwrap();
        let expected_header = b"P5\n4 5\n255\n";
        assert!(out.starts_with(expected_header));
        assert_eq!(out.len() - expected_header.len(), 4 * 5);
    }

    #[test]
    fn uniform_magnitudes_are_all_zero() {
        let mags = [2.0; 4];
        let spectrogram = spectrogram_with_magnitudes(2, 2, &mags);
        let mut out = Vec::new();
        write_pgm(&spectrogram, &mut out).unwrap();
        let header = b"P5\n2 2\n255\n";
        let body = &out[header.len()..];
        assert!(body.iter().all(|&b| b == 0));
    }

    #[test]
    fn distinct_magnitudes_span_the_full_range() {
        let mags = [0.0, 1.0];
        let spectrogram = spectrogram_with_magnitudes(1, 2, &mags);
        let mut out = Vec::new();
        write_pgm(&spectrogram, &mut out).unwrap();
        let header = b"P5\n1 2\n255\n";
        let body = &out[header.len()..];
        assert!(body.contains(&0u8));
        assert!(body.contains(&255u8));
    }

    #[test]
    fn concatenated_documents_append() {
        let spectrogram = spectrogram_with_magnitudes(1, 1, &[1.0]);
        let mut out = Vec::new();
        write_pgm(&spectrogram, &mut out).unwrap();
        write_pgm(&spectrogram, &mut out).unwrap();
        let doc = b"P5\n1 1\n255\n\x00";
        assert_eq!(out.len(), doc.len() * 2);
        assert_eq!(&out[..doc.len()], doc);
        assert_eq!(&out[doc.len()..], doc);
    }
}
