//! Signal/window/plan primitives and the STFT engine that ties them
//! together into a [`spectrogram::Spectrogram`].

pub mod plan;
pub mod signal;
pub mod spectrogram;
pub mod stft;
pub mod window;
