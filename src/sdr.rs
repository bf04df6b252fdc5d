//! The SDR collaborator contract.
//!
//! The core only depends on the five operations named here; a real vendor
//! binding (e.g. a SoapySDR wrapper) would implement [`Receiver`] the way
//! [`tone::ToneReceiver`] does for tests and self-checks.

pub mod tone;

use crate::dsp::signal::Signal;
use crate::error::Result;

/// Tunable receiver parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceiverParams {
    /// Center frequency, in Hz.
    pub frequency: f64,
    /// Sample rate, in Hz.
    pub sample_rate: f64,
    /// Bandwidth, in Hz.
    pub bandwidth: f64,
    /// Gain, in dB.
    pub gain: f64,
}

/// An SDR device adapter. Implementations own whatever vendor handle backs
/// the stream; `Drop` releases it.
pub trait Receiver: Drop {
    /// Open a receiver for `driver` configured with `params`.
    fn open(driver: &str, params: ReceiverParams) -> Result<Self>
    where
        Self: Sized;

    /// Activate the sample stream, preparing it for reads.
    fn activate(&mut self) -> Result<()>;

    /// Deactivate the sample stream.
    fn deactivate(&mut self) -> Result<()>;

    /// Fill `buffer` with exactly `buffer.num_samples()` samples, blocking
    /// until they are delivered or the inactivity timeout elapses.
    fn read_into(&mut self, buffer: &mut Signal) -> Result<()>;
}
