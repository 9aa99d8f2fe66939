//! High-level synthesizer API
//!
//! Wraps the raw oscillators into one-call clip generation: oscillate,
//! scale to peak amplitude, shape with an envelope.

use super::envelope::Envelope;
use super::oscillators::{oscillator, sweep_oscillator, Waveform};

/// High-level synthesizer for generating sound effects
///
/// # Example
/// ```
/// use proc_audio::*;
///
/// let synth = Synth::new(SAMPLE_RATE);
///
/// // Short blip
/// let blip = synth.tone(Waveform::Sine, 880.0, 0.08, 0.35, Envelope::new(0.002, 0.03));
///
/// // Descending zap
/// let zap = synth.sweep(Waveform::Sine, 440.0, 180.0, 0.25, 0.30, Envelope::new(0.005, 0.08));
/// ```
pub struct Synth {
    sample_rate: u32,
}

impl Synth {
    /// Create a new synthesizer with the given sample rate
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Generate a constant-frequency tone
    ///
    /// # Arguments
    /// * `waveform` - Type of oscillator
    /// * `frequency` - Frequency in Hz
    /// * `duration` - Duration in seconds
    /// * `amplitude` - Peak amplitude in 0.0 to 1.0 range
    /// * `envelope` - Fade envelope to apply
    pub fn tone(
        &self,
        waveform: Waveform,
        frequency: f32,
        duration: f32,
        amplitude: f32,
        envelope: Envelope,
    ) -> Vec<f32> {
        let mut samples = oscillator(waveform, frequency, duration, self.sample_rate);
        for sample in &mut samples {
            *sample *= amplitude;
        }
        envelope.apply(&mut samples, self.sample_rate);
        samples
    }

    /// Generate a linear frequency sweep
    ///
    /// Glides from one frequency to another over the duration. Good for
    /// laser shots, power-downs and death sounds.
    ///
    /// # Arguments
    /// * `waveform` - Type of oscillator
    /// * `start_freq` - Starting frequency in Hz
    /// * `end_freq` - Ending frequency in Hz
    /// * `duration` - Duration in seconds
    /// * `amplitude` - Peak amplitude in 0.0 to 1.0 range
    /// * `envelope` - Fade envelope to apply
    pub fn sweep(
        &self,
        waveform: Waveform,
        start_freq: f32,
        end_freq: f32,
        duration: f32,
        amplitude: f32,
        envelope: Envelope,
    ) -> Vec<f32> {
        let mut samples =
            sweep_oscillator(waveform, start_freq, end_freq, duration, self.sample_rate);
        for sample in &mut samples {
            *sample *= amplitude;
        }
        envelope.apply(&mut samples, self.sample_rate);
        samples
    }
}
