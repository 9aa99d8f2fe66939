//! Audio oscillators and waveform generators
//!
//! Provides basic waveform generation for audio synthesis.

use std::f32::consts::PI;

/// Waveform types for audio synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Pure sine wave - smooth, fundamental tone
    Sine,
    /// Square wave - hollow, retro sound (odd harmonics)
    Square,
    /// Sawtooth wave - bright, buzzy sound (all harmonics)
    Saw,
    /// Triangle wave - softer than square (odd harmonics, quieter)
    Triangle,
}

fn shape(waveform: Waveform, phase: f32) -> f32 {
    match waveform {
        Waveform::Sine => phase.sin(),
        Waveform::Square => {
            if phase.sin() >= 0.0 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Saw => {
            // Normalized sawtooth: goes from -1 to 1 over one period
            let t = (phase / (2.0 * PI)).fract();
            2.0 * t - 1.0
        }
        Waveform::Triangle => {
            // Triangle wave from sawtooth
            let t = (phase / (2.0 * PI)).fract();
            4.0 * (t - 0.5).abs() - 1.0
        }
    }
}

/// Generate oscillator samples for a constant frequency
///
/// # Arguments
/// * `waveform` - The type of waveform to generate
/// * `frequency` - Frequency in Hz
/// * `duration` - Duration in seconds
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// Vector of samples in -1.0 to 1.0 range
pub fn oscillator(waveform: Waveform, frequency: f32, duration: f32, sample_rate: u32) -> Vec<f32> {
    let num_samples = (duration * sample_rate as f32) as usize;
    let mut samples = Vec::with_capacity(num_samples);

    let omega = 2.0 * PI * frequency / sample_rate as f32;

    for i in 0..num_samples {
        let phase = omega * i as f32;
        samples.push(shape(waveform, phase));
    }

    samples
}

/// Generate oscillator samples for a linear frequency glide
///
/// The frequency interpolates linearly from `start_freq` to `end_freq` over
/// the duration. The phase at each sample is the instantaneous frequency
/// times the elapsed time, not an accumulated phase integral; the generated
/// clips depend on this exact curve.
///
/// # Arguments
/// * `waveform` - The type of waveform to generate
/// * `start_freq` - Frequency at the start of the glide, in Hz
/// * `end_freq` - Frequency at the end of the glide, in Hz
/// * `duration` - Duration in seconds
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// Vector of samples in -1.0 to 1.0 range
pub fn sweep_oscillator(
    waveform: Waveform,
    start_freq: f32,
    end_freq: f32,
    duration: f32,
    sample_rate: u32,
) -> Vec<f32> {
    let num_samples = (duration * sample_rate as f32) as usize;
    let mut samples = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let t = i as f32 / sample_rate as f32;
        let freq = start_freq + (end_freq - start_freq) * (t / duration);
        let phase = 2.0 * PI * freq * t;
        samples.push(shape(waveform, phase));
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SAMPLE_RATE: u32 = 44100;

    #[test]
    fn test_sine_wave() {
        let samples = oscillator(Waveform::Sine, 440.0, 0.01, TEST_SAMPLE_RATE);
        assert!(!samples.is_empty());
        // All samples should be in -1 to 1 range
        assert!(samples.iter().all(|&s| s >= -1.0 && s <= 1.0));
    }

    #[test]
    fn test_sine_starts_at_zero() {
        for freq in [110.0, 440.0, 880.0, 277.18] {
            let samples = oscillator(Waveform::Sine, freq, 0.01, TEST_SAMPLE_RATE);
            assert_eq!(samples[0], 0.0);
        }
    }

    #[test]
    fn test_square_wave() {
        let samples = oscillator(Waveform::Square, 440.0, 0.01, TEST_SAMPLE_RATE);
        assert!(!samples.is_empty());
        // Square wave should only have values of -1 or 1
        assert!(samples.iter().all(|&s| s == -1.0 || s == 1.0));
    }

    #[test]
    fn test_saw_wave() {
        let samples = oscillator(Waveform::Saw, 440.0, 0.01, TEST_SAMPLE_RATE);
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|&s| s >= -1.0 && s <= 1.0));
    }

    #[test]
    fn test_triangle_wave() {
        let samples = oscillator(Waveform::Triangle, 440.0, 0.01, TEST_SAMPLE_RATE);
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|&s| s >= -1.0 && s <= 1.0));
    }

    #[test]
    fn test_sample_count() {
        let duration = 0.5;
        let samples = oscillator(Waveform::Sine, 440.0, duration, TEST_SAMPLE_RATE);
        let expected = (duration * TEST_SAMPLE_RATE as f32) as usize;
        assert_eq!(samples.len(), expected);
    }

    #[test]
    fn test_sweep_sample_count() {
        let duration = 0.25;
        let samples = sweep_oscillator(Waveform::Sine, 440.0, 180.0, duration, TEST_SAMPLE_RATE);
        let expected = (duration * TEST_SAMPLE_RATE as f32) as usize;
        assert_eq!(samples.len(), expected);
    }

    #[test]
    fn test_sweep_phase_is_instantaneous_frequency_times_time() {
        let duration = 0.25;
        let samples = sweep_oscillator(Waveform::Sine, 440.0, 180.0, duration, TEST_SAMPLE_RATE);

        // Spot-check a few indices against the closed-form phase
        for i in [0usize, 1, 100, 5000, 11024] {
            let t = i as f32 / TEST_SAMPLE_RATE as f32;
            let freq = 440.0 + (180.0 - 440.0) * (t / duration);
            let expected = (2.0 * std::f32::consts::PI * freq * t).sin();
            assert!(
                (samples[i] - expected).abs() < 1e-6,
                "sample {} diverged: {} vs {}",
                i,
                samples[i],
                expected
            );
        }
    }

    #[test]
    fn test_sweep_constant_when_start_equals_end() {
        let swept = sweep_oscillator(Waveform::Sine, 440.0, 440.0, 0.01, TEST_SAMPLE_RATE);
        let fixed = oscillator(Waveform::Sine, 440.0, 0.01, TEST_SAMPLE_RATE);
        assert_eq!(swept.len(), fixed.len());
        for (a, b) in swept.iter().zip(fixed.iter()) {
            assert!((a - b).abs() < 1e-4);
        }
    }
}
