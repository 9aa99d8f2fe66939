//! Audio export and utility functions
//!
//! Provides signal mixing, PCM conversion and WAV export.

use std::path::Path;

/// Mix multiple audio signals together
///
/// Each signal is multiplied by its volume before mixing. The result is NOT
/// normalized; out-of-range sums saturate later, during PCM conversion.
///
/// # Arguments
/// * `signals` - Slice of (samples, volume) tuples
///
/// # Returns
/// Mixed audio samples
///
/// # Example
/// ```
/// use proc_audio::*;
///
/// let low = oscillator(Waveform::Sine, 220.0, 2.0, SAMPLE_RATE);
/// let high = oscillator(Waveform::Sine, 277.18, 2.0, SAMPLE_RATE);
///
/// // Two-tone drone bed
/// let bed = mix(&[(&low, 0.12), (&high, 0.08)]);
/// ```
pub fn mix(signals: &[(&[f32], f32)]) -> Vec<f32> {
    if signals.is_empty() {
        return Vec::new();
    }

    // Size the output to the longest signal
    let max_len = signals.iter().map(|(s, _)| s.len()).max().unwrap_or(0);

    let mut result = vec![0.0f32; max_len];

    for (samples, volume) in signals {
        for (i, &sample) in samples.iter().enumerate() {
            result[i] += sample * volume;
        }
    }

    result
}

/// Convert f32 samples (-1.0 to 1.0) to PCM i16
///
/// Each sample is scaled by 32767, truncated toward zero and clamped to the
/// full i16 range. Clamping happens after scaling, so overdriven composite
/// sums saturate at -32768/32767 rather than being pre-clipped.
///
/// # Arguments
/// * `samples` - Audio samples, nominally in -1.0 to 1.0 range
///
/// # Returns
/// Vector of i16 PCM samples
pub fn to_pcm_i16(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s * 32767.0).clamp(-32768.0, 32767.0) as i16)
        .collect()
}

/// Write PCM i16 samples to a mono 16-bit WAV file
///
/// Missing parent directories are created first. The writer is finalized
/// before returning, so the header's data-chunk length always matches the
/// sample count.
///
/// # Arguments
/// * `samples` - PCM i16 samples
/// * `sample_rate` - Sample rate in Hz
/// * `path` - Output file path
pub fn write_wav(samples: &[i16], sample_rate: u32, path: &Path) -> std::io::Result<()> {
    use hound::{SampleFormat, WavSpec, WavWriter};

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    }

    writer
        .finalize()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    Ok(())
}

/// Write f32 samples directly to WAV (convenience function)
///
/// Converts to i16 PCM and writes to file.
pub fn write_wav_f32(samples: &[f32], sample_rate: u32, path: &Path) -> std::io::Result<()> {
    let pcm = to_pcm_i16(samples);
    write_wav(&pcm, sample_rate, path)
}
