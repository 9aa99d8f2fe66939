//! Procedural audio synthesis for nq-towers assets
//!
//! This library provides the tools for generating the game's sound effects
//! procedurally: oscillators, fade envelopes, mixing, and WAV export.
//!
//! # Example
//! ```no_run
//! use proc_audio::*;
//!
//! // Generate a simple blip
//! let synth = Synth::new(SAMPLE_RATE);
//! let blip = synth.tone(Waveform::Sine, 880.0, 0.08, 0.35, Envelope::new(0.002, 0.03));
//!
//! // Mix a two-tone bed
//! let low = oscillator(Waveform::Sine, 220.0, 2.0, SAMPLE_RATE);
//! let high = oscillator(Waveform::Sine, 277.18, 2.0, SAMPLE_RATE);
//! let bed = mix(&[(&low, 0.12), (&high, 0.08)]);
//!
//! // Export to WAV
//! let pcm = to_pcm_i16(&blip);
//! write_wav(&pcm, SAMPLE_RATE, std::path::Path::new("shoot.wav"))?;
//! # Ok::<(), std::io::Error>(())
//! ```

mod envelope;
mod export;
mod oscillators;
mod synth;

/// Output sample rate for all generated clips (44.1kHz)
pub const SAMPLE_RATE: u32 = 44100;

// Oscillators
pub use oscillators::{oscillator, sweep_oscillator, Waveform};

// Envelope
pub use envelope::Envelope;

// Synth API
pub use synth::Synth;

// Utilities and export
pub use export::{mix, to_pcm_i16, write_wav, write_wav_f32};
