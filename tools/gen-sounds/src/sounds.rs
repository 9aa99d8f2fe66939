//! nq-towers sound generation
//!
//! Procedural audio synthesis for the game's three built-in clips: the
//! background drone bed, the shoot blip and the enemy-death descending tone.

use anyhow::Context;
use proc_audio::*;
use std::path::{Path, PathBuf};

/// Sound ID and description
pub type SoundDef = (&'static str, &'static str);

/// All nq-towers sounds
pub const SOUNDS: &[SoundDef] = &[
    ("bgm", "Soft two-tone drone (short loop-friendly bed)"),
    ("shoot", "Short blip"),
    ("enemy-die", "Descending tone"),
];

/// Generate all sounds to the output directory
///
/// Returns the absolute path of every file written, in registry order.
pub fn generate_all(output_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    tracing::info!("Generating {} sounds", SOUNDS.len());

    let synth = Synth::new(SAMPLE_RATE);
    let mut written = Vec::with_capacity(SOUNDS.len());

    for (id, description) in SOUNDS {
        let samples = generate_sound(&synth, id);
        let pcm = to_pcm_i16(&samples);
        let path = output_dir.join(format!("{}.wav", id));

        write_wav(&pcm, SAMPLE_RATE, &path)
            .with_context(|| format!("failed to write {}", path.display()))?;

        tracing::info!(
            "-> {}.wav ({} samples, {:.2}s) - {}",
            id,
            pcm.len(),
            pcm.len() as f32 / SAMPLE_RATE as f32,
            description
        );

        let abs = std::fs::canonicalize(&path)
            .with_context(|| format!("failed to resolve {}", path.display()))?;
        written.push(abs);
    }

    Ok(written)
}

/// Synthesize a specific sound by ID
fn generate_sound(synth: &Synth, id: &str) -> Vec<f32> {
    match id {
        "bgm" => {
            // Two sines a major third apart (220 Hz / 277.18 Hz), summed
            // without normalization; saturation is resolved at encode time.
            let low = oscillator(Waveform::Sine, 220.0, 2.0, SAMPLE_RATE);
            let high = oscillator(Waveform::Sine, 277.18, 2.0, SAMPLE_RATE);
            let mut bed = mix(&[(&low, 0.12), (&high, 0.08)]);
            Envelope::new(0.05, 0.10).apply(&mut bed, SAMPLE_RATE);
            bed
        }
        "shoot" => synth.tone(Waveform::Sine, 880.0, 0.08, 0.35, Envelope::new(0.002, 0.03)),
        "enemy-die" => synth.sweep(
            Waveform::Sine,
            440.0,
            180.0,
            0.25,
            0.30,
            Envelope::new(0.005, 0.08),
        ),
        _ => panic!("Unknown sound ID: {}", id),
    }
}
