// sintunes -- turning tune strings into synthesized audio
// Copyright (C) 2021  John Lynch
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Writing rendered sample buffers to playable wav files.

use std::path::{Path, PathBuf};

use crate::synth::Waveform;

/// The file name a rendered tune is stored under, built from the waveform's
/// short name and the literal tune string, e.g. `tune_sin_ab.wav`.
pub fn tune_filename(waveform: Waveform, tune: &str) -> PathBuf {
    PathBuf::from(format!("tune_{}_{}.wav", waveform.name(), tune))
}

/// Write a buffer as a mono 16-bit PCM wav file at the given sample rate.
pub fn write_wav(path: &Path, sample_rate: u32, samples: &[i16]) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    // Flushes the header so the file is playable.
    writer.finalize()
}
