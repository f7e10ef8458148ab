// sintunes -- turning tune strings into synthesized audio
// Copyright (C) 2021  John Lynch
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Turning whole tune strings into sample buffers.

use log::trace;
use snafu::{OptionExt, Snafu};

use crate::melody;
use crate::note::NoteSymbol;
use crate::pitch::PitchTable;
use crate::synth::Waveform;

#[derive(Debug, Snafu)]
pub enum RenderError {
    /// The parser grammar admits letter/accidental combinations the scale
    /// does not tune, so lookups are checked.
    #[snafu(display("note {} is not part of the scale", note))]
    UnknownNote { note: NoteSymbol },
}

/// Render a tune string into one contiguous sample buffer.
///
/// The per-note buffers are abutted directly in input order, with no gaps or
/// crossfades, so the output holds exactly
/// `(number of notes) * round(sample_rate * duration)` samples. A note the
/// pitch table does not know aborts the whole render; no partial buffer is
/// produced.
pub fn render(
    tune: &str,
    duration: f64,
    waveform: Waveform,
    sample_rate: u32,
    pitch: &PitchTable,
) -> Result<Vec<i16>, RenderError> {
    let notes = melody::parse_tune(tune);
    let samples_per_note = (sample_rate as f64 * duration).round().max(0.0) as usize;
    let mut samples = Vec::with_capacity(notes.len() * samples_per_note);
    for note in notes {
        let frequency = pitch.lookup(note).context(UnknownNote { note })?;
        trace!("note {} at {:.3} Hz", note, frequency);
        samples.extend(waveform.samples(frequency, duration, sample_rate));
    }
    Ok(samples)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn output_length_counts_tokens() {
        let table = PitchTable::default();
        let samples = render("b-c+d", 0.25, Waveform::Square, 44100, &table).unwrap();
        assert_eq!(samples.len(), 3 * 11025);
    }

    #[test]
    fn notes_are_rendered_back_to_back() {
        let table = PitchTable::default();
        let samples = render("ab", 0.25, Waveform::Sine, 44100, &table).unwrap();
        assert_eq!(samples.len(), 22050);

        let a = Waveform::Sine.samples(220.0, 0.25, 44100);
        let b_frequency = table
            .lookup(NoteSymbol::named_str("b").unwrap())
            .unwrap();
        let b = Waveform::Sine.samples(b_frequency, 0.25, 44100);
        assert_eq!(&samples[..11025], &a[..]);
        assert_eq!(&samples[11025..], &b[..]);
    }

    #[test]
    fn unknown_note_aborts_the_render() {
        let table = PitchTable::default();
        let err = render("ad+b", 0.25, Waveform::Sine, 44100, &table).unwrap_err();
        let RenderError::UnknownNote { note } = err;
        assert_eq!(note.to_string(), "d+");
    }

    #[test]
    fn empty_tune_renders_nothing() {
        let table = PitchTable::default();
        let samples = render("", 0.25, Waveform::Sawtooth, 44100, &table).unwrap();
        assert!(samples.is_empty());
    }
}
