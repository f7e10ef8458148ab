// sintunes -- turning tune strings into synthesized audio
// Copyright (C) 2021  John Lynch
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Assigning frequencies to note symbols at a standard tuning of
//! 12 equal-tempered half-tones per octave.

use std::collections::HashMap;

use crate::note::{NoteName, NoteSymbol};

/// Frequency of the lowercase `a` the scale is anchored on.
pub const BASE_FREQUENCY: f64 = 220.0;

/// The twelve notes of one octave, in ascending order starting at the base
/// tone. Covers all 7 naturals plus the 5 altered slots of the notation.
pub const CHROMATIC_SCALE: [NoteSymbol; 12] = [
    NoteSymbol::natural(NoteName::A),
    NoteSymbol::flat(NoteName::B),
    NoteSymbol::natural(NoteName::B),
    NoteSymbol::natural(NoteName::C),
    NoteSymbol::sharp(NoteName::C),
    NoteSymbol::natural(NoteName::D),
    NoteSymbol::flat(NoteName::E),
    NoteSymbol::natural(NoteName::E),
    NoteSymbol::natural(NoteName::F),
    NoteSymbol::sharp(NoteName::F),
    NoteSymbol::natural(NoteName::G),
    NoteSymbol::flat(NoteName::A),
];

/// An immutable map from note symbols to their frequencies, covering both
/// octaves of the notation. Built once at startup and read-only afterwards.
///
/// # Examples
///
/// ```
/// use sintunes::note::NoteSymbol;
/// use sintunes::pitch::PitchTable;
///
/// let table = PitchTable::default();
/// assert_eq!(table.lookup(NoteSymbol::named_str("a").unwrap()), Some(220.0));
/// assert_eq!(table.lookup(NoteSymbol::named_str("A").unwrap()), Some(440.0));
/// ```
pub struct PitchTable {
    frequencies: HashMap<NoteSymbol, f64>,
}

impl PitchTable {
    /// Compute the frequency of every scale note as
    /// `base_frequency * 2^(index / 12)`. The uppercase variant of each note
    /// is stored as exactly twice the lowercase frequency.
    pub fn build(base_frequency: f64, scale: &[NoteSymbol; 12]) -> PitchTable {
        let mut frequencies = HashMap::with_capacity(2 * scale.len());
        for (index, &note) in scale.iter().enumerate() {
            let frequency = base_frequency * 2.0f64.powf(index as f64 / 12.0);
            frequencies.insert(note, frequency);
            frequencies.insert(note.octave_up(), frequency * 2.0);
        }
        PitchTable { frequencies }
    }

    /// The frequency of a note, or `None` for letter/accidental combinations
    /// that are not part of the scale (e.g. `d+`).
    pub fn lookup(&self, note: NoteSymbol) -> Option<f64> {
        self.frequencies.get(&note).copied()
    }
}

impl Default for PitchTable {
    fn default() -> Self {
        PitchTable::build(BASE_FREQUENCY, &CHROMATIC_SCALE)
    }
}
