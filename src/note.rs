// sintunes -- turning tune strings into synthesized audio
// Copyright (C) 2021  John Lynch
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Definitions of the note symbols a tune is made of.

use std::fmt;

/// The name of a note in standard notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NoteName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

/// Any offset applied to a note in standard notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Accidental {
    /// The note is a half-tone lower than indicated by its name.
    Flat,
    /// The note is left unchanged.
    Natural,
    /// The note is a half-tone higher than indicated by its name.
    Sharp,
}

/// Which of the two octaves of the notation a note lives in.
/// Lowercase letters denote the reference octave, uppercase letters the
/// octave above it (frequency doubled).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Octave {
    Reference,
    Upper,
}

/// One note of a tune: a letter a-g, an optional accidental, and the octave
/// encoded in the letter case.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NoteSymbol {
    pub name: NoteName,
    pub accidental: Accidental,
    pub octave: Octave,
}

impl NoteName {
    /// Parse a note letter case-insensitively. The case carries the octave,
    /// which is decoded separately (see [`Octave::from_letter`]).
    pub fn from_char(ch: char) -> Option<NoteName> {
        match ch.to_ascii_lowercase() {
            'a' => Some(NoteName::A),
            'b' => Some(NoteName::B),
            'c' => Some(NoteName::C),
            'd' => Some(NoteName::D),
            'e' => Some(NoteName::E),
            'f' => Some(NoteName::F),
            'g' => Some(NoteName::G),
            _ => None,
        }
    }

    /// The lowercase letter of this name.
    pub fn letter(self) -> char {
        match self {
            NoteName::A => 'a',
            NoteName::B => 'b',
            NoteName::C => 'c',
            NoteName::D => 'd',
            NoteName::E => 'e',
            NoteName::F => 'f',
            NoteName::G => 'g',
        }
    }
}

impl Accidental {
    /// Decode the suffix characters of the notation, `-` for flat and `+`
    /// for sharp.
    pub fn from_char(ch: char) -> Option<Accidental> {
        match ch {
            '-' => Some(Accidental::Flat),
            '+' => Some(Accidental::Sharp),
            _ => None,
        }
    }
}

impl Octave {
    pub fn from_letter(ch: char) -> Octave {
        if ch.is_ascii_uppercase() {
            Octave::Upper
        } else {
            Octave::Reference
        }
    }
}

impl NoteSymbol {
    pub const fn natural(name: NoteName) -> NoteSymbol {
        NoteSymbol {
            name,
            accidental: Accidental::Natural,
            octave: Octave::Reference,
        }
    }

    pub const fn flat(name: NoteName) -> NoteSymbol {
        NoteSymbol {
            name,
            accidental: Accidental::Flat,
            octave: Octave::Reference,
        }
    }

    pub const fn sharp(name: NoteName) -> NoteSymbol {
        NoteSymbol {
            name,
            accidental: Accidental::Sharp,
            octave: Octave::Reference,
        }
    }

    /// The same note one octave higher.
    pub fn octave_up(self) -> NoteSymbol {
        NoteSymbol {
            octave: Octave::Upper,
            ..self
        }
    }

    /// Parse a string that consists of exactly one note symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use sintunes::note::*;
    ///
    /// assert_eq!(NoteSymbol::named_str("c+"), Some(NoteSymbol::sharp(NoteName::C)));
    /// assert_eq!(NoteSymbol::named_str("B-"), Some(NoteSymbol::flat(NoteName::B).octave_up()));
    /// assert_eq!(NoteSymbol::named_str("h"), None);
    /// assert_eq!(NoteSymbol::named_str("c++"), None);
    /// ```
    pub fn named_str(s: &str) -> Option<NoteSymbol> {
        let mut chars = s.chars();
        let letter = chars.next()?;
        let name = NoteName::from_char(letter)?;
        let accidental = match chars.next() {
            None => Accidental::Natural,
            Some(ch) => Accidental::from_char(ch)?,
        };
        if chars.next().is_some() {
            return None;
        }
        Some(NoteSymbol {
            name,
            accidental,
            octave: Octave::from_letter(letter),
        })
    }
}

impl fmt::Display for NoteSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.octave {
            Octave::Reference => self.name.letter(),
            Octave::Upper => self.name.letter().to_ascii_uppercase(),
        };
        match self.accidental {
            Accidental::Flat => write!(f, "{}-", letter),
            Accidental::Natural => write!(f, "{}", letter),
            Accidental::Sharp => write!(f, "{}+", letter),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_matches_notation() {
        assert_eq!(NoteSymbol::sharp(NoteName::F).to_string(), "f+");
        assert_eq!(NoteSymbol::flat(NoteName::E).octave_up().to_string(), "E-");
        assert_eq!(NoteSymbol::natural(NoteName::D).to_string(), "d");
    }

    #[test]
    fn named_str_round_trips() {
        for s in &["a", "b-", "c+", "G", "A-", "F+"] {
            assert_eq!(NoteSymbol::named_str(s).unwrap().to_string(), *s);
        }
    }
}
