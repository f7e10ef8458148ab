//! Parsing the compact string notation for tunes.

use crate::note::{Accidental, NoteName, NoteSymbol, Octave};

/// Tokenize a tune string into the notes it spells out.
///
/// A letter a-g (either case) starts a note, and a `-` or `+` directly after
/// it binds to that note as its accidental. Every other character is skipped,
/// including accidentals with no letter in front of them, so tunes can carry
/// free-form separators or annotations:
///
/// ```
/// use sintunes::melody::parse_tune;
///
/// let notes: Vec<String> = parse_tune("acef+ gf+ecab-")
///     .iter()
///     .map(|note| note.to_string())
///     .collect();
/// assert_eq!(notes.len(), 10);
/// assert_eq!(notes[3], "f+");
/// ```
pub fn parse_tune(input: &str) -> Vec<NoteSymbol> {
    let mut notes = Vec::new();
    let mut stream = input.chars().peekable();
    while let Some(ch) = stream.next() {
        let name = match NoteName::from_char(ch) {
            Some(name) => name,
            None => continue,
        };
        // An accidental only counts if it immediately follows the letter.
        let accidental = match stream.peek().copied().and_then(Accidental::from_char) {
            Some(accidental) => {
                stream.next();
                accidental
            }
            None => Accidental::Natural,
        };
        notes.push(NoteSymbol {
            name,
            accidental,
            octave: Octave::from_letter(ch),
        });
    }
    notes
}

#[cfg(test)]
mod test {
    use super::*;

    fn tokens(input: &str) -> Vec<String> {
        parse_tune(input).iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn naturals() {
        assert_eq!(tokens("abc"), ["a", "b", "c"]);
    }

    #[test]
    fn accidentals_bind_to_the_preceding_letter() {
        assert_eq!(tokens("b-c+d"), ["b-", "c+", "d"]);
    }

    #[test]
    fn second_accidental_is_dropped() {
        assert_eq!(tokens("c++"), ["c+"]);
    }

    #[test]
    fn stray_accidental_is_dropped() {
        assert_eq!(tokens("+abc"), ["a", "b", "c"]);
        assert_eq!(tokens("a--b"), ["a-", "b"]);
    }

    #[test]
    fn empty_input() {
        assert!(tokens("").is_empty());
    }

    #[test]
    fn junk_is_ignored() {
        assert!(tokens("xyz123").is_empty());
        assert_eq!(tokens("a c|e f+!"), ["a", "c", "e", "f+"]);
    }

    #[test]
    fn letter_case_picks_the_octave() {
        assert_eq!(tokens("aA bB-"), ["a", "A", "b", "B-"]);
    }
}
