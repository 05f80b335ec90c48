// The letters to trace, their caption words, and a single-stroke vector font.
// Each glyph is a list of centre-line polylines in font units: x to the right,
// y down, cap top at y = 0 and baseline at y = CAP_HEIGHT. A thick pen run along
// these lines gives the letter shape the child has to cover.

/// Font units between cap top and baseline.
pub const CAP_HEIGHT: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub letter: char,
    pub word: &'static str, // shown in the "Good job!" caption
}

impl Symbol {
    /// Visual: the line shown under the letter once it is completed.
    pub fn caption(&self) -> String {
        format!("Good job! {} starts with {}!", self.word, self.letter)
    }

    /// Centre-line strokes of this letter, in font units.
    pub fn strokes(&self) -> &'static [&'static [(i8, i8)]] {
        glyph(self.letter)
    }
}

macro_rules! sym {
    ($l:expr, $w:expr) => {
        Symbol { letter: $l, word: $w }
    };
}

/// Traced in this order, then back to the start.
pub const ALPHABET: [Symbol; 26] = [
    sym!('A', "Apple"),
    sym!('B', "Ball"),
    sym!('C', "Cat"),
    sym!('D', "Dog"),
    sym!('E', "Elephant"),
    sym!('F', "Fish"),
    sym!('G', "Giraffe"),
    sym!('H', "House"),
    sym!('I', "Ice"),
    sym!('J', "Jump"),
    sym!('K', "Kite"),
    sym!('L', "Lion"),
    sym!('M', "Monkey"),
    sym!('N', "Nest"),
    sym!('O', "Orange"),
    sym!('P', "Panda"),
    sym!('Q', "Queen"),
    sym!('R', "Rainbow"),
    sym!('S', "Sun"),
    sym!('T', "Tree"),
    sym!('U', "Umbrella"),
    sym!('V', "Violin"),
    sym!('W', "Water"),
    sym!('X', "Xylophone"),
    sym!('Y', "Yellow"),
    sym!('Z', "Zebra"),
];

/// Index of `letter` in [`ALPHABET`], case-insensitive.
pub fn index_of(letter: char) -> Option<usize> {
    let up = letter.to_ascii_uppercase();
    ALPHABET.iter().position(|s| s.letter == up)
}

type Stroke = &'static [(i8, i8)];

// Round shapes shared by several letters.
const BOWL_O: Stroke = &[
    (6, 0), (3, 1), (1, 4), (0, 8), (0, 12), (1, 16), (3, 19), (6, 20),
    (10, 20), (13, 19), (15, 16), (16, 12), (16, 8), (15, 4), (13, 1), (10, 0), (6, 0),
];
const ARC_C: Stroke = &[
    (15, 4), (13, 1), (10, 0), (6, 0), (3, 1), (1, 4), (0, 8), (0, 12),
    (1, 16), (3, 19), (6, 20), (10, 20), (13, 19), (15, 16),
];
const BOWL_P: Stroke = &[
    (0, 20), (0, 0), (10, 0), (13, 1), (14, 3), (14, 7), (13, 9), (10, 10), (0, 10),
];

fn glyph(letter: char) -> &'static [Stroke] {
    match letter {
        'A' => &[&[(0, 20), (8, 0), (16, 20)], &[(3, 13), (13, 13)]],
        'B' => &[
            &[(0, 0), (0, 20)],
            &[(0, 0), (10, 0), (13, 1), (14, 3), (14, 6), (13, 8), (10, 10), (0, 10)],
            &[(10, 10), (13, 11), (15, 13), (15, 17), (13, 19), (10, 20), (0, 20)],
        ],
        'C' => &[ARC_C],
        'D' => &[
            &[(0, 0), (0, 20)],
            &[(0, 0), (7, 0), (11, 1), (14, 4), (15, 8), (15, 12), (14, 16), (11, 19), (7, 20), (0, 20)],
        ],
        'E' => &[&[(14, 0), (0, 0), (0, 20), (14, 20)], &[(0, 10), (10, 10)]],
        'F' => &[&[(14, 0), (0, 0), (0, 20)], &[(0, 10), (10, 10)]],
        'G' => &[ARC_C, &[(15, 16), (15, 11), (9, 11)]],
        'H' => &[&[(0, 0), (0, 20)], &[(14, 0), (14, 20)], &[(0, 10), (14, 10)]],
        'I' => &[&[(4, 0), (12, 0)], &[(8, 0), (8, 20)], &[(4, 20), (12, 20)]],
        'J' => &[&[(12, 0), (12, 15), (11, 18), (9, 20), (6, 20), (3, 19), (1, 17), (0, 14)]],
        'K' => &[&[(0, 0), (0, 20)], &[(14, 0), (0, 13)], &[(5, 8), (14, 20)]],
        'L' => &[&[(0, 0), (0, 20), (12, 20)]],
        'M' => &[&[(0, 20), (0, 0), (8, 20), (16, 0), (16, 20)]],
        'N' => &[&[(0, 20), (0, 0), (14, 20), (14, 0)]],
        'O' => &[BOWL_O],
        'P' => &[BOWL_P],
        'Q' => &[BOWL_O, &[(9, 15), (16, 22)]],
        'R' => &[BOWL_P, &[(8, 10), (14, 20)]],
        'S' => &[&[
            (14, 3), (12, 1), (9, 0), (5, 0), (2, 1), (0, 3), (0, 6), (1, 8), (3, 9),
            (11, 11), (13, 12), (14, 14), (14, 17), (12, 19), (9, 20), (5, 20), (2, 19), (0, 17),
        ]],
        'T' => &[&[(0, 0), (14, 0)], &[(7, 0), (7, 20)]],
        'U' => &[&[(0, 0), (0, 14), (1, 17), (3, 19), (6, 20), (8, 20), (11, 19), (13, 17), (14, 14), (14, 0)]],
        'V' => &[&[(0, 0), (8, 20), (16, 0)]],
        'W' => &[&[(0, 0), (4, 20), (9, 6), (14, 20), (18, 0)]],
        'X' => &[&[(0, 0), (14, 20)], &[(14, 0), (0, 20)]],
        'Y' => &[&[(0, 0), (8, 10), (16, 0)], &[(8, 10), (8, 20)]],
        'Z' => &[&[(0, 0), (14, 0), (0, 20), (14, 20)]],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_letter_has_strokes() {
        for s in ALPHABET.iter() {
            assert!(!s.strokes().is_empty(), "no glyph for {}", s.letter);
            for stroke in s.strokes() {
                assert!(stroke.len() >= 2, "degenerate stroke in {}", s.letter);
            }
        }
    }

    #[test]
    fn alphabet_is_a_to_z_in_order() {
        let letters: String = ALPHABET.iter().map(|s| s.letter).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        for s in ALPHABET.iter() {
            assert!(s.word.starts_with(s.letter));
        }
    }

    #[test]
    fn caption_names_word_and_letter() {
        assert_eq!(ALPHABET[0].caption(), "Good job! Apple starts with A!");
        assert_eq!(ALPHABET[25].caption(), "Good job! Zebra starts with Z!");
    }

    #[test]
    fn index_lookup_ignores_case() {
        assert_eq!(index_of('a'), Some(0));
        assert_eq!(index_of('Z'), Some(25));
        assert_eq!(index_of('?'), None);
    }
}
