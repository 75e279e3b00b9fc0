//! Chaldean name numbers.
//!
//! Letters map to 1..=8 (nine is never assigned). Non-letters are ignored.

use crate::error::NumerologyError;
use crate::reduce::reduce_keep_master;

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Chaldean value of a letter, `None` for anything else.
pub fn letter_value(c: char) -> Option<u32> {
    let v = match c.to_ascii_uppercase() {
        'A' | 'I' | 'J' | 'Q' | 'Y' => 1,
        'B' | 'K' | 'R' => 2,
        'C' | 'G' | 'L' | 'S' => 3,
        'D' | 'M' | 'T' => 4,
        'E' | 'H' | 'N' | 'X' => 5,
        'U' | 'V' | 'W' => 6,
        'O' | 'Z' => 7,
        'F' | 'P' => 8,
        _ => return None,
    };
    Some(v)
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_uppercase())
}

/// Name numbers, reduced with master numbers kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaldeanNumbers {
    /// All letters.
    pub name_number: u32,
    /// Vowels only.
    pub soul_urge: u32,
    /// Consonants only.
    pub personality: u32,
}

/// Chaldean numbers of `name`.
///
/// Fails when `name` contains no ASCII letter.
pub fn chaldean(name: &str) -> Result<ChaldeanNumbers, NumerologyError> {
    let mut all = 0;
    let mut vowels = 0;
    let mut consonants = 0;
    let mut letters = 0;

    for c in name.chars() {
        let Some(v) = letter_value(c) else { continue };
        letters += 1;
        all += v;
        if is_vowel(c) {
            vowels += v;
        } else {
            consonants += v;
        }
    }

    if letters == 0 {
        return Err(NumerologyError::EmptyName);
    }
    Ok(ChaldeanNumbers {
        name_number: reduce_keep_master(all),
        soul_urge: reduce_keep_master(vowels),
        personality: reduce_keep_master(consonants),
    })
}
