/*!
 * Fingerspelling alphabet.
 *
 * One handshape per letter A-Z. Anything else maps to a placeholder
 * instead of failing, so fingerspelling can always produce output.
 */

use serde::Serialize;

/// Handshape given to characters outside A-Z
pub const UNKNOWN_HANDSHAPE: &str = "unknown";

/// Handshape and description for one letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterShape {
    pub letter: char,
    pub handshape: String,
    pub description: String,
    /// False for placeholder entries
    pub known: bool,
}

const ALPHABET: [(&str, &str); 26] = [
    ("a-fist", "Fist with the thumb resting against the side of the index finger"),
    ("b-flat", "Flat hand, fingers together, thumb folded across the palm"),
    ("c-curve", "Fingers and thumb curved into a C shape"),
    ("d-index", "Index finger up, remaining fingertips touch the thumb"),
    ("e-claw", "Fingertips bent down to rest on the thumb"),
    ("f-ok", "Index finger and thumb touch, other fingers spread upward"),
    ("g-point", "Index finger and thumb point sideways, parallel"),
    ("h-two-side", "Index and middle fingers point sideways together"),
    ("i-pinky", "Pinky up, other fingers closed in a fist"),
    ("j-pinky-hook", "Pinky up, traces a J downward"),
    ("k-vee-thumb", "Index and middle fingers up in a V, thumb between them"),
    ("l-shape", "Thumb and index finger form an L"),
    ("m-three-over", "Thumb tucked under the first three fingers"),
    ("n-two-over", "Thumb tucked under the first two fingers"),
    ("o-round", "All fingertips touch the thumb in an O"),
    ("p-down", "K handshape pointing down"),
    ("q-down", "G handshape pointing down"),
    ("r-crossed", "Index and middle fingers crossed"),
    ("s-fist", "Fist with the thumb across the front of the fingers"),
    ("t-thumb-between", "Thumb tucked between index and middle fingers"),
    ("u-two-up", "Index and middle fingers up together"),
    ("v-vee", "Index and middle fingers up and apart"),
    ("w-three", "Index, middle and ring fingers up and apart"),
    ("x-hook", "Index finger bent into a hook"),
    ("y-horns", "Thumb and pinky extended"),
    ("z-trace", "Index finger traces a Z in the air"),
];

/// Look up the handshape for a character; never fails
pub fn letter_shape(letter: char) -> LetterShape {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        let (handshape, description) = ALPHABET[(upper as u8 - b'A') as usize];
        LetterShape {
            letter: upper,
            handshape: handshape.to_string(),
            description: description.to_string(),
            known: true,
        }
    } else {
        LetterShape {
            letter,
            handshape: UNKNOWN_HANDSHAPE.to_string(),
            description: format!("No fingerspelling handshape for '{}'; hold a relaxed hand", letter),
            known: false,
        }
    }
}
