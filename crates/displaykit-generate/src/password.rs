//! Random password generation.

use rand::Rng;
use rand::seq::SliceRandom;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*";

/// Minimum password length; shorter requests are clamped up.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Generates a random password containing at least one uppercase letter,
/// one lowercase letter, one digit, and one symbol.
///
/// One character is drawn from each class, the remainder from the union
/// of all classes, and the result is shuffled so the guaranteed
/// characters do not sit at fixed positions. Lengths under 8 are clamped
/// up to 8. The random source is the thread-local CSPRNG.
pub fn generate_password(length: usize) -> String {
    let length = length.max(MIN_PASSWORD_LENGTH);
    let all: String = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat();

    let mut rng = rand::thread_rng();
    let mut chars: Vec<char> = vec![
        pick(UPPERCASE, &mut rng),
        pick(LOWERCASE, &mut rng),
        pick(DIGITS, &mut rng),
        pick(SYMBOLS, &mut rng),
    ];
    while chars.len() < length {
        chars.push(pick(&all, &mut rng));
    }

    chars.shuffle(&mut rng);
    chars.into_iter().collect()
}

/// Picks one character uniformly from an ASCII character set.
fn pick(set: &str, rng: &mut impl Rng) -> char {
    let index = rng.gen_range(0..set.len());
    char::from(set.as_bytes()[index])
}
