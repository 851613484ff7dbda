//! Initial-password generation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::error::ConfigError;

pub const PASSWORD_LENGTH: usize = 32;
pub const PASSWORD_DIGITS: usize = 10;

const DIGITS: &[u8] = b"0123456789";
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a 32-character alphanumeric password with exactly 10 digits.
///
/// Uses a ChaCha-based `StdRng` seeded from the operating system.
///
/// # Errors
///
/// Returns [`ConfigError::PasswordGeneration`] if the OS entropy source fails.
pub fn generate_password() -> Result<String, ConfigError> {
    let mut rng =
        StdRng::try_from_os_rng().map_err(|e| ConfigError::PasswordGeneration(e.to_string()))?;
    Ok(generate_password_with(&mut rng))
}

/// Generate a password from the given RNG. Characters may repeat.
pub fn generate_password_with(rng: &mut impl Rng) -> String {
    let mut chars: Vec<u8> = Vec::with_capacity(PASSWORD_LENGTH);
    chars.extend((0..PASSWORD_DIGITS).map(|_| DIGITS[rng.random_range(0..DIGITS.len())]));
    chars.extend(
        (PASSWORD_DIGITS..PASSWORD_LENGTH).map(|_| LETTERS[rng.random_range(0..LETTERS.len())]),
    );
    chars.shuffle(rng);
    chars.into_iter().map(char::from).collect()
}
