//! Per-session push reference.
//!
//! The push reference is a short random token the client sends with every
//! REST call so the server can route pushed events (execution progress,
//! collaboration updates) back to the right connection.  It is generated
//! once when the configuration record is created and never changes.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Number of characters in a push reference.
pub const PUSH_REF_LENGTH: usize = 10;

/// Generates a new push reference: [`PUSH_REF_LENGTH`] random alphanumeric
/// characters, lowercased.
pub fn generate_push_ref() -> String {
    let mut rng = rand::rng();
    std::iter::repeat_with(|| rng.sample(Alphanumeric) as char)
        .take(PUSH_REF_LENGTH)
        .collect::<String>()
        .to_ascii_lowercase()
}
