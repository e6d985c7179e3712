// 🎲 Seeded randomness
// One global seed controls every random draw in a run.

use rand_chacha::ChaCha8Rng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

/// Make a random number generator from a global seed and a string id.
///
/// The id lets separate parts of the program derive their own stream from
/// the same global seed. Using the same id twice with the same seed gives
/// the same stream.
///
/// `"{id}{global_seed}"` is hashed with SHA-256 and the digest seeds a
/// ChaCha8 generator.
pub fn make_rng(global_seed: u64, id: &str) -> ChaCha8Rng {
    let message = format!("{id}{global_seed}");
    let digest = Sha256::digest(message.as_bytes());

    let mut seed = [0u8; 32];
    seed.copy_from_slice(&digest);
    ChaCha8Rng::from_seed(seed)
}

/// Fresh seed from the thread RNG, for runs without `--seed`
pub fn entropy_seed() -> u64 {
    rand::random()
}
