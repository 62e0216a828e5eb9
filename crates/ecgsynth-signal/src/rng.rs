//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the sampling backend flows through this module so a
//! given engine seed always produces the same waveform. Each artifact
//! source gets its own seed derived from the engine seed and the source's
//! position, so the streams are mutually independent and appending further
//! sources leaves earlier streams unchanged.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 generator from a 32-bit seed.
///
/// The seed is expanded to the 64 bits PCG32 wants by duplicating it in
/// both halves.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed for one artifact source.
///
/// Hashes the engine seed together with the source's index, so every
/// source draws from its own stream.
pub fn derive_source_seed(base_seed: u32, source_index: u32) -> u32 {
    let mut input = [0u8; 8];
    input[0..4].copy_from_slice(&base_seed.to_le_bytes());
    input[4..8].copy_from_slice(&source_index.to_le_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// Creates the generator for one artifact source.
pub fn create_source_rng(base_seed: u32, source_index: u32) -> Pcg32 {
    create_rng(derive_source_seed(base_seed, source_index))
}
