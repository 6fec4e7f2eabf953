use rand::SeedableRng;
use rand_xoshiro::Xoroshiro64StarStar;

/// The random generator used for reproducible games and tests.
pub type GameRng = Xoroshiro64StarStar;

/// A generator that always starts from the same state.
pub fn consistent_rng() -> GameRng {
    seeded_rng(0)
}

pub fn seeded_rng(seed: u64) -> GameRng {
    Xoroshiro64StarStar::seed_from_u64(seed)
}
