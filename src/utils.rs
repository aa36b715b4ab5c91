use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// A ChaCha20 stream keyed from the operating system's random source. Fails instead of falling
/// back to anything weaker when the OS source can't be read.
pub fn crypto_rng() -> Result<ChaCha20Rng, rand::Error> {
    ChaCha20Rng::from_rng(OsRng)
}

/// Milliseconds since the unix epoch, clamped to zero for clocks set before it.
pub fn current_time_ms() -> u64 {
    use time::OffsetDateTime;
    u64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).unwrap_or(0)
}
