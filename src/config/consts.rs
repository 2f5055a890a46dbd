/// Default read granularity for streaming processors (64 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;
/// Minimum allowed chunk size (1 byte)
pub const MIN_CHUNK_SIZE: usize = 1;
/// Maximum allowed chunk size (16 MiB) - bounds per-unit memory
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;
/// Log filter used when neither RUST_LOG nor the config file sets one
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Widest output `zero-pad` will produce (1 MiB of digits)
pub const MAX_PAD_WIDTH: u64 = 1024 * 1024;
