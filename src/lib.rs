/// smkm library crate — exposes internal modules for integration tests.
///
/// All modules are re-exported publicly so that `tests/` integration tests
/// (and embedding applications) can drive the core directly via
/// `use smkm::envelope::*` without going through the CLI.
pub mod envelope;
pub mod error;
pub mod keys;
pub mod password;
pub mod record;
pub mod token;
