//! Input helper functions for the CLI.
//!
//! Password prompting, salt resolution, and reading plaintext or envelopes
//! from flags, files, or stdin.

mod input;

pub use input::{prompt_password, read_envelope, read_plaintext, require_salt};
