//! Random and derived value generation for test fixtures and placeholders.
//!
//! Unlike its sibling crates, nothing here is referentially transparent:
//! outputs depend on the thread-local CSPRNG and, for short IDs, the
//! current clock. Out-of-range lengths are clamped rather than rejected
//! everywhere except [`generate_hash`], the single fallible operation.

mod error;
mod hash;
mod id;
mod lorem;
mod number;
mod password;

pub use error::{GenerateError, Result};
pub use hash::{HashAlgorithm, generate_hash};
pub use id::{generate_short_id, generate_uuid};
pub use lorem::{LoremFormat, generate_lorem_ipsum};
pub use number::{generate_number, generate_number_between};
pub use password::generate_password;
