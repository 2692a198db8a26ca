pub mod traits;
pub mod types;

pub use traits::DigestPrimitive;
pub use types::{DigestValue, MatchResult, SaltedDigest};
