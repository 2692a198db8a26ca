pub mod mock;
pub mod sha256;

pub use sha256::Sha256Primitive;
