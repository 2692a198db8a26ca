pub mod salt;
pub mod sha256;
