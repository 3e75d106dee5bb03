pub mod speaker;

pub use speaker::{normalize_key, Speaker};
