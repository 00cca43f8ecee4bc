pub mod text;
pub mod version;

pub use text::{Text, TextError};
pub use version::TextVersion;
