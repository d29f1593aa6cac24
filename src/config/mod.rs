pub mod environment;
pub mod settings;

pub use environment::{MapEnv, ReadEnv, SystemEnv};
pub use settings::{OutputFormat, Settings};
