//! Client configuration

mod loader;

pub use loader::{load, load_from_env};
