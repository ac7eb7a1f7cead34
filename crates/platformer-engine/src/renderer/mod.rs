pub mod instance;

pub use instance::{DrawBuffer, DrawInstance};
