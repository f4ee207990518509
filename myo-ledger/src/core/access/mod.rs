pub mod registry;

pub use registry::{AccessRegistry, Role};
