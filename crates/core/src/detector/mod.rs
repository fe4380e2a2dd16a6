pub mod registry;
pub mod types;

pub use registry::{CommandDescriptor, CommandRegistry, RegistryError};
pub use types::{Detector, DetectorFactory};
