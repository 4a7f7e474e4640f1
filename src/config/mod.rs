pub mod loader;
pub mod model;

pub use loader::{ConfigError, load_endpoints};
pub use model::EndpointConfig;
