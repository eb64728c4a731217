pub mod telemetry;

pub use telemetry::{build_env_filter, init_telemetry};
