//! Pipeline components: reader-to-writer wiring, threaded relay, error reporting.

pub mod context;
pub mod error_handler;
pub mod orchestrator;
pub mod relay;

pub use context::{RELAY_CHANNEL_CAP, RelayChannels, RelayHandles, create_relay_channels};
pub use error_handler::report_failure;
pub use orchestrator::{run, try_run};
pub use relay::{join_producer, run_producer_loop, spawn_producer_thread};
