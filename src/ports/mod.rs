mod config_store;
mod dispatch_sink;
mod workflow_host;

pub use config_store::ConfigStore;
pub use dispatch_sink::DispatchSink;
pub use workflow_host::{DispatchResponse, TransportError, WorkflowHost};
