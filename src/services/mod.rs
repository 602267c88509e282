mod config_store_fs;
mod github_client_http;
mod log_sink;
pub mod trigger;
pub mod validator;

pub use config_store_fs::FilesystemConfigStore;
pub use github_client_http::GithubHttpClient;
pub use log_sink::LogDispatchSink;
pub use trigger::{DispatchOutcome, trigger};
pub use validator::validate;
