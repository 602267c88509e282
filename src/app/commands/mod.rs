pub mod press;
pub mod setup;
pub mod status;
