#![doc = include_str!("../README.md")]

pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::logger::Logger;
pub use crate::recorder::{LoggedMessage, Recorder};
pub use crate::router::{
    operation_name, Argument, AssembledCall, DefaultRouter, Invocation, LogMethodRouter, Outcome,
    Overload, Shape,
};
pub use crate::target::{Handler, LogTarget, Overloads};
pub use crate::types::*;

pub mod config;
pub mod error;
pub mod logger;
pub mod recorder;
pub mod router;
pub mod target;
pub mod types;
