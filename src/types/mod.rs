use derive_more::Display;
use num_enum::{FromPrimitive, IntoPrimitive};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::{error::Error as StdError, fmt, sync::Arc};

pub use event::EventId;
pub use state::{Field, FormattedState, LogState, NULL_ORIGINAL_FORMAT, ORIGINAL_FORMAT_KEY};

pub mod event;
pub mod state;

#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Display,
    IntoPrimitive,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(i32)]
pub enum Severity {
    #[display("Trace")]
    Trace = 0,
    #[display("Debug")]
    Debug = 1,
    #[display("Information")]
    Information = 2,
    #[display("Warning")]
    Warning = 3,
    #[display("Error")]
    Error = 4,
    #[display("Critical")]
    Critical = 5,
    /// Sentinel meaning "do not log"
    #[display("None")]
    None = 6,
    #[display("{_0}")]
    #[num_enum(catch_all)]
    Other(i32),
}

impl Severity {
    pub const ROUTABLE: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Information,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];
}

/// A severity-specific log operation on a target.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize, Deserialize,
)]
pub enum Operation {
    LogTrace,
    LogDebug,
    LogInformation,
    LogWarning,
    LogError,
    LogCritical,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::LogTrace,
        Operation::LogDebug,
        Operation::LogInformation,
        Operation::LogWarning,
        Operation::LogError,
        Operation::LogCritical,
    ];

    /// Returns the operation that receives calls of the given severity,
    /// or `None` when the severity is not routable.
    pub const fn for_severity(level: Severity) -> Option<Self> {
        Some(match level {
            Severity::Information => Self::LogInformation,
            Severity::Trace => Self::LogTrace,
            Severity::Debug => Self::LogDebug,
            Severity::Warning => Self::LogWarning,
            Severity::Error => Self::LogError,
            Severity::Critical => Self::LogCritical,
            Severity::None | Severity::Other(_) => return None,
        })
    }

    pub const fn severity(&self) -> Severity {
        match self {
            Self::LogTrace => Severity::Trace,
            Self::LogDebug => Severity::Debug,
            Self::LogInformation => Severity::Information,
            Self::LogWarning => Severity::Warning,
            Self::LogError => Severity::Error,
            Self::LogCritical => Severity::Critical,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LogTrace => "LogTrace",
            Self::LogDebug => "LogDebug",
            Self::LogInformation => "LogInformation",
            Self::LogWarning => "LogWarning",
            Self::LogError => "LogError",
            Self::LogCritical => "LogCritical",
        }
    }
}

/// A state field value.
#[derive(
    Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize, Deserialize,
)]
pub enum Value {
    #[display("null")]
    Null,
    #[display("{_0}")]
    Bool(bool),
    #[display("{_0}")]
    UnsignedInteger(u64),
    #[display("{_0}")]
    SignedInteger(i64),
    #[display("{_0}")]
    F32(OrderedFloat<f32>),
    #[display("{_0}")]
    F64(OrderedFloat<f64>),
    #[display("{_0}")]
    String(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::UnsignedInteger(v.into())
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::UnsignedInteger(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::UnsignedInteger(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UnsignedInteger(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::SignedInteger(v.into())
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::SignedInteger(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::SignedInteger(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::SignedInteger(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(OrderedFloat(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(OrderedFloat(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// An error attached to a log call.
///
/// The router never looks inside it. Equality is identity: two
/// `AttachedError`s are equal only when they share the same allocation.
#[derive(Clone)]
pub struct AttachedError(Arc<dyn StdError + Send + Sync + 'static>);

impl AttachedError {
    pub fn new<E: StdError + Send + Sync + 'static>(error: E) -> Self {
        Self(Arc::new(error))
    }

    pub fn get(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

impl<E: StdError + Send + Sync + 'static> From<E> for AttachedError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl PartialEq for AttachedError {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl Eq for AttachedError {}

impl fmt::Debug for AttachedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for AttachedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
