use crate::{
    router::Shape,
    types::{Operation, Severity},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Severity '{0}' does not map to a log operation")]
    UnroutableSeverity(Severity),

    #[error("The target has no '{0}' overload with the parameter shape {1}")]
    NoMatchingOverload(Operation, Shape),

    #[error("The assembled arguments do not form a valid '{0}' call")]
    MalformedCall(Operation),

    #[error(
        "Encountered an error while parsing the router configuration ({0})"
    )]
    Config(#[from] serde_yaml::Error),
}
