pub use self::call::{Argument, AssembledCall, Invocation, Overload, Shape};
use crate::{
    config::Config,
    error::Error,
    target::LogTarget,
    types::{AttachedError, EventId, LogState, Operation, Severity},
};
use std::sync::Arc;
use tracing::{debug, trace};

pub(crate) mod call;

/// Returns the name of the operation receiving calls of the given severity.
///
/// Severities that should not be logged map to the empty string.
pub fn operation_name(level: Severity) -> &'static str {
    Operation::for_severity(level).map_or("", |op| op.as_str())
}

/// What became of a routed call.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Outcome {
    /// The call reached the overload with this shape.
    Dispatched(Operation, Shape),
    /// The severity has no operation, nothing was dispatched.
    Unroutable(Severity),
    /// The target has no overload for the assembled shape.
    NoMatchingOverload(Operation, Shape),
    /// The assembled arguments fit none of the canonical shapes.
    MalformedCall(Operation),
}

impl Outcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched(..))
    }

    /// Escalates every skipped call into an [`Error`].
    pub fn into_result(self) -> Result<(Operation, Shape), Error> {
        match self {
            Self::Dispatched(op, shape) => Ok((op, shape)),
            Self::Unroutable(level) => Err(Error::UnroutableSeverity(level)),
            Self::NoMatchingOverload(op, shape) => Err(Error::NoMatchingOverload(op, shape)),
            Self::MalformedCall(op) => Err(Error::MalformedCall(op)),
        }
    }
}

/// Routes a generic log call to a severity-specific operation.
///
/// Each step is a separate method so an implementation can swap the
/// operation mapping, the argument assembly, or the dispatch policy on its
/// own. None of them fail: every problem degrades to a skipped call.
pub trait LogMethodRouter {
    fn operation_name(&self, level: Severity) -> Option<Operation> {
        Operation::for_severity(level)
    }

    fn arguments(
        &self,
        event_id: &EventId,
        state: &dyn LogState,
        error: Option<&AttachedError>,
    ) -> AssembledCall {
        AssembledCall::assemble(event_id, state, error, &Config::default())
    }

    fn dispatch(&self, operation: Operation, call: &AssembledCall) -> Outcome;

    fn route_call(
        &self,
        level: Severity,
        event_id: &EventId,
        state: &dyn LogState,
        error: Option<&AttachedError>,
    ) -> Outcome {
        let Some(operation) = self.operation_name(level) else {
            trace!(%level, "Severity has no log operation, skipping");
            return Outcome::Unroutable(level);
        };

        let call = self.arguments(event_id, state, error);
        self.dispatch(operation, &call)
    }
}

/// Router bound to a [`LogTarget`], dispatching through its overload table.
#[derive(Debug)]
pub struct DefaultRouter<T> {
    target: Arc<T>,
    cfg: Config,
}

impl<T: LogTarget> DefaultRouter<T> {
    pub fn new(target: Arc<T>) -> Self {
        Self::with_config(target, Config::default())
    }

    pub fn with_config(target: Arc<T>, cfg: Config) -> Self {
        Self { target, cfg }
    }

    /// The bound receiver.
    pub fn target(&self) -> &Arc<T> {
        &self.target
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }
}

impl<T: LogTarget> LogMethodRouter for DefaultRouter<T> {
    fn arguments(
        &self,
        event_id: &EventId,
        state: &dyn LogState,
        error: Option<&AttachedError>,
    ) -> AssembledCall {
        AssembledCall::assemble(event_id, state, error, &self.cfg)
    }

    fn dispatch(&self, operation: Operation, call: &AssembledCall) -> Outcome {
        let Some(inv) = Invocation::bind(operation, call) else {
            debug!(
                %operation,
                args = ?call.arguments().iter().map(Argument::kind).collect::<Vec<_>>(),
                "Arguments fit no overload shape"
            );
            return Outcome::MalformedCall(operation);
        };

        match self.target.overloads().get(operation, inv.shape) {
            Some(handler) => {
                trace!(%operation, shape = %inv.shape, "Dispatching log call");
                handler(&inv);
                Outcome::Dispatched(operation, inv.shape)
            }
            None => {
                debug!(%operation, shape = %inv.shape, "Target has no matching overload");
                Outcome::NoMatchingOverload(operation, inv.shape)
            }
        }
    }
}
