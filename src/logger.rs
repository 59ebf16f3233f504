use crate::{
    router::{DefaultRouter, LogMethodRouter, Outcome},
    target::LogTarget,
    types::{AttachedError, EventId, LogState, Operation, Severity},
};
use std::sync::Arc;

/// A logger with a single generic entry point.
///
/// Every [`Logger::log`] call is handed to the router, which forwards it to
/// the matching severity-specific operation on its target.
pub struct Logger {
    router: Box<dyn LogMethodRouter + Send + Sync>,
}

impl Logger {
    /// Creates a logger routing to `target` with the [`DefaultRouter`].
    pub fn new<T: LogTarget + Send + Sync + 'static>(target: Arc<T>) -> Self {
        Self::with_router(DefaultRouter::new(target))
    }

    pub fn with_router<R: LogMethodRouter + Send + Sync + 'static>(router: R) -> Self {
        Self {
            router: Box::new(router),
        }
    }

    pub fn set_router<R: LogMethodRouter + Send + Sync + 'static>(&mut self, router: R) {
        self.router = Box::new(router);
    }

    pub fn router(&self) -> &(dyn LogMethodRouter + Send + Sync) {
        self.router.as_ref()
    }

    pub fn is_enabled(&self, level: Severity) -> bool {
        Operation::for_severity(level).is_some()
    }

    /// Routes a log call.
    ///
    /// The message comes from the state's template, `formatter` is never called.
    pub fn log<S, F>(
        &self,
        level: Severity,
        event_id: EventId,
        state: &S,
        error: Option<&AttachedError>,
        _formatter: F,
    ) -> Outcome
    where
        S: LogState,
        F: FnOnce(&S, Option<&AttachedError>) -> String,
    {
        self.router.route_call(level, &event_id, state, error)
    }

    pub fn trace<S: LogState>(&self, state: &S) -> Outcome {
        self.log_state(Severity::Trace, state)
    }

    pub fn debug<S: LogState>(&self, state: &S) -> Outcome {
        self.log_state(Severity::Debug, state)
    }

    pub fn information<S: LogState>(&self, state: &S) -> Outcome {
        self.log_state(Severity::Information, state)
    }

    pub fn warning<S: LogState>(&self, state: &S) -> Outcome {
        self.log_state(Severity::Warning, state)
    }

    pub fn error<S: LogState>(&self, state: &S) -> Outcome {
        self.log_state(Severity::Error, state)
    }

    pub fn critical<S: LogState>(&self, state: &S) -> Outcome {
        self.log_state(Severity::Critical, state)
    }

    fn log_state<S: LogState>(&self, level: Severity, state: &S) -> Outcome {
        self.router
            .route_call(level, &EventId::default(), state, None)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}
