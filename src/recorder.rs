use crate::{
    router::{Invocation, Shape},
    target::{LogTarget, Overloads},
    types::{AttachedError, EventId, Operation, Severity, Value},
};
use parking_lot::Mutex;
use std::sync::Arc;

/// A call recorded by a [`Recorder`].
#[derive(Clone, PartialEq, Debug)]
pub struct LoggedMessage {
    pub level: Severity,
    pub operation: Operation,
    pub shape: Shape,
    /// Defaults to id `0` when the overload took no event id.
    pub event_id: EventId,
    /// The message template the overload received.
    pub text: String,
    pub args: Vec<Value>,
    pub error: Option<AttachedError>,
}

impl<'a> From<&Invocation<'a>> for LoggedMessage {
    fn from(inv: &Invocation<'a>) -> Self {
        LoggedMessage {
            level: inv.operation.severity(),
            operation: inv.operation,
            shape: inv.shape,
            event_id: inv.event_id.copied().unwrap_or_default(),
            text: inv.message.to_owned(),
            args: inv.args.map(<[Value]>::to_vec).unwrap_or_default(),
            error: inv.error.cloned(),
        }
    }
}

/// A target implementing every overload of every operation, keeping each
/// call it receives for later assertions.
pub struct Recorder {
    messages: Arc<Mutex<Vec<LoggedMessage>>>,
    overloads: Overloads,
}

impl Recorder {
    pub fn new() -> Self {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let overloads = Operation::ALL
            .into_iter()
            .fold(Overloads::new(), |overloads, op| {
                let messages = Arc::clone(&messages);
                overloads.on_all_shapes(op, move |inv| {
                    messages.lock().push(LoggedMessage::from(inv));
                })
            });
        Self {
            messages,
            overloads,
        }
    }

    /// Snapshot of the recorded calls, oldest first.
    pub fn messages(&self) -> Vec<LoggedMessage> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogTarget for Recorder {
    fn overloads(&self) -> &Overloads {
        &self.overloads
    }
}

impl std::fmt::Debug for Recorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recorder")
            .field("messages", &self.len())
            .finish_non_exhaustive()
    }
}
