use crate::{
    config::Config,
    types::{AttachedError, EventId, LogState, Operation, Value},
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One positional argument of an assembled call.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Argument {
    EventId(EventId),
    Error(AttachedError),
    Message(String),
    /// Variable-length trailing arguments, kept as one element.
    Args(Vec<Value>),
}

impl Argument {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EventId(_) => "event_id",
            Self::Error(_) => "error",
            Self::Message(_) => "message",
            Self::Args(_) => "args",
        }
    }
}

/// Which optional leading parameters an overload takes.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize,
)]
pub enum Overload {
    MessageOnly,
    WithEventId,
    WithError,
    WithEventIdAndError,
}

impl Overload {
    pub const ALL: [Overload; 4] = [
        Overload::MessageOnly,
        Overload::WithEventId,
        Overload::WithError,
        Overload::WithEventIdAndError,
    ];

    pub const fn new(event_id: bool, error: bool) -> Self {
        match (event_id, error) {
            (false, false) => Self::MessageOnly,
            (true, false) => Self::WithEventId,
            (false, true) => Self::WithError,
            (true, true) => Self::WithEventIdAndError,
        }
    }

    pub const fn has_event_id(&self) -> bool {
        matches!(self, Self::WithEventId | Self::WithEventIdAndError)
    }

    pub const fn has_error(&self) -> bool {
        matches!(self, Self::WithError | Self::WithEventIdAndError)
    }
}

/// The parameter shape of an operation overload.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize,
)]
pub struct Shape {
    pub overload: Overload,
    /// Whether the overload ends with the variable-length `args` parameter.
    pub variadic: bool,
}

impl Shape {
    pub const fn new(overload: Overload, variadic: bool) -> Self {
        Self { overload, variadic }
    }

    /// All eight canonical shapes of an operation.
    pub fn all() -> impl Iterator<Item = Shape> {
        Overload::ALL
            .into_iter()
            .cartesian_product([false, true])
            .map(|(overload, variadic)| Shape::new(overload, variadic))
    }

    /// Returns the shape matching the arity and positional argument kinds,
    /// or `None` if the arguments fit no canonical overload.
    pub fn of(args: &[Argument]) -> Option<Self> {
        use Argument as A;
        let (overload, variadic) = match args {
            [A::Message(_)] => (Overload::MessageOnly, false),
            [A::Message(_), A::Args(_)] => (Overload::MessageOnly, true),
            [A::EventId(_), A::Message(_)] => (Overload::WithEventId, false),
            [A::EventId(_), A::Message(_), A::Args(_)] => (Overload::WithEventId, true),
            [A::Error(_), A::Message(_)] => (Overload::WithError, false),
            [A::Error(_), A::Message(_), A::Args(_)] => (Overload::WithError, true),
            [A::EventId(_), A::Error(_), A::Message(_)] => (Overload::WithEventIdAndError, false),
            [A::EventId(_), A::Error(_), A::Message(_), A::Args(_)] => {
                (Overload::WithEventIdAndError, true)
            }
            _ => return None,
        };
        Some(Self::new(overload, variadic))
    }

    pub fn arity(&self) -> usize {
        1 + usize::from(self.overload.has_event_id())
            + usize::from(self.overload.has_error())
            + usize::from(self.variadic)
    }

    fn parameters(&self) -> impl Iterator<Item = &'static str> {
        let event_id = self.overload.has_event_id().then_some("event_id");
        let error = self.overload.has_error().then_some("error");
        let args = self.variadic.then_some("args");
        event_id
            .into_iter()
            .chain(error)
            .chain(std::iter::once("message"))
            .chain(args)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.parameters().join(", "))
    }
}

/// The canonically ordered argument list for a severity-specific operation.
///
/// Element order is always `[event_id, error, message, args]`, with the event
/// id, error and args each left out when they carry nothing. The message is
/// always present.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AssembledCall(Vec<Argument>);

impl AssembledCall {
    pub fn assemble<S: LogState + ?Sized>(
        event_id: &EventId,
        state: &S,
        error: Option<&AttachedError>,
        cfg: &Config,
    ) -> Self {
        let fields = state.fields();

        let original_format = fields
            .iter()
            .find(|(k, _)| k.as_str() == cfg.template_key)
            .map(|(_, v)| v)
            .filter(|v| !v.is_null())
            .map_or_else(|| cfg.null_template.clone(), |v| v.to_string());

        let args = fields
            .into_iter()
            .filter(|(k, _)| k.as_str() != cfg.template_key)
            .map(|(_, v)| v)
            .collect::<Vec<_>>();

        let mut call = Vec::with_capacity(4);
        call.push(Argument::Message(original_format));
        if !args.is_empty() {
            call.push(Argument::Args(args));
        }
        if let Some(error) = error {
            call.insert(0, Argument::Error(error.clone()));
        }
        if event_id.is_set() {
            call.insert(0, Argument::EventId(*event_id));
        }

        Self(call)
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn shape(&self) -> Option<Shape> {
        Shape::of(&self.0)
    }

    pub fn into_arguments(self) -> Vec<Argument> {
        self.0
    }
}

impl From<Vec<Argument>> for AssembledCall {
    fn from(args: Vec<Argument>) -> Self {
        Self(args)
    }
}

/// A borrowed view of an assembled call, bound to one overload.
#[derive(Copy, Clone, Debug)]
pub struct Invocation<'a> {
    pub operation: Operation,
    pub shape: Shape,
    pub event_id: Option<&'a EventId>,
    pub error: Option<&'a AttachedError>,
    pub message: &'a str,
    /// `Some` exactly when the shape is variadic
    pub args: Option<&'a [Value]>,
}

impl<'a> Invocation<'a> {
    pub fn bind(operation: Operation, call: &'a AssembledCall) -> Option<Self> {
        let shape = call.shape()?;
        let mut inv = Invocation {
            operation,
            shape,
            event_id: None,
            error: None,
            message: "",
            args: None,
        };
        for arg in call.arguments() {
            match arg {
                Argument::EventId(e) => inv.event_id = Some(e),
                Argument::Error(e) => inv.error = Some(e),
                Argument::Message(m) => inv.message = m.as_str(),
                Argument::Args(a) => inv.args = Some(a.as_slice()),
            }
        }
        Some(inv)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::ORIGINAL_FORMAT_KEY;
    use pretty_assertions::assert_eq;

    #[derive(Debug, thiserror::Error)]
    #[error("forced")]
    struct Forced;

    fn assemble<S: LogState + ?Sized>(
        id: i32,
        state: &S,
        error: Option<&AttachedError>,
    ) -> Vec<Argument> {
        AssembledCall::assemble(&EventId::new(id), state, error, &Config::default())
            .into_arguments()
    }

    fn msg(m: &str) -> Argument {
        Argument::Message(m.to_owned())
    }

    #[test]
    fn empty_state_yields_null_template() {
        assert_eq!(assemble(0, &(), None), vec![msg("[null]")]);
    }

    #[test]
    fn template_and_args() {
        let state = [(ORIGINAL_FORMAT_KEY, "hi"), ("k", "v")];
        assert_eq!(
            assemble(0, &state, None),
            vec![msg("hi"), Argument::Args(vec!["v".into()])]
        );
    }

    #[test]
    fn event_id_prepended_when_set() {
        assert_eq!(
            assemble(5, &(), None),
            vec![Argument::EventId(EventId::new(5)), msg("[null]")]
        );
    }

    #[test]
    fn error_prepended_when_present() {
        let e = AttachedError::new(Forced);
        assert_eq!(
            assemble(0, &(), Some(&e)),
            vec![Argument::Error(e.clone()), msg("[null]")]
        );
    }

    #[test]
    fn strict_ordering() {
        let e = AttachedError::new(Forced);
        let state = [(ORIGINAL_FORMAT_KEY, "fmt"), ("a", "1"), ("b", "2")];
        assert_eq!(
            assemble(7, &state, Some(&e)),
            vec![
                Argument::EventId(EventId::new(7)),
                Argument::Error(e.clone()),
                msg("fmt"),
                Argument::Args(vec!["1".into(), "2".into()]),
            ]
        );
    }

    #[test]
    fn template_excluded_from_args_wherever_it_appears() {
        for pos in 0..3 {
            let mut state = vec![("a", Value::from(1_u8)), ("b", Value::from(2_u8))];
            state.insert(pos, (ORIGINAL_FORMAT_KEY, Value::from("t")));
            let args = assemble(0, &state, None);
            assert_eq!(
                args,
                vec![
                    msg("t"),
                    Argument::Args(vec![Value::from(1_u8), Value::from(2_u8)])
                ]
            );
        }
    }

    #[test]
    fn null_template_value_uses_sentinel() {
        let state = [(ORIGINAL_FORMAT_KEY, Value::Null), ("a", Value::from(1_i64))];
        assert_eq!(
            assemble(0, &state, None),
            vec![msg("[null]"), Argument::Args(vec![Value::SignedInteger(1)])]
        );
    }

    #[test]
    fn non_string_template_is_stringified() {
        let state = [(ORIGINAL_FORMAT_KEY, Value::from(42_u32))];
        assert_eq!(assemble(0, &state, None), vec![msg("42")]);
    }

    #[test]
    fn first_template_wins_and_all_are_excluded() {
        let state = [
            (ORIGINAL_FORMAT_KEY, "first"),
            ("x", "1"),
            (ORIGINAL_FORMAT_KEY, "second"),
        ];
        assert_eq!(
            assemble(0, &state, None),
            vec![msg("first"), Argument::Args(vec!["1".into()])]
        );
    }

    #[test]
    fn state_without_template_keeps_args() {
        assert_eq!(
            assemble(0, &[("one", "two")], None),
            vec![msg("[null]"), Argument::Args(vec!["two".into()])]
        );
    }

    #[test]
    fn named_event_without_pairs_still_uses_sentinel() {
        let id = EventId::with_name(3, "named");
        let call = AssembledCall::assemble(&id, &(), None, &Config::default());
        assert_eq!(
            call.into_arguments(),
            vec![Argument::EventId(id), msg("[null]")]
        );
    }

    #[test]
    fn assembly_is_idempotent() {
        let e = AttachedError::new(Forced);
        let state = [(ORIGINAL_FORMAT_KEY, "fmt"), ("a", "1")];
        assert_eq!(assemble(9, &state, Some(&e)), assemble(9, &state, Some(&e)));
    }

    #[test]
    fn custom_template_key() {
        let cfg = Config {
            template_key: "msg".to_owned(),
            null_template: "<none>".to_owned(),
        };
        let state = [("msg", "hello"), (ORIGINAL_FORMAT_KEY, "ignored")];
        let call = AssembledCall::assemble(&EventId::default(), &state, None, &cfg);
        assert_eq!(
            call.into_arguments(),
            vec![msg("hello"), Argument::Args(vec!["ignored".into()])]
        );
        let call = AssembledCall::assemble(&EventId::default(), &(), None, &cfg);
        assert_eq!(call.into_arguments(), vec![msg("<none>")]);
    }

    #[test]
    fn shape_of_assembled_calls() {
        let e = AttachedError::new(Forced);
        let state = [("a", "1")];
        let shape = |id, s: &dyn LogState, err| {
            AssembledCall::assemble(&EventId::new(id), s, err, &Config::default()).shape()
        };
        assert_eq!(shape(0, &(), None), Some(Shape::new(Overload::MessageOnly, false)));
        assert_eq!(shape(0, &state, None), Some(Shape::new(Overload::MessageOnly, true)));
        assert_eq!(shape(1, &(), None), Some(Shape::new(Overload::WithEventId, false)));
        assert_eq!(shape(0, &(), Some(&e)), Some(Shape::new(Overload::WithError, false)));
        assert_eq!(
            shape(1, &state, Some(&e)),
            Some(Shape::new(Overload::WithEventIdAndError, true))
        );
    }

    #[test]
    fn malformed_argument_lists_have_no_shape() {
        assert_eq!(Shape::of(&[]), None);
        assert_eq!(Shape::of(&[Argument::Args(vec![])]), None);
        assert_eq!(
            Shape::of(&[msg("m"), Argument::EventId(EventId::new(1))]),
            None
        );
        assert_eq!(Shape::of(&[msg("a"), msg("b")]), None);
    }

    #[test]
    fn shapes_are_distinct_and_sized() {
        let shapes = Shape::all().collect::<Vec<_>>();
        assert_eq!(shapes.len(), 8);
        assert_eq!(shapes.iter().unique().count(), 8);
        assert_eq!(Shape::new(Overload::MessageOnly, false).arity(), 1);
        assert_eq!(Shape::new(Overload::WithEventIdAndError, true).arity(), 4);
        assert_eq!(
            Shape::new(Overload::WithError, true).to_string(),
            "(error, message, args)"
        );
    }

    #[test]
    fn invocation_binds_positions() {
        let e = AttachedError::new(Forced);
        let state = [(ORIGINAL_FORMAT_KEY, "fmt"), ("a", "1")];
        let call = AssembledCall::assemble(&EventId::new(7), &state, Some(&e), &Config::default());
        let inv = Invocation::bind(Operation::LogError, &call).unwrap();
        assert_eq!(inv.event_id, Some(&EventId::new(7)));
        assert_eq!(inv.error, Some(&e));
        assert_eq!(inv.message, "fmt");
        assert_eq!(inv.args, Some(&[Value::from("1")][..]));
        assert_eq!(inv.shape.arity(), call.len());
    }
}
