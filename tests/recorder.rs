use log_method_router::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use test_log::test;

#[derive(Debug, thiserror::Error)]
#[error("unit test forced error")]
struct UnitTestForcedError;

fn logger() -> (Arc<Recorder>, Logger) {
    let recorder = Arc::new(Recorder::new());
    let logger = Logger::new(Arc::clone(&recorder));
    (recorder, logger)
}

fn no_format<S>(_: &S, _: Option<&AttachedError>) -> String {
    String::new()
}

#[test]
fn captures_level_and_text() {
    for level in Severity::ROUTABLE {
        let (recorder, logger) = logger();
        logger.log(level, EventId::default(), &state!("some-text"), None, no_format);

        assert_eq!(
            recorder.messages(),
            vec![LoggedMessage {
                level,
                operation: Operation::for_severity(level).unwrap(),
                shape: Shape::new(Overload::MessageOnly, false),
                event_id: EventId::default(),
                text: "some-text".to_owned(),
                args: vec![],
                error: None,
            }]
        );
    }
}

#[test]
fn captures_error_if_provided() {
    let (recorder, logger) = logger();
    let err = AttachedError::new(UnitTestForcedError);
    logger.log(
        Severity::Error,
        EventId::default(),
        &state!("some-text"),
        Some(&err),
        no_format,
    );

    let messages = recorder.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].shape, Shape::new(Overload::WithError, false));
    assert_eq!(messages[0].error.as_ref(), Some(&err));
    assert_eq!(
        messages[0].error.as_ref().map(ToString::to_string).as_deref(),
        Some("unit test forced error")
    );
}

#[test]
fn captures_every_optional_part_in_order() {
    let (recorder, logger) = logger();
    let err = AttachedError::new(UnitTestForcedError);
    let id = EventId::with_name(10, "startup");
    logger.log(
        Severity::Critical,
        id,
        &state!("{a} and {b}", a = 1_i64, b = 2.5_f64),
        Some(&err),
        no_format,
    );

    assert_eq!(
        recorder.messages(),
        vec![LoggedMessage {
            level: Severity::Critical,
            operation: Operation::LogCritical,
            shape: Shape::new(Overload::WithEventIdAndError, true),
            event_id: id,
            text: "{a} and {b}".to_owned(),
            args: vec![Value::from(1_i64), Value::from(2.5_f64)],
            error: Some(err),
        }]
    );
}

#[test]
fn untemplated_state_records_the_null_placeholder() {
    let (recorder, logger) = logger();
    logger.information(&FormattedState::untemplated());
    logger.information(&"not a field list");
    logger.information(&vec!["one".to_owned(), "two".to_owned()]);

    let texts = recorder
        .messages()
        .into_iter()
        .map(|m| (m.text, m.args.len()))
        .collect::<Vec<_>>();
    assert_eq!(
        texts,
        vec![
            ("[null]".to_owned(), 0),
            ("[null]".to_owned(), 0),
            ("[null]".to_owned(), 0)
        ]
    );
}

#[test]
fn records_multiple_messages() {
    let (recorder, logger) = logger();
    logger.information(&state!("message-1"));
    logger.information(&state!("message-2"));
    logger.log(
        Severity::None,
        EventId::default(),
        &state!("dropped"),
        None,
        no_format,
    );
    logger.information(&state!("message-3"));

    let texts = recorder
        .messages()
        .into_iter()
        .map(|m| (m.level, m.text))
        .collect::<Vec<_>>();
    assert_eq!(
        texts,
        vec![
            (Severity::Information, "message-1".to_owned()),
            (Severity::Information, "message-2".to_owned()),
            (Severity::Information, "message-3".to_owned()),
        ]
    );
    assert_eq!(recorder.len(), 3);
}
