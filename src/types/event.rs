use internment::Intern;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a logging event.
///
/// Only the numeric `id` decides whether an event id is forwarded;
/// an id of `0` means "not set".
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct EventId {
    pub id: i32,
    pub name: Option<Intern<String>>,
}

impl EventId {
    pub fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    pub fn with_name<S: AsRef<str>>(id: i32, name: S) -> Self {
        Self {
            id,
            name: Some(Intern::new(name.as_ref().to_owned())),
        }
    }

    pub fn is_set(&self) -> bool {
        self.id != 0
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => f.write_str(name.as_str()),
            None => write!(f, "{}", self.id),
        }
    }
}
