use crate::types::Value;
use internment::Intern;
use serde::{Deserialize, Serialize};

/// Reserved state key carrying the message template.
pub const ORIGINAL_FORMAT_KEY: &str = "{OriginalFormat}";

/// Message used when a state has no template, or its template is null.
pub const NULL_ORIGINAL_FORMAT: &str = "[null]";

pub type Field = (Intern<String>, Value);

/// A log call's state payload.
///
/// States that carry keyed fields expose them, in order, through
/// [`LogState::fields`]. Anything else keeps the default and has no fields.
pub trait LogState {
    fn fields(&self) -> Vec<Field> {
        Vec::new()
    }
}

impl<T: LogState + ?Sized> LogState for &T {
    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }
}

impl LogState for () {}

impl LogState for str {}

impl LogState for String {}

impl LogState for Vec<String> {}

impl<K, V> LogState for [(K, V)]
where
    K: AsRef<str>,
    V: Clone + Into<Value>,
{
    fn fields(&self) -> Vec<Field> {
        self.iter()
            .map(|(k, v)| (Intern::new(k.as_ref().to_owned()), v.clone().into()))
            .collect()
    }
}

impl<K, V> LogState for Vec<(K, V)>
where
    K: AsRef<str>,
    V: Clone + Into<Value>,
{
    fn fields(&self) -> Vec<Field> {
        self.as_slice().fields()
    }
}

impl<K, V, const N: usize> LogState for [(K, V); N]
where
    K: AsRef<str>,
    V: Clone + Into<Value>,
{
    fn fields(&self) -> Vec<Field> {
        self.as_slice().fields()
    }
}

/// A message template together with its named arguments.
///
/// The template is exposed under [`ORIGINAL_FORMAT_KEY`] after the arguments.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct FormattedState {
    template: Option<String>,
    args: Vec<Field>,
}

impl FormattedState {
    pub fn new<S: Into<String>>(template: S) -> Self {
        Self {
            template: Some(template.into()),
            args: Vec::new(),
        }
    }

    /// A state whose template is null.
    pub fn untemplated() -> Self {
        Self::default()
    }

    pub fn with<K: AsRef<str>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.args
            .push((Intern::new(key.as_ref().to_owned()), value.into()));
        self
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn args(&self) -> &[Field] {
        &self.args
    }
}

impl LogState for FormattedState {
    fn fields(&self) -> Vec<Field> {
        let template = Value::from(self.template.clone());
        self.args
            .iter()
            .cloned()
            .chain(std::iter::once((
                Intern::new(ORIGINAL_FORMAT_KEY.to_owned()),
                template,
            )))
            .collect()
    }
}

/// Builds a [`FormattedState`] from a template and named arguments.
///
/// ```
/// use log_method_router::{state, LogState};
///
/// let s = state!("Fetched {count} rows from {table}", count = 3_u32, table = "users");
/// assert_eq!(s.fields().len(), 3);
/// ```
#[macro_export]
macro_rules! state {
    ($template:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::FormattedState::new($template)$(.with(stringify!($key), $value))*
    };
}
