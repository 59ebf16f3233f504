use crate::{
    error::Error,
    types::{NULL_ORIGINAL_FORMAT, ORIGINAL_FORMAT_KEY},
};
use serde::{Deserialize, Serialize};

/// Parameter assembly settings.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// State key whose value is the message template.
    #[serde(default = "default_template_key")]
    pub template_key: String,
    /// Message used when the template is missing or null.
    #[serde(default = "default_null_template")]
    pub null_template: String,
}

impl Config {
    pub fn from_yaml_str(s: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(s)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_key: default_template_key(),
            null_template: default_null_template(),
        }
    }
}

fn default_template_key() -> String {
    ORIGINAL_FORMAT_KEY.to_owned()
}

fn default_null_template() -> String {
    NULL_ORIGINAL_FORMAT.to_owned()
}
