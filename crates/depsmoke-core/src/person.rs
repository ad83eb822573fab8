//! The person record and its YAML rendering.
//!
//! The YAML keys come from the serde field annotations, not the Rust field
//! names, so renaming a field here is enough to change the rendered output:
//!
//! ```rust
//! use depsmoke_core::Person;
//!
//! let yaml = Person::sample().to_yaml().unwrap();
//! assert_eq!(yaml, "name: John\nage: 30\n");
//! ```

use serde::{Deserialize, Serialize};

use crate::Result;

/// Name used by [`Person::sample`].
pub const SAMPLE_NAME: &str = "John";

/// Age used by [`Person::sample`].
pub const SAMPLE_AGE: i64 = 30;

/// A person with a name and an age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name.
    #[serde(rename = "name")]
    pub name: String,

    /// Age in years.
    #[serde(rename = "age")]
    pub age: i64,
}

impl Person {
    /// Creates a person record.
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// The fixed record the smoke run serializes.
    pub fn sample() -> Self {
        Self::new(SAMPLE_NAME, SAMPLE_AGE)
    }

    /// Serializes the record to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        log::debug!("Serialized person '{}' to {} bytes of YAML", self.name, yaml.len());
        Ok(yaml)
    }

    /// Parses a record from YAML using the annotated field names.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::sample()
    }
}
