//! Canonical mapping projection.

use serde_json::{Map, Value};

use crate::protocols::chat::ChatChoice;
use crate::protocols::common::Usage;
use crate::response::ChatResponse;

impl ChatResponse {
    /// Project the value back to its canonical wire mapping.
    ///
    /// Unset optionals are left out of the mapping entirely, never written
    /// as null: downstream consumers distinguish "omitted" from "present as
    /// null". Present-but-empty values (an explicit empty `choices` array on
    /// a genuine completion) are kept. The filter runs over an ordered
    /// (key, optional value) table rather than stripping nulls after the
    /// fact, so nested nulls inside choices and usage survive untouched.
    ///
    /// Total and pure; the attached metadata is not part of the wire shape
    /// and does not appear.
    pub fn to_map(&self) -> Map<String, Value> {
        let fields = [
            ("id", self.id().map(Value::from)),
            ("object", Some(Value::from(self.object()))),
            ("created", Some(Value::from(self.created()))),
            ("model", Some(Value::from(self.model()))),
            ("system_fingerprint", self.system_fingerprint().map(Value::from)),
            ("choices", Some(serialize_choices(self.choices()))),
            ("request_id", self.request_id().map(Value::from)),
            ("usage", self.usage().map(serialize_usage)),
        ];

        fields
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key.to_owned(), value)))
            .collect()
    }
}

fn serialize_choices(choices: &[ChatChoice]) -> Value {
    Value::Array(
        choices
            .iter()
            .map(|choice| serde_json::to_value(choice).unwrap_or(Value::Null))
            .collect(),
    )
}

fn serialize_usage(usage: &Usage) -> Value {
    serde_json::to_value(usage).unwrap_or(Value::Null)
}
