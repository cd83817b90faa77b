use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Opaque identifier assigned by the store.
    pub id: String,
    pub name: String,
    pub number: String,
}

/// Request body for create and update.
///
/// Both fields are optional on the wire so a missing field can be reported
/// by name instead of failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// A draft that passed validation, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub number: String,
}

pub enum ValidationReq {}

impl ValidationReq {
    pub fn body_req() -> String {
        "body missing".to_string()
    }

    pub fn name_req() -> String {
        "name missing".to_string()
    }

    pub fn number_req() -> String {
        "number missing".to_string()
    }
}

impl Contact {
    pub fn new(id: impl Into<String>, name: impl Into<String>, number: impl Into<String>) -> Self {
        Contact {
            id: id.into(),
            name: name.into(),
            number: number.into(),
        }
    }
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        ContactDraft {
            name: Some(name.into()),
            number: Some(number.into()),
        }
    }

    /// Reads a draft from a raw request body.
    ///
    /// An empty body, invalid JSON, or anything other than a JSON object is
    /// treated as a missing body. Scalar field values are taken as text.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::Validation(ValidationReq::body_req()));
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|_| AppError::Validation(ValidationReq::body_req()))?;

        let Value::Object(fields) = value else {
            return Err(AppError::Validation(ValidationReq::body_req()));
        };

        Ok(ContactDraft {
            name: fields.get("name").and_then(field_text),
            number: fields.get("number").and_then(field_text),
        })
    }

    /// Name first, then number: the first missing field is the one reported.
    pub fn validate(self) -> Result<NewContact, AppError> {
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::Validation(ValidationReq::name_req()))?;

        let number = self
            .number
            .filter(|number| !number.is_empty())
            .ok_or_else(|| AppError::Validation(ValidationReq::number_req()))?;

        Ok(NewContact { name, number })
    }
}

impl NewContact {
    pub fn into_contact(self, id: String) -> Contact {
        Contact {
            id,
            name: self.name,
            number: self.number,
        }
    }
}

/// Falsy scalars (`0`, `false`) count as missing, like an empty string.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
