//! Input schemas for records created through the API.
//!
//! Validation works on raw `serde_json::Value` so that every failing field is
//! reported at once instead of stopping at the first serde error. Fields the
//! store generates (`id`, `createdAt`) and unknown fields are dropped.

use serde::Serialize;
use serde_json::{Map, Value};

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every field error found in one input, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Names of the failing fields
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validated contact-form submission, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

impl NewContact {
    /// Validate an arbitrary JSON body.
    ///
    /// `name`, `email` and `message` must be non-empty strings. `company` and
    /// `service` may be missing, `null` or any string (an empty string stays
    /// present).
    pub fn validate(input: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let Some(object) = as_object(input, &mut errors) else {
            return Err(errors);
        };

        let name = required_string(object, "name", &mut errors);
        let email = required_string(object, "email", &mut errors);
        let company = optional_string(object, "company", &mut errors);
        let service = optional_string(object, "service", &mut errors);
        let message = required_string(object, "message", &mut errors);

        errors.into_result(|| NewContact {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            company: company.flatten(),
            service: service.flatten(),
            message: message.unwrap_or_default(),
        })
    }
}

/// Validated account registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
}

impl NewAccount {
    pub fn validate(input: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let Some(object) = as_object(input, &mut errors) else {
            return Err(errors);
        };

        let username = required_string(object, "username", &mut errors);
        let password = required_string(object, "password", &mut errors);

        errors.into_result(|| NewAccount {
            username: username.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }
}

fn as_object<'a>(
    input: &'a Value,
    errors: &mut ValidationErrors,
) -> Option<&'a Map<String, Value>> {
    match input {
        Value::Object(object) => Some(object),
        other => {
            errors.push(FieldError::new(
                "",
                format!("Expected object, received {}", type_name(other)),
            ));
            None
        }
    }
}

fn required_string(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "Required"));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(FieldError::new(
                field,
                "String must contain at least 1 character(s)",
            ));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(FieldError::new(
                field,
                format!("Expected string, received {}", type_name(other)),
            ));
            None
        }
    }
}

/// `Some(None)` for an absent field, `None` when the field failed.
fn optional_string(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<Option<String>> {
    match object.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(other) => {
            errors.push(FieldError::new(
                field,
                format!("Expected string, received {}", type_name(other)),
            ));
            None
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
