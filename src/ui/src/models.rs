use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Visual variant of a toast.
///
/// Only `"success"` is recognised at string boundaries. Anything else,
/// `"error"` included, falls back to [`ToastType::Error`].
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastType::Success => "success",
            ToastType::Error => "error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToastType::Success)
    }
}

impl From<&str> for ToastType {
    fn from(value: &str) -> Self {
        if value == "success" {
            ToastType::Success
        } else {
            ToastType::Error
        }
    }
}

impl From<String> for ToastType {
    fn from(value: String) -> Self {
        ToastType::from(value.as_str())
    }
}

impl From<ToastType> for String {
    fn from(value: ToastType) -> Self {
        value.as_str().to_string()
    }
}

impl Display for ToastType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastMessage {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ToastType,
}

impl ToastMessage {
    pub fn new(text: impl Into<String>, kind: ToastType) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, ToastType::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, ToastType::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct RawToast<'a> {
        text: &'a str,
        r#type: &'a str,
    }

    #[test]
    fn test_success_string_maps_to_success() {
        assert_eq!(ToastType::from("success"), ToastType::Success);
        assert_eq!(ToastType::from("success".to_string()), ToastType::Success);
    }

    #[test]
    fn test_unrecognised_strings_fall_back_to_error() {
        for value in ["error", "", "warning", "Success", "SUCCESS", " success"] {
            assert_eq!(
                ToastType::from(value),
                ToastType::Error,
                "Expected {:?} to map to Error",
                value
            );
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ToastType::Success.to_string(), "success");
        assert_eq!(ToastType::Error.to_string(), "error");
        assert!(ToastType::Success.is_success());
        assert!(!ToastType::Error.is_success());
    }

    #[test]
    fn test_constructors_set_kind() {
        let saved = ToastMessage::success("Saved!");
        assert_eq!(saved.text, "Saved!");
        assert_eq!(saved.kind, ToastType::Success);

        let failed = ToastMessage::error(String::from("Failed to save"));
        assert_eq!(failed.text, "Failed to save");
        assert_eq!(failed.kind, ToastType::Error);
    }

    #[test]
    fn test_unknown_type_from_the_wire_becomes_error() {
        let raw = RawToast {
            text: "Heads up",
            r#type: "warning",
        };
        let bytes = postcard::to_allocvec(&raw).unwrap();

        let message: ToastMessage = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(message.text, "Heads up");
        assert_eq!(message.kind, ToastType::Error);
    }

    #[test]
    fn test_message_survives_serialization() {
        let original = ToastMessage::success("Saved!");
        let bytes = postcard::to_allocvec(&original).unwrap();

        let raw: (String, String) = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(raw, ("Saved!".to_string(), "success".to_string()));

        let decoded: ToastMessage = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, original);
    }
}
