use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// `{"success": bool, "data": {...}, "error": {"code": n}}`
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: i64,
}

/// Unwrap the `data` payload of a successful response.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_value(value)?;
    if !envelope.success {
        return Err(ApiError::Rejected {
            code: envelope.error.map_or(0, |e| e.code),
        });
    }
    envelope.data.ok_or(ApiError::MissingField("data"))
}

pub(crate) fn success_flag(value: &Value) -> bool {
    value.get("success").and_then(Value::as_bool).unwrap_or(false)
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginData {
    #[serde(default)]
    pub(crate) sid: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListData<T> {
    #[serde(default = "Vec::new")]
    pub(crate) list: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Tag {
    #[serde(default)]
    pub(crate) id: Value,
    #[serde(default)]
    pub(crate) name: String,
}

impl Tag {
    /// Tag ids come back as numbers; some firmware returns strings.
    pub(crate) fn id_string(&self) -> Option<String> {
        match &self.id {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Thumbnail {
    pub(crate) cache_key: String,
    pub(crate) unit_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct Additional {
    pub(crate) thumbnail: Option<Thumbnail>,
}

/// One item of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct PhotoRecord {
    #[serde(default)]
    pub(crate) id: Option<i64>,
    pub(crate) filename: String,
    #[serde(default)]
    pub(crate) additional: Additional,
}
