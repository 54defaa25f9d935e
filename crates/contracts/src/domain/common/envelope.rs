use super::ResourceKind;
use crate::shared::api_error::ApiError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Распаковать ответ списка `{ "<envelope>": [...] }`
///
/// Голый массив тоже принимается.
pub fn decode_list<T: DeserializeOwned>(kind: ResourceKind, body: Value) -> Result<Vec<T>, ApiError> {
    let items = match body {
        Value::Array(_) => body,
        Value::Object(mut map) => map.remove(kind.envelope_field()).ok_or_else(|| {
            ApiError::Decode(format!("missing \"{}\" in response", kind.envelope_field()))
        })?,
        other => {
            return Err(ApiError::Decode(format!(
                "expected a list of {}, got {}",
                kind.collection(),
                other
            )))
        }
    };
    serde_json::from_value(items).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Single record responses may come wrapped in `{ "<element>": {...} }` or bare
pub fn decode_one<T: DeserializeOwned>(kind: ResourceKind, body: Value) -> Result<T, ApiError> {
    let wrapper = single_field(kind);
    let value = match body {
        Value::Object(mut map) if map.contains_key(&wrapper) => map.remove(&wrapper).unwrap_or(Value::Null),
        other => other,
    };
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn single_field(kind: ResourceKind) -> String {
    let plural = kind.envelope_field();
    if let Some(stem) = plural.strip_suffix("ies") {
        format!("{stem}y")
    } else {
        plural.trim_end_matches('s').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        name: String,
    }

    #[test]
    fn unwraps_envelope() {
        let body = json!({ "provinces": [{ "name": "Western" }, { "name": "Central" }] });
        let rows: Vec<Row> = decode_list(ResourceKind::Province, body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "Central");
    }

    #[test]
    fn accepts_bare_array() {
        let rows: Vec<Row> = decode_list(ResourceKind::City, json!([{ "name": "Kandy" }])).unwrap();
        assert_eq!(rows, vec![Row { name: "Kandy".into() }]);
    }

    #[test]
    fn missing_envelope_is_decode_error() {
        let err = decode_list::<Row>(ResourceKind::District, json!({ "items": [] })).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn single_record_wrapped_or_bare() {
        let wrapped: Row = decode_one(ResourceKind::City, json!({ "city": { "name": "Galle" } })).unwrap();
        assert_eq!(wrapped.name, "Galle");
        let bare: Row = decode_one(ResourceKind::ParkingOwner, json!({ "name": "Nimal" })).unwrap();
        assert_eq!(bare.name, "Nimal");
        assert_eq!(single_field(ResourceKind::ParkingOwner), "parkingOwner");
    }
}
