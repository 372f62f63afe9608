use serde::{Deserialize, Serialize};

fn is_zero(n: &i32) -> bool {
    *n == 0
}

/// A single kebab record.
///
/// One struct serves as the database row, the request payload, and the
/// response body. Zero-valued fields are omitted on output; fields missing
/// from a request body default to zero values. The id is assigned by the
/// database and ignored on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
#[serde(default)]
pub struct Kebab {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub flavor: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub price: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_full_record() {
        let kebab = Kebab {
            id: 7,
            flavor: "spicy lamb".to_string(),
            price: 8,
        };

        let json = serde_json::to_value(&kebab).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "flavor": "spicy lamb", "price": 8})
        );
    }

    #[test]
    fn test_serialize_omits_zero_fields() {
        let kebab = Kebab {
            id: 0,
            flavor: "doner".to_string(),
            price: 0,
        };

        let json = serde_json::to_value(&kebab).unwrap();
        assert_eq!(json, serde_json::json!({"flavor": "doner"}));
    }

    #[test]
    fn test_serialize_empty_record() {
        let json = serde_json::to_value(Kebab::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_deserialize_missing_fields_default() {
        let kebab: Kebab = serde_json::from_str(r#"{"flavor": "shish"}"#).unwrap();
        assert_eq!(kebab.id, 0);
        assert_eq!(kebab.flavor, "shish");
        assert_eq!(kebab.price, 0);

        let empty: Kebab = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Kebab::default());
    }

    #[test]
    fn test_deserialize_full_record() {
        let kebab: Kebab =
            serde_json::from_str(r#"{"id": 3, "flavor": "adana", "price": 12}"#).unwrap();
        assert_eq!(kebab.id, 3);
        assert_eq!(kebab.flavor, "adana");
        assert_eq!(kebab.price, 12);
    }
}
