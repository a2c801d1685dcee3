//! User entity: stored document shape, wire shape, and the codec between them

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user document as persisted in the `users` collection.
///
/// `id` and `created_at` are fixed at creation; `updated_at` moves forward on
/// every successful update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Build a fresh record from candidate fields: new id, both timestamps
    /// set to the same instant.
    pub fn new(input: UserInput) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::new(),
            name: input.name,
            dob: input.dob,
            address: input.address,
            description: input.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Wholesale overwrite of the four mutable fields. Fields absent from
    /// `fields` are cleared, not kept.
    pub fn overwrite(&mut self, fields: UserInput, now: DateTime<Utc>) {
        self.name = fields.name;
        self.dob = fields.dob;
        self.address = fields.address;
        self.description = fields.description;
        self.updated_at = now;
    }
}

/// Candidate user fields accepted on create and update.
///
/// `id`, `createdAt` and `updatedAt` supplied by a caller are ignored; an
/// absent field deserializes to the empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

impl UserInput {
    /// Required-field check. Absent and empty are the same failure.
    pub fn validate(&self) -> std::result::Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "required",
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A single failed validation rule, addressed by field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Wire representation returned to HTTP clients.
///
/// Hex id, RFC 3339 timestamps; optional text fields are omitted when empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dob: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.to_hex(),
            name: record.name,
            dob: record.dob,
            address: record.address,
            description: record.description,
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> UserInput {
        UserInput {
            name: "Ada".to_string(),
            dob: "1815-12-10".to_string(),
            address: "London".to_string(),
            description: "mathematician".to_string(),
        }
    }

    #[test]
    fn new_record_sets_matching_timestamps() {
        let record = UserRecord::new(sample_input());
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn new_records_get_distinct_ids() {
        let a = UserRecord::new(sample_input());
        let b = UserRecord::new(sample_input());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn overwrite_replaces_all_mutable_fields() {
        let mut record = UserRecord::new(sample_input());
        let created = record.created_at;

        let fields = UserInput {
            name: "Ada Lovelace".to_string(),
            ..UserInput::default()
        };
        let later = created + chrono::Duration::seconds(5);
        record.overwrite(fields, later);

        assert_eq!(record.name, "Ada Lovelace");
        // Not a sparse merge: unsupplied fields are cleared
        assert_eq!(record.address, "");
        assert_eq!(record.description, "");
        assert_eq!(record.created_at, created);
        assert_eq!(record.updated_at, later);
    }

    #[test]
    fn validate_rejects_missing_name() {
        let input = UserInput::default();
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "name: required");
    }

    #[test]
    fn validate_rejects_blank_name() {
        let input = UserInput {
            name: "   ".to_string(),
            ..UserInput::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn validate_accepts_name_only() {
        let input = UserInput {
            name: "Ada".to_string(),
            ..UserInput::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn input_deserializes_with_absent_fields() {
        let input: UserInput = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(input.name, "Ada");
        assert_eq!(input.dob, "");
    }

    #[test]
    fn wire_user_uses_hex_id_and_rfc3339_timestamps() {
        let record = UserRecord::new(sample_input());
        let expected_id = record.id.to_hex();
        let user = User::from(record);

        assert_eq!(user.id, expected_id);
        assert_eq!(user.id.len(), 24);
        assert!(chrono::DateTime::parse_from_rfc3339(&user.created_at).is_ok());
    }

    #[test]
    fn wire_user_omits_empty_optional_fields() {
        let record = UserRecord::new(UserInput {
            name: "Ada".to_string(),
            ..UserInput::default()
        });
        let value = serde_json::to_value(User::from(record)).unwrap();

        assert_eq!(value["name"], "Ada");
        assert!(value.get("dob").is_none());
        assert!(value.get("address").is_none());
        assert!(value.get("description").is_none());
    }

    #[test]
    fn stored_document_uses_mongo_field_names() {
        let record = UserRecord::new(sample_input());
        let doc = bson::to_document(&record).unwrap();

        assert!(doc.contains_key("_id"));
        assert!(doc.contains_key("createdAt"));
        assert!(doc.contains_key("updatedAt"));
        assert!(!doc.contains_key("created_at"));
    }
}
