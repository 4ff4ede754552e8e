//! Shared data model for the Classboard front-end.
//!
//! This crate defines the types exchanged between the view layer and
//! the hosted data service, independent of any rendering concerns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One instructor-owned course container, as stored in the `classes`
/// table on the remote data service.
///
/// Rows are only ever deserialized from service responses; `id` and
/// `created_at` are server-assigned and UI code never synthesizes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    /// Server-assigned identifier, immutable after insert.
    pub id: Uuid,
    /// Owning instructor; set from the insert payload, never changed.
    pub instructor_id: Uuid,
    /// Display name, non-empty after trimming.
    pub name: String,
    /// Optional description; `null` on the wire maps to `None`.
    #[serde(default)]
    pub description: Option<String>,
    /// Server-assigned insert timestamp; drives default ordering.
    pub created_at: DateTime<Utc>,
    /// Reserved flag; displayed but not mutated by any flow.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Insert payload for the `classes` table.
///
/// Only [`NewClass::from_input`] constructs one, so every insert
/// carries a trimmed, non-empty name and a normalized description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewClass {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub instructor_id: Uuid,
}

impl NewClass {
    /// Validate and normalize raw form input.
    ///
    /// Returns `None` when `name` is empty after trimming. A blank or
    /// whitespace-only description is normalized to absent.
    pub fn from_input(name: &str, description: &str, instructor_id: Uuid) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let description = description.trim();
        Some(Self {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            instructor_id,
        })
    }
}

/// The authenticated identity surface consumed by the view layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_rejects_empty_name() {
        let uid = Uuid::new_v4();

        assert_eq!(NewClass::from_input("", "", uid), None);
        assert_eq!(NewClass::from_input("   ", "notes", uid), None);
    }

    #[test]
    fn test_from_input_trims_name() {
        let uid = Uuid::new_v4();

        let new_class = NewClass::from_input("  Algebra I  ", "", uid).unwrap();

        assert_eq!(new_class.name, "Algebra I");
        assert_eq!(new_class.instructor_id, uid);
    }

    #[test]
    fn test_from_input_normalizes_blank_description() {
        let uid = Uuid::new_v4();

        assert_eq!(
            NewClass::from_input("Algebra", "", uid).unwrap().description,
            None
        );
        assert_eq!(
            NewClass::from_input("Algebra", "   ", uid)
                .unwrap()
                .description,
            None
        );
    }

    #[test]
    fn test_from_input_trims_description() {
        let uid = Uuid::new_v4();

        let new_class = NewClass::from_input("Physics 101", " intro ", uid).unwrap();

        assert_eq!(new_class.description.as_deref(), Some("intro"));
    }

    #[test]
    fn test_insert_payload_omits_absent_description() {
        let uid = Uuid::new_v4();
        let new_class = NewClass::from_input("Algebra", "", uid).unwrap();

        let payload = serde_json::to_value(&new_class).unwrap();

        assert!(payload.get("description").is_none());
        assert_eq!(payload["name"], "Algebra");
    }

    #[test]
    fn test_class_defaults_for_omitted_columns() {
        let json = r#"{
            "id": "8f7c1f6e-9a40-4c21-bb71-2a0a30f8f601",
            "instructor_id": "1f0f7a3e-64c4-4d12-9f5d-0f2f6f3d9b02",
            "name": "Bio 101",
            "description": null,
            "created_at": "2024-01-02T00:00:00Z"
        }"#;

        let class: Class = serde_json::from_str(json).unwrap();

        assert_eq!(class.name, "Bio 101");
        assert_eq!(class.description, None);
        assert!(class.is_active);
    }
}
