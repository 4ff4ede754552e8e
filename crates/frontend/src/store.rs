//! Component-scoped state for the instructor dashboard.

use web_types::Class;

/// Ordered class list plus the in-flight indicator for the load.
///
/// Held behind a `use_state` handle, so every transition returns the
/// next value rather than mutating in place. The list mirrors whatever
/// the service last reported, newest first, plus any rows prepended
/// from create echoes since.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassListStore {
    pub classes: Vec<Class>,
    /// True from mount until the first load resolves either way.
    pub loading: bool,
}

impl ClassListStore {
    /// Fresh store: empty and loading.
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            loading: true,
        }
    }

    /// Replace the whole list with a load result and clear `loading`.
    pub fn replace_all(&self, records: Vec<Class>) -> Self {
        Self {
            classes: records,
            loading: false,
        }
    }

    /// Prepend the service's echo of a freshly created class.
    pub fn prepend(&self, record: Class) -> Self {
        let mut classes = Vec::with_capacity(self.classes.len() + 1);
        classes.push(record);
        classes.extend(self.classes.iter().cloned());
        Self {
            classes,
            loading: self.loading,
        }
    }

    /// Clear `loading` after a failed operation, leaving the last
    /// known list untouched.
    pub fn settle(&self) -> Self {
        Self {
            classes: self.classes.clone(),
            loading: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for ClassListStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Uncommitted create-form fields; exists only while the modal is open.
///
/// The dashboard holds an `Option<CreateClassForm>`: `None` is the
/// closed state, and opening while already open keeps the same value,
/// so there is never more than one form in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateClassForm {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn class(name: &str, day: u32) -> Class {
        Class {
            id: Uuid::new_v4(),
            instructor_id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            is_active: true,
        }
    }

    fn names(store: &ClassListStore) -> Vec<&str> {
        store.classes.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_new_store_is_empty_and_loading() {
        let store = ClassListStore::new();

        assert!(store.classes.is_empty());
        assert!(store.loading);
    }

    #[test]
    fn test_replace_all_keeps_service_order() {
        let store = ClassListStore::new();

        let store = store.replace_all(vec![class("Bio 101", 2), class("Chem 101", 1)]);

        assert_eq!(names(&store), vec!["Bio 101", "Chem 101"]);
        assert!(!store.loading);
    }

    #[test]
    fn test_empty_load_yields_empty_list_not_loading() {
        let store = ClassListStore::new().replace_all(vec![]);

        assert!(store.is_empty());
        assert!(!store.loading);
    }

    #[test]
    fn test_prepend_puts_echoed_row_first() {
        let store =
            ClassListStore::new().replace_all(vec![class("Bio 101", 2), class("Chem 101", 1)]);

        let store = store.prepend(class("Physics 101", 3));

        assert_eq!(names(&store), vec!["Physics 101", "Bio 101", "Chem 101"]);
    }

    #[test]
    fn test_sequential_creates_stack_newest_first() {
        let mut store = ClassListStore::new().replace_all(vec![class("Loaded", 1)]);

        for (i, name) in ["c1", "c2", "c3"].iter().enumerate() {
            store = store.prepend(class(name, i as u32 + 2));
        }

        assert_eq!(names(&store), vec!["c3", "c2", "c1", "Loaded"]);
    }

    #[test]
    fn test_settle_keeps_prior_contents() {
        let loaded = ClassListStore::new().replace_all(vec![class("Bio 101", 2)]);

        let settled = loaded.settle();

        assert_eq!(settled.classes, loaded.classes);
        assert!(!settled.loading);
    }

    #[test]
    fn test_settle_on_fresh_store_clears_loading_only() {
        let store = ClassListStore::new().settle();

        assert!(store.is_empty());
        assert!(!store.loading);
    }
}
