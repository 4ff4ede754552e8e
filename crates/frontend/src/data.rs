//! Thin client for the hosted data service's `classes` table.
//!
//! The service owns row identity: inserts are sent with
//! `Prefer: return=representation` and the echoed row (server-assigned
//! `id` and `created_at` included) is what flows back into the UI.

use gloo_net::http::Request;
use thiserror::Error;
use uuid::Uuid;
use web_types::{Class, NewClass};

use crate::config;

/// Errors from data service operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("service returned HTTP {0}")]
    Http(u16),

    #[error("insert echoed no row")]
    EmptyEcho,
}

/// Fetch all classes owned by `instructor_id`, newest first.
pub async fn fetch_classes(instructor_id: Uuid) -> Result<Vec<Class>, DataError> {
    let url = classes_query_url(config::api_base(), instructor_id);
    let resp = Request::get(&url)
        .header("apikey", config::api_key())
        .header("Authorization", &format!("Bearer {}", config::api_key()))
        .send()
        .await?;

    if !resp.ok() {
        return Err(DataError::Http(resp.status()));
    }

    Ok(resp.json::<Vec<Class>>().await?)
}

/// Insert one class and return the service's echo of the stored row.
pub async fn insert_class(new_class: &NewClass) -> Result<Class, DataError> {
    let resp = Request::post(&format!("{}/rest/v1/classes", config::api_base()))
        .header("apikey", config::api_key())
        .header("Authorization", &format!("Bearer {}", config::api_key()))
        .header("Prefer", "return=representation")
        .json(&[new_class])?
        .send()
        .await?;

    if !resp.ok() {
        return Err(DataError::Http(resp.status()));
    }

    first_echoed(resp.json::<Vec<Class>>().await?)
}

/// Build the list query for one instructor's classes, newest first.
fn classes_query_url(base: &str, instructor_id: Uuid) -> String {
    format!(
        "{}/rest/v1/classes?select=*&instructor_id=eq.{}&order=created_at.desc",
        base, instructor_id
    )
}

/// Pick the inserted row out of the service's echo.
fn first_echoed(mut rows: Vec<Class>) -> Result<Class, DataError> {
    if rows.is_empty() {
        return Err(DataError::EmptyEcho);
    }
    Ok(rows.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn class(name: &str) -> Class {
        Class {
            id: Uuid::new_v4(),
            instructor_id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            is_active: true,
        }
    }

    #[test]
    fn test_classes_query_url_filters_and_orders() {
        let uid = Uuid::nil();

        let url = classes_query_url("https://api.example.com", uid);

        assert_eq!(
            url,
            "https://api.example.com/rest/v1/classes?select=*\
             &instructor_id=eq.00000000-0000-0000-0000-000000000000\
             &order=created_at.desc"
        );
    }

    #[test]
    fn test_first_echoed_takes_first_row() {
        let rows = vec![class("Bio 101"), class("Chem 101")];

        let row = first_echoed(rows).unwrap();

        assert_eq!(row.name, "Bio 101");
    }

    #[test]
    fn test_first_echoed_rejects_empty() {
        assert!(matches!(first_echoed(vec![]), Err(DataError::EmptyEcho)));
    }
}
