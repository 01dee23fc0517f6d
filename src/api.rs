//! REST API Adapter
//!
//! Frontend bindings to the task service. Every call is a plain
//! request/response round trip; failures come back as strings for the
//! caller to surface as an alert.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::models::{Task, TaskListResponse};

/// Base path of the task service.
pub const API_BASE: &str = "/api";

// ========================
// Request Body Structs
// ========================

#[derive(Serialize)]
pub struct NameBody<'a> {
    pub name: &'a str,
}

#[derive(Serialize)]
pub struct DoneBody {
    pub done: bool,
}

/// Build the query string for a task page request.
///
/// `search` is omitted entirely when empty, percent-encoded otherwise.
pub fn build_query(page: u32, limit: u32, search: &str) -> String {
    let mut query = format!("page={}&limit={}", page, limit);
    if !search.is_empty() {
        query.push_str("&search=");
        query.push_str(&utf8_percent_encode(search, NON_ALPHANUMERIC).to_string());
    }
    query
}

// ========================
// Task Endpoints
// ========================

pub async fn list_tasks(page: u32, limit: u32, search: &str) -> Result<TaskListResponse, String> {
    let url = format!("{}/tasks?{}", API_BASE, build_query(page, limit, search));
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("GET /tasks returned {}", response.status()));
    }
    response
        .json::<TaskListResponse>()
        .await
        .map_err(|e| e.to_string())
}

/// Create a task. `Ok(Some)` when the server echoes the created record,
/// `Ok(None)` when the body carries no record (caller should refetch).
pub async fn create_task(name: &str) -> Result<Option<Task>, String> {
    let response = Request::post(&format!("{}/tasks", API_BASE))
        .json(&NameBody { name })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("POST /tasks returned {}", response.status()));
    }
    Ok(response.json::<Task>().await.ok())
}

pub async fn rename_task(id: u32, name: &str) -> Result<(), String> {
    let response = Request::put(&format!("{}/tasks/{}", API_BASE, id))
        .json(&NameBody { name })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("PUT /tasks/{} returned {}", id, response.status()));
    }
    Ok(())
}

pub async fn set_task_done(id: u32, done: bool) -> Result<(), String> {
    let response = Request::patch(&format!("{}/tasks/{}", API_BASE, id))
        .json(&DoneBody { done })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("PATCH /tasks/{} returned {}", id, response.status()));
    }
    Ok(())
}

pub async fn delete_task(id: u32) -> Result<(), String> {
    let response = Request::delete(&format!("{}/tasks/{}", API_BASE, id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("DELETE /tasks/{} returned {}", id, response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_without_search() {
        assert_eq!(build_query(1, 10, ""), "page=1&limit=10");
    }

    #[test]
    fn test_build_query_encodes_search() {
        assert_eq!(
            build_query(2, 5, "foo bar"),
            "page=2&limit=5&search=foo%20bar"
        );
    }
}
