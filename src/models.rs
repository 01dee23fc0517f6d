//! Frontend Models
//!
//! Data structures matching the task service payloads, plus the login form
//! schema.

use serde::{Deserialize, Serialize};

/// Task record (matches the `/tasks` resource)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub name: String,
    pub done: bool,
}

/// One page of tasks as returned by `GET /tasks`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskListResponse {
    #[serde(default)]
    pub data: Vec<Task>,
    #[serde(default)]
    pub total: u32,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page")]
    pub pages: u32,
}

fn default_page() -> u32 {
    1
}

/// Trimmed task name, or `None` when nothing is left after trimming.
pub fn normalized_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Submitted login credentials
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Per-field validation errors for the login form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }

    /// Summary line for the alert stack.
    pub fn message(&self) -> String {
        let fields: Vec<&str> = [
            self.username.as_ref().map(|_| "username"),
            self.password.as_ref().map(|_| "password"),
        ]
        .into_iter()
        .flatten()
        .collect();
        format!("Check the login form: {}", fields.join(", "))
    }
}

/// Validate credentials: both fields required, non-empty after trim.
pub fn validate_login(form: &LoginForm) -> Result<(), LoginErrors> {
    let mut errors = LoginErrors::default();
    if form.username.trim().is_empty() {
        errors.username = Some("Username is required".to_string());
    }
    if form.password.trim().is_empty() {
        errors.password = Some("Password is required".to_string());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_name() {
        assert_eq!(normalized_name("  buy milk "), Some("buy milk".to_string()));
        assert_eq!(normalized_name(""), None);
        assert_eq!(normalized_name("   "), None);
    }

    #[test]
    fn test_validate_login_reports_each_field() {
        let errors = validate_login(&LoginForm {
            username: "  ".to_string(),
            password: String::new(),
        })
        .unwrap_err();
        assert!(errors.username.is_some());
        assert!(errors.password.is_some());

        let errors = validate_login(&LoginForm {
            username: "ana".to_string(),
            password: String::new(),
        })
        .unwrap_err();
        assert!(errors.username.is_none());
        assert!(errors.password.is_some());
        assert_eq!(errors.message(), "Check the login form: password");
    }

    #[test]
    fn test_validate_login_accepts_filled_form() {
        let form = LoginForm {
            username: "ana".to_string(),
            password: "secret".to_string(),
        };
        assert!(validate_login(&form).is_ok());
    }

    #[test]
    fn test_task_list_response_defaults() {
        // Missing fields fall back to an empty first page
        let response: TaskListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
        assert_eq!(response.total, 0);
        assert_eq!(response.page, 1);
        assert_eq!(response.pages, 1);
    }
}
