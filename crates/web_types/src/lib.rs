//! Request and response bodies exchanged between the project board
//! frontend and its backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Form field carrying the project name.
pub const FIELD_NAME: &str = "name";
/// Form field carrying the project description.
pub const FIELD_DESCRIPTION: &str = "description";
/// Form field carrying the project deadline.
pub const FIELD_DEADLINE: &str = "deadline";

/// Default page size for project listings.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Username and password, sent form-urlencoded to `/token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Successful `/token` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl TokenResponse {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: default_token_type(),
        }
    }
}

/// Submitted new-project form, as a plain field-to-value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectForm(BTreeMap<String, String>);

impl ProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProjectForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Typed view of a project form, as the backend accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub deadline: String,
}

/// Body of `PUT /projects/:id`.
///
/// Every field is optional; absent ones are left unchanged. Each update
/// moves the project on to its next phase, and `feedback` is the
/// reviewer's note on the phase being closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Query parameters for `GET /projects`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ProjectListQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_list_limit")]
    pub limit: usize,
}

fn default_list_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

impl Default for ProjectListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// Error body: `{"detail": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Detail>,
}

/// The `detail` member of an error body.
///
/// Plain errors carry a message; validation errors carry a list of
/// entries, each with its own `msg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Detail {
    Message(String),
    Items(Vec<DetailItem>),
}

/// One validation failure inside an error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailItem {
    pub msg: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            detail: Some(Detail::Message(message.into())),
        }
    }

    /// Human-readable message, if the body carried a non-empty one.
    pub fn message(&self) -> Option<String> {
        let message = match self.detail.as_ref()? {
            Detail::Message(message) => message.trim().to_string(),
            Detail::Items(items) => items
                .iter()
                .map(|item| item.msg.trim())
                .filter(|msg| !msg.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
        };

        (!message.is_empty()).then_some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_form_serializes_as_flat_object() {
        let form = ProjectForm::new()
            .with(FIELD_NAME, "Website")
            .with(FIELD_DESCRIPTION, "Relaunch the marketing site")
            .with(FIELD_DEADLINE, "2030-05-01T12:30");

        let value = serde_json::to_value(&form).unwrap();

        assert_eq!(value["name"], "Website");
        assert_eq!(value["deadline"], "2030-05-01T12:30");
        assert_eq!(value.as_object().unwrap().len(), 3);
        assert_eq!(form.get(FIELD_DESCRIPTION), Some("Relaunch the marketing site"));
        assert_eq!(form.get("status"), None);
    }

    #[test]
    fn test_project_update_fields_are_optional() {
        let empty: ProjectUpdate = serde_json::from_str("{}").unwrap();
        let feedback: ProjectUpdate =
            serde_json::from_str(r#"{"feedback": "Scope approved", "status": null}"#).unwrap();

        assert_eq!(empty, ProjectUpdate::default());
        assert_eq!(feedback.feedback.as_deref(), Some("Scope approved"));
        assert_eq!(feedback.status, None);
        assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
    }

    #[test]
    fn test_project_form_reads_as_new_project() {
        let form: ProjectForm = [(FIELD_NAME, "Docs"), (FIELD_DEADLINE, "2030-01-01T00:00")]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&form).unwrap();
        let parsed: NewProject = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.name, "Docs");
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn test_credentials_form_encoding() {
        let creds = Credentials::new("ana maria", "p&ss=word");

        let body = serde_urlencoded::to_string(&creds).unwrap();

        assert_eq!(body, "username=ana+maria&password=p%26ss%3Dword");
    }

    #[test]
    fn test_token_response_defaults_type() {
        let token: TokenResponse = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();

        assert_eq!(token, TokenResponse::bearer("abc"));
    }

    #[test]
    fn test_error_body_message_variants() {
        let plain: ErrorBody = serde_json::from_str(r#"{"detail": "Name taken"}"#).unwrap();
        let items: ErrorBody = serde_json::from_str(
            r#"{"detail": [{"loc": ["body", "name"], "msg": "too short"}, {"msg": "bad deadline"}]}"#,
        )
        .unwrap();
        let missing: ErrorBody = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        let blank: ErrorBody = serde_json::from_str(r#"{"detail": "  "}"#).unwrap();

        assert_eq!(plain.message().as_deref(), Some("Name taken"));
        assert_eq!(items.message().as_deref(), Some("too short; bad deadline"));
        assert_eq!(missing.message(), None);
        assert_eq!(blank.message(), None);
    }

    #[test]
    fn test_list_query_defaults() {
        let query = ProjectListQuery::default();

        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, DEFAULT_LIST_LIMIT);
    }
}
