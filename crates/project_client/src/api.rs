//! The backend calls made by the project board.

use core_types::Project;
use web_types::{Credentials, ErrorBody, ProjectForm, TokenResponse};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, RequestBody};

/// Token endpoint.
pub const LOGIN_PATH: &str = "/token";
/// Project collection endpoint.
pub const PROJECTS_PATH: &str = "/projects";

pub const LOGIN_FAILED: &str = "Login failed";
pub const FETCH_FAILED: &str = "Failed to fetch projects";
pub const CREATE_FAILED: &str = "Failed to create project";

/// Client for the project board REST API.
///
/// Each call is a single request; nothing is retried or batched.
pub struct ProjectsApi<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: HttpTransport> ProjectsApi<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse> {
        let body = serde_urlencoded::to_string(credentials)
            .map_err(|e| ClientError::Encode(e.to_string()))?;
        let request = ApiRequest::post(self.config.url(LOGIN_PATH), RequestBody::Form(body));

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(rejected(&response, LOGIN_FAILED));
        }

        response.json()
    }

    /// Fetch the project list.
    pub async fn list_projects(&self, token: Option<&str>) -> Result<Vec<Project>> {
        let request = ApiRequest::get(self.config.url(PROJECTS_PATH)).with_bearer(token);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(rejected(&response, FETCH_FAILED));
        }

        response.json()
    }

    /// Submit a new project. Rejections carry the server's `detail`.
    pub async fn create_project(&self, token: Option<&str>, form: &ProjectForm) -> Result<Project> {
        let body = serde_json::to_string(form).map_err(|e| ClientError::Encode(e.to_string()))?;
        let request =
            ApiRequest::post(self.config.url(PROJECTS_PATH), RequestBody::Json(body)).with_bearer(token);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let message = response
                .json::<ErrorBody>()
                .ok()
                .and_then(|body| body.message())
                .unwrap_or_else(|| CREATE_FAILED.to_string());
            return Err(ClientError::Rejected {
                status: response.status,
                message,
            });
        }

        response.json()
    }
}

fn rejected(response: &ApiResponse, message: &str) -> ClientError {
    log::debug!("request rejected with {}: {}", response.status, response.body);
    ClientError::Rejected {
        status: response.status,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedTransport, project_json};
    use crate::transport::Method;
    use futures::executor::block_on;

    fn api(transport: &ScriptedTransport) -> ProjectsApi<&ScriptedTransport> {
        ProjectsApi::new(ClientConfig::default(), transport)
    }

    #[test]
    fn test_login_sends_form_body() {
        let transport = ScriptedTransport::new().respond(200, r#"{"access_token": "abc"}"#);

        let token = block_on(api(&transport).login(&Credentials::new("ana", "s3cret&"))).unwrap();

        assert_eq!(token.access_token, "abc");
        let request = transport.request(0);
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "/token");
        assert_eq!(
            request.body,
            RequestBody::Form("username=ana&password=s3cret%26".to_string())
        );
        assert_eq!(request.bearer, None);
    }

    #[test]
    fn test_login_rejection_is_generic() {
        let transport =
            ScriptedTransport::new().respond(401, r#"{"detail": "Incorrect username or password"}"#);

        let err = block_on(api(&transport).login(&Credentials::new("ana", "x"))).unwrap_err();

        assert_eq!(
            err,
            ClientError::Rejected {
                status: 401,
                message: LOGIN_FAILED.to_string()
            }
        );
    }

    #[test]
    fn test_list_is_bodiless_authenticated_get() {
        let body = format!("[{}, {}]", project_json(1, "Alpha"), project_json(2, "Beta"));
        let transport = ScriptedTransport::new().respond(200, body);

        let projects = block_on(api(&transport).list_projects(Some("abc"))).unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].name, "Beta");
        let request = transport.request(0);
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.body, RequestBody::Empty);
        assert_eq!(request.authorization().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn test_list_failure_message() {
        let transport = ScriptedTransport::new().respond(500, "oops");

        let err = block_on(api(&transport).list_projects(None)).unwrap_err();

        assert_eq!(err.user_message(), FETCH_FAILED);
    }

    #[test]
    fn test_create_posts_form_as_json() {
        let transport = ScriptedTransport::new().respond(201, project_json(9, "Gamma"));
        let form = ProjectForm::new().with("name", "Gamma");

        let created = block_on(api(&transport).create_project(Some("abc"), &form)).unwrap();

        assert_eq!(created.id, 9);
        let request = transport.request(0);
        assert_eq!(request.body, RequestBody::Json(r#"{"name":"Gamma"}"#.to_string()));
        assert_eq!(request.bearer.as_deref(), Some("abc"));
    }

    #[test]
    fn test_create_rejection_uses_detail_or_fallback() {
        let transport = ScriptedTransport::new()
            .respond(422, r#"{"detail": "Deadline must be in the future"}"#)
            .respond(400, r#"{"message": "nope"}"#)
            .respond(502, "<html>bad gateway</html>");
        let form = ProjectForm::new();
        let api = api(&transport);

        let with_detail = block_on(api.create_project(None, &form)).unwrap_err();
        let without_detail = block_on(api.create_project(None, &form)).unwrap_err();
        let not_json = block_on(api.create_project(None, &form)).unwrap_err();

        assert_eq!(with_detail.user_message(), "Deadline must be in the future");
        assert_eq!(without_detail.user_message(), CREATE_FAILED);
        assert_eq!(not_json.user_message(), CREATE_FAILED);
    }

    #[test]
    fn test_network_failure_passes_through() {
        let transport = ScriptedTransport::new().fail("connection refused");

        let err = block_on(api(&transport).list_projects(None)).unwrap_err();

        assert_eq!(err, ClientError::Network("connection refused".to_string()));
    }

    #[test]
    fn test_base_url_prefixes_paths() {
        let transport = ScriptedTransport::new().respond(200, "[]");
        let api = ProjectsApi::new(ClientConfig::with_base_url("http://api.local"), &transport);

        block_on(api.list_projects(None)).unwrap();

        assert_eq!(transport.request(0).url, "http://api.local/projects");
    }
}
