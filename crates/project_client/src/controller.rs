//! Binds UI events to backend calls and their outcomes to the view.

use core_types::{Project, ProjectId};
use web_types::{Credentials, FIELD_NAME, ProjectForm};

use crate::actions::ProjectActions;
use crate::api::{LOGIN_FAILED, ProjectsApi};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::storage::TokenStore;
use crate::transport::HttpTransport;
use crate::view::{Notification, Notifier, ProjectsView};

/// Success text shown after a project is created.
pub const PROJECT_CREATED: &str = "Project created successfully";

/// UI controller for the project board.
///
/// Every async operation reports failure on the view before returning
/// it, so callers only need the `Result` to decide what happens next.
pub struct ProjectsController<T, S, V, A> {
    api: ProjectsApi<T>,
    tokens: S,
    view: V,
    actions: A,
}

impl<T, S, V, A> ProjectsController<T, S, V, A>
where
    T: HttpTransport,
    S: TokenStore,
    V: Notifier,
{
    pub fn new(config: ClientConfig, transport: T, tokens: S, view: V, actions: A) -> Self {
        Self {
            api: ProjectsApi::new(config, transport),
            tokens,
            view,
            actions,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Log in and store the issued token.
    ///
    /// Any failure, including a transport error, shows "Login failed".
    /// Storage is only written after a successful response.
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        let token = match self.api.login(credentials).await {
            Ok(token) => token,
            Err(err) => {
                log::warn!("login for {} failed: {err}", credentials.username);
                self.view.notify(Notification::error(LOGIN_FAILED));
                return Err(err);
            }
        };

        let key = &self.api.config().token_key;
        if let Err(err) = self.tokens.save(key, &token.access_token) {
            self.view.notify(Notification::error(err.user_message()));
            return Err(err);
        }

        log::info!("logged in as {}", credentials.username);
        Ok(())
    }

    fn token(&self) -> Option<String> {
        match self.tokens.load(&self.api.config().token_key) {
            Ok(token) => token,
            Err(err) => {
                log::warn!("could not read token: {err}");
                None
            }
        }
    }
}

impl<T, S, V, A> ProjectsController<T, S, V, A>
where
    T: HttpTransport,
    S: TokenStore,
    V: ProjectsView,
    A: ProjectActions,
{
    /// Page load: fetch and render the project list once.
    pub async fn on_load(&self) {
        // Failures are already on the notification surface.
        let _ = self.refresh().await;
    }

    /// Fetch the project list and replace the rendered one.
    pub async fn refresh(&self) -> Result<Vec<Project>> {
        let token = self.token();
        match self.api.list_projects(token.as_deref()).await {
            Ok(projects) => {
                log::debug!("rendering {} projects", projects.len());
                self.view.render_projects(&projects);
                Ok(projects)
            }
            Err(err) => {
                self.view.notify(Notification::error(err.user_message()));
                Err(err)
            }
        }
    }

    /// Form submit: create the project, then reset the form and refetch.
    pub async fn submit_project(&self, form: &ProjectForm) -> Result<Project> {
        log::debug!("submitting project {:?}", form.get(FIELD_NAME).unwrap_or_default());
        let token = self.token();
        let created = match self.api.create_project(token.as_deref(), form).await {
            Ok(created) => created,
            Err(err) => {
                self.view.notify(Notification::error(err.user_message()));
                return Err(err);
            }
        };

        log::info!("created project {} ({})", created.id, created.name);
        self.view.notify(Notification::success(PROJECT_CREATED));
        self.view.reset_form();
        let _ = self.refresh().await;
        Ok(created)
    }

    /// Edit button on a card.
    pub fn on_edit(&self, id: ProjectId) {
        self.actions.edit(id);
    }

    /// Delete button on a card.
    pub fn on_delete(&self, id: ProjectId) {
        self.actions.delete(id);
    }
}
