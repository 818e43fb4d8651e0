//! Fakes shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use core_types::{Project, ProjectId};

use crate::actions::ProjectActions;
use crate::error::{ClientError, Result};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport};
use crate::view::{Notification, Notifier, ProjectsView};

/// Replays canned responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<ApiResponse>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(self, reason: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ClientError::Network(reason.to_string())));
        self
    }

    pub fn request(&self, idx: usize) -> ApiRequest {
        self.requests.borrow()[idx].clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no scripted response".to_string())))
    }
}

/// Records what the controller asked the page to do.
#[derive(Default)]
pub struct RecordingView {
    renders: RefCell<Vec<Vec<ProjectId>>>,
    notifications: RefCell<Vec<Notification>>,
    resets: Cell<usize>,
}

impl RecordingView {
    pub fn renders(&self) -> Vec<Vec<ProjectId>> {
        self.renders.borrow().clone()
    }

    /// Ids shown by the most recent render.
    pub fn current(&self) -> Vec<ProjectId> {
        self.renders.borrow().last().cloned().unwrap_or_default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }

    pub fn resets(&self) -> usize {
        self.resets.get()
    }

    pub fn is_untouched(&self) -> bool {
        self.renders.borrow().is_empty()
            && self.notifications.borrow().is_empty()
            && self.resets.get() == 0
    }
}

impl Notifier for RecordingView {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

impl ProjectsView for RecordingView {
    fn render_projects(&self, projects: &[Project]) {
        self.renders
            .borrow_mut()
            .push(projects.iter().map(|p| p.id).collect());
    }

    fn reset_form(&self) {
        self.resets.set(self.resets.get() + 1);
    }
}

/// Records which ids reached the action slots.
#[derive(Default)]
pub struct RecordingActions {
    edits: RefCell<Vec<ProjectId>>,
    deletes: RefCell<Vec<ProjectId>>,
}

impl RecordingActions {
    pub fn edits(&self) -> Vec<ProjectId> {
        self.edits.borrow().clone()
    }

    pub fn deletes(&self) -> Vec<ProjectId> {
        self.deletes.borrow().clone()
    }
}

impl ProjectActions for RecordingActions {
    fn edit(&self, id: ProjectId) {
        self.edits.borrow_mut().push(id);
    }

    fn delete(&self, id: ProjectId) {
        self.deletes.borrow_mut().push(id);
    }
}

/// A project as the backend would serialize it.
pub fn project_json(id: ProjectId, name: &str) -> String {
    format!(
        r#"{{"id": {id}, "name": "{name}", "description": "About {name}", "deadline": "2030-05-01T12:30:00", "status": "Iniciado", "current_phase": 1}}"#
    )
}
