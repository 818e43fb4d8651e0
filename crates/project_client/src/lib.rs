//! Controller layer for the project board UI.
//!
//! This crate owns everything between a UI event and the network:
//! - [`ProjectsApi`]: the three backend calls (login, list, create)
//! - [`ProjectsController`]: binds those calls to a view, a token store
//!   and the edit/delete action slots
//!
//! It has no dependency on the browser. The frontend supplies an
//! [`HttpTransport`], a [`TokenStore`] and a [`ProjectsView`]; tests supply
//! fakes.

mod actions;
mod api;
mod config;
mod controller;
mod error;
mod storage;
#[cfg(test)]
mod testing;
mod transport;
mod view;

pub use actions::{LoggingActions, ProjectActions};
pub use api::{
    CREATE_FAILED, FETCH_FAILED, LOGIN_FAILED, LOGIN_PATH, PROJECTS_PATH, ProjectsApi,
};
pub use config::ClientConfig;
pub use controller::{PROJECT_CREATED, ProjectsController};
pub use error::{ClientError, Result};
pub use storage::{MemoryTokenStore, TokenStore};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, RequestBody};
pub use view::{Notification, NotificationKind, Notifier, ProjectCard, ProjectsView, project_cards};
