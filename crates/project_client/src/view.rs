//! View port: what the controller needs from the page.

use chrono::TimeZone;
use core_types::{Project, ProjectId};
use std::fmt;

/// Which way the notification surface is toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

/// Content of the shared status element. Last write wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    /// CSS color for the message text.
    pub fn color(&self) -> &'static str {
        match self.kind {
            NotificationKind::Error => "red",
            NotificationKind::Success => "green",
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Display-ready fields of one project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    /// Stable list key, unique even when ids repeat
    pub key: String,
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub deadline: String,
    pub status: String,
    pub phase: String,
}

impl ProjectCard {
    pub fn from_project<Tz: TimeZone>(project: &Project, tz: &Tz) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            key: project.id.to_string(),
            id: project.id,
            name: project.name.clone(),
            description: project.description.clone(),
            deadline: project.deadline.format_in(tz),
            status: project.status_text(),
            phase: project.phase_text(),
        }
    }
}

/// One card per project, in input order. Keys combine position and id.
pub fn project_cards<Tz: TimeZone>(projects: &[Project], tz: &Tz) -> Vec<ProjectCard>
where
    Tz::Offset: fmt::Display,
{
    projects
        .iter()
        .enumerate()
        .map(|(position, project)| ProjectCard {
            key: format!("{position}-{}", project.id),
            ..ProjectCard::from_project(project, tz)
        })
        .collect()
}

/// Anything that can show a notification.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// The project page as seen by the controller.
pub trait ProjectsView: Notifier {
    /// Replace the rendered project list.
    fn render_projects(&self, projects: &[Project]);

    /// Clear the new-project form.
    fn reset_form(&self);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<V: ProjectsView + ?Sized> ProjectsView for &V {
    fn render_projects(&self, projects: &[Project]) {
        (**self).render_projects(projects);
    }

    fn reset_form(&self) {
        (**self).reset_form();
    }
}
