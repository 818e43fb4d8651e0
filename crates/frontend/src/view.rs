//! Yew state handles behind the controller's view ports.

use std::rc::Rc;

use core_types::Project;
use project_client::{Notification, Notifier, ProjectsView};
use yew::prelude::*;

/// The shared notification surface.
pub type NoticeHandle = UseStateHandle<Option<Notification>>;

/// Bumped on every form reset; the form is keyed on it.
#[derive(Debug, Default, PartialEq)]
pub struct FormGeneration(u32);

impl FormGeneration {
    pub fn key(&self) -> String {
        self.0.to_string()
    }
}

impl Reducible for FormGeneration {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

/// Writes notifications into the shared status element.
#[derive(Clone)]
pub struct NoticeView {
    notice: NoticeHandle,
}

impl NoticeView {
    pub fn new(notice: NoticeHandle) -> Self {
        Self { notice }
    }
}

impl Notifier for NoticeView {
    fn notify(&self, notification: Notification) {
        self.notice.set(Some(notification));
    }
}

/// View port for the project page.
#[derive(Clone)]
pub struct PageView {
    projects: UseStateHandle<Rc<Vec<Project>>>,
    notice: NoticeView,
    form: UseReducerDispatcher<FormGeneration>,
}

impl PageView {
    pub fn new(
        projects: UseStateHandle<Rc<Vec<Project>>>,
        notice: NoticeHandle,
        form: UseReducerDispatcher<FormGeneration>,
    ) -> Self {
        Self {
            projects,
            notice: NoticeView::new(notice),
            form,
        }
    }
}

impl Notifier for PageView {
    fn notify(&self, notification: Notification) {
        self.notice.notify(notification);
    }
}

impl ProjectsView for PageView {
    fn render_projects(&self, projects: &[Project]) {
        self.projects.set(Rc::new(projects.to_vec()));
    }

    fn reset_form(&self) {
        self.form.dispatch(());
    }
}
