//! Application state for the development backend.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use core_types::{Label, Project, ProjectId, Timestamp, parse_timestamp};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;
use web_types::{NewProject, ProjectListQuery, ProjectUpdate};

use crate::config::UserSpec;
use crate::error::{ApiError, ApiResult};

/// Status given to every new project.
pub const INITIAL_STATUS: &str = "Iniciado";
/// Phase given to every new project.
pub const INITIAL_PHASE: i64 = 1;

const NAME_LEN: (usize, usize) = (3, 50);
const DESCRIPTION_LEN: (usize, usize) = (10, 500);
const STATUS_LEN: (usize, usize) = (1, 20);
const FEEDBACK_LEN: (usize, usize) = (0, 500);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// SHA-256 password digests by username.
    users: Arc<HashMap<String, String>>,
    /// Issued bearer tokens, mapped to their user.
    tokens: Arc<RwLock<HashMap<String, String>>>,
    projects: Arc<RwLock<ProjectTable>>,
    /// Zone for deadlines sent without one; the host zone when unset.
    utc_offset: Option<FixedOffset>,
}

struct ProjectTable {
    next_id: ProjectId,
    rows: BTreeMap<ProjectId, Project>,
}

fn digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

impl AppState {
    /// Create a new app state accepting the given users.
    pub fn new(users: &[UserSpec]) -> Self {
        let users = users
            .iter()
            .map(|u| (u.username.clone(), digest(&u.password)))
            .collect();

        Self {
            users: Arc::new(users),
            tokens: Arc::new(RwLock::new(HashMap::new())),
            projects: Arc::new(RwLock::new(ProjectTable {
                next_id: 1,
                rows: BTreeMap::new(),
            })),
            utc_offset: None,
        }
    }

    /// Read naive deadlines at a fixed offset instead of the host zone.
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    /// Check credentials and issue a new bearer token.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<String> {
        match self.users.get(username) {
            Some(expected) if *expected == digest(password) => {}
            _ => return Err(ApiError::BadCredentials),
        }

        let token = Uuid::new_v4().to_string();
        self.tokens
            .write()
            .await
            .insert(token.clone(), username.to_string());

        Ok(token)
    }

    /// Resolve an `Authorization` header value to a username.
    pub async fn authorize(&self, authorization: Option<&str>) -> ApiResult<String> {
        let token = authorization
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .ok_or(ApiError::Unauthorized)?;

        self.tokens
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or(ApiError::Unauthorized)
    }

    /// One page of projects, ordered by id.
    pub async fn list(&self, query: ProjectListQuery) -> Vec<Project> {
        self.projects
            .read()
            .await
            .rows
            .values()
            .skip(query.skip)
            .take(query.limit)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: ProjectId) -> ApiResult<Project> {
        self.projects
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    /// Validate and store a new project.
    pub async fn create(&self, input: NewProject) -> ApiResult<Project> {
        check_len("Name", &input.name, NAME_LEN)?;
        check_len("Description", &input.description, DESCRIPTION_LEN)?;
        let deadline = self.future_deadline(&input.deadline)?;

        let mut table = self.projects.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let project = Project::new(id, input.name.trim(), input.description.trim(), deadline)
            .with_status(INITIAL_STATUS)
            .with_phase(INITIAL_PHASE)
            .stamped(Utc::now());
        table.rows.insert(id, project.clone());

        Ok(project)
    }

    /// Apply the given fields and move the project to its next phase.
    pub async fn update(&self, id: ProjectId, changes: ProjectUpdate) -> ApiResult<Project> {
        if let Some(name) = &changes.name {
            check_len("Name", name, NAME_LEN)?;
        }
        if let Some(description) = &changes.description {
            check_len("Description", description, DESCRIPTION_LEN)?;
        }
        if let Some(status) = &changes.status {
            check_len("Status", status, STATUS_LEN)?;
        }
        if let Some(feedback) = &changes.feedback {
            check_len("Feedback", feedback, FEEDBACK_LEN)?;
        }
        let deadline = changes
            .deadline
            .as_deref()
            .map(|raw| self.future_deadline(raw))
            .transpose()?;

        let mut table = self.projects.write().await;
        let project = table.rows.get_mut(&id).ok_or(ApiError::NotFound)?;

        if let Some(name) = changes.name {
            project.name = name.trim().to_string();
        }
        if let Some(description) = changes.description {
            project.description = description.trim().to_string();
        }
        if let Some(status) = changes.status {
            project.status = Some(Label::Text(status.trim().to_string()));
        }
        if let Some(deadline) = deadline {
            project.deadline = deadline;
        }
        project.current_phase = Some(Label::Number(next_phase(project.current_phase.as_ref())));
        project.updated_at = Some(Utc::now().into());

        Ok(project.clone())
    }

    pub async fn delete(&self, id: ProjectId) -> ApiResult<()> {
        self.projects
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(ApiError::NotFound)
    }

    fn future_deadline(&self, raw: &str) -> ApiResult<Timestamp> {
        let now = Utc::now();
        match self.utc_offset {
            Some(offset) => check_deadline(raw, now, &offset),
            None => check_deadline(raw, now, &Local),
        }
    }
}

/// Phase after `current`; a missing or non-numeric phase restarts at the first.
fn next_phase(current: Option<&Label>) -> i64 {
    match current {
        Some(Label::Number(phase)) => phase + 1,
        _ => INITIAL_PHASE,
    }
}

/// Parse a deadline, reading naive input as wall time in `zone`, and
/// require it to lie after `now`.
fn check_deadline<Tz: TimeZone>(raw: &str, now: DateTime<Utc>, zone: &Tz) -> ApiResult<Timestamp> {
    let invalid = |reason: String| ApiError::Validation(format!("Invalid deadline: {reason}"));

    let deadline = parse_timestamp(raw).map_err(|e| invalid(e.to_string()))?;
    let at = deadline
        .resolve(zone)
        .ok_or_else(|| invalid(format!("{} does not exist in the server's time zone", raw.trim())))?;
    if at < now {
        return Err(ApiError::Validation("Deadline must be in the future".to_string()));
    }

    Ok(deadline)
}

fn check_len(field: &str, value: &str, (min, max): (usize, usize)) -> ApiResult<()> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(ApiError::Validation(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}
