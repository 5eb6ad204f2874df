use crate::Client;
use crate::error::{CliError, Result as CliResult};

use std::sync::Arc;

use log::{info, warn};
use mp_auth::{
    Authenticator, FileSessionStore, NavEntry, Registration, SessionGate, SessionState,
    SessionStore,
};
use mp_config::Config;
use mp_core::{
    AdminOverview, Identity, Issue, IssueReceipt, IssueStatus, IssueSubmission, NewUser,
    PortalUser, Role, Technician, TechnicianDashboard, View,
};
use serde::Serialize;

/// Identity as shown to the user; the stored password never leaves the store.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IdentitySummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: String,
}

impl From<&Identity> for IdentitySummary {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: identity.role,
            phone: identity.phone.clone(),
            created_at: identity.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionSummary {
    pub session: SessionState,
    pub user: Option<IdentitySummary>,
}

/// What the user view asks for before `mp issue submit`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IssueForm {
    pub required: Vec<&'static str>,
    pub optional: Vec<&'static str>,
}

impl Default for IssueForm {
    fn default() -> Self {
        Self {
            required: vec!["name", "email", "phone", "description"],
            optional: vec!["image"],
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ViewContent {
    IssueSubmission(IssueForm),
    TechnicianTasks(TechnicianDashboard),
    AdminOverview(AdminOverview),
}

/// One rendered screen of the authorized shell.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortalPage {
    pub role: Role,
    pub view: View,
    pub title: &'static str,
    pub navigation: Vec<NavEntry>,
    pub user: Option<IdentitySummary>,
    pub content: ViewContent,
}

/// Ties the session machinery to the backend client for one CLI run.
pub struct Portal {
    config: Config,
    store: Arc<dyn SessionStore>,
    client: Client,
}

impl Portal {
    pub fn new(config: Config, store: Arc<dyn SessionStore>, client: Client) -> Self {
        Self {
            config,
            store,
            client,
        }
    }

    /// File-backed session, backend URL from config unless overridden.
    pub fn from_config(config: Config, server: Option<&str>) -> CliResult<Self> {
        let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(config.session_path()?));
        let client = Client::new(server.unwrap_or(config.api.base_url.as_str()));
        Ok(Self::new(config, store, client))
    }

    fn authenticator(&self) -> Authenticator {
        Authenticator::new(self.store.clone(), &self.config.auth)
    }

    /// Runs the session gate once and fails unless someone is signed in.
    fn require_session(&self) -> CliResult<SessionGate> {
        let mut gate = SessionGate::new(self.store.clone());
        match gate.start()? {
            SessionState::Authenticated(_) => Ok(gate),
            SessionState::Loading | SessionState::Unauthenticated => Err(CliError::NotSignedIn),
        }
    }

    fn summary(gate: &SessionGate) -> SessionSummary {
        SessionSummary {
            session: gate.state(),
            user: gate.identity().map(IdentitySummary::from),
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub async fn login(&self, email: &str, password: &str) -> CliResult<SessionSummary> {
        let mut gate = SessionGate::new(self.store.clone());
        let state = gate.start()?;
        if let Some(current) = gate.identity() {
            info!("Replacing session for {} ({})", current.email, state);
        }

        let identity = self.authenticator().login(email, password).await?;
        gate.complete_login(identity)?;
        Ok(Self::summary(&gate))
    }

    pub async fn register(&self, registration: Registration) -> CliResult<SessionSummary> {
        let mut gate = SessionGate::new(self.store.clone());
        gate.start()?;

        let identity = self.authenticator().register(registration).await?;
        gate.complete_login(identity)?;
        Ok(Self::summary(&gate))
    }

    pub fn logout(&self) -> CliResult<SessionSummary> {
        let mut gate = SessionGate::new(self.store.clone());
        if let Err(e) = gate.start() {
            warn!("Session could not be read, clearing it anyway: {e}");
        }
        gate.logout()?;
        Ok(Self::summary(&gate))
    }

    pub fn session(&self) -> CliResult<SessionSummary> {
        let mut gate = SessionGate::new(self.store.clone());
        gate.start()?;
        Ok(Self::summary(&gate))
    }

    /// Opens the shell, optionally switching role through the sidebar first,
    /// and loads whatever the selected view needs.
    pub async fn open(&self, switch_to: Option<Role>) -> CliResult<PortalPage> {
        let mut gate = self.require_session()?;
        let mut shell = gate.shell().ok_or(CliError::NotSignedIn)?;

        if let Some(role) = switch_to {
            shell.switch_role(role)?;
        }

        let role = shell.role();
        let view = shell.view();
        let navigation = shell.navigation();
        let user = shell.identity().map(IdentitySummary::from);

        let content = match view {
            View::IssueSubmission => ViewContent::IssueSubmission(IssueForm::default()),
            View::TechnicianTasks => ViewContent::TechnicianTasks(self.fetch_dashboard().await?),
            View::AdminOverview => ViewContent::AdminOverview(self.fetch_overview().await?),
        };

        Ok(PortalPage {
            role,
            view,
            title: view.title(),
            navigation,
            user,
            content,
        })
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Creates the reporter, then the issue.
    pub async fn submit_issue(&self, submission: &IssueSubmission) -> CliResult<IssueReceipt> {
        self.require_session()?;
        submission.validate()?;

        self.client.create_user(&submission.reporter).await?;
        let receipt = self
            .client
            .create_issue(
                &submission.description,
                &submission.reporter.email,
                submission.image.as_deref(),
            )
            .await?;

        info!(
            "Issue {} submitted (category: {})",
            receipt.issue_id, receipt.category
        );
        Ok(receipt)
    }

    pub async fn technician_dashboard(&self) -> CliResult<TechnicianDashboard> {
        self.require_session()?;
        self.fetch_dashboard().await
    }

    /// Technician workflow step on one of the current technician's tasks.
    /// The backend is only called when the task's current status allows the
    /// move; the returned dashboard already reflects the new status.
    pub async fn update_issue_status(
        &self,
        issue_id: &str,
        target: IssueStatus,
    ) -> CliResult<TechnicianDashboard> {
        self.require_session()?;

        let mut dashboard = self.fetch_dashboard().await?;
        let task = dashboard
            .task(issue_id)
            .ok_or_else(|| CliError::IssueNotFound {
                id: issue_id.to_string(),
            })?;

        let next = task.issue.status.transition_to(target)?;
        self.client.update_issue_status(issue_id, next).await?;

        dashboard.apply_status(issue_id, next);
        info!("Issue {} marked as {}", issue_id, next.display_name());
        Ok(dashboard)
    }

    pub async fn list_issues(&self) -> CliResult<Vec<Issue>> {
        self.require_session()?;
        Ok(self.client.list_issues().await?)
    }

    pub async fn list_users(&self) -> CliResult<Vec<PortalUser>> {
        self.require_session()?;
        Ok(self.client.list_users().await?)
    }

    pub async fn create_user(&self, user: &NewUser) -> CliResult<serde_json::Value> {
        self.require_session()?;
        user.validate()?;
        Ok(self.client.create_user(user).await?)
    }

    pub async fn list_technicians(&self) -> CliResult<Vec<Technician>> {
        self.require_session()?;
        Ok(self.client.list_technicians().await?)
    }

    async fn fetch_dashboard(&self) -> CliResult<TechnicianDashboard> {
        let (issues, technicians) =
            tokio::try_join!(self.client.list_issues(), self.client.list_technicians())?;
        Ok(TechnicianDashboard::build(issues, technicians))
    }

    async fn fetch_overview(&self) -> CliResult<AdminOverview> {
        let (users, technicians, issues) = tokio::try_join!(
            self.client.list_users(),
            self.client.list_technicians(),
            self.client.list_issues()
        )?;
        Ok(AdminOverview::build(users, technicians, issues))
    }
}
