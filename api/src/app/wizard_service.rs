//! Wizard session service
//!
//! Hosts running step-wizards (checkout, vendor onboarding, sign-up, sign-in)
//! keyed by session id. Submitting a wizard converts its value bag into the
//! typed payload for the matching collaborator and delivers it on a spawned
//! task. Closing a session aborts any delivery still in flight, and a delivery
//! that finishes after its session is gone is dropped.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::domain::entities::{
    BookingRequest, Credentials, Experience, ExperienceId, FieldBag, FieldKind, FieldValue, FormCatalog,
    FormKind, Receipt, Registration, SessionId, Slot, SubmissionStatus, Transition, UploadMeta,
    VendorApplication, Wizard, WizardState,
};
use crate::domain::ports::{ApplicationGateway, AuthGateway, CatalogSource, CheckoutGateway};
use crate::error::{AppError, DomainError, GatewayError};

/// Fields never echoed back in a session view
const SECRET_FIELDS: &[&str] = &["password", "account_number"];

const DEFAULT_PAYMENT_METHOD: &str = "upi";

/// The collaborators submissions are delivered to
#[derive(Clone)]
pub struct Gateways {
    pub checkout: Arc<dyn CheckoutGateway>,
    pub auth: Arc<dyn AuthGateway>,
    pub applications: Arc<dyn ApplicationGateway>,
}

/// Typed submission, ready for its collaborator
enum Payload {
    Booking(BookingRequest),
    Registration(Registration),
    SignIn(Credentials),
    Application(VendorApplication),
}

impl Payload {
    async fn deliver(self, gateways: &Gateways) -> Result<Receipt, GatewayError> {
        match self {
            Payload::Booking(request) => gateways
                .checkout
                .confirm(&request)
                .await
                .map(Receipt::Booking),
            Payload::Registration(registration) => gateways
                .auth
                .register(&registration)
                .await
                .map(Receipt::Account),
            Payload::SignIn(credentials) => gateways
                .auth
                .sign_in(&credentials)
                .await
                .map(Receipt::Account),
            Payload::Application(application) => gateways
                .applications
                .submit(&application)
                .await
                .map(Receipt::Application),
        }
    }
}

/// A delivery in flight
struct Submission {
    ticket: u64,
    handle: Option<JoinHandle<()>>,
}

struct Session {
    kind: FormKind,
    wizard: Wizard,
    /// The listing being booked, for checkout sessions
    experience: Option<Experience>,
    status: SubmissionStatus,
    submission: Option<Submission>,
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(handle) = self.submission.as_mut().and_then(|s| s.handle.take()) {
            handle.abort();
        }
    }
}

type SessionMap = Arc<RwLock<HashMap<SessionId, Session>>>;

fn read(sessions: &SessionMap) -> RwLockReadGuard<'_, HashMap<SessionId, Session>> {
    sessions.read().unwrap_or_else(|e| e.into_inner())
}

fn write(sessions: &SessionMap) -> RwLockWriteGuard<'_, HashMap<SessionId, Session>> {
    sessions.write().unwrap_or_else(|e| e.into_inner())
}

/// An input on the current step, as the form screen labels it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// What a client sees of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: SessionId,
    pub kind: FormKind,
    pub state: WizardState,
    pub step: Option<u8>,
    pub total_steps: u8,
    pub steps: Vec<&'static str>,
    pub title: Option<&'static str>,
    pub fields: Vec<FieldView>,
    pub required_fields: Vec<&'static str>,
    pub progress: u8,
    pub values: FieldBag,
    pub submission: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_id: Option<ExperienceId>,
}

impl SessionView {
    fn of(id: SessionId, session: &Session) -> Self {
        let wizard = &session.wizard;
        let step = wizard.current_step_def();

        let mut values = FieldBag::new();
        for (name, value) in wizard.values().iter() {
            let value = if SECRET_FIELDS.contains(&name.as_str()) && value.is_present() {
                FieldValue::text("********")
            } else {
                value.clone()
            };
            values.insert(name.clone(), value);
        }

        Self {
            id,
            kind: session.kind,
            state: wizard.state(),
            step: wizard.current_step().map(|s| s.number()),
            total_steps: wizard.def().total_steps(),
            steps: wizard.def().steps().iter().map(|s| s.title).collect(),
            title: step.map(|s| s.title),
            fields: step
                .map(|s| {
                    s.fields
                        .iter()
                        .map(|f| FieldView {
                            name: f.name,
                            label: f.label,
                            kind: f.kind,
                            required: f.required,
                        })
                        .collect()
                })
                .unwrap_or_default(),
            required_fields: step.map(|s| s.required_fields()).unwrap_or_default(),
            progress: wizard.progress_percent(),
            values,
            submission: session.status.clone(),
            experience_id: session.experience.as_ref().map(|e| e.id.clone()),
        }
    }
}

/// Service for running wizard sessions
pub struct WizardService<C>
where
    C: CatalogSource,
{
    catalog: Arc<C>,
    forms: FormCatalog,
    gateways: Gateways,
    sessions: SessionMap,
    upload_limit: u64,
    default_slot: Slot,
    next_ticket: AtomicU64,
}

impl<C> WizardService<C>
where
    C: CatalogSource,
{
    pub fn new(catalog: Arc<C>, gateways: Gateways, upload_limit: u64, default_slot: Slot) -> Self {
        Self {
            catalog,
            forms: FormCatalog::new(),
            gateways,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            upload_limit,
            default_slot,
            next_ticket: AtomicU64::new(1),
        }
    }

    /// Start checkout for an experience, carrying over the slot picked on the
    /// detail view.
    pub fn start_checkout(
        &self,
        experience_id: &ExperienceId,
        slot: Option<&str>,
    ) -> Result<SessionView, AppError> {
        let experience = self
            .catalog
            .experience(experience_id)
            .ok_or_else(|| DomainError::NotFound(format!("Experience {}", experience_id)))?
            .clone();

        let slot = match slot.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse::<Slot>().map_err(AppError::BadRequest)?,
            None => self.default_slot.clone(),
        };

        let mut wizard = Wizard::new(self.forms.def(FormKind::Checkout), self.upload_limit);
        wizard.set_field("slot", FieldValue::text(slot.as_str()))?;
        wizard.set_field("payment_method", FieldValue::text(DEFAULT_PAYMENT_METHOD))?;

        tracing::info!(
            experience_id = %experience.id,
            slot = %slot,
            "Starting checkout"
        );

        Ok(self.insert(FormKind::Checkout, wizard, Some(experience)))
    }

    /// Start an onboarding, sign-up or sign-in session
    pub fn start(&self, kind: FormKind) -> Result<SessionView, AppError> {
        if kind == FormKind::Checkout {
            return Err(AppError::BadRequest(
                "checkout starts from an experience".to_string(),
            ));
        }

        let wizard = Wizard::new(self.forms.def(kind), self.upload_limit);
        Ok(self.insert(kind, wizard, None))
    }

    pub fn view(&self, id: &SessionId) -> Result<SessionView, AppError> {
        let sessions = read(&self.sessions);
        let session = sessions.get(id).ok_or_else(|| not_found(id))?;
        Ok(SessionView::of(*id, session))
    }

    /// Write several fields at once. Either all of them land or none do.
    pub fn update_fields(
        &self,
        id: &SessionId,
        fields: Vec<(String, FieldValue)>,
    ) -> Result<SessionView, AppError> {
        self.with_session(id, |session| {
            let mut staged = session.wizard.clone();
            for (name, value) in fields {
                staged.set_field(&name, value)?;
            }
            session.wizard = staged;
            Ok(())
        })
    }

    pub fn toggle(&self, id: &SessionId, field: &str, item: &str) -> Result<SessionView, AppError> {
        self.with_session(id, |session| {
            let selected = session.wizard.toggle(field, item)?;
            tracing::debug!(session_id = %id, field, item, selected, "Toggled list item");
            Ok(())
        })
    }

    pub fn attach_upload(
        &self,
        id: &SessionId,
        field: &str,
        meta: UploadMeta,
    ) -> Result<SessionView, AppError> {
        self.with_session(id, |session| {
            if let Err(e) = session.wizard.attach_upload(field, meta) {
                tracing::warn!(session_id = %id, field, error = %e, "Upload rejected");
                return Err(e.into());
            }
            Ok(())
        })
    }

    /// Move forward. From the last step this submits and starts delivery.
    pub fn advance(&self, id: &SessionId) -> Result<SessionView, AppError> {
        let (view, delivery) = {
            let mut sessions = write(&self.sessions);
            let session = sessions.get_mut(id).ok_or_else(|| not_found(id))?;

            let delivery = if session.wizard.on_last_step() {
                // Payload first: a rejected bag leaves the step and values as they were
                session.wizard.validate_current()?;
                let payload = payload_for(session, session.wizard.values()).map_err(|e| {
                    tracing::warn!(session_id = %id, kind = %session.kind, error = %e, "Submission rejected");
                    AppError::from(e)
                })?;
                session.wizard.advance()?;

                let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);
                session.status = SubmissionStatus::Pending;
                session.submission = Some(Submission {
                    ticket,
                    handle: None,
                });
                tracing::info!(session_id = %id, kind = %session.kind, "Submitting");
                Some((ticket, payload))
            } else {
                if let Transition::Moved(step) = session.wizard.advance()? {
                    tracing::debug!(session_id = %id, kind = %session.kind, step = step.number(), "Advanced");
                }
                None
            };

            (SessionView::of(*id, session), delivery)
        };

        if let Some((ticket, payload)) = delivery {
            self.spawn_delivery(*id, ticket, payload);
        }

        Ok(view)
    }

    /// Move back. From the first step this cancels and removes the session.
    pub fn back(&self, id: &SessionId) -> Result<SessionView, AppError> {
        let mut sessions = write(&self.sessions);
        let session = sessions.get_mut(id).ok_or_else(|| not_found(id))?;

        let transition = session.wizard.retreat()?;
        let view = SessionView::of(*id, session);

        match transition {
            Transition::Cancelled => {
                tracing::info!(session_id = %id, kind = %session.kind, "Cancelled");
                sessions.remove(id);
            }
            Transition::Moved(step) => {
                tracing::debug!(session_id = %id, step = step.number(), "Went back");
            }
            Transition::Submitted(_) => {}
        }

        Ok(view)
    }

    /// Tear a session down, aborting any delivery still in flight
    pub fn close(&self, id: &SessionId) -> Result<(), AppError> {
        let removed = write(&self.sessions).remove(id);
        match removed {
            Some(session) => {
                let pending = session.status.is_pending();
                tracing::info!(session_id = %id, kind = %session.kind, pending, "Closed session");
                // Dropping the session aborts its task
                drop(session);
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }

    pub fn session_count(&self) -> usize {
        read(&self.sessions).len()
    }

    fn insert(&self, kind: FormKind, wizard: Wizard, experience: Option<Experience>) -> SessionView {
        let id = SessionId::new();
        let session = Session {
            kind,
            wizard,
            experience,
            status: SubmissionStatus::NotSubmitted,
            submission: None,
        };
        let view = SessionView::of(id, &session);
        write(&self.sessions).insert(id, session);

        tracing::debug!(session_id = %id, kind = %kind, "Started session");
        view
    }

    fn with_session<F>(&self, id: &SessionId, f: F) -> Result<SessionView, AppError>
    where
        F: FnOnce(&mut Session) -> Result<(), AppError>,
    {
        let mut sessions = write(&self.sessions);
        let session = sessions.get_mut(id).ok_or_else(|| not_found(id))?;
        f(session)?;
        Ok(SessionView::of(*id, session))
    }

    fn spawn_delivery(&self, id: SessionId, ticket: u64, payload: Payload) {
        let gateways = self.gateways.clone();
        let sessions = self.sessions.clone();

        let handle = tokio::spawn(async move {
            let status = match payload.deliver(&gateways).await {
                Ok(receipt) => SubmissionStatus::completed(receipt),
                Err(e) => SubmissionStatus::Failed {
                    reason: e.to_string(),
                },
            };
            record_outcome(&sessions, id, ticket, status);
        });

        let mut sessions = write(&self.sessions);
        match sessions
            .get_mut(&id)
            .and_then(|s| s.submission.as_mut())
            .filter(|s| s.ticket == ticket)
        {
            Some(submission) => submission.handle = Some(handle),
            // Closed before the task was registered, or already finished
            None => handle.abort(),
        }
    }
}

/// Store a delivery outcome if its session is still waiting on it.
///
/// Returns whether the outcome was kept.
fn record_outcome(
    sessions: &SessionMap,
    id: SessionId,
    ticket: u64,
    status: SubmissionStatus,
) -> bool {
    let mut sessions = write(sessions);
    let session = match sessions.get_mut(&id) {
        Some(session) if session.submission.as_ref().map(|s| s.ticket) == Some(ticket) => session,
        _ => {
            tracing::debug!(session_id = %id, ticket, "Dropping outcome for closed session");
            return false;
        }
    };

    match &status {
        SubmissionStatus::Completed { next_route, .. } => {
            tracing::info!(session_id = %id, kind = %session.kind, next_route = %next_route, "Submission completed");
        }
        SubmissionStatus::Failed { reason } => {
            tracing::warn!(session_id = %id, kind = %session.kind, reason = %reason, "Submission failed");
        }
        _ => {}
    }

    session.status = status;
    // The task is finishing on its own; nothing left to abort
    session.submission = None;
    true
}

fn payload_for(session: &Session, bag: &FieldBag) -> Result<Payload, DomainError> {
    match session.kind {
        FormKind::Checkout => {
            let experience = session.experience.as_ref().ok_or_else(|| {
                DomainError::Internal("checkout session without an experience".to_string())
            })?;
            let today = Utc::now().date_naive();
            let date = today.succ_opt().unwrap_or(today);
            BookingRequest::from_fields(experience, date, bag).map(Payload::Booking)
        }
        FormKind::Onboarding => VendorApplication::from_fields(bag).map(Payload::Application),
        FormKind::Signup => Registration::from_fields(bag).map(Payload::Registration),
        FormKind::Signin => Credentials::from_fields(bag).map(Payload::SignIn),
    }
}

fn not_found(id: &SessionId) -> AppError {
    AppError::NotFound(format!("Session {}", id))
}
