//! Diary screen controller
//!
//! One instance per screen. It owns:
//! - the diary id and the injected auth token (never read from ambient state)
//! - the [`ViewState`] and the load-cycle generation counter
//! - the pending-action state: publish prompt and edit router
//!
//! The presentation layer renders [`DiaryController::view`] and forwards user
//! events to the methods below. Those that need the network are async; the
//! rest are plain state transitions.
//!
//! Load cycles can overlap when the diary id or token changes while a fetch is
//! in flight. Each cycle carries a generation number and only the result of
//! the newest cycle is applied; older results are dropped.

use tracing::{debug, info};

use crate::api::ResourceClient;
use crate::dispatcher::{Acknowledgment, ActionDispatcher};
use crate::error::ControllerError;
use crate::loader::RecordLoader;
use crate::navigation::NavigationRequest;
use crate::router::{EditIntentRouter, EditRouterState, EditTarget};
use crate::view::ViewState;

/// Snapshot of the inputs of one load cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadCycle {
    pub generation: u64,
    pub diary_id: String,
    pub auth_token: Option<String>,
}

pub struct DiaryController<C: ResourceClient> {
    client: C,
    diary_id: String,
    auth_token: Option<String>,
    view: ViewState,
    generation: u64,
    publish_confirmation_open: bool,
    edit_router: EditIntentRouter,
}

impl<C: ResourceClient> DiaryController<C> {
    /// Create a controller in Loading. Call [`Self::reload`] (or
    /// [`Self::begin_load`] / [`Self::finish_load`]) to populate it.
    pub fn new(client: C, diary_id: impl Into<String>, auth_token: Option<String>) -> Self {
        Self {
            client,
            diary_id: diary_id.into(),
            auth_token,
            view: ViewState::Loading,
            generation: 0,
            publish_confirmation_open: false,
            edit_router: EditIntentRouter::new(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn diary_id(&self) -> &str {
        &self.diary_id
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Generation of the newest load cycle (0 before the first one)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_publish_confirmation_open(&self) -> bool {
        self.publish_confirmation_open
    }

    pub fn edit_state(&self) -> EditRouterState {
        self.edit_router.state()
    }

    // ── Load cycle ──

    /// Start a new load cycle: bump the generation, reset to Loading and
    /// close any open prompt. The returned snapshot is what to fetch.
    pub fn begin_load(&mut self) -> LoadCycle {
        self.generation += 1;
        self.view = ViewState::Loading;
        self.publish_confirmation_open = false;
        self.edit_router.reset();

        info!(
            diary_id = %self.diary_id,
            generation = self.generation,
            "Starting diary load cycle"
        );

        LoadCycle {
            generation: self.generation,
            diary_id: self.diary_id.clone(),
            auth_token: self.auth_token.clone(),
        }
    }

    /// Run the fetches for `cycle` without touching controller state.
    ///
    /// Takes the client rather than the controller so that nothing borrows
    /// the controller while the requests are in flight. With a shared client
    /// (e.g. `Arc<HttpResourceClient>`) the caller can hold a clone of
    /// [`Self::client`], keep mutating the controller (a new id or token
    /// starts a newer cycle) and hand the result to [`Self::finish_load`]:
    ///
    /// ```ignore
    /// let cycle = controller.begin_load();
    /// let client = controller.client().clone();
    /// let state = DiaryController::fetch(&client, &cycle).await;
    /// controller.finish_load(cycle.generation, state);
    /// ```
    pub async fn fetch(client: &C, cycle: &LoadCycle) -> ViewState {
        RecordLoader::new(client)
            .load(&cycle.diary_id, cycle.auth_token.as_deref())
            .await
    }

    /// Apply a finished load. Returns false, leaving state untouched, when a
    /// newer cycle has started since `generation` began.
    pub fn finish_load(&mut self, generation: u64, state: ViewState) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "Discarding stale diary load result"
            );
            return false;
        }
        debug!(generation, view = state.label(), "Diary load cycle finished");
        self.view = state;
        true
    }

    /// Begin, fetch and finish a cycle in one go
    pub async fn reload(&mut self) -> &ViewState {
        let cycle = self.begin_load();
        let state = Self::fetch(&self.client, &cycle).await;
        self.finish_load(cycle.generation, state);
        &self.view
    }

    /// Switch to another diary. Starts a new cycle only if the id changed.
    pub fn set_diary_id(&mut self, diary_id: impl Into<String>) -> Option<LoadCycle> {
        let diary_id = diary_id.into();
        if diary_id == self.diary_id {
            return None;
        }
        self.diary_id = diary_id;
        Some(self.begin_load())
    }

    /// Replace the auth token. Starts a new cycle only if the token changed.
    pub fn set_auth_token(&mut self, auth_token: Option<String>) -> Option<LoadCycle> {
        if auth_token == self.auth_token {
            return None;
        }
        self.auth_token = auth_token;
        Some(self.begin_load())
    }

    // ── Publish ──

    /// The user tapped "publish"; opens the confirmation prompt
    pub fn request_publish(&mut self) -> Result<(), ControllerError> {
        self.require_ready("publish")?;
        self.publish_confirmation_open = true;
        Ok(())
    }

    /// The user answered "no" to the publish prompt
    pub fn decline_publish(&mut self) {
        self.publish_confirmation_open = false;
    }

    /// The user answered "yes". The prompt closes only when the service
    /// accepted the post; on failure it stays open for the caller to close.
    pub async fn confirm_publish(&mut self) -> Result<Acknowledgment, ControllerError> {
        if !self.publish_confirmation_open {
            return Err(ControllerError::unavailable(
                "publish",
                "publish confirmation is not open",
            ));
        }

        let outcome = ActionDispatcher::new(&self.client)
            .publish(&self.diary_id, self.auth_token.as_deref())
            .await;

        if outcome.published {
            self.publish_confirmation_open = false;
        }
        Ok(outcome.acknowledgment)
    }

    // ── Edit ──

    /// The user tapped "edit"; opens the edit-target prompt
    pub fn request_edit(&mut self) -> Result<(), ControllerError> {
        self.require_ready("edit")?;
        self.edit_router.request_edit()
    }

    /// The user picked which editor to open
    pub fn choose_edit_target(
        &mut self,
        target: EditTarget,
    ) -> Result<NavigationRequest, ControllerError> {
        let emotion = *self
            .view
            .emotion()
            .ok_or_else(|| not_ready("choose-edit-target", &self.view))?;
        self.edit_router.choose(target, &self.diary_id, &emotion)
    }

    /// The user closed the edit-target prompt
    pub fn dismiss_edit(&mut self) -> Result<(), ControllerError> {
        self.edit_router.dismiss()
    }

    // ── Other actions ──

    /// Delete the diary. Available in any view state; the view is never
    /// changed, success is signalled by the acknowledgment's navigation.
    pub async fn delete(&self) -> Acknowledgment {
        ActionDispatcher::new(&self.client)
            .delete(&self.diary_id, self.auth_token.as_deref())
            .await
    }

    /// Open the analysis view for the loaded diary
    pub fn analyze(&self) -> Result<NavigationRequest, ControllerError> {
        let diary = self
            .view
            .diary()
            .ok_or_else(|| not_ready("analyze", &self.view))?;
        Ok(ActionDispatcher::new(&self.client).analyze(&self.diary_id, diary))
    }

    /// Recovery action of the failed view
    pub fn go_back(&self) -> NavigationRequest {
        NavigationRequest::Back
    }

    fn require_ready(&self, action: &'static str) -> Result<(), ControllerError> {
        if self.view.is_ready() {
            Ok(())
        } else {
            Err(not_ready(action, &self.view))
        }
    }
}

fn not_ready(action: &'static str, view: &ViewState) -> ControllerError {
    ControllerError::unavailable(action, format!("diary is {}", view.label()))
}
