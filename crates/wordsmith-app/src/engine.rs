//! Engine - the application store
//!
//! Owns the [`AppState`], runs [`handler::update`] serially for every message
//! and spawns the tasks it asks for. Task results come back over a channel and
//! are applied by [`Engine::next`], [`Engine::settle`] or [`Engine::run`].
//!
//! Tasks belong to a [`ScopeId`]. A scope stands for one view lifetime:
//! closing it aborts its tasks and drops any result they already produced.
//! Every task still settles state exactly once: an aborted task applies its
//! cancellation message, a panicked task its failure message.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::AbortHandle;
use tracing::{debug, error, info, warn};
use wordsmith_backend::Backend;
use wordsmith_core::ErrorReport;

use crate::actions;
use crate::adapter::BackendAdapter;
use crate::config::Preferences;
use crate::handler::{self, Task, UpdateAction};
use crate::message::Message;
use crate::state::AppState;
use crate::view::RootView;

/// Identifies one spawned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// Identifies one view lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

impl ScopeId {
    /// Scope of the application itself. Never closes.
    pub const ROOT: ScopeId = ScopeId(0);
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope-{}", self.0)
    }
}

/// Handle to a spawned task.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    scope: ScopeId,
    name: &'static str,
    abort: AbortHandle,
}

impl TaskHandle {
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The task has run to completion or was aborted.
    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}

/// Notifications for view layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// State changed; views should re-derive their models
    StateChanged,
    /// A task result was dropped because its scope had closed
    ResultDiscarded { task: TaskId },
    Shutdown,
}

struct Completion {
    task: TaskId,
    scope: ScopeId,
    message: Message,
}

struct InFlight {
    scope: ScopeId,
    name: &'static str,
    abort: AbortHandle,
    /// Applied instead of the result when the task is aborted
    cancellation: Option<Message>,
}

/// Application store.
pub struct Engine<B> {
    /// TEA application state (the Model)
    pub state: AppState,

    adapter: Arc<BackendAdapter<B>>,

    preferences: Preferences,

    completion_tx: mpsc::Sender<Completion>,
    completion_rx: mpsc::Receiver<Completion>,

    /// Messages from outside sources, applied by `run` in the root scope
    msg_tx: mpsc::Sender<Message>,
    msg_rx: mpsc::Receiver<Message>,

    in_flight: HashMap<TaskId, InFlight>,
    open_scopes: HashSet<ScopeId>,
    next_task_id: u64,
    next_scope_id: u64,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<B> Engine<B>
where
    B: Backend + Send + Sync + 'static,
{
    pub fn new(backend: B, preferences: Preferences) -> Self {
        let capacity = preferences.engine.channel_capacity.max(1);
        let (completion_tx, completion_rx) = mpsc::channel(capacity);
        let (msg_tx, msg_rx) = mpsc::channel(capacity);
        let (event_tx, _) = broadcast::channel(capacity);

        let mut open_scopes = HashSet::new();
        open_scopes.insert(ScopeId::ROOT);

        Self {
            state: AppState::with_preferences(&preferences),
            adapter: Arc::new(BackendAdapter::new(backend)),
            preferences,
            completion_tx,
            completion_rx,
            msg_tx,
            msg_rx,
            in_flight: HashMap::new(),
            open_scopes,
            next_task_id: 1,
            next_scope_id: 1,
            event_tx,
        }
    }

    pub fn backend(&self) -> &B {
        self.adapter.backend()
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Which top-level view should be showing.
    pub fn root_view(&self) -> RootView {
        RootView::from_state(&self.state)
    }

    /// Subscribe to engine events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Sender for messages from outside the engine owner. Messages sent here
    /// are applied by [`Engine::run`].
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Number of tasks whose results are still expected.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_scope_open(&self, scope: ScopeId) -> bool {
        self.open_scopes.contains(&scope)
    }

    // ─────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────

    /// Dispatch the startup messages.
    pub fn start(&mut self) -> Vec<TaskHandle> {
        info!("Starting engine");
        let mut handles = self.dispatch(Message::Initialize);
        let settings_message = if self.state.show_settings {
            Message::ShowSettings
        } else {
            Message::LoadSettings
        };
        handles.extend(self.dispatch(settings_message));
        handles
    }

    /// Dispatch in the root scope.
    pub fn dispatch(&mut self, message: Message) -> Vec<TaskHandle> {
        self.dispatch_in(ScopeId::ROOT, message)
    }

    /// Run `message` and its follow-ups through `update`, spawning tasks in
    /// `scope`. Returns the handles of the spawned tasks.
    pub fn dispatch_in(&mut self, scope: ScopeId, message: Message) -> Vec<TaskHandle> {
        if !self.is_scope_open(scope) {
            warn!("Dropping {:?} dispatched into closed {}", message, scope);
            return Vec::new();
        }
        let handles = self.process(scope, message);
        self.emit(EngineEvent::StateChanged);
        handles
    }

    fn process(&mut self, scope: ScopeId, message: Message) -> Vec<TaskHandle> {
        let mut handles = Vec::new();
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);

            if let Some(UpdateAction::SpawnTask(task)) = result.action {
                handles.push(self.spawn(scope, task));
            }

            // Continue with follow-up message
            msg = result.message;
        }
        handles
    }

    fn spawn(&mut self, scope: ScopeId, task: Task) -> TaskHandle {
        let id = TaskId(self.next_task_id);
        self.next_task_id += 1;
        let name = task.name();
        let cancellation = task.cancellation();

        let adapter = Arc::clone(&self.adapter);
        let fallback = task.clone();
        let work = tokio::spawn(async move { actions::execute_task(task, &adapter).await });
        let abort = work.abort_handle();

        // Forwards the result, or a failure if the work panicked. An aborted
        // task sends nothing; whoever aborted it has already settled it.
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let message = match work.await {
                Ok(message) => message,
                Err(e) if e.is_panic() => {
                    error!("{} ({}) panicked", id, name);
                    fallback.failure(ErrorReport::new(
                        "TaskPanicked",
                        format!("Task {} stopped unexpectedly", name),
                    ))
                }
                Err(_) => return,
            };
            if tx
                .send(Completion {
                    task: id,
                    scope,
                    message,
                })
                .await
                .is_err()
            {
                debug!("Engine gone, dropping result of {}", id);
            }
        });

        debug!("Spawned {} ({}) in {}", id, name, scope);
        self.in_flight.insert(
            id,
            InFlight {
                scope,
                name,
                abort: abort.clone(),
                cancellation,
            },
        );

        TaskHandle {
            id,
            scope,
            name,
            abort,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Scopes
    // ─────────────────────────────────────────────────────────

    /// Open a scope for a view that is being shown.
    pub fn open_scope(&mut self) -> ScopeId {
        let scope = ScopeId(self.next_scope_id);
        self.next_scope_id += 1;
        self.open_scopes.insert(scope);
        debug!("Opened {}", scope);
        scope
    }

    /// Close a scope: abort its tasks and forget their results. The pending
    /// state of each aborted task is released in the root scope.
    ///
    /// Returns the number of tasks that were still in flight.
    pub fn close_scope(&mut self, scope: ScopeId) -> usize {
        if scope == ScopeId::ROOT {
            warn!("The root scope cannot be closed");
            return 0;
        }
        if !self.open_scopes.remove(&scope) {
            return 0;
        }

        let orphaned: Vec<TaskId> = self
            .in_flight
            .iter()
            .filter(|(_, task)| task.scope == scope)
            .map(|(id, _)| *id)
            .collect();
        for id in &orphaned {
            if let Some(task) = self.in_flight.remove(id) {
                debug!("Aborting {} ({})", id, task.name);
                self.cancel(task);
            }
        }

        debug!("Closed {} with {} tasks in flight", scope, orphaned.len());
        if !orphaned.is_empty() {
            self.emit(EngineEvent::StateChanged);
        }
        orphaned.len()
    }

    // ─────────────────────────────────────────────────────────
    // Applying results
    // ─────────────────────────────────────────────────────────

    /// Wait for one task result and apply it.
    ///
    /// Returns false when no task is in flight.
    pub async fn next(&mut self) -> bool {
        while !self.in_flight.is_empty() {
            let Some(completion) = self.completion_rx.recv().await else {
                return false;
            };
            if self.apply_completion(completion) {
                return true;
            }
        }
        false
    }

    /// Apply results until nothing is in flight. Returns how many were applied.
    pub async fn settle(&mut self) -> usize {
        let mut applied = 0;
        while self.next().await {
            applied += 1;
        }
        applied
    }

    /// Apply task results and outside messages until `shutdown` turns true.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        info!("Engine running");
        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                Some(completion) = self.completion_rx.recv() => {
                    self.apply_completion(completion);
                }
                Some(message) = self.msg_rx.recv() => {
                    self.dispatch(message);
                }
            }
        }
        self.shutdown();
    }

    /// Abort every task and notify subscribers.
    pub fn shutdown(&mut self) {
        let tasks: Vec<(TaskId, InFlight)> = self.in_flight.drain().collect();
        for (id, task) in tasks {
            debug!("Aborting {} ({}) on shutdown", id, task.name);
            self.cancel(task);
        }
        self.emit(EngineEvent::Shutdown);
        info!("Engine stopped");
    }

    /// Returns false if the result was discarded.
    fn apply_completion(&mut self, completion: Completion) -> bool {
        let Completion {
            task,
            scope,
            message,
        } = completion;

        if self.in_flight.remove(&task).is_none() || !self.is_scope_open(scope) {
            debug!("Discarding late result of {} from {}", task, scope);
            self.emit(EngineEvent::ResultDiscarded { task });
            return false;
        }

        self.process(scope, message);
        self.emit(EngineEvent::StateChanged);
        true
    }

    fn cancel(&mut self, task: InFlight) {
        task.abort.abort();
        if let Some(message) = task.cancellation {
            self.process(ScopeId::ROOT, message);
        }
    }

    fn emit(&self, event: EngineEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}
