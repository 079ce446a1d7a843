//! Panel-level controller: owns the changeset and file lists, drives
//! refreshes from a periodic tick, and serializes workspace switches.
//!
//! Everything here runs on one thread. Provider completions may arrive from
//! any thread; they are queued on a channel and applied at the start of the
//! next `tick`.

use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use crate::config::{FromDate, PanelConfig};
use crate::list::{
    ChangesetColumn, FileColumn, ListController, SortDirection, SortKey, SortPriority, SortState,
};
use crate::model::{Changeset, ChangesetId, FileRecord};
use crate::notify::{LogNotifications, NotificationSink, OperationKind, Subscription};
use crate::provider::{
    Completed, Completion, Provider, ProviderEvent, Request, Response, Ticket, TicketKind,
};
use crate::version::{Capability, SoftwareVersion};

mod completions;
mod refresh;
mod selection;
mod status;
mod switch;

pub use self::status::{OperationStatus, RefreshStatus};
pub use self::switch::{SwitchRejected, SwitchTarget};

/// Source of monotonic time for refresh scheduling and elapsed-time display.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

pub struct Orchestrator {
    config: PanelConfig,

    provider: Box<dyn Provider>,
    provider_epoch: u64,
    provider_available: bool,
    events: Option<Subscription<ProviderEvent>>,

    notifications: Box<dyn NotificationSink>,
    clock: Box<dyn Clock>,

    changesets: ListController<Changeset>,
    files: ListController<FileRecord>,
    selected: Option<ChangesetId>,
    current_changeset_id: Option<ChangesetId>,

    should_refresh: bool,
    last_refresh: Option<Instant>,
    list_generation: u64,
    pending_file_fetches: HashSet<ChangesetId>,
    failed_file_fetches: HashSet<ChangesetId>,
    switch_serial: u64,
    active_switch: Option<u64>,
    refresh_status: RefreshStatus,
    operation: OperationStatus,
    updated_files: Vec<String>,

    completion_tx: Sender<Completed>,
    completion_rx: Receiver<Completed>,
}

impl Orchestrator {
    /// Builds the panel core around `provider`. Nothing is requested until
    /// the first `tick`.
    pub fn new(provider: Box<dyn Provider>, config: PanelConfig) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel();
        let events = provider.subscribe();
        let current_changeset_id = provider.current_changeset_id();
        Self {
            config,
            provider,
            provider_epoch: 0,
            provider_available: false,
            events,
            notifications: Box::new(LogNotifications),
            clock: Box::new(SystemClock),
            changesets: ListController::new(SortState::new(SortKey::descending(
                ChangesetColumn::Id,
            ))),
            files: ListController::new(SortState::new(SortKey::ascending(FileColumn::Path))),
            selected: None,
            current_changeset_id,
            should_refresh: true,
            last_refresh: None,
            list_generation: 0,
            pending_file_fetches: HashSet::new(),
            failed_file_fetches: HashSet::new(),
            switch_serial: 0,
            active_switch: None,
            refresh_status: RefreshStatus::default(),
            operation: OperationStatus::Idle,
            updated_files: Vec::new(),
            completion_tx,
            completion_rx,
        }
    }

    pub fn with_notifications(mut self, sink: Box<dyn NotificationSink>) -> Self {
        self.notifications = sink;
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Changes the history depth; the list is re-requested on the next tick.
    pub fn set_from_date(&mut self, from_date: FromDate) {
        if self.config.from_date == from_date {
            return;
        }
        self.config.from_date = from_date;
        self.should_refresh = true;
    }

    pub fn changesets(&self) -> &ListController<Changeset> {
        &self.changesets
    }

    pub fn files(&self) -> &ListController<FileRecord> {
        &self.files
    }

    pub fn set_changeset_filter(&mut self, text: &str) {
        self.changesets.set_filter_text(text);
    }

    pub fn set_file_filter(&mut self, text: &str) {
        self.files.set_filter_text(text);
    }

    pub fn sort_changesets(&mut self, column: ChangesetColumn, priority: SortPriority) {
        self.changesets.set_sort_column(column, priority);
    }

    pub fn set_changeset_sort(
        &mut self,
        priority: SortPriority,
        column: ChangesetColumn,
        direction: SortDirection,
    ) {
        self.changesets.set_sort(priority, column, direction);
    }

    pub fn sort_files(&mut self, column: FileColumn, priority: SortPriority) {
        self.files.set_sort_column(column, priority);
    }

    pub fn set_file_sort(
        &mut self,
        priority: SortPriority,
        column: FileColumn,
        direction: SortDirection,
    ) {
        self.files.set_sort(priority, column, direction);
    }

    pub fn current_changeset_id(&self) -> Option<ChangesetId> {
        self.current_changeset_id
    }

    pub fn is_current(&self, changeset: &Changeset) -> bool {
        self.current_changeset_id == Some(changeset.id)
    }

    pub fn is_provider_available(&self) -> bool {
        self.provider_available
    }

    pub fn tool_version(&self) -> SoftwareVersion {
        self.provider.version()
    }

    pub fn is_at_least(&self, version: &SoftwareVersion) -> bool {
        self.provider.version() >= *version
    }

    pub fn supports(&self, capability: Capability) -> bool {
        capability.is_supported_by(&self.provider.version())
    }

    /// Local paths rewritten by switches completed since the last call.
    pub fn take_updated_files(&mut self) -> Vec<String> {
        std::mem::take(&mut self.updated_files)
    }

    /// Replaces the provider. A different provider instance discards every
    /// cached list and any operation still in flight.
    pub fn set_provider(&mut self, provider: Box<dyn Provider>) {
        let changed = provider.instance_id() != self.provider.instance_id();
        self.events = provider.subscribe();
        self.provider = provider;
        self.provider_available = self.provider.is_available();
        self.should_refresh = true;

        if !changed {
            return;
        }
        log::debug!(
            "provider changed to {:?}, discarding cached state",
            self.provider.instance_id()
        );
        self.provider_epoch += 1;
        self.changesets.clear();
        self.files.clear();
        self.selected = None;
        self.pending_file_fetches.clear();
        self.failed_file_fetches.clear();
        self.current_changeset_id = self.provider.current_changeset_id();
        self.refresh_status.end();
        if self.operation.is_in_progress() {
            self.operation = OperationStatus::Idle;
            self.active_switch = None;
            self.notifications.clear_in_progress();
        }
    }

    /// Periodic driver. Applies queued events and completions, then issues
    /// a list refresh when one is due.
    pub fn tick(&mut self) {
        self.drain_events();
        self.drain_completions();

        let now = self.clock.now();
        if !self.provider.is_available() {
            if self.provider_available {
                log::debug!("provider became unavailable");
            }
            self.provider_available = false;
            return;
        }
        if !self.provider_available {
            log::debug!("provider became available");
            self.provider_available = true;
            self.should_refresh = true;
        }

        let interval_elapsed = self
            .last_refresh
            .is_some_and(|at| now.duration_since(at) >= self.config.refresh_interval());
        if self.should_refresh || interval_elapsed {
            self.should_refresh = false;
            self.issue_refresh(now);
        }

        self.refresh_status.update(now);
    }

    fn drain_events(&mut self) {
        let events = self
            .events
            .as_ref()
            .map(Subscription::drain)
            .unwrap_or_default();
        for event in events {
            match event {
                ProviderEvent::AvailabilityChanged(true) => self.should_refresh = true,
                ProviderEvent::AvailabilityChanged(false) => self.provider_available = false,
                ProviderEvent::WorkspaceStateChanged => self.should_refresh = true,
            }
        }
    }

    /// Reply handle for a request of `kind`. `generation` is the list
    /// generation for list requests and the switch serial for switches.
    fn completion(&self, kind: TicketKind, generation: u64) -> Completion {
        let ticket = Ticket {
            kind,
            generation,
            epoch: self.provider_epoch,
        };
        Completion::new(ticket, self.completion_tx.clone())
    }
}

#[cfg(test)]
#[path = "tests/orchestrator_tests.rs"]
mod tests;
