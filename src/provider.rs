//! The external version-control collaborator, seen as a black box that
//! accepts requests and answers each one later through a `Completion`.

use std::sync::mpsc::Sender;

use anyhow::Result;
use time::OffsetDateTime;

use crate::model::{Changeset, ChangesetId, FileRecord};
use crate::notify::Subscription;
use crate::version::SoftwareVersion;

/// Identity of a provider instance; a new id means a different provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProviderId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    FetchChangesets { from_date: Option<OffsetDateTime> },
    FetchChangesetFiles { id: ChangesetId },
    SwitchToBranch { name: String },
    SwitchToChangeset { id: ChangesetId },
    /// Partial workspaces move to a changeset with an update instead of a switch.
    UpdateToChangeset { id: ChangesetId },
}

impl Request {
    /// Whether the request changes the local workspace.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Request::SwitchToBranch { .. }
                | Request::SwitchToChangeset { .. }
                | Request::UpdateToChangeset { .. }
        )
    }

    pub fn in_progress_label(&self) -> String {
        match self {
            Request::FetchChangesets { .. } => "Refreshing changesets...".to_string(),
            Request::FetchChangesetFiles { id } => {
                format!("Fetching files of changeset {}...", id)
            }
            Request::SwitchToBranch { name } => {
                format!("Switching workspace to branch {}...", name)
            }
            Request::SwitchToChangeset { id } => {
                format!("Switching workspace to changeset {}...", id)
            }
            Request::UpdateToChangeset { id } => {
                format!("Updating workspace to changeset {}...", id)
            }
        }
    }
}

#[derive(Clone, Debug)]
pub enum Response {
    Changesets(Vec<Changeset>),
    ChangesetFiles(Vec<FileRecord>),
    /// Local paths rewritten by a switch or update.
    Switched { updated_files: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderEvent {
    AvailabilityChanged(bool),
    /// Something changed the workspace outside of this panel (check-in, update...).
    WorkspaceStateChanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TicketKind {
    Changesets,
    Files(ChangesetId),
    Switch,
}

/// Bookkeeping attached to every request so its completion can be routed
/// and, when stale, dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Ticket {
    pub(crate) kind: TicketKind,
    /// List generation, or the switch serial for switches.
    pub(crate) generation: u64,
    pub(crate) epoch: u64,
}

pub(crate) struct Completed {
    pub(crate) ticket: Ticket,
    pub(crate) result: Result<Response>,
}

/// Reply handle for one accepted request.
///
/// May be moved to a worker thread; the result is queued and applied by the
/// orchestrator on its next tick.
#[derive(Debug)]
pub struct Completion {
    ticket: Ticket,
    tx: Sender<Completed>,
}

impl Completion {
    pub(crate) fn new(ticket: Ticket, tx: Sender<Completed>) -> Self {
        Self { ticket, tx }
    }

    pub fn complete(self, result: Result<Response>) {
        // The receiver only goes away with the orchestrator itself.
        let _ = self.tx.send(Completed {
            ticket: self.ticket,
            result,
        });
    }
}

pub trait Provider {
    fn instance_id(&self) -> ProviderId;

    fn is_available(&self) -> bool;

    fn is_partial_workspace(&self) -> bool {
        false
    }

    /// Changeset the workspace currently sits on, if known.
    fn current_changeset_id(&self) -> Option<ChangesetId>;

    fn version(&self) -> SoftwareVersion;

    /// Availability and workspace-change notifications, if the provider emits any.
    fn subscribe(&self) -> Option<Subscription<ProviderEvent>> {
        None
    }

    /// Submits `request` without blocking.
    ///
    /// `Ok` means the request was accepted and `completion` will be completed
    /// exactly once; `Err` means it was rejected and nothing will follow.
    fn execute(&mut self, request: Request, completion: Completion) -> Result<()>;
}
