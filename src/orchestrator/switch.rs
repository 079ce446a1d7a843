use std::fmt;

use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwitchTarget {
    Branch(String),
    Changeset(ChangesetId),
}

/// Why a switch request was refused before reaching the provider's queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwitchRejected {
    /// Another mutating operation has not completed yet.
    InProgress,
    AlreadyCurrent(ChangesetId),
    Unavailable,
    /// The provider refused the submission.
    Submit(String),
}

impl fmt::Display for SwitchRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitchRejected::InProgress => {
                f.write_str("source control operation already in progress")
            }
            SwitchRejected::AlreadyCurrent(id) => {
                write!(f, "workspace is already on changeset {}", id)
            }
            SwitchRejected::Unavailable => f.write_str("source control is not available"),
            SwitchRejected::Submit(msg) => write!(f, "switch rejected: {}", msg),
        }
    }
}

impl std::error::Error for SwitchRejected {}

impl Orchestrator {
    pub fn switch_to_branch(&mut self, name: &str) -> Result<(), SwitchRejected> {
        self.start_switch(SwitchTarget::Branch(name.to_string()))
    }

    /// Moves the workspace to `id`; partial workspaces are updated to that
    /// changeset instead.
    pub fn switch_to_changeset(&mut self, id: ChangesetId) -> Result<(), SwitchRejected> {
        self.start_switch(SwitchTarget::Changeset(id))
    }

    fn start_switch(&mut self, target: SwitchTarget) -> Result<(), SwitchRejected> {
        if self.operation.is_in_progress() {
            self.notifications
                .warning("Source control operation already in progress");
            return Err(SwitchRejected::InProgress);
        }
        if !self.provider.is_available() {
            return Err(SwitchRejected::Unavailable);
        }
        if let SwitchTarget::Changeset(id) = target
            && self.current_changeset_id == Some(id)
        {
            return Err(SwitchRejected::AlreadyCurrent(id));
        }

        let request = match &target {
            SwitchTarget::Branch(name) => Request::SwitchToBranch { name: name.clone() },
            SwitchTarget::Changeset(id) if self.provider.is_partial_workspace() => {
                Request::UpdateToChangeset { id: *id }
            }
            SwitchTarget::Changeset(id) => Request::SwitchToChangeset { id: *id },
        };
        let label = request.in_progress_label();
        let serial = self.switch_serial + 1;
        let completion = self.completion(TicketKind::Switch, serial);

        if let Err(err) = self.provider.execute(request, completion) {
            let msg = format!("{:#}", err);
            log::warn!("{} rejected: {}", label, msg);
            self.notifications.failure(OperationKind::Switch, &msg);
            return Err(SwitchRejected::Submit(msg));
        }

        let now = self.clock.now();
        self.switch_serial = serial;
        self.active_switch = Some(serial);
        log::info!("{}", label);
        self.notifications.in_progress(&label);
        self.refresh_status.start(now);
        self.operation = OperationStatus::InProgress {
            target,
            label,
            started: now,
        };
        Ok(())
    }

    /// Reports a switch outcome and schedules a refresh. Only the completion
    /// of the active switch releases the single-flight slot; a switch
    /// orphaned by a provider change leaves the current one running.
    pub(super) fn apply_switch(&mut self, ticket: Ticket, result: anyhow::Result<Response>) {
        let target = if self.active_switch == Some(ticket.generation) {
            self.active_switch = None;
            self.notifications.clear_in_progress();
            self.refresh_status.end();
            match std::mem::replace(&mut self.operation, OperationStatus::Idle) {
                OperationStatus::InProgress { target, .. } => Some(target),
                OperationStatus::Idle => None,
            }
        } else {
            log::debug!("switch #{} completed after being orphaned", ticket.generation);
            None
        };
        self.should_refresh = true;

        let what = match &target {
            Some(SwitchTarget::Branch(name)) => format!(" to branch {}", name),
            Some(SwitchTarget::Changeset(id)) => format!(" to changeset {}", id),
            None => String::new(),
        };
        match result {
            Ok(Response::Switched { updated_files }) => {
                log::info!("switch{} done, {} files updated", what, updated_files.len());
                self.notifications
                    .success(OperationKind::Switch, &format!("Switched{}", what));
                self.updated_files.extend(updated_files);
            }
            Ok(other) => {
                log::warn!("unexpected reply to a switch: {:?}", other);
                self.notifications.failure(
                    OperationKind::Switch,
                    &format!("Switch{} returned an unexpected reply", what),
                );
            }
            Err(err) => {
                self.notifications.failure(
                    OperationKind::Switch,
                    &format!("Switch{} failed: {:#}", what, err),
                );
            }
        }
    }
}
