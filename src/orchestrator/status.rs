use super::*;

/// "Refreshing changesets... (N s)" while a list refresh or a switch is
/// outstanding.
#[derive(Clone, Debug, Default)]
pub struct RefreshStatus {
    started: Option<Instant>,
    text: String,
}

impl RefreshStatus {
    /// Starts the timer; a refresh already running keeps its start time.
    pub(super) fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
        self.update(now);
    }

    pub(super) fn update(&mut self, now: Instant) {
        if let Some(started) = self.started {
            let secs = now.duration_since(started).as_secs();
            self.text = format!("Refreshing changesets... ({} s)", secs);
        }
    }

    pub(super) fn end(&mut self) {
        self.started = None;
        self.text.clear();
    }

    pub fn is_active(&self) -> bool {
        self.started.is_some()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationStatus {
    Idle,
    InProgress {
        target: SwitchTarget,
        label: String,
        started: Instant,
    },
}

impl OperationStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, OperationStatus::InProgress { .. })
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            OperationStatus::Idle => None,
            OperationStatus::InProgress { label, .. } => Some(label),
        }
    }
}

impl Orchestrator {
    pub fn refresh_status(&self) -> &RefreshStatus {
        &self.refresh_status
    }

    pub fn refresh_status_text(&self) -> &str {
        self.refresh_status.text()
    }

    pub fn operation(&self) -> &OperationStatus {
        &self.operation
    }

    pub fn is_in_progress(&self) -> bool {
        self.operation.is_in_progress()
    }

    pub fn progress_label(&self) -> Option<&str> {
        self.operation.label()
    }

    /// Ends the refresh display unless a switch still owns it.
    pub(super) fn end_refresh_status(&mut self) {
        if !self.operation.is_in_progress() {
            self.refresh_status.end();
        }
    }
}
