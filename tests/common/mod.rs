#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::bail;
use time::macros::datetime;

use changeset_panel::model::{Changeset, ChangesetId, FileRecord, FileState};
use changeset_panel::notify::{NotificationSink, Notifier, OperationKind, Subscription};
use changeset_panel::provider::ProviderId;
use changeset_panel::{
    Clock, Completion, Orchestrator, PanelConfig, Provider, ProviderEvent, Request, Response,
    SoftwareVersion,
};

pub struct FakeState {
    pub available: bool,
    pub partial: bool,
    pub reject: bool,
    pub current: Option<ChangesetId>,
    pub version: String,
    pub submitted: Vec<Request>,
    pub pending: Vec<(Request, Completion)>,
}

/// In-memory provider. Clones share state, so a test keeps one handle while
/// the orchestrator owns another.
#[derive(Clone)]
pub struct FakeProvider {
    id: u64,
    state: Rc<RefCell<FakeState>>,
    events: Notifier<ProviderEvent>,
}

impl FakeProvider {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            state: Rc::new(RefCell::new(FakeState {
                available: true,
                partial: false,
                reject: false,
                current: None,
                version: "11.0.16.7709".to_string(),
                submitted: Vec::new(),
                pending: Vec::new(),
            })),
            events: Notifier::new(),
        }
    }

    pub fn boxed(&self) -> Box<dyn Provider> {
        Box::new(self.clone())
    }

    pub fn set_available(&self, available: bool) {
        self.state.borrow_mut().available = available;
    }

    pub fn set_partial(&self, partial: bool) {
        self.state.borrow_mut().partial = partial;
    }

    pub fn set_reject(&self, reject: bool) {
        self.state.borrow_mut().reject = reject;
    }

    pub fn set_version(&self, version: &str) {
        self.state.borrow_mut().version = version.to_string();
    }

    pub fn set_current(&self, id: Option<ChangesetId>) {
        self.state.borrow_mut().current = id;
    }

    pub fn emit(&self, event: ProviderEvent) {
        self.events.notify(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }

    pub fn submitted(&self) -> Vec<Request> {
        self.state.borrow().submitted.clone()
    }

    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Completes the oldest pending request matching `pred`.
    pub fn complete(&self, pred: impl Fn(&Request) -> bool, result: anyhow::Result<Response>) {
        let (_, completion) = {
            let mut state = self.state.borrow_mut();
            let idx = state
                .pending
                .iter()
                .position(|(req, _)| pred(req))
                .expect("no matching pending request");
            state.pending.remove(idx)
        };
        completion.complete(result);
    }

    /// Completes the most recent pending request matching `pred`.
    pub fn complete_latest(
        &self,
        pred: impl Fn(&Request) -> bool,
        result: anyhow::Result<Response>,
    ) {
        let (_, completion) = {
            let mut state = self.state.borrow_mut();
            let idx = state
                .pending
                .iter()
                .rposition(|(req, _)| pred(req))
                .expect("no matching pending request");
            state.pending.remove(idx)
        };
        completion.complete(result);
    }

    pub fn complete_changesets(&self, list: Vec<Changeset>) {
        self.complete(is_list_request, Ok(Response::Changesets(list)));
    }

    pub fn complete_files(&self, id: ChangesetId, files: Vec<FileRecord>) {
        self.complete(
            |req| matches!(req, Request::FetchChangesetFiles { id: want } if *want == id),
            Ok(Response::ChangesetFiles(files)),
        );
    }

    pub fn count(&self, pred: impl Fn(&Request) -> bool) -> usize {
        self.state.borrow().submitted.iter().filter(|r| pred(r)).count()
    }
}

impl Provider for FakeProvider {
    fn instance_id(&self) -> ProviderId {
        ProviderId(self.id)
    }

    fn is_available(&self) -> bool {
        self.state.borrow().available
    }

    fn is_partial_workspace(&self) -> bool {
        self.state.borrow().partial
    }

    fn current_changeset_id(&self) -> Option<ChangesetId> {
        self.state.borrow().current
    }

    fn version(&self) -> SoftwareVersion {
        SoftwareVersion::parse(self.state.borrow().version.clone())
    }

    fn subscribe(&self) -> Option<Subscription<ProviderEvent>> {
        Some(self.events.subscribe())
    }

    fn execute(&mut self, request: Request, completion: Completion) -> anyhow::Result<()> {
        let mut state = self.state.borrow_mut();
        if state.reject {
            bail!("provider busy");
        }
        state.submitted.push(request.clone());
        state.pending.push((request, completion));
        Ok(())
    }
}

pub fn is_list_request(req: &Request) -> bool {
    matches!(req, Request::FetchChangesets { .. })
}

pub fn is_files_request(req: &Request) -> bool {
    matches!(req, Request::FetchChangesetFiles { .. })
}

pub fn is_switch_request(req: &Request) -> bool {
    req.is_mutating()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Note {
    InProgress(String),
    ClearInProgress,
    Success(OperationKind, String),
    Failure(OperationKind, String),
    Warning(String),
}

#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<Note>>>);

impl Recorder {
    pub fn notes(&self) -> Vec<Note> {
        self.0.borrow().clone()
    }

    pub fn failures(&self) -> usize {
        self.notes()
            .iter()
            .filter(|n| matches!(n, Note::Failure(..)))
            .count()
    }
}

impl NotificationSink for Recorder {
    fn in_progress(&mut self, label: &str) {
        self.0.borrow_mut().push(Note::InProgress(label.to_string()));
    }

    fn clear_in_progress(&mut self) {
        self.0.borrow_mut().push(Note::ClearInProgress);
    }

    fn success(&mut self, kind: OperationKind, message: &str) {
        self.0
            .borrow_mut()
            .push(Note::Success(kind, message.to_string()));
    }

    fn failure(&mut self, kind: OperationKind, message: &str) {
        self.0
            .borrow_mut()
            .push(Note::Failure(kind, message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.0.borrow_mut().push(Note::Warning(message.to_string()));
    }
}

#[derive(Clone)]
pub struct ManualClock(Rc<Cell<Instant>>);

impl ManualClock {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(Instant::now())))
    }

    pub fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.0.get()
    }
}

pub struct Panel {
    pub orch: Orchestrator,
    pub provider: FakeProvider,
    pub notes: Recorder,
    pub clock: ManualClock,
}

pub fn panel_with(cfg: PanelConfig) -> Panel {
    let provider = FakeProvider::new(1);
    let notes = Recorder::default();
    let clock = ManualClock::new();
    let orch = Orchestrator::new(provider.boxed(), cfg)
        .with_notifications(Box::new(notes.clone()))
        .with_clock(Box::new(clock.clone()));
    Panel {
        orch,
        provider,
        notes,
        clock,
    }
}

pub fn panel() -> Panel {
    panel_with(PanelConfig::default())
}

pub fn cs(id: i64, who: &str, comment: &str, branch: &str) -> Changeset {
    Changeset::new(
        ChangesetId(id),
        who,
        datetime!(2024-01-01 00:00 UTC) + time::Duration::days(id),
        comment,
        branch,
    )
}

pub fn history() -> Vec<Changeset> {
    vec![
        cs(1, "alice", "Initial import", "/main"),
        cs(2, "bob", "Add level layout", "/main/levels"),
        cs(3, "carol", "Fix lighting bake", "/main"),
    ]
}

pub fn file(path: &str, state: FileState, id: i64) -> FileRecord {
    FileRecord::new(path, state, ChangesetId(id))
}

pub fn visible_ids(orch: &Orchestrator) -> Vec<i64> {
    orch.changesets().visible_rows().map(|c| c.id.0).collect()
}

pub fn visible_paths(orch: &Orchestrator) -> Vec<String> {
    orch.files().visible_rows().map(|f| f.path.clone()).collect()
}

/// Ticks once and answers the list request with `list`, then ticks again to apply it.
pub fn load(p: &mut Panel, list: Vec<Changeset>) {
    p.orch.tick();
    p.provider.complete_changesets(list);
    p.orch.tick();
}
