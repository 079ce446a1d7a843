use super::*;

impl Orchestrator {
    pub fn selected_id(&self) -> Option<ChangesetId> {
        self.selected
    }

    pub fn selected_changeset(&self) -> Option<&Changeset> {
        let id = self.selected?;
        self.changesets.find(|c| c.id == id)
    }

    /// Selects a changeset, showing its files at once when cached and
    /// fetching them otherwise. Unknown ids clear the selection.
    pub fn select_changeset(&mut self, id: Option<ChangesetId>) {
        let Some(id) = id else {
            self.selected = None;
            self.files.clear();
            return;
        };
        if self.changesets.find(|c| c.id == id).is_none() {
            log::debug!("changeset {} is not listed, clearing selection", id);
            self.selected = None;
            self.files.clear();
            return;
        }
        self.selected = Some(id);
        // An explicit selection retries a fetch that failed before.
        self.failed_file_fetches.remove(&id);
        self.show_files_of(id);
    }

    pub(super) fn reconcile_selection(&mut self) {
        let Some(id) = self.selected else {
            return;
        };
        if self.changesets.find(|c| c.id == id).is_some() {
            self.show_files_of(id);
        } else {
            self.selected = None;
            self.files.clear();
        }
    }

    fn show_files_of(&mut self, id: ChangesetId) {
        let cached = self
            .changesets
            .find(|c| c.id == id)
            .and_then(|c| c.files().map(<[FileRecord]>::to_vec));
        match cached {
            Some(files) => self.files.set_source(files),
            None => {
                self.files.clear();
                self.fetch_files(id);
            }
        }
    }

    fn fetch_files(&mut self, id: ChangesetId) {
        if self.pending_file_fetches.contains(&id) {
            return;
        }
        if self.failed_file_fetches.contains(&id) {
            log::debug!("not refetching files of changeset {} until reselected", id);
            return;
        }
        let completion = self.completion(TicketKind::Files(id), self.list_generation);
        match self
            .provider
            .execute(Request::FetchChangesetFiles { id }, completion)
        {
            Ok(()) => {
                self.pending_file_fetches.insert(id);
            }
            Err(err) => {
                log::warn!("file list of changeset {} rejected: {:#}", id, err);
                self.notifications
                    .failure(OperationKind::FetchChangesetFiles, &format!("{:#}", err));
                self.file_fetch_failed(id);
            }
        }
    }

    /// Provider failures are followed by a refresh. The failed changeset is
    /// not fetched again by that refresh, only by a new selection.
    fn file_fetch_failed(&mut self, id: ChangesetId) {
        self.failed_file_fetches.insert(id);
        self.should_refresh = true;
    }

    pub(super) fn apply_files(
        &mut self,
        id: ChangesetId,
        ticket: Ticket,
        result: anyhow::Result<Response>,
    ) {
        self.pending_file_fetches.remove(&id);
        if self.is_stale(ticket) {
            log::debug!("dropping file list of changeset {} from a replaced provider", id);
            return;
        }

        let files = match result {
            Ok(Response::ChangesetFiles(files)) => files,
            Ok(other) => {
                log::warn!("unexpected reply to a file list request: {:?}", other);
                self.file_fetch_failed(id);
                return;
            }
            Err(err) => {
                self.notifications
                    .failure(OperationKind::FetchChangesetFiles, &format!("{:#}", err));
                self.file_fetch_failed(id);
                return;
            }
        };

        let Some(changeset) = self.changesets.find(|c| c.id == id) else {
            log::debug!("changeset {} left the list before its files arrived", id);
            return;
        };
        if !changeset.set_files(files) {
            log::debug!("changeset {} already had its files", id);
        }
        if self.selected == Some(id)
            && let Some(files) = changeset.files()
        {
            self.files.set_source(files.to_vec());
        }
    }
}
