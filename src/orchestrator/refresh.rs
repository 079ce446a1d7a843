use super::*;

impl Orchestrator {
    /// Asks for a list refresh on the next tick.
    pub fn request_refresh(&mut self) {
        self.should_refresh = true;
    }

    pub(super) fn issue_refresh(&mut self, now: Instant) {
        // A rejected submission must not supersede a refresh already in flight.
        let generation = self.list_generation + 1;
        self.last_refresh = Some(now);
        let from_date = self
            .config
            .from_date
            .cutoff(time::OffsetDateTime::now_utc());
        let completion = self.completion(TicketKind::Changesets, generation);

        match self
            .provider
            .execute(Request::FetchChangesets { from_date }, completion)
        {
            Ok(()) => {
                self.list_generation = generation;
                log::debug!("changeset refresh #{} submitted", generation);
                self.refresh_status.start(now);
            }
            Err(err) => {
                log::warn!("changeset refresh rejected: {:#}", err);
                self.notifications
                    .failure(OperationKind::RefreshChangesets, &format!("{:#}", err));
            }
        }
    }

    pub(super) fn apply_changesets(&mut self, ticket: Ticket, result: anyhow::Result<Response>) {
        if self.is_stale(ticket) {
            log::debug!(
                "dropping changeset list #{} (latest #{})",
                ticket.generation,
                self.list_generation
            );
            return;
        }
        self.end_refresh_status();

        let list = match result {
            Ok(Response::Changesets(list)) => list,
            Ok(other) => {
                log::warn!("unexpected reply to a changeset refresh: {:?}", other);
                return;
            }
            Err(err) => {
                self.notifications
                    .failure(OperationKind::RefreshChangesets, &format!("{:#}", err));
                return;
            }
        };

        log::debug!("changeset list #{}: {} entries", ticket.generation, list.len());
        self.current_changeset_id = self.provider.current_changeset_id();
        self.changesets.set_source(list);
        self.reconcile_selection();
    }

    /// Whether a completion was overtaken by a newer request or a provider change.
    pub(super) fn is_stale(&self, ticket: Ticket) -> bool {
        if !self.config.discard_stale_completions {
            return false;
        }
        if ticket.epoch != self.provider_epoch {
            return true;
        }
        ticket.kind == TicketKind::Changesets && ticket.generation != self.list_generation
    }
}
