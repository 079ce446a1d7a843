use super::*;

impl Orchestrator {
    pub(super) fn drain_completions(&mut self) {
        while let Ok(done) = self.completion_rx.try_recv() {
            let Completed { ticket, result } = done;
            match ticket.kind {
                TicketKind::Changesets => self.apply_changesets(ticket, result),
                TicketKind::Files(id) => self.apply_files(id, ticket, result),
                TicketKind::Switch => self.apply_switch(ticket, result),
            }
        }
    }
}
