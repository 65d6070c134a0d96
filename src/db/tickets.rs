use crate::db::models::{NewTicket, Ticket, STATUS_OPEN};
use crate::db::store::JsonStore;
use crate::error::AppError;

pub struct TicketRepository;

impl TicketRepository {
    /// Append a ticket. The id is the current ticket count plus one.
    pub fn create(store: &JsonStore, new: NewTicket) -> Result<Ticket, AppError> {
        let mut tickets = store.load_tickets()?;

        let ticket = Ticket {
            id: tickets.len() as u64 + 1,
            username: new.username,
            discord_username: new.discord_username,
            reason: new.reason,
            additional_info: new.additional_info,
            status: STATUS_OPEN.to_string(),
            created_at: chrono::Local::now().naive_local(),
        };

        tickets.push(ticket.clone());
        store.save_tickets(&tickets)?;

        Ok(ticket)
    }

    pub fn list(store: &JsonStore) -> Result<Vec<Ticket>, AppError> {
        store.load_tickets()
    }
}
