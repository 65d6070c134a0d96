pub mod models;
pub mod sessions;
pub mod store;
pub mod tickets;
pub mod users;

pub use models::{NewTicket, Role, Session, Ticket, User, Users};
pub use sessions::SessionRegistry;
pub use store::JsonStore;
pub use tickets::TicketRepository;
pub use users::UserRepository;
