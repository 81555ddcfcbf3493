//! Support ticket handlers.

mod list_tickets;
mod open_ticket;
mod reply_ticket;
mod ticket_stats;
mod update_ticket_status;

pub use list_tickets::{
    GetTicketHandler, ListOwnTicketsHandler, ListTicketsHandler, TicketWithMessages,
};
pub use open_ticket::{OpenTicketCommand, OpenTicketHandler};
pub use reply_ticket::{ReplyTicketCommand, ReplyTicketHandler};
pub use ticket_stats::TicketStatsHandler;
pub use update_ticket_status::{UpdateTicketStatusCommand, UpdateTicketStatusHandler};
