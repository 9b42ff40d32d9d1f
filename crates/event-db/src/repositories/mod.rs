//! PostgreSQL repository implementations

mod error;
mod event;
mod user;

pub use event::PgEventRepository;
pub use user::PgUserRepository;
