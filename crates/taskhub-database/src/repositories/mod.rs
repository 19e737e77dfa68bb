//! Concrete repository implementations.

pub mod task;
pub mod update;
pub mod user;

pub use task::TaskRepository;
pub use update::UpdateRepository;
pub use user::UserRepository;
