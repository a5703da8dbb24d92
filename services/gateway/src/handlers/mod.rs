pub mod listings;
pub mod users;
