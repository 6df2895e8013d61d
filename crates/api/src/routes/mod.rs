pub mod artists;
pub mod health;
pub mod shows;
pub mod venues;
