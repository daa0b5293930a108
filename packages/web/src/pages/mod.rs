//! Page components, one per route

mod bookings;
mod home;
mod login;
mod match_console;
mod not_found;
mod venues;

pub use bookings::*;
pub use home::*;
pub use login::*;
pub use match_console::*;
pub use not_found::*;
pub use venues::*;
