//! Reusable UI components

mod banner;
mod layout;
mod loading;
mod nav;
mod venue_card;

pub use banner::*;
pub use layout::*;
pub use loading::*;
pub use nav::*;
pub use venue_card::*;
