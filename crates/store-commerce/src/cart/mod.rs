//! Shopping cart module.
//!
//! Contains the cart aggregate, its lines, and per-session cart storage.

mod cart;
mod session;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_ITEM};
pub use session::CartSessions;
