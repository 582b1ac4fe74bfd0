//! Storefront client and admin controllers.
//!
//! Everything that talks to the products API or holds view state lives here;
//! the pure domain rules live in the `cardapio` crate.

pub mod client;
pub mod config;
pub mod forms;
pub mod listing;
pub mod logging;
pub mod uploads;

#[cfg(test)]
mod test;
