//! # Shell Commands
//!
//! One function per menu option. Commands take the session state, return a
//! serializable response or a [`ConsoleError`](crate::error::ConsoleError),
//! and never touch the terminal.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── 1) list products
//! ├── cart.rs      ◄─── 2) add, 3) view, 4) remove, 6) clear
//! └── checkout.rs  ◄─── 5) checkout
//! ```

pub mod cart;
pub mod checkout;
pub mod product;
