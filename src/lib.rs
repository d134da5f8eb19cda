#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod domain;
mod engine;
#[cfg(feature = "std")]
mod gateway;
#[cfg(feature = "std")]
mod logging;
mod notify;
pub mod protocol;
mod store;

pub use common::*;
pub use domain::*;
pub use engine::*;
#[cfg(feature = "std")]
pub use gateway::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use notify::*;
pub use protocol::*;
pub use store::*;
