#![no_std]

//! Types and contract surfaces shared by the auction template and the
//! auction factory.
//!
//! `AuctionState` is the persisted record of one auction instance. Its layout
//! is owned here so that every behaviour version reads and writes the same
//! record, which is what lets the factory swap behaviour under a live
//! instance without migrating storage.

mod behavior;
mod errors;
mod registry;
mod types;

pub use behavior::{AuctionBehavior, AuctionBehaviorClient};
pub use errors::Error;
pub use registry::{AssetRegistryClient, AssetRegistryInterface};
pub use types::*;
