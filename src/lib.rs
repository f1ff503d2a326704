//! Rating engine for UAV fleet insurance.
//!
//! This crate prices drone hull and third-party-liability cover, prices
//! detachable cameras at the fleet-wide camera rate, aggregates net and gross
//! premiums for brokerage and applies the operational-capacity adjustment for
//! items that cannot all be airborne at once.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
