pub mod classify;
pub mod client;
pub mod polling;
pub mod rest;
pub mod snapshot;
