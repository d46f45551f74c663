//! Keeps a voice assistant informed about a Domoticz home automation
//! controller: devices are polled periodically, normalised into lights,
//! shutters, sensors and scenes, and exposed as instructions plus callable
//! actions.

pub mod assistant;
pub mod domoticz;
pub mod entity;
pub mod error;
pub mod protocols;
pub mod published;
pub mod settings;
