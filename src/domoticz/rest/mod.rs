//! Response shapes of the Domoticz `json.htm` read commands, one module per
//! endpoint, each with a helper that issues the command.

pub mod common;
pub mod device;
pub mod floorplan;
pub mod scene;
pub mod settings;
pub mod version;
