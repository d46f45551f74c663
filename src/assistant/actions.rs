use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;

use super::schemas::{UPDATE_LIGHTS, UPDATE_SCENES, UPDATE_SHUTTERS};
use crate::{domoticz::client::DomoticzClient, error::ControllerError};

pub const SWITCH_LIGHT: &str = "switchlight";
pub const SWITCH_SCENE: &str = "switchscene";

pub const DONE: &str = "Done.";
pub const BAD_REQUEST: &str = "bad_request";

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum OneOrMany {
    One(i64),
    Many(Vec<i64>),
}

#[derive(Deserialize, Debug)]
struct ActionArguments {
    action: String,
    #[serde(alias = "id")]
    ids: OneOrMany,
}

/// Sends assistant commands to the controller.
///
/// Every operation answers with a message for the assistant, errors
/// included; nothing is propagated to the caller.
#[derive(Clone)]
pub struct ActionExecutor {
    client: DomoticzClient,
}

impl ActionExecutor {
    pub fn new(client: DomoticzClient) -> Self {
        ActionExecutor { client }
    }

    /// Issues `command` for each id in order and stops at the first failure.
    async fn switch_each(
        &self,
        command: &str,
        action: &str,
        ids: &[i64],
    ) -> Result<(), ControllerError> {
        for id in ids {
            self.client.execute(command, *id, action).await?;
        }

        info!("{command} {action} done for {ids:?}");
        Ok(())
    }

    pub async fn update_lights(&self, action: &str, ids: &[i64]) -> String {
        match self.switch_each(SWITCH_LIGHT, action, ids).await {
            Ok(()) => DONE.to_string(),
            Err(e) => failure_message(&e),
        }
    }

    pub async fn update_shutters(&self, action: &str, ids: &[i64]) -> String {
        match self.switch_each(SWITCH_LIGHT, action, ids).await {
            Ok(()) => progressive(action),
            Err(e) => failure_message(&e),
        }
    }

    pub async fn update_scenes(&self, action: &str, ids: &[i64]) -> String {
        match self.switch_each(SWITCH_SCENE, action, ids).await {
            Ok(()) => DONE.to_string(),
            Err(e) => failure_message(&e),
        }
    }

    /// Dispatches an action call by name with JSON arguments
    /// `{"action": ..., "ids": [...]}`.
    pub async fn invoke(&self, name: &str, arguments: Value) -> String {
        let arguments: ActionArguments = match serde_json::from_value(arguments) {
            Ok(arguments) => arguments,
            Err(e) => {
                warn!("Invalid arguments for {name}: {e}");
                return format!("Error: invalid arguments: {e}");
            }
        };

        let ids = match arguments.ids {
            OneOrMany::One(id) => vec![id],
            OneOrMany::Many(ids) => ids,
        };

        match name {
            UPDATE_LIGHTS => self.update_lights(&arguments.action, &ids).await,
            UPDATE_SHUTTERS => self.update_shutters(&arguments.action, &ids).await,
            UPDATE_SCENES => self.update_scenes(&arguments.action, &ids).await,
            _ => format!("Error: unknown action {name}"),
        }
    }
}

fn failure_message(e: &ControllerError) -> String {
    if e.is_rejected() {
        format!("Error: {BAD_REQUEST}")
    } else {
        warn!("Command failed: {e}");
        format!("Error: {e}")
    }
}

/// Shutters take a while to move, so the reply describes the motion.
pub fn progressive(action: &str) -> String {
    match action {
        "Open" => "Opening.".to_string(),
        "Close" => "Closing.".to_string(),
        "Stop" => "Stopping.".to_string(),
        other => format!("{other}ing."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progressive_forms() {
        assert_eq!(progressive("Open"), "Opening.");
        assert_eq!(progressive("Close"), "Closing.");
        assert_eq!(progressive("Stop"), "Stopping.");
        assert_eq!(progressive("Raise"), "Raiseing.");
    }

    #[test]
    fn rejected_command_gets_generic_message() {
        let e = ControllerError::CommandRejected {
            message: "WRONG CODE".to_string(),
        };

        assert_eq!(failure_message(&e), "Error: bad_request");
    }

    #[test]
    fn transport_failure_is_described() {
        let e = ControllerError::Transport("connection refused".to_string());

        assert_eq!(
            failure_message(&e),
            "Error: transport error: connection refused"
        );
    }
}
