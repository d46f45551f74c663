//! Static descriptions handed to the assistant: what each entity field means,
//! and the shape of the callable actions.

use serde::Serialize;
use serde_json::{json, Value};

pub const UPDATE_LIGHTS: &str = "update_lights";
pub const UPDATE_SHUTTERS: &str = "update_shutters";
pub const UPDATE_SCENES: &str = "update_scenes";

pub const LIGHT_ACTIONS: [&str; 3] = ["On", "Off", "Toggle"];
pub const SHUTTER_ACTIONS: [&str; 3] = ["Open", "Close", "Stop"];
pub const SCENE_ACTIONS: [&str; 2] = ["On", "Off"];

/// A callable action as advertised to the assistant host.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

fn action_parameters(actions: &[&str], ids_description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "action": {
                "type": "string",
                "enum": actions,
                "description": "The command to send."
            },
            "ids": {
                "type": "array",
                "items": { "type": "integer" },
                "minItems": 1,
                "description": ids_description
            }
        },
        "required": ["action", "ids"]
    })
}

pub fn update_lights_schema() -> ActionSchema {
    ActionSchema {
        name: UPDATE_LIGHTS,
        description: "Switch one or more lights on or off.",
        parameters: action_parameters(&LIGHT_ACTIONS, "Ids of the lights to update."),
    }
}

pub fn update_shutters_schema() -> ActionSchema {
    ActionSchema {
        name: UPDATE_SHUTTERS,
        description: "Open, close or stop one or more shutters.",
        parameters: action_parameters(&SHUTTER_ACTIONS, "Ids of the shutters to update."),
    }
}

pub fn update_scenes_schema() -> ActionSchema {
    ActionSchema {
        name: UPDATE_SCENES,
        description: "Activate or deactivate one or more scenes.",
        parameters: action_parameters(&SCENE_ACTIONS, "Ids of the scenes to update."),
    }
}

pub fn floors_model() -> Value {
    json!({
        "id": "Floor identifier.",
        "name": "Name of the floor."
    })
}

pub fn rooms_model() -> Value {
    json!({
        "id": "Room identifier.",
        "name": "Name of the room.",
        "floor_id": "Identifier of the floor the room is on, or null."
    })
}

pub fn lights_model() -> Value {
    json!({
        "id": "Light identifier, used with update_lights.",
        "name": "Name of the light.",
        "description": "Free text describing the light, or null.",
        "state": { "enum": ["on", "off"] },
        "room_id": "Identifier of the room the light is in, or null."
    })
}

pub fn shutters_model() -> Value {
    json!({
        "id": "Shutter identifier, used with update_shutters.",
        "name": "Name of the shutter.",
        "description": "Free text describing the shutter, or null.",
        "state": {
            "enum": ["opened", "closed", "unknown"],
            "description": "unknown means the shutter was stopped part way."
        },
        "room_id": "Identifier of the room the shutter is in, or null."
    })
}

pub fn sensors_model() -> Value {
    json!({
        "name": "Name of the sensor. A device may report several types under one name.",
        "description": "Free text describing the sensor, or null.",
        "type": { "enum": ["temperature", "humidity", "pressure", "air_quality"] },
        "value": "Latest reading.",
        "unit": "Unit of the reading.",
        "room_id": "Identifier of the room the sensor is in, or null."
    })
}

pub fn scenes_model() -> Value {
    json!({
        "id": "Scene identifier, used with update_scenes.",
        "name": "Name of the scene.",
        "state": {
            "enum": ["enabled", "disabled", null],
            "description": "null means the status is unknown, not that the scene is disabled."
        }
    })
}
