use serde::Serialize;
use serde_json::Value;

use super::schemas::{
    floors_model, lights_model, rooms_model, scenes_model, sensors_model, shutters_model,
    update_lights_schema, update_scenes_schema, update_shutters_schema, ActionSchema,
};
use crate::entity::Snapshot;

pub const BASE_INSTRUCTIONS: &str = "\
You are a home automation assistant, focused solely on managing connected devices in the home.
When asked to calculate an average, **round to the nearest whole number** \
without explaining the calculation.";

pub const NO_DEVICES_INSTRUCTIONS: &str = "\
Currently, no connected devices have been assigned to you.
Your sole task is to ask the user to install one or more connected devices \
in the home before proceeding.";

fn push_section<T: Serialize>(
    out: &mut Vec<String>,
    title: &str,
    model: Value,
    data: &[T],
) -> serde_json::Result<()> {
    if data.is_empty() {
        return Ok(());
    }

    out.push(format!("# {title}"));
    out.push(format!("* Model: {}", serde_json::to_string(&model)?));
    out.push(format!("* Data: {}", serde_json::to_string(data)?));

    Ok(())
}

/// Renders the assistant instructions for the current snapshot.
///
/// Entity types without members are left out. Without any device at all the
/// assistant is only told to ask for devices to be installed.
pub fn render_instructions(snapshot: Option<&Snapshot>) -> serde_json::Result<String> {
    let Some(snapshot) = snapshot.filter(|s| !s.has_no_devices()) else {
        return Ok(NO_DEVICES_INSTRUCTIONS.to_string());
    };

    let mut out = vec![BASE_INSTRUCTIONS.to_string()];
    push_section(&mut out, "Floors", floors_model(), &snapshot.floors)?;
    push_section(&mut out, "Rooms", rooms_model(), &snapshot.rooms)?;
    push_section(&mut out, "Lights", lights_model(), &snapshot.lights)?;
    push_section(&mut out, "Scenes", scenes_model(), &snapshot.scenes)?;
    push_section(&mut out, "Sensors", sensors_model(), &snapshot.sensors)?;
    push_section(&mut out, "Shutters", shutters_model(), &snapshot.shutters)?;

    Ok(out.join("\n"))
}

/// Schemas of the actions that currently have something to act on.
pub fn available_action_schemas(snapshot: Option<&Snapshot>) -> Vec<ActionSchema> {
    let Some(snapshot) = snapshot else {
        return vec![];
    };

    let mut schemas = vec![];
    if !snapshot.lights.is_empty() {
        schemas.push(update_lights_schema());
    }
    if !snapshot.shutters.is_empty() {
        schemas.push(update_shutters_schema());
    }
    if !snapshot.scenes.is_empty() {
        schemas.push(update_scenes_schema());
    }

    schemas
}
