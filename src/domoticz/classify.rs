use std::collections::HashMap;

use log::debug;

use super::rest::{device::DeviceData, scene::SceneData, scene::SCENE_TYPE_GROUP};
use crate::entity::{
    Light, LightState, Room, Scene, SceneState, Sensor, SensorKind, Shutter, ShutterState,
    TemperatureUnit,
};

pub const SWITCH_TYPE_ON_OFF: &str = "On/Off";
pub const SWITCH_TYPE_BLINDS: &str = "Blinds";
pub const SWITCH_TYPE_BLINDS_STOP: &str = "Blinds + Stop";

pub const KIND_PREFIX_TEMP: &str = "Temp";
pub const KIND_PREFIX_AIR_QUALITY: &str = "Air Quality";

const DEFAULT_AIR_QUALITY_UNIT: &str = "ppm";

/// Plan id the controller uses for "not placed in any plan".
pub const NO_PLAN: i64 = 0;

/// Canonical record produced from one controller device.
#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Light(Light),
    Shutter(Shutter),
    Sensor(Sensor),
}

/// Rooms of the snapshot being built, keyed by id.
pub type RoomIndex = HashMap<i64, Room>;

/// Picks the room a device belongs to from its plan memberships.
///
/// The first membership other than [`NO_PLAN`] wins. A membership pointing at
/// a plan that is not a known room leaves the device unassigned.
pub fn resolve_room(plan_ids: &[i64], rooms: &RoomIndex) -> Option<i64> {
    plan_ids
        .iter()
        .copied()
        .find(|id| *id != NO_PLAN)
        .filter(|id| rooms.contains_key(id))
}

pub fn light_state(status: Option<&str>) -> LightState {
    match status {
        Some("On") => LightState::On,
        _ => LightState::Off,
    }
}

/// Anything other than a definite "Closed" or "Stopped" reads as opened.
pub fn shutter_state(status: Option<&str>) -> ShutterState {
    match status {
        Some("Closed") => ShutterState::Closed,
        Some("Stopped") => ShutterState::Unknown,
        _ => ShutterState::Opened,
    }
}

/// Turns one device record into zero or more canonical entities.
///
/// Devices of unknown switch type and category are dropped without error.
pub fn classify_device(
    device: &DeviceData,
    rooms: &RoomIndex,
    unit: TemperatureUnit,
) -> Vec<Entity> {
    let room_id = resolve_room(&device.plan_ids, rooms);

    match device.switch_type.as_deref() {
        Some(SWITCH_TYPE_ON_OFF) => vec![Entity::Light(Light {
            id: device.idx.0,
            name: device.name.clone(),
            description: device.description.clone(),
            state: light_state(device.status.as_deref()),
            room_id,
        })],
        Some(SWITCH_TYPE_BLINDS) | Some(SWITCH_TYPE_BLINDS_STOP) => {
            vec![Entity::Shutter(Shutter {
                id: device.idx.0,
                name: device.name.clone(),
                description: device.description.clone(),
                state: shutter_state(device.status.as_deref()),
                room_id,
            })]
        }
        _ => {
            let kind = device.kind.as_deref().unwrap_or_default();

            if kind.starts_with(KIND_PREFIX_TEMP) {
                climate_sensors(device, room_id, unit)
            } else if kind.starts_with(KIND_PREFIX_AIR_QUALITY) {
                air_quality_sensor(device, room_id).into_iter().collect()
            } else {
                debug!(
                    "Ignoring device {} ({:?}, type {:?}, switch type {:?})",
                    device.idx.0, device.name, device.kind, device.switch_type
                );
                vec![]
            }
        }
    }
}

fn climate_sensors(
    device: &DeviceData,
    room_id: Option<i64>,
    unit: TemperatureUnit,
) -> Vec<Entity> {
    let measurements = [
        (SensorKind::Temperature, &device.temperature, unit.symbol()),
        (SensorKind::Humidity, &device.humidity, "%"),
        (SensorKind::Pressure, &device.barometer, "hPa"),
    ];

    measurements
        .into_iter()
        .filter_map(|(kind, value, unit)| {
            let value = value.as_ref()?;

            Some(Entity::Sensor(Sensor {
                name: device.name.clone(),
                description: device.description.clone(),
                kind,
                value: value.to_string(),
                unit: unit.to_string(),
                room_id,
            }))
        })
        .collect()
}

/// Splits a reading such as `"612 ppm"` into value and unit.
pub fn split_reading(raw: &str) -> Option<(String, String)> {
    let raw = raw.trim();
    let split_at = raw
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == ','))
        .unwrap_or(raw.len());
    let (value, unit) = raw.split_at(split_at);

    if value.is_empty() {
        return None;
    }

    let unit = unit.trim();
    let unit = if unit.is_empty() {
        DEFAULT_AIR_QUALITY_UNIT
    } else {
        unit
    };

    Some((value.to_string(), unit.to_string()))
}

fn air_quality_sensor(device: &DeviceData, room_id: Option<i64>) -> Option<Entity> {
    let Some((value, unit)) = device.data.as_deref().and_then(split_reading) else {
        debug!(
            "Air quality device {} has no readable value: {:?}",
            device.idx.0, device.data
        );
        return None;
    };

    Some(Entity::Sensor(Sensor {
        name: device.name.clone(),
        description: device.description.clone(),
        kind: SensorKind::AirQuality,
        value,
        unit,
        room_id,
    }))
}

/// Only "Group" scenes expose an observable on/off state.
pub fn classify_scene(scene: &SceneData) -> Scene {
    let state = match scene.kind.as_deref() {
        Some(SCENE_TYPE_GROUP) => Some(match scene.status.as_deref() {
            Some("On") => SceneState::Enabled,
            _ => SceneState::Disabled,
        }),
        _ => None,
    };

    Scene {
        id: scene.idx.0,
        name: scene.name.clone(),
        state,
    }
}
