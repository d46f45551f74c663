use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use super::{
    classify::{classify_device, classify_scene, Entity, RoomIndex},
    client::DomoticzClient,
    rest::{
        device::get_domoticz_devices,
        floorplan::{get_domoticz_floorplan_plans, get_domoticz_floorplans},
        scene::get_domoticz_scenes,
        settings::get_domoticz_settings,
        version::get_domoticz_version,
    },
};
use crate::{
    entity::{Floor, Room, Snapshot},
    error::ControllerError,
    published::Published,
};

/// Reads the controller version into `published`.
///
/// Best effort: a failure is recorded but does not stop the entity sync.
pub async fn refresh_version(client: &DomoticzClient, published: &Published) {
    match get_domoticz_version(client).await {
        Ok(version) => published.set_version(version),
        Err(e) => {
            warn!("Failed to read Domoticz version: {e}");
            published.record_version_failure(e.to_string());
        }
    }
}

/// Reads settings, floors, rooms, devices and scenes in that order and
/// assembles them into a snapshot.
///
/// Any failed read fails the whole build; nothing partial is returned.
pub async fn build_snapshot(client: &DomoticzClient) -> Result<Snapshot, ControllerError> {
    let unit = get_domoticz_settings(client).await?.temperature_unit();

    let mut floors = vec![];
    let mut rooms: Vec<Room> = vec![];

    // Rooms can only be listed per floor
    for floorplan in get_domoticz_floorplans(client).await? {
        let plans = get_domoticz_floorplan_plans(client, floorplan.idx).await?;

        rooms.extend(plans.into_iter().map(|plan| Room {
            id: plan.idx.0,
            name: plan.name,
            floor_id: Some(floorplan.idx.0),
        }));

        floors.push(Floor {
            id: floorplan.idx.0,
            name: floorplan.name,
        });
    }

    let floors = dedupe_by_id(floors, |floor| floor.id, "floor");
    let rooms = dedupe_by_id(rooms, |room| room.id, "room");
    let room_index: RoomIndex = rooms.iter().map(|room| (room.id, room.clone())).collect();

    let mut snapshot = Snapshot {
        floors,
        rooms,
        ..Default::default()
    };

    for device in get_domoticz_devices(client).await? {
        for entity in classify_device(&device, &room_index, unit) {
            match entity {
                Entity::Light(light) => snapshot.lights.push(light),
                Entity::Shutter(shutter) => snapshot.shutters.push(shutter),
                Entity::Sensor(sensor) => snapshot.sensors.push(sensor),
            }
        }
    }

    snapshot.scenes = get_domoticz_scenes(client)
        .await?
        .iter()
        .map(classify_scene)
        .collect();

    snapshot.lights = dedupe_by_id(snapshot.lights, |light| light.id, "light");
    snapshot.shutters = dedupe_by_id(snapshot.shutters, |shutter| shutter.id, "shutter");
    snapshot.scenes = dedupe_by_id(snapshot.scenes, |scene| scene.id, "scene");
    warn_on_ambiguous_sensors(&snapshot);

    debug!(
        "Built snapshot: {} floors, {} rooms, {} lights, {} shutters, {} sensors, {} scenes",
        snapshot.floors.len(),
        snapshot.rooms.len(),
        snapshot.lights.len(),
        snapshot.shutters.len(),
        snapshot.sensors.len(),
        snapshot.scenes.len()
    );

    Ok(snapshot)
}

/// Keeps the first record for every id.
fn dedupe_by_id<T>(items: Vec<T>, id: impl Fn(&T) -> i64, what: &str) -> Vec<T> {
    let mut seen = HashSet::new();

    items
        .into_iter()
        .filter(|item| {
            let first = seen.insert(id(item));
            if !first {
                warn!("Dropping duplicate {what} with id {}", id(item));
            }
            first
        })
        .collect()
}

/// Sensors are identified by name and type only. Two devices with the same
/// name cannot be told apart by the assistant except through their room.
fn warn_on_ambiguous_sensors(snapshot: &Snapshot) {
    let mut counts = HashMap::new();
    for sensor in &snapshot.sensors {
        *counts.entry((sensor.name.as_str(), sensor.kind)).or_insert(0) += 1;
    }

    for ((name, kind), count) in counts {
        if count > 1 {
            warn!("{count} {kind:?} sensors share the name {name:?}");
        }
    }
}
