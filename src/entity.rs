use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Floor {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub floor_id: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LightState {
    On,
    Off,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Light {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub state: LightState,
    pub room_id: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShutterState {
    Opened,
    Closed,
    /// Stopped somewhere between open and closed.
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Shutter {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub state: ShutterState,
    pub room_id: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Temperature,
    Humidity,
    Pressure,
    AirQuality,
}

/// A single measurement. Sensors have no id of their own; they are told apart
/// by `(name, kind)`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Sensor {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: SensorKind,
    pub value: String,
    pub unit: String,
    pub room_id: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneState {
    Enabled,
    Disabled,
}

/// `state` is `None` for scenes whose status the controller cannot observe.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Scene {
    pub id: i64,
    pub name: String,
    pub state: Option<SceneState>,
}

/// Everything one successful sync produced. Never mutated after publication.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Snapshot {
    pub floors: Vec<Floor>,
    pub rooms: Vec<Room>,
    pub lights: Vec<Light>,
    pub shutters: Vec<Shutter>,
    pub sensors: Vec<Sensor>,
    pub scenes: Vec<Scene>,
}

impl Snapshot {
    /// True when there is nothing the assistant could report on or act upon.
    pub fn has_no_devices(&self) -> bool {
        self.lights.is_empty()
            && self.shutters.is_empty()
            && self.sensors.is_empty()
            && self.scenes.is_empty()
    }
}
