use serde::Deserialize;

use crate::{
    domoticz::client::{DomoticzClient, StatusBody},
    entity::TemperatureUnit,
    error::ControllerError,
};

#[derive(Deserialize, Debug, Clone)]
pub struct SettingsResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "TempUnit")]
    pub temp_unit: Option<i64>,
}

impl SettingsResponse {
    /// Fahrenheit when the controller flag is 1, Celsius for anything else.
    pub fn temperature_unit(&self) -> TemperatureUnit {
        match self.temp_unit {
            Some(1) => TemperatureUnit::Fahrenheit,
            _ => TemperatureUnit::Celsius,
        }
    }
}

impl StatusBody for SettingsResponse {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

pub async fn get_domoticz_settings(
    client: &DomoticzClient,
) -> Result<SettingsResponse, ControllerError> {
    client.query("getsettings", &[]).await
}
