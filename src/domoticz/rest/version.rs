use serde::Deserialize;

use crate::{
    domoticz::client::{DomoticzClient, StatusBody},
    error::ControllerError,
};

#[derive(Deserialize, Debug, Clone)]
pub struct VersionResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub version: Option<String>,
}

impl StatusBody for VersionResponse {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

pub async fn get_domoticz_version(client: &DomoticzClient) -> Result<String, ControllerError> {
    let response: VersionResponse = client.query("getversion", &[]).await?;

    response
        .version
        .ok_or_else(|| ControllerError::Decode("getversion: missing version".to_string()))
}
