use serde::Deserialize;

use crate::{domoticz::client::DomoticzClient, error::ControllerError};

use super::common::{Idx, ResultResponse};

/// Scene kind whose on/off state can be observed.
pub const SCENE_TYPE_GROUP: &str = "Group";

#[derive(Deserialize, Debug, Clone)]
pub struct SceneData {
    pub idx: Idx,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
}

pub async fn get_domoticz_scenes(
    client: &DomoticzClient,
) -> Result<Vec<SceneData>, ControllerError> {
    let response: ResultResponse<SceneData> = client.query("getscenes", &[]).await?;

    Ok(response.into_records())
}
