use serde::Deserialize;

use crate::{domoticz::client::DomoticzClient, error::ControllerError};

use super::common::{Idx, ResultResponse};

#[derive(Deserialize, Debug, Clone)]
pub struct FloorplanData {
    pub idx: Idx,
    #[serde(rename = "Name")]
    pub name: String,
}

/// A plan (room) placed on a floorplan.
#[derive(Deserialize, Debug, Clone)]
pub struct PlanData {
    pub idx: Idx,
    #[serde(rename = "Name")]
    pub name: String,
}

pub async fn get_domoticz_floorplans(
    client: &DomoticzClient,
) -> Result<Vec<FloorplanData>, ControllerError> {
    let response: ResultResponse<FloorplanData> = client.query("getfloorplans", &[]).await?;

    Ok(response.into_records())
}

pub async fn get_domoticz_floorplan_plans(
    client: &DomoticzClient,
    floorplan: Idx,
) -> Result<Vec<PlanData>, ControllerError> {
    let response: ResultResponse<PlanData> = client
        .query("getfloorplanplans", &[("idx", floorplan.0.to_string())])
        .await?;

    Ok(response.into_records())
}
