use serde::Deserialize;

use crate::{domoticz::client::DomoticzClient, error::ControllerError};

use super::common::{deserialize_non_empty, deserialize_plan_ids, Idx, ResultResponse};

/// One entry of `getdevices`.
///
/// Measurement fields are only present on devices that report them, so a
/// missing `Temp` means "no thermometer", never zero degrees.
#[derive(Deserialize, Debug, Clone)]
pub struct DeviceData {
    pub idx: Idx,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", default, deserialize_with = "deserialize_non_empty")]
    pub description: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "SwitchType")]
    pub switch_type: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "PlanIDs", default, deserialize_with = "deserialize_plan_ids")]
    pub plan_ids: Vec<i64>,
    #[serde(rename = "Temp")]
    pub temperature: Option<serde_json::Number>,
    #[serde(rename = "Humidity")]
    pub humidity: Option<serde_json::Number>,
    #[serde(rename = "Barometer")]
    pub barometer: Option<serde_json::Number>,
    #[serde(rename = "Data")]
    pub data: Option<String>,
}

pub async fn get_domoticz_devices(
    client: &DomoticzClient,
) -> Result<Vec<DeviceData>, ControllerError> {
    let response: ResultResponse<DeviceData> = client.query("getdevices", &[]).await?;

    Ok(response.into_records())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_measurements_stay_absent() {
        let device: DeviceData = serde_json::from_str(
            r#"{
                "idx": "31",
                "Name": "Bathroom",
                "Description": "",
                "Type": "Temp + Humidity",
                "Temp": 21.5,
                "Humidity": 64,
                "PlanIDs": [0, "4"]
            }"#,
        )
        .unwrap();

        assert_eq!(device.idx, Idx(31));
        assert_eq!(device.description, None);
        assert_eq!(device.temperature.unwrap().to_string(), "21.5");
        assert_eq!(device.humidity.unwrap().to_string(), "64");
        assert!(device.barometer.is_none());
        assert_eq!(device.plan_ids, vec![0, 4]);
    }

    #[test]
    fn missing_plan_ids_is_empty() {
        let device: DeviceData =
            serde_json::from_str(r#"{"idx": 2, "Name": "Lamp", "SwitchType": "On/Off"}"#).unwrap();

        assert!(device.plan_ids.is_empty());
        assert!(device.description.is_none());
    }
}
