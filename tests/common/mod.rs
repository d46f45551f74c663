//! Wiremock stand-in for a Domoticz controller.

#![allow(dead_code)]

use domoticz_assist::{domoticz::client::DomoticzClient, settings::read_settings_from};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const USERNAME: &str = "voice";
pub const PASSWORD: &str = "s3cret";

pub fn client_for(base_url: &str) -> DomoticzClient {
    let env = [
        ("BASE_URL", base_url),
        ("USERNAME", USERNAME),
        ("PASSWORD", PASSWORD),
        ("REQUEST_TIMEOUT_SECONDS", "5"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let settings = read_settings_from(Some(env)).unwrap();
    DomoticzClient::new(&settings).unwrap()
}

pub async fn setup() -> (MockServer, DomoticzClient) {
    let server = MockServer::start().await;
    let client = client_for(&server.uri());
    (server, client)
}

pub fn command(param: &str) -> wiremock::MockBuilder {
    Mock::given(method("GET"))
        .and(path("/json.htm"))
        .and(query_param("type", "command"))
        .and(query_param("param", param))
}

pub async fn mount_json(server: &MockServer, param: &str, body: Value) {
    command(param)
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, param: &str, status: u16) {
    command(param)
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub fn listing(records: Value) -> Value {
    json!({ "status": "OK", "title": "listing", "result": records })
}

pub async fn mount_version(server: &MockServer) {
    mount_json(
        server,
        "getversion",
        json!({ "status": "OK", "title": "GetVersion", "version": "2024.7", "Revision": 16123 }),
    )
    .await;
}

pub async fn mount_settings(server: &MockServer, temp_unit: i64) {
    mount_json(
        server,
        "getsettings",
        json!({ "status": "OK", "title": "settings", "TempUnit": temp_unit }),
    )
    .await;
}

/// One floor (idx 1) holding the kitchen (idx 5) and the living room (idx 6).
pub async fn mount_floors(server: &MockServer) {
    mount_json(
        server,
        "getfloorplans",
        listing(json!([{ "idx": "1", "Name": "Ground floor", "Order": "1" }])),
    )
    .await;

    command("getfloorplanplans")
        .and(query_param("idx", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(json!([
            { "idx": "5", "Name": "Kitchen", "PlanID": "5" },
            { "idx": "6", "Name": "Living room", "PlanID": "6" }
        ]))))
        .mount(server)
        .await;
}

pub fn light(idx: &str, name: &str, status: &str, plan_ids: Value) -> Value {
    json!({
        "idx": idx,
        "Name": name,
        "Description": "",
        "Type": "Light/Switch",
        "SubType": "Switch",
        "SwitchType": "On/Off",
        "Status": status,
        "PlanIDs": plan_ids
    })
}

pub async fn mount_scenes(server: &MockServer, scenes: Value) {
    mount_json(server, "getscenes", listing(scenes)).await;
}

pub async fn mount_devices(server: &MockServer, devices: Value) {
    mount_json(server, "getdevices", listing(devices)).await;
}

pub async fn mount_switch(server: &MockServer, param: &str, idx: &str, status: &str, expect: u64) {
    command(param)
        .and(query_param("idx", idx))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": status, "title": "SwitchLight" })),
        )
        .expect(expect)
        .mount(server)
        .await;
}
