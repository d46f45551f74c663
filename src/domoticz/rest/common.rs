use serde::{Deserialize, Deserializer};

use crate::domoticz::client::StatusBody;

/// Controller object id.
///
/// Domoticz serialises `idx` as a string in most listings and as a number in
/// a few, so both forms are accepted.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "RawIdx")]
pub struct Idx(pub i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdx {
    Number(i64),
    Text(String),
}

impl TryFrom<RawIdx> for Idx {
    type Error = String;

    fn try_from(raw: RawIdx) -> Result<Self, Self::Error> {
        match raw {
            RawIdx::Number(n) => Ok(Idx(n)),
            RawIdx::Text(s) => s
                .trim()
                .parse()
                .map(Idx)
                .map_err(|_| format!("invalid idx {s:?}")),
        }
    }
}

/// The `{"status": ..., "result": [...]}` wrapper around listings.
///
/// `result` is left out entirely when there is nothing to list, and also
/// when the controller refuses the read, so `status` has to be checked first.
#[derive(Deserialize, Debug, Clone)]
pub struct ResultResponse<T> {
    pub status: Option<String>,
    pub message: Option<String>,
    pub result: Option<Vec<T>>,
}

impl<T> StatusBody for ResultResponse<T> {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl<T> ResultResponse<T> {
    pub fn into_records(self) -> Vec<T> {
        self.result.unwrap_or_default()
    }
}

/// Treats `""` the same as a missing string.
pub fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Reads `PlanIDs`, which may mix numbers and numeric strings.
pub fn deserialize_plan_ids<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids: Option<Vec<Idx>> = Option::deserialize(deserializer)?;
    Ok(ids
        .unwrap_or_default()
        .into_iter()
        .map(|idx| idx.0)
        .collect())
}
