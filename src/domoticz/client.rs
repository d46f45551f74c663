use std::time::Duration;

use color_eyre::Result;
use hyper::Uri;
use log::{debug, warn};
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use crate::{
    error::ControllerError,
    protocols::https::{basic_auth, mk_get_request, mk_hyper_https_client, HyperHttpsClient},
    settings::Settings,
};

/// Status value the controller embeds in a response body to reject a command.
pub const STATUS_ERR: &str = "ERR";

/// Response bodies carrying the controller's own `status` and `message`.
///
/// Domoticz answers HTTP 200 even when it refuses a command, so every body
/// decoded by [`DomoticzClient::query`] is checked through this trait.
pub trait StatusBody {
    fn status(&self) -> Option<&str>;
    fn message(&self) -> Option<&str>;

    fn rejection(&self) -> Option<ControllerError> {
        (self.status() == Some(STATUS_ERR)).then(|| ControllerError::CommandRejected {
            message: self.message().unwrap_or("bad_request").to_string(),
        })
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CommandResponse {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl StatusBody for CommandResponse {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Authenticated access to the controller's `json.htm` command API.
///
/// Cheap to clone; clones share the underlying connection pool. No retries are
/// made here, every failure is handed straight back to the caller.
#[derive(Clone)]
pub struct DomoticzClient {
    https: HyperHttpsClient,
    base_url: String,
    authorization: String,
    timeout: Duration,
}

impl DomoticzClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let https = mk_hyper_https_client(settings)?;
        Ok(Self::with_https_client(settings, https))
    }

    pub fn with_https_client(settings: &Settings, https: HyperHttpsClient) -> Self {
        DomoticzClient {
            https,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            authorization: basic_auth(&settings.username, &settings.password),
            timeout: settings.request_timeout(),
        }
    }

    fn command_uri(
        &self,
        command: &str,
        params: &[(&str, String)],
    ) -> Result<Uri, ControllerError> {
        let mut url = Url::parse(&format!("{}/json.htm", self.base_url))?;

        url.query_pairs_mut()
            .append_pair("type", "command")
            .append_pair("param", command)
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));

        Ok(url.as_str().parse()?)
    }

    /// Runs a command such as `getdevices` and decodes the body.
    ///
    /// A body with `"status": "ERR"` is surfaced as `CommandRejected`, never
    /// as an empty answer.
    pub async fn query<T: DeserializeOwned + StatusBody>(
        &self,
        command: &str,
        params: &[(&str, String)],
    ) -> Result<T, ControllerError> {
        let uri = self.command_uri(command, params)?;
        debug!("GET {uri}");

        let body: T = mk_get_request(&self.https, &self.authorization, &uri, self.timeout).await?;

        match body.rejection() {
            Some(e) => {
                warn!("Controller rejected {command}: {e}");
                Err(e)
            }
            None => Ok(body),
        }
    }

    /// Runs a write command such as `switchlight` against device `idx`.
    pub async fn execute(
        &self,
        command: &str,
        idx: i64,
        action: &str,
    ) -> Result<CommandResponse, ControllerError> {
        self.query(
            command,
            &[("idx", idx.to_string()), ("switchcmd", action.to_string())],
        )
        .await
        .inspect_err(|e| {
            if e.is_rejected() {
                warn!("{command} {action} refused for idx {idx}");
            }
        })
    }
}
