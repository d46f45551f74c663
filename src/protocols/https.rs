use std::{io::BufReader, time::Duration};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use color_eyre::Result;
use eyre::eyre;
use hyper::{
    client::HttpConnector,
    header::{ACCEPT, AUTHORIZATION},
    Body, Request, StatusCode, Uri,
};
use hyper_rustls::HttpsConnector;
use serde::de::DeserializeOwned;
use tokio_rustls::rustls::{self, OwnedTrustAnchor, RootCertStore};

use crate::{error::ControllerError, settings::Settings};

pub type HyperHttpsClient = hyper::Client<HttpsConnector<HttpConnector>>;

pub fn mk_hyper_https_client(settings: &Settings) -> Result<HyperHttpsClient> {
    let mut http = HttpConnector::new();
    http.enforce_http(false);
    http.set_connect_timeout(Some(settings.request_timeout()));

    let mut roots = RootCertStore::empty();
    roots.add_trust_anchors(webpki_roots::TLS_SERVER_ROOTS.iter().map(|ta| {
        OwnedTrustAnchor::from_subject_spki_name_constraints(
            ta.subject,
            ta.spki,
            ta.name_constraints,
        )
    }));

    // Domoticz installs commonly serve HTTPS with a self signed certificate
    if let Some(cert) = &settings.ca_cert {
        let certs = rustls_pemfile::certs(&mut BufReader::new(cert.as_bytes()))?;
        let (added, _) = roots.add_parsable_certificates(&certs);

        if added == 0 {
            return Err(eyre!(
                "ca_cert did not contain any usable PEM certificate. Check your CA_CERT config."
            ));
        }
    }

    let tls_config = rustls::ClientConfig::builder()
        .with_safe_defaults()
        .with_root_certificates(roots)
        .with_no_client_auth();

    let https = hyper_rustls::HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .wrap_connector(http);

    Ok(hyper::Client::builder().build(https))
}

/// Value for an `Authorization` header using HTTP Basic credentials.
pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

/// Issues a GET and decodes the JSON body into `T`.
///
/// The whole exchange (connect, headers and body) is bounded by `timeout`.
pub async fn mk_get_request<T: DeserializeOwned>(
    client: &HyperHttpsClient,
    authorization: &str,
    uri: &Uri,
    timeout: Duration,
) -> Result<T, ControllerError> {
    let request = Request::builder()
        .method("GET")
        .header(AUTHORIZATION, authorization)
        .header(ACCEPT, "application/json")
        .uri(uri)
        .body(Body::empty())?;

    let body_bytes = tokio::time::timeout(timeout, async {
        let result = client.request(request).await?;

        match result.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(ControllerError::Auth {
                    status: result.status().as_u16(),
                })
            }
            status if !status.is_success() => {
                return Err(ControllerError::UnexpectedStatus {
                    status: status.as_u16(),
                })
            }
            _ => {}
        }

        Ok::<_, ControllerError>(hyper::body::to_bytes(result.into_body()).await?)
    })
    .await
    .map_err(|_| {
        ControllerError::Transport(format!(
            "request timed out after {}s",
            timeout.as_secs()
        ))
    })??;

    let de = &mut serde_json::Deserializer::from_slice(&body_bytes);
    let response: T = serde_path_to_error::deserialize(de)?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_auth_encodes_credentials() {
        assert_eq!(basic_auth("admin", "domoticz"), "Basic YWRtaW46ZG9tb3RpY3o=");
    }
}
