use error_stack::{Result, ResultExt};
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use google_sheets4::{hyper, hyper_rustls};
use thiserror::Error;

use crate::config::sheets_config::SpreadsheetConfig;

use super::http_client::HttpsClient;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to read service account key")]
    ReadKey,
    #[error("Failed to build service account authenticator")]
    BuildAuthenticator,
}

/// Builds a service-account authenticator from the key file named in the
/// config. The key is read here, before any request is made.
pub async fn auth(
    config: &SpreadsheetConfig,
    client: HttpsClient,
) -> Result<Authenticator<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>, AuthError> {
    let priv_key_path = config.priv_key.as_ref();
    let secret: oauth2::ServiceAccountKey = oauth2::read_service_account_key(priv_key_path)
        .await
        .change_context(AuthError::ReadKey)
        .attach_printable_lazy(|| format!("path: {}", priv_key_path))?;

    oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(AuthError::BuildAuthenticator)
}
