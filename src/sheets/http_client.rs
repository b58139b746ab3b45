use google_sheets4::{hyper, hyper_rustls};

/// The hyper client shared by the authenticator and the `Sheets` hub.
pub type HttpsClient = hyper::Client<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>;

pub fn http_client() -> HttpsClient {
    hyper::Client::builder().build(
        hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .unwrap()
            .https_or_http()
            .enable_http1()
            .build(),
    )
}
