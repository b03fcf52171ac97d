//! TLS policy wiring
//!
//! `ssl_verify_peer = false` only switches off certificate-chain verification.
//! Protocol versions, cipher suites and handshake signature checks keep the
//! rustls defaults.

use std::sync::Arc;
use std::time::SystemTime;

use aws_sdk_s3::config::Builder;
use rustls::client::{ServerCertVerified, ServerCertVerifier};
use rustls::{Certificate, ClientConfig, ServerName};
use s3cli_core::TlsPolicy;

/// Accepts any server certificate chain
struct NoCertificateVerification;

impl ServerCertVerifier for NoCertificateVerification {
    fn verify_server_cert(
        &self,
        _end_entity: &Certificate,
        _intermediates: &[Certificate],
        _server_name: &ServerName,
        _scts: &mut dyn Iterator<Item = &[u8]>,
        _ocsp_response: &[u8],
        _now: SystemTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }
}

fn insecure_tls_config() -> ClientConfig {
    ClientConfig::builder()
        .with_safe_defaults()
        .with_custom_certificate_verifier(Arc::new(NoCertificateVerification))
        .with_no_client_auth()
}

/// Install the HTTP client matching `policy` on an S3 config builder
///
/// `VerifyPeer` keeps the SDK's default HTTPS client.
#[allow(deprecated)]
pub(crate) fn apply(builder: Builder, policy: TlsPolicy) -> Builder {
    match policy {
        TlsPolicy::VerifyPeer => builder,
        TlsPolicy::SkipPeerVerification => {
            tracing::warn!("TLS peer certificate verification is disabled");

            let connector = hyper_rustls::HttpsConnectorBuilder::new()
                .with_tls_config(insecure_tls_config())
                .https_or_http()
                .enable_http1()
                .build();
            let http_client =
                aws_smithy_runtime::client::http::hyper_014::HyperClientBuilder::new()
                    .build(connector);

            builder.http_client(http_client)
        }
    }
}
