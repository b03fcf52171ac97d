//! Credential providers
//!
//! Providers are only built from [`ResolvedCredentials`], so an invalid
//! configuration never reaches this point. Construction is lazy: no
//! environment or profile lookups happen until the first request is signed.

use aws_config::environment::EnvironmentVariableCredentialsProvider;
use aws_config::meta::credentials::CredentialsProviderChain;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_credential_types::Credentials;
use aws_credential_types::provider::SharedCredentialsProvider;
use s3cli_core::ResolvedCredentials;

/// Provider name reported for inline key pairs
pub const STATIC_PROVIDER_NAME: &str = "s3cli-static-credentials";

/// Build the credential provider for validated credentials
pub fn credentials_provider(credentials: &ResolvedCredentials) -> SharedCredentialsProvider {
    match credentials {
        ResolvedCredentials::Static {
            access_key_id,
            secret_access_key,
        } => SharedCredentialsProvider::new(Credentials::new(
            access_key_id,
            secret_access_key,
            None, // session token
            None, // expiry
            STATIC_PROVIDER_NAME,
        )),
        // Environment variables win over the shared profile files
        ResolvedCredentials::EnvOrProfile => SharedCredentialsProvider::new(
            CredentialsProviderChain::first_try(
                "Environment",
                EnvironmentVariableCredentialsProvider::new(),
            )
            .or_else("Profile", ProfileFileCredentialsProvider::builder().build()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_credential_types::provider::ProvideCredentials;

    #[tokio::test]
    async fn test_static_provider_returns_configured_keys() {
        let provider = credentials_provider(&ResolvedCredentials::Static {
            access_key_id: "fake-access-key".into(),
            secret_access_key: "fake-secret-key".into(),
        });

        let credentials = provider.provide_credentials().await.unwrap();
        assert_eq!(credentials.access_key_id(), "fake-access-key");
        assert_eq!(credentials.secret_access_key(), "fake-secret-key");
        assert!(credentials.session_token().is_none());
    }
}
