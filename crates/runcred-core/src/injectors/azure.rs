//! Azure Resource Manager credentials
//!
//! Two mutually exclusive auth shapes: service principal when both client
//! and tenant are set, Active Directory user/password otherwise.

use super::EnvMap;
use crate::Credential;

pub(crate) fn inject(cred: &Credential, env: &mut EnvMap) {
    let client = cred.text("client");
    let tenant = cred.text("tenant");

    env.insert(
        "AZURE_SUBSCRIPTION_ID".to_string(),
        cred.text("subscription").to_string(),
    );

    if !client.is_empty() && !tenant.is_empty() {
        env.insert("AZURE_CLIENT_ID".to_string(), client.to_string());
        env.insert("AZURE_TENANT".to_string(), tenant.to_string());
        env.insert("AZURE_SECRET".to_string(), cred.text("secret").to_string());
    } else {
        env.insert(
            "AZURE_AD_USER".to_string(),
            cred.text("username").to_string(),
        );
        env.insert(
            "AZURE_PASSWORD".to_string(),
            cred.text("password").to_string(),
        );
    }

    if cred.has_input("cloud_environment") {
        env.insert(
            "AZURE_CLOUD_ENVIRONMENT".to_string(),
            cred.text("cloud_environment").to_string(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_principal_branch() {
        let cred = Credential::new()
            .with_input("subscription", "sub-1")
            .with_input("client", "c")
            .with_input("tenant", "t")
            .with_input("secret", "s");
        let mut env = EnvMap::new();
        inject(&cred, &mut env);

        assert_eq!(env["AZURE_SUBSCRIPTION_ID"], "sub-1");
        assert_eq!(env["AZURE_CLIENT_ID"], "c");
        assert_eq!(env["AZURE_TENANT"], "t");
        assert_eq!(env["AZURE_SECRET"], "s");
        assert!(!env.contains_key("AZURE_AD_USER"));
        assert!(!env.contains_key("AZURE_PASSWORD"));
    }

    #[test]
    fn test_ad_user_branch() {
        let cred = Credential::new()
            .with_input("client", "")
            .with_input("tenant", "")
            .with_input("username", "u")
            .with_input("password", "p");
        let mut env = EnvMap::new();
        inject(&cred, &mut env);

        assert_eq!(env["AZURE_AD_USER"], "u");
        assert_eq!(env["AZURE_PASSWORD"], "p");
        assert!(!env.contains_key("AZURE_CLIENT_ID"));
        assert!(!env.contains_key("AZURE_TENANT"));
        assert!(!env.contains_key("AZURE_SECRET"));
    }

    #[test]
    fn test_client_without_tenant_falls_back_to_ad_user() {
        let cred = Credential::new()
            .with_input("client", "c")
            .with_input("username", "u")
            .with_input("password", "p");
        let mut env = EnvMap::new();
        inject(&cred, &mut env);

        assert!(!env.contains_key("AZURE_CLIENT_ID"));
        assert_eq!(env["AZURE_AD_USER"], "u");
    }

    #[test]
    fn test_cloud_environment_is_independent() {
        let cred = Credential::new()
            .with_input("client", "c")
            .with_input("tenant", "t")
            .with_input("cloud_environment", "AzureUSGovernment");
        let mut env = EnvMap::new();
        inject(&cred, &mut env);

        assert_eq!(env["AZURE_CLOUD_ENVIRONMENT"], "AzureUSGovernment");
    }

    #[test]
    fn test_cloud_environment_absent() {
        let mut env = EnvMap::new();
        inject(&Credential::new(), &mut env);
        assert!(!env.contains_key("AZURE_CLOUD_ENVIRONMENT"));
    }
}
