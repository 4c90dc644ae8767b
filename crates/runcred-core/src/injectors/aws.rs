//! AWS access-key credentials

use super::EnvMap;
use crate::Credential;

pub(crate) fn inject(cred: &Credential, env: &mut EnvMap) {
    env.insert(
        "AWS_ACCESS_KEY_ID".to_string(),
        cred.text("username").to_string(),
    );
    env.insert(
        "AWS_SECRET_ACCESS_KEY".to_string(),
        cred.text("password").to_string(),
    );

    // Session credentials carry a token; exported under both the legacy
    // name and the one the AWS SDKs read.
    if cred.has_input("security_token") {
        let token = cred.text("security_token").to_string();
        env.insert("AWS_SECURITY_TOKEN".to_string(), token.clone());
        env.insert("AWS_SESSION_TOKEN".to_string(), token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_keys() {
        let cred = Credential::new()
            .with_input("username", "AKIA123")
            .with_input("password", "shhh");
        let mut env = EnvMap::new();
        inject(&cred, &mut env);

        assert_eq!(env["AWS_ACCESS_KEY_ID"], "AKIA123");
        assert_eq!(env["AWS_SECRET_ACCESS_KEY"], "shhh");
        assert!(!env.contains_key("AWS_SECURITY_TOKEN"));
        assert!(!env.contains_key("AWS_SESSION_TOKEN"));
    }

    #[test]
    fn test_session_token_aliases() {
        let cred = Credential::new()
            .with_input("username", "AKIA123")
            .with_input("password", "shhh")
            .with_input("security_token", "tok");
        let mut env = EnvMap::new();
        inject(&cred, &mut env);

        assert_eq!(env["AWS_SECURITY_TOKEN"], "tok");
        assert_eq!(env["AWS_SESSION_TOKEN"], "tok");
    }

    #[test]
    fn test_missing_fields_export_empty() {
        let mut env = EnvMap::new();
        inject(&Credential::new(), &mut env);

        assert_eq!(env["AWS_ACCESS_KEY_ID"], "");
        assert_eq!(env["AWS_SECRET_ACCESS_KEY"], "");
        assert_eq!(env.len(), 2);
    }
}
