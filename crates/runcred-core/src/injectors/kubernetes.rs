//! Kubernetes bearer-token credentials
//!
//! Strict two-way branch: SSL verification is on only when the credential
//! both asks for it and carries a CA certificate to verify against.

use super::{exported_path, python_bool, EnvMap, ENV_SUBDIR};
use crate::{sink, Credential, PathTranslator, Result};
use std::path::{Path, PathBuf};

pub(crate) fn inject(
    cred: &Credential,
    env: &mut EnvMap,
    private_data_dir: &Path,
    translator: &dyn PathTranslator,
) -> Result<Option<PathBuf>> {
    env.insert("K8S_AUTH_HOST".to_string(), cred.text("host").to_string());
    env.insert(
        "K8S_AUTH_API_KEY".to_string(),
        cred.text("bearer_token").to_string(),
    );

    let verify = cred.truthy("verify_ssl").unwrap_or(false);
    if verify && cred.has_input("ssl_ca_cert") {
        env.insert(
            "K8S_AUTH_VERIFY_SSL".to_string(),
            python_bool(true).to_string(),
        );
        let path =
            sink::write_secret_file(&private_data_dir.join(ENV_SUBDIR), cred.text("ssl_ca_cert"))?;
        let container_path = exported_path(translator, &path, private_data_dir)?;
        env.insert("K8S_AUTH_SSL_CA_CERT".to_string(), container_path);
        Ok(Some(path))
    } else {
        env.insert(
            "K8S_AUTH_VERIFY_SSL".to_string(),
            python_bool(false).to_string(),
        );
        Ok(None)
    }
}
