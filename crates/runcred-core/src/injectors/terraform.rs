//! Terraform backend configuration
//!
//! Always stages the backend config blob; a second, separate file carries
//! GCP backend credentials when the credential supplies them.

use super::{exported_path, EnvMap, ENV_SUBDIR};
use crate::{sink, Credential, PathTranslator, Result};
use std::path::{Path, PathBuf};

pub(crate) fn inject(
    cred: &Credential,
    env: &mut EnvMap,
    private_data_dir: &Path,
    translator: &dyn PathTranslator,
) -> Result<Vec<PathBuf>> {
    let env_dir = private_data_dir.join(ENV_SUBDIR);
    let mut created = Vec::new();

    let path = sink::write_secret_file(&env_dir, cred.text("configuration"))?;
    let container_path = exported_path(translator, &path, private_data_dir)?;
    env.insert("TF_BACKEND_CONFIG_FILE".to_string(), container_path);
    created.push(path);

    if cred.has_input("gce_credentials") {
        let path = sink::write_secret_file(&env_dir, cred.text("gce_credentials"))?;
        let container_path = exported_path(translator, &path, private_data_dir)?;
        env.insert("GOOGLE_BACKEND_CREDENTIALS".to_string(), container_path);
        created.push(path);
    }

    Ok(created)
}
