//! OpenStack client configuration
//!
//! The OpenStack SDK reads a clouds.yaml-style file rather than discrete
//! environment variables; the only variable exported is the path to the
//! staged file.

use super::{exported_path, EnvMap, ENV_SUBDIR};
use crate::{sink, Credential, PathTranslator, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct CloudsFile<'a> {
    clouds: Clouds<'a>,
}

#[derive(Serialize)]
struct Clouds<'a> {
    devstack: CloudProfile<'a>,
}

#[derive(Serialize)]
struct CloudProfile<'a> {
    auth: CloudAuth<'a>,
    verify: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    region_name: Option<&'a str>,
}

#[derive(Serialize)]
struct CloudAuth<'a> {
    auth_url: &'a str,
    username: &'a str,
    password: &'a str,
    project_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_domain_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_name: Option<&'a str>,
}

fn build_document(cred: &Credential) -> CloudsFile<'_> {
    let auth = CloudAuth {
        auth_url: cred.text("host"),
        username: cred.text("username"),
        password: cred.text("password"),
        project_name: cred.text("project"),
        project_domain_name: cred
            .has_input("project_domain_name")
            .then(|| cred.text("project_domain_name")),
        domain_name: cred.has_input("domain").then(|| cred.text("domain")),
    };

    CloudsFile {
        clouds: Clouds {
            devstack: CloudProfile {
                auth,
                verify: cred.truthy("verify_ssl").unwrap_or(true),
                region_name: cred.has_input("region").then(|| cred.text("region")),
            },
        },
    }
}

pub(crate) fn inject(
    cred: &Credential,
    env: &mut EnvMap,
    private_data_dir: &Path,
    translator: &dyn PathTranslator,
) -> Result<PathBuf> {
    let document = serde_yaml::to_string(&build_document(cred))?;
    let path = sink::write_secret_file(&private_data_dir.join(ENV_SUBDIR), &document)?;
    let container_path = exported_path(translator, &path, private_data_dir)?;
    env.insert("OS_CLIENT_CONFIG_FILE".to_string(), container_path);
    Ok(path)
}
