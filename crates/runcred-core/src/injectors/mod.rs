//! Per-kind credential injectors and their dispatch surface
//!
//! Each injector reads fields from a [`Credential`] view and materializes
//! them as environment variables and, where the consuming tool wants a
//! file, owner-only secret files under the run's `env/` subdirectory.
//! Dispatch is a closed enumeration: every supported kind is handled in
//! one `match`, and an unknown kind string is a caller error.

mod aws;
mod azure;
mod gce;
mod kubernetes;
mod openstack;
mod terraform;
mod vmware;

pub use gce::INVENTORY_UPDATE_MARKER;

use crate::{CoreError, Credential, IdentityTranslator, PathTranslator, Result};
use runcred_config::GlobalConfig;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variables assembled for one job launch
pub type EnvMap = HashMap<String, String>;

/// Subdirectory of the private data directory where secret files are
/// staged. Must pre-exist and be writable; this crate never creates it.
pub const ENV_SUBDIR: &str = "env";

/// The closed set of credential kinds this crate can materialize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    Aws,
    Gce,
    AzureRm,
    Vmware,
    Openstack,
    KubernetesBearerToken,
    Terraform,
}

impl CredentialKind {
    pub const ALL: [CredentialKind; 7] = [
        Self::Aws,
        Self::Gce,
        Self::AzureRm,
        Self::Vmware,
        Self::Openstack,
        Self::KubernetesBearerToken,
        Self::Terraform,
    ];

    /// The wire identifier callers use to select an injector
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Gce => "gce",
            Self::AzureRm => "azure_rm",
            Self::Vmware => "vmware",
            Self::Openstack => "openstack",
            Self::KubernetesBearerToken => "kubernetes_bearer_token",
            Self::Terraform => "terraform",
        }
    }
}

impl std::fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CredentialKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "aws" => Ok(Self::Aws),
            "gce" => Ok(Self::Gce),
            "azure_rm" => Ok(Self::AzureRm),
            "vmware" => Ok(Self::Vmware),
            "openstack" => Ok(Self::Openstack),
            "kubernetes_bearer_token" => Ok(Self::KubernetesBearerToken),
            "terraform" => Ok(Self::Terraform),
            _ => Err(CoreError::UnknownKind(s.to_string())),
        }
    }
}

/// Process-wide defaults consulted by injectors beyond the credential
/// record itself. Passed in by the caller rather than read ambiently so
/// the injectors stay testable.
#[derive(Debug, Clone, Default)]
pub struct InjectorSettings {
    /// Value exported as `VMWARE_VALIDATE_CERTS`
    pub vmware_validate_certs: bool,
}

impl InjectorSettings {
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            vmware_validate_certs: config.vmware.validate_certs,
        }
    }
}

/// Render a boolean the way the consuming modules parse it (Python
/// literal capitalization).
pub(crate) fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Dispatch surface for credential materialization.
///
/// Holds the path translator and process-wide settings; applying an
/// injector mutates the caller's env map and may create secret files
/// under `private_data_dir/env/`. Created files are the caller's to clean
/// up, whether the call succeeded or failed partway.
pub struct InjectorRegistry {
    translator: Box<dyn PathTranslator>,
    settings: InjectorSettings,
}

impl InjectorRegistry {
    pub fn new(translator: Box<dyn PathTranslator>, settings: InjectorSettings) -> Self {
        Self {
            translator,
            settings,
        }
    }

    /// Registry without path remapping, for host-side runs
    pub fn with_identity_paths(settings: InjectorSettings) -> Self {
        Self::new(Box::new(IdentityTranslator), settings)
    }

    /// Build a registry from the global configuration: translator from
    /// `[execution] container_root` (empty disables remapping), settings
    /// from `[vmware]`.
    pub fn from_config(config: &GlobalConfig) -> Self {
        let settings = InjectorSettings::from_config(config);
        if config.execution.container_root.is_empty() {
            Self::with_identity_paths(settings)
        } else {
            Self::new(
                Box::new(crate::ContainerTranslator::new(
                    config.execution.container_root.clone(),
                )),
                settings,
            )
        }
    }

    /// Apply the injector for `kind`, mutating `env` and returning the
    /// host-side paths of any secret files created, in creation order.
    ///
    /// `private_data_dir/env/` must already exist and be writable. On
    /// error the env map may be partially mutated and files already
    /// written stay on disk; the caller aborts the launch and cleans up.
    pub fn inject(
        &self,
        kind: CredentialKind,
        cred: &Credential,
        env: &mut EnvMap,
        private_data_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        tracing::debug!("Materializing {} credential", kind);

        let created = match kind {
            CredentialKind::Aws => {
                aws::inject(cred, env);
                Vec::new()
            }
            CredentialKind::Gce => {
                let path = gce::inject(cred, env, private_data_dir, self.translator.as_ref())?;
                vec![path]
            }
            CredentialKind::AzureRm => {
                azure::inject(cred, env);
                Vec::new()
            }
            CredentialKind::Vmware => {
                vmware::inject(cred, env, &self.settings);
                Vec::new()
            }
            CredentialKind::Openstack => {
                let path =
                    openstack::inject(cred, env, private_data_dir, self.translator.as_ref())?;
                vec![path]
            }
            CredentialKind::KubernetesBearerToken => {
                kubernetes::inject(cred, env, private_data_dir, self.translator.as_ref())?
                    .into_iter()
                    .collect()
            }
            CredentialKind::Terraform => {
                terraform::inject(cred, env, private_data_dir, self.translator.as_ref())?
            }
        };

        if !created.is_empty() {
            tracing::debug!(
                "Wrote {} secret file(s) for {} credential",
                created.len(),
                kind
            );
        }

        Ok(created)
    }

    /// Resolve a wire identifier and apply its injector.
    ///
    /// An unknown kind fails with [`CoreError::UnknownKind`] before any
    /// mutation of `env`.
    pub fn inject_by_name(
        &self,
        kind: &str,
        cred: &Credential,
        env: &mut EnvMap,
        private_data_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        let kind: CredentialKind = kind.parse()?;
        self.inject(kind, cred, env, private_data_dir)
    }
}

/// Translate a freshly written secret file path and render it for the env
/// map. Shared by every file-producing injector.
pub(crate) fn exported_path(
    translator: &dyn PathTranslator,
    host_path: &Path,
    private_data_dir: &Path,
) -> Result<String> {
    let container_path = translator.to_container_path(host_path, private_data_dir)?;
    Ok(container_path.to_string_lossy().into_owned())
}
