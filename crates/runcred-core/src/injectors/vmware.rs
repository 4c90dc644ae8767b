//! VMware vCenter credentials

use super::{python_bool, EnvMap, InjectorSettings};
use crate::Credential;

pub(crate) fn inject(cred: &Credential, env: &mut EnvMap, settings: &InjectorSettings) {
    env.insert(
        "VMWARE_USER".to_string(),
        cred.text("username").to_string(),
    );
    env.insert(
        "VMWARE_PASSWORD".to_string(),
        cred.text("password").to_string(),
    );
    env.insert("VMWARE_HOST".to_string(), cred.text("host").to_string());
    // Sourced from process-wide configuration, not the credential record
    env.insert(
        "VMWARE_VALIDATE_CERTS".to_string(),
        python_bool(settings.vmware_validate_certs).to_string(),
    );
}
