//! Runtime option records owned by a task under construction.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};

/// The runc v2 shim runtime.
pub const RUNC_V2_RUNTIME: &str = "io.containerd.runc.v2";

/// The legacy runc v1 shim runtime.
pub const RUNC_V1_RUNTIME: &str = "io.containerd.runc.v1";

/// Options understood by runc-compatible runtimes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeOptions {
    /// Do not create a new session keyring for the task. The kernel caps the
    /// number of keyrings per user.
    pub no_new_keyring: bool,
    /// Do not use `pivot_root` when setting up the root filesystem.
    pub no_pivot_root: bool,
    /// Existing cgroup path to place the shim in.
    pub shim_cgroup: Option<String>,
    /// UID that owns the task's console I/O (for user-namespace remapping).
    pub io_uid: u32,
    /// GID that owns the task's console I/O (for user-namespace remapping).
    pub io_gid: u32,
}

/// A task under construction: the runtime it targets and its options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInfo {
    /// Runtime name, e.g. [`RUNC_V2_RUNTIME`].
    pub runtime: String,
    /// Options record, created on first use.
    pub options: Option<RuntimeOptions>,
}

impl TaskInfo {
    /// A task targeting `runtime` with no options set yet.
    pub fn new(runtime: impl Into<String>) -> Self {
        Self {
            runtime: runtime.into(),
            options: None,
        }
    }

    /// A task targeting the runc v2 runtime.
    pub fn runc() -> Self {
        Self::new(RUNC_V2_RUNTIME)
    }

    /// Returns `true` if the runtime accepts [`RuntimeOptions`].
    pub fn is_runc_compatible(&self) -> bool {
        matches!(self.runtime.as_str(), RUNC_V2_RUNTIME | RUNC_V1_RUNTIME)
    }

    /// The runtime options record, creating it if this runtime supports one.
    ///
    /// Fails with [`TaskError::UnsupportedConfiguration`] for other runtimes.
    pub fn runtime_options_mut(&mut self) -> Result<&mut RuntimeOptions> {
        if !self.is_runc_compatible() {
            return Err(TaskError::UnsupportedConfiguration {
                runtime: self.runtime.clone(),
            });
        }
        Ok(self.options.get_or_insert_with(RuntimeOptions::default))
    }
}
