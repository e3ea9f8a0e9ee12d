//! Task runtime options for image-backed tasks.
//!
//! Options are plain records owned by the [`TaskInfo`] being built. Each
//! setting has an applier (`with_*`) and a [`TaskConfig`] carries a list of
//! appliers by value into task creation, so nothing mutates shared state.
//!
//! # Modules
//!
//! - [`error`] — [`TaskError`]
//! - [`options`] — [`RuntimeOptions`] and [`TaskInfo`]
//! - [`opts`] — the appliers and [`TaskConfig`]

pub mod error;
pub mod options;
pub mod opts;

pub use error::{Result, TaskError};
pub use options::{RuntimeOptions, TaskInfo, RUNC_V1_RUNTIME, RUNC_V2_RUNTIME};
pub use opts::{
    with_gid_owner, with_no_new_keyring, with_no_pivot_root, with_shim_cgroup, with_uid_owner,
    TaskConfig, TaskOpt,
};
