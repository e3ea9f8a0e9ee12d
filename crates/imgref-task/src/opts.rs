//! Option appliers and the [`TaskConfig`] that carries them by value.

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::options::TaskInfo;

/// A single option applied to a task under construction.
pub type TaskOpt = Box<dyn FnOnce(&mut TaskInfo) -> Result<()> + Send>;

/// Do not create a new keyring for the task.
pub fn with_no_new_keyring() -> TaskOpt {
    Box::new(|info: &mut TaskInfo| {
        info.runtime_options_mut()?.no_new_keyring = true;
        debug!(runtime = %info.runtime, "no_new_keyring set");
        Ok(())
    })
}

/// Do not use `pivot_root` for the task.
pub fn with_no_pivot_root() -> TaskOpt {
    Box::new(|info: &mut TaskInfo| {
        info.runtime_options_mut()?.no_pivot_root = true;
        debug!(runtime = %info.runtime, "no_pivot_root set");
        Ok(())
    })
}

/// Place the shim in an existing cgroup.
pub fn with_shim_cgroup(path: impl Into<String>) -> TaskOpt {
    let path = path.into();
    Box::new(move |info: &mut TaskInfo| {
        debug!(runtime = %info.runtime, cgroup = %path, "shim cgroup set");
        info.runtime_options_mut()?.shim_cgroup = Some(path);
        Ok(())
    })
}

/// Give console I/O to the remapped UID.
pub fn with_uid_owner(uid: u32) -> TaskOpt {
    Box::new(move |info: &mut TaskInfo| {
        info.runtime_options_mut()?.io_uid = uid;
        debug!(runtime = %info.runtime, uid, "io uid set");
        Ok(())
    })
}

/// Give console I/O to the remapped GID.
pub fn with_gid_owner(gid: u32) -> TaskOpt {
    Box::new(move |info: &mut TaskInfo| {
        info.runtime_options_mut()?.io_gid = gid;
        debug!(runtime = %info.runtime, gid, "io gid set");
        Ok(())
    })
}

/// An ordered set of options, applied to a [`TaskInfo`] in one call.
///
/// # Examples
///
/// ```
/// use imgref_task::{with_no_pivot_root, with_uid_owner, TaskConfig, TaskInfo};
///
/// let info = TaskConfig::new()
///     .with(with_no_pivot_root())
///     .with(with_uid_owner(1000))
///     .apply(TaskInfo::runc())
///     .unwrap();
/// let options = info.options.unwrap();
/// assert!(options.no_pivot_root);
/// assert_eq!(options.io_uid, 1000);
/// ```
#[derive(Default)]
pub struct TaskConfig {
    opts: Vec<TaskOpt>,
}

impl TaskConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option.
    pub fn with(mut self, opt: TaskOpt) -> Self {
        self.opts.push(opt);
        self
    }

    pub fn len(&self) -> usize {
        self.opts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opts.is_empty()
    }

    /// Apply every option in order, stopping at the first error.
    pub fn apply(self, mut info: TaskInfo) -> Result<TaskInfo> {
        for opt in self.opts {
            opt(&mut info)?;
        }
        Ok(info)
    }
}

impl fmt::Debug for TaskConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskConfig")
            .field("opts", &self.opts.len())
            .finish()
    }
}
