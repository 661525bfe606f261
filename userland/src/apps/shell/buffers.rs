//! Fixed scratch buffers owned by the shell.
//!
//! Nothing is allocated: every path or argument handed to the kernel is
//! staged in one of these NUL-terminated buffers first.

use minishell_lib::{CStrBuf, CStrBufError};

use crate::config::{MOUNT_FSTYPE_BUF, MOUNT_SOURCE_BUF, MOUNT_TARGET_BUF, PATH_BUF};

use super::parser::words;

pub type PathBuf = CStrBuf<PATH_BUF>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountArgError {
    /// Fewer than three words.
    Usage,
    /// A word does not fit its buffer.
    TooLong,
}

impl From<CStrBufError> for MountArgError {
    fn from(_: CStrBufError) -> Self {
        MountArgError::TooLong
    }
}

/// Staging area for `mount <source> <target> <fstype>`.
#[derive(Debug, Default)]
pub struct MountArgs {
    pub source: CStrBuf<MOUNT_SOURCE_BUF>,
    pub target: CStrBuf<MOUNT_TARGET_BUF>,
    pub fstype: CStrBuf<MOUNT_FSTYPE_BUF>,
}

impl MountArgs {
    pub const fn new() -> Self {
        Self {
            source: CStrBuf::new(),
            target: CStrBuf::new(),
            fstype: CStrBuf::new(),
        }
    }

    pub fn clear(&mut self) {
        self.source.clear();
        self.target.clear();
        self.fstype.clear();
    }

    /// Fill all three buffers from the first three words of `args`; later
    /// words are ignored. On error all three are left empty.
    pub fn parse(&mut self, args: &[u8]) -> Result<(), MountArgError> {
        self.clear();
        let mut it = words(args);
        let (Some(source), Some(target), Some(fstype)) = (it.next(), it.next(), it.next()) else {
            return Err(MountArgError::Usage);
        };

        let filled = self
            .source
            .set(source)
            .and_then(|()| self.target.set(target))
            .and_then(|()| self.fstype.set(fstype));
        if let Err(err) = filled {
            self.clear();
            return Err(err.into());
        }
        Ok(())
    }
}
