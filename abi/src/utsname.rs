//! `utsname` record filled by the uname syscall.
//!
//! The kernel writes all six fields. Callers that size the record for five
//! fields (dropping `domainname`) get their stack overwritten, so the size
//! is checked at compile time.

pub const UTS_FIELD_LEN: usize = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtsField {
    SysName,
    NodeName,
    Release,
    Version,
    Machine,
    DomainName,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct UtsName {
    pub sysname: [u8; UTS_FIELD_LEN],
    pub nodename: [u8; UTS_FIELD_LEN],
    pub release: [u8; UTS_FIELD_LEN],
    pub version: [u8; UTS_FIELD_LEN],
    pub machine: [u8; UTS_FIELD_LEN],
    pub domainname: [u8; UTS_FIELD_LEN],
}

const _: () = assert!(core::mem::size_of::<UtsName>() == 6 * UTS_FIELD_LEN);

impl UtsName {
    pub const fn new() -> Self {
        Self {
            sysname: [0; UTS_FIELD_LEN],
            nodename: [0; UTS_FIELD_LEN],
            release: [0; UTS_FIELD_LEN],
            version: [0; UTS_FIELD_LEN],
            machine: [0; UTS_FIELD_LEN],
            domainname: [0; UTS_FIELD_LEN],
        }
    }

    fn raw(&self, field: UtsField) -> &[u8; UTS_FIELD_LEN] {
        match field {
            UtsField::SysName => &self.sysname,
            UtsField::NodeName => &self.nodename,
            UtsField::Release => &self.release,
            UtsField::Version => &self.version,
            UtsField::Machine => &self.machine,
            UtsField::DomainName => &self.domainname,
        }
    }

    fn raw_mut(&mut self, field: UtsField) -> &mut [u8; UTS_FIELD_LEN] {
        match field {
            UtsField::SysName => &mut self.sysname,
            UtsField::NodeName => &mut self.nodename,
            UtsField::Release => &mut self.release,
            UtsField::Version => &mut self.version,
            UtsField::Machine => &mut self.machine,
            UtsField::DomainName => &mut self.domainname,
        }
    }

    /// Field contents up to the first NUL.
    pub fn field(&self, field: UtsField) -> &[u8] {
        let raw = self.raw(field);
        let len = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        &raw[..len]
    }

    /// Store `value` in `field`, truncated so the terminating NUL always fits.
    pub fn set_field(&mut self, field: UtsField, value: &[u8]) {
        let raw = self.raw_mut(field);
        raw.fill(0);
        let len = value.len().min(UTS_FIELD_LEN - 1);
        raw[..len].copy_from_slice(&value[..len]);
    }
}

impl Default for UtsName {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for UtsName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = |field| core::str::from_utf8(self.field(field)).unwrap_or("<invalid>");
        f.debug_struct("UtsName")
            .field("sysname", &text(UtsField::SysName))
            .field("nodename", &text(UtsField::NodeName))
            .field("release", &text(UtsField::Release))
            .field("version", &text(UtsField::Version))
            .field("machine", &text(UtsField::Machine))
            .field("domainname", &text(UtsField::DomainName))
            .finish()
    }
}
