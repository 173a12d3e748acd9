//! Request types for the HAProxy admin socket.

use std::fmt::{self, Display};

/// Identifier for an ACL table held by HAProxy.
///
/// HAProxy names ACLs either by the numeric identifier shown in `show acl`
/// output (rendered as `#<id>` in commands) or by the path of the file the
/// ACL was loaded from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AclHandle {
    /// Numeric ACL identifier, rendered as `#<id>`.
    Id(u32),
    /// File-backed ACL, rendered as the file path.
    File(String),
}

impl Display for AclHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AclHandle::Id(id) => write!(f, "#{}", id),
            AclHandle::File(path) => f.write_str(path),
        }
    }
}

impl From<u32> for AclHandle {
    fn from(id: u32) -> Self {
        AclHandle::Id(id)
    }
}

impl From<&str> for AclHandle {
    fn from(path: &str) -> Self {
        AclHandle::File(path.to_owned())
    }
}

impl From<String> for AclHandle {
    fn from(path: String) -> Self {
        AclHandle::File(path)
    }
}
