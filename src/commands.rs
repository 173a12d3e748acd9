//! Admin-socket command construction.

use crate::requests::AclHandle;

pub fn show_acl(handle: &AclHandle) -> String {
    format!("show acl {}", handle)
}

pub fn add_acl(handle: &AclHandle, entry: &str) -> String {
    format!("add acl {} {}", handle, entry)
}

pub fn del_acl(handle: &AclHandle, entry: &str) -> String {
    format!("del acl {} {}", handle, entry)
}

pub fn get_acl(handle: &AclHandle, entry: &str) -> String {
    format!("get acl {} {}", handle, entry)
}

pub fn clear_acl(handle: &AclHandle) -> String {
    format!("clear acl {}", handle)
}
