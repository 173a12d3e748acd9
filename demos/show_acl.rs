/// Connect to the HAProxy admin socket using the environment configuration
/// (`HA_SOCK_FILE`, `HA_SOCK_TIMEOUT`, `HA_DEBUG`) and dump the contents of
/// the ACL named by the first argument (`#<id>` or a file path; defaults to
/// `#0`).
use dynacl::{AclClient, AclHandle, SocketConfig};

fn main() {
    let handle = match std::env::args().nth(1) {
        Some(arg) => match arg.strip_prefix('#').and_then(|id| id.parse().ok()) {
            Some(id) => AclHandle::Id(id),
            None => AclHandle::File(arg),
        },
        None => AclHandle::Id(0),
    };

    let client = AclClient::connect(handle, SocketConfig::from_env()).expect("ACL lookup failed");
    for line in client.show().expect("Failed to dump ACL") {
        println!("{}", line);
    }
}
