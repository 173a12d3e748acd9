//! High-level verbs over a named ACL.

use crate::commands;
use crate::config::SocketConfig;
use crate::connection::{Transport, UnixSocketTransport};
use crate::errors::Error;
use crate::requests::AclHandle;
use crate::responses::{self, CommandOutcome, MatchToken};

/// A client for one named ACL table over the HAProxy admin socket.
///
/// Construction verifies the handle with a `show acl` round trip, so a
/// successfully constructed client is known to have pointed at a live ACL at
/// that moment. Validity is not re-checked afterwards; a handle that goes
/// stale (e.g. after an HAProxy reload renumbers ACLs) surfaces as failed
/// operations.
///
/// Every verb performs a single command/response exchange over a fresh
/// connection; the client holds no connection state between calls.
#[derive(Debug)]
pub struct AclClient<T = UnixSocketTransport> {
    handle: AclHandle,
    transport: T,
}

impl AclClient<UnixSocketTransport> {
    /// Connect to the ACL named by `handle` over the configured admin
    /// socket.
    ///
    /// # Examples
    /// ```no_run
    /// use dynacl::{AclClient, AclHandle, SocketConfig};
    ///
    /// let client = AclClient::connect(AclHandle::Id(0), SocketConfig::default())
    ///     .expect("ACL lookup failed");
    /// client.add("10.0.0.1").expect("Failed to add entry");
    /// ```
    pub fn connect(handle: impl Into<AclHandle>, config: SocketConfig) -> Result<Self, Error> {
        Self::with_transport(handle, UnixSocketTransport::new(config))
    }
}

impl<T: Transport> AclClient<T> {
    /// Build a client over an arbitrary transport.
    ///
    /// Immediately issues the `show acl` existence check; an unknown handle
    /// fails construction with [`Error::CommandFailed`] carrying the
    /// server's diagnostic.
    pub fn with_transport(handle: impl Into<AclHandle>, transport: T) -> Result<Self, Error> {
        let client = Self {
            handle: handle.into(),
            transport,
        };
        client.check_exists()?;
        Ok(client)
    }

    /// The handle this client operates on.
    pub fn handle(&self) -> &AclHandle {
        &self.handle
    }

    /// Add an entry to the ACL.
    pub fn add(&self, entry: &str) -> Result<(), Error> {
        let lines = self.transport.send(&commands::add_acl(&self.handle, entry))?;
        expect_success(lines, &[])
    }

    /// Add the entry only if it is not already present.
    ///
    /// This takes two separate round trips (`get acl`, then `add acl` when
    /// absent), so a concurrent mutation of the ACL between them can race
    /// with the add.
    pub fn update(&self, entry: &str) -> Result<(), Error> {
        if !self.entry_exists(entry)? {
            return self.add(entry);
        }
        Ok(())
    }

    /// Delete an entry. Deleting a key that is already absent counts as
    /// success.
    pub fn delete(&self, entry: &str) -> Result<(), Error> {
        let lines = self.transport.send(&commands::del_acl(&self.handle, entry))?;
        expect_success(lines, &[responses::KEY_NOT_FOUND])
    }

    /// Dump the ACL's contents as the raw response lines, in server order.
    pub fn show(&self) -> Result<Vec<String>, Error> {
        Ok(self.transport.send(&commands::show_acl(&self.handle))?)
    }

    /// Remove every entry from the ACL.
    pub fn clear(&self) -> Result<(), Error> {
        let lines = self.transport.send(&commands::clear_acl(&self.handle))?;
        expect_success(lines, &[])
    }

    /// Check whether the entry exists in the ACL.
    ///
    /// An empty or unparsable reply is reported as absent rather than an
    /// error; only transport faults propagate, so `Err` here is always
    /// [`Error::Io`].
    pub fn entry_exists(&self, entry: &str) -> Result<bool, Error> {
        let lines = self.transport.send(&commands::get_acl(&self.handle, entry))?;
        Ok(lines
            .first()
            .and_then(|line| MatchToken::from_line(line))
            .map(|token| token.matched)
            .unwrap_or(false))
    }

    fn check_exists(&self) -> Result<(), Error> {
        let lines = self.transport.send(&commands::show_acl(&self.handle))?;
        expect_success(lines, &[])
    }
}

fn expect_success(lines: Vec<String>, ignorable: &[&str]) -> Result<(), Error> {
    match responses::classify(&lines, ignorable) {
        CommandOutcome::Success => Ok(()),
        CommandOutcome::Failure(message) => Err(Error::CommandFailed(message)),
    }
}
