//! Single-exchange transport over the HAProxy admin socket.

use std::io::{self, Read, Write};
use std::os::unix::net::UnixStream;

use crate::config::SocketConfig;

/// A transport able to perform one admin-socket command/response cycle per
/// call.
///
/// The admin protocol closes the connection after every command, so
/// implementations open a fresh connection for each `send` and never reuse
/// it. Implementations report transport faults (connect failure, timeout,
/// broken socket) as `io::Error` with the kind preserved; they do not
/// interpret the response content.
pub trait Transport {
    /// Execute one command, returning the response lines in order with the
    /// protocol's trailing empty line removed.
    fn send(&self, command: &str) -> io::Result<Vec<String>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, command: &str) -> io::Result<Vec<String>> {
        (**self).send(command)
    }
}

/// Transport over HAProxy's Unix admin socket.
///
/// Each `send` connects, writes the command with a trailing newline, and
/// reads until the peer closes the connection; the protocol has no length
/// framing. The configured timeout bounds both the write and the read. The
/// socket is dropped on every exit path, including errors.
#[derive(Clone, Debug)]
pub struct UnixSocketTransport {
    config: SocketConfig,
}

impl UnixSocketTransport {
    pub fn new(config: SocketConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SocketConfig {
        &self.config
    }
}

impl Transport for UnixSocketTransport {
    fn send(&self, command: &str) -> io::Result<Vec<String>> {
        let mut socket = UnixStream::connect(&self.config.path)?;
        socket.set_read_timeout(Some(self.config.timeout))?;
        socket.set_write_timeout(Some(self.config.timeout))?;

        if self.config.verbose {
            tracing::debug!(command, "sending admin socket command");
        }

        socket.write_all(command.as_bytes())?;
        socket.write_all(b"\n")?;

        let mut response = String::new();
        socket.read_to_string(&mut response)?;

        // The protocol terminates every response with an extra empty line;
        // drop it so callers only ever see content.
        let mut lines: Vec<String> = response.lines().map(str::to_owned).collect();
        lines.pop();
        Ok(lines)
    }
}
