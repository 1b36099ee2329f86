// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::config::Config;
use crate::error::Error;
use crate::platform::{Host, Platform, Socket};
use crate::segment::segments;
use crate::{BROADCAST_ADDRESS, NET_INIT_PARAM_SIZE};
use log::{debug, warn};
use std::fmt::{self, Write};
use std::net::{Ipv4Addr, SocketAddrV4};
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

/// An active console session.
struct Session<S> {
    /// The socket. The mutex serializes echo calls.
    channel: Mutex<S>,
    destination: SocketAddrV4,
    /// Stack bookkeeping memory. Only present if this session brought the stack up.
    scratch: Option<Box<[u8]>>,
}

/// UDP console.
///
/// Messages are sent as plain UDP datagrams to the configured destination without
/// any framing. Messages longer than [`MAX_PAYLOAD_SIZE`](crate::MAX_PAYLOAD_SIZE)
/// are split into several datagrams. Sending never blocks: segments that do not fit
/// into the socket buffer are dropped.
pub struct Console<P: Platform = Host> {
    platform: P,
    session: Option<Session<P::Socket>>,
}

impl<P: Platform> Console<P> {
    /// Create an uninitialized console on `platform`.
    pub const fn new(platform: P) -> Self {
        Self {
            platform,
            session: None,
        }
    }

    /// Initialize the console to send to `address` on port [`PORT`](crate::PORT).
    /// Broadcast is used if `address` is `None`. This is a no-op if the console is
    /// already initialized.
    pub fn initialize(&mut self, address: Option<&str>) -> Result<(), Error> {
        self.initialize_with(&Config::new(address))
    }

    /// Initialize the console with `config`. This is a no-op if the console is already
    /// initialized.
    ///
    /// On error everything acquired so far is released and the console stays
    /// uninitialized.
    pub fn initialize_with(&mut self, config: &Config) -> Result<(), Error> {
        if self.session.is_some() {
            return Ok(());
        }

        let scratch = self.bring_up()?;
        let (socket, destination) = self.open(config).inspect_err(|e| {
            warn!(target: "netdbg", "Failed to initialize console: {e}");
            if scratch.is_some() {
                self.platform.term_stack();
            }
        })?;

        debug!(target: "netdbg", "Console sending to {destination}");
        self.session = Some(Session {
            channel: Mutex::new(socket),
            destination,
            scratch,
        });
        Ok(())
    }

    /// Check if the console is initialized.
    pub fn was_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// Destination of an initialized console.
    pub fn destination(&self) -> Option<SocketAddrV4> {
        self.session.as_ref().map(|s| s.destination)
    }

    /// Platform the console runs on.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Format `args` and send the result. Returns the length of the formatted message.
    ///
    /// Concurrent calls are serialized: all segments of one message are sent before
    /// the next message starts. Send errors are ignored.
    pub fn echo(&self, args: fmt::Arguments) -> Result<usize, Error> {
        let session = self.session.as_ref().ok_or(Error::NotInitialized)?;

        // A panic while formatting poisons the lock but leaves the socket intact.
        let channel = session
            .channel
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut message = String::new();
        message.write_fmt(args).map_err(|_| Error::Format)?;

        for segment in segments(message.as_bytes()) {
            let _ = channel.send_to(segment, &session.destination);
        }

        Ok(message.len())
    }

    /// Send `message` as is.
    pub fn echo_str(&self, message: &str) -> Result<usize, Error> {
        self.echo(format_args!("{message}"))
    }

    /// Close the console and release all its resources. This is a no-op if the console
    /// is not initialized.
    pub fn destroy(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        let Session {
            channel,
            destination,
            scratch,
        } = session;

        drop(channel);
        if let Some(scratch) = scratch {
            self.platform.term_stack();
            drop(scratch);
        }
        debug!(target: "netdbg", "Console to {destination} closed");
    }

    /// Load the network module and bring the stack up if nobody did so yet. Returns
    /// the stack's scratch memory if this call initialized the stack.
    fn bring_up(&self) -> Result<Option<Box<[u8]>>, Error> {
        self.platform.load_module().map_err(Error::Init)?;
        if self.platform.is_stack_ready() {
            return Ok(None);
        }

        let mut scratch = vec![0u8; NET_INIT_PARAM_SIZE].into_boxed_slice();
        self.platform
            .init_stack(&mut scratch)
            .map_err(Error::Init)
            .inspect_err(|e| warn!(target: "netdbg", "{e}"))?;
        debug!(target: "netdbg", "Network stack initialized");
        Ok(Some(scratch))
    }

    /// Open a broadcast capable socket and resolve the destination.
    fn open(&self, config: &Config) -> Result<(P::Socket, SocketAddrV4), Error> {
        let socket = self.platform.open_socket().map_err(Error::Socket)?;
        let address = config.address.as_deref().unwrap_or(BROADCAST_ADDRESS);
        socket.set_broadcast(true).map_err(Error::SocketOption)?;
        let ip = Ipv4Addr::from_str(address).map_err(|_| Error::Address(address.to_owned()))?;
        Ok((socket, SocketAddrV4::new(ip, config.port)))
    }
}

impl Default for Console<Host> {
    fn default() -> Self {
        Self::new(Host)
    }
}

impl<P: Platform> Drop for Console<P> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<P: Platform> fmt::Debug for Console<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("destination", &self.destination())
            .finish()
    }
}
