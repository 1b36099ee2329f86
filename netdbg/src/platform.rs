// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Network primitives the console is built on.
//!
//! [`Platform`] groups everything the console needs from its host: making sure the
//! network stack is up and opening datagram sockets. [`Host`] implements it on top of
//! the operating system's stack.

use socket2::{Domain, Protocol, SockAddr, Type};
use std::io;
use std::net::SocketAddrV4;

/// A connectionless datagram socket. Dropping the socket closes it.
pub trait Socket: Send {
    /// Enable or disable sending to broadcast addresses.
    fn set_broadcast(&self, broadcast: bool) -> io::Result<()>;

    /// Send `buf` as one datagram to `addr` without blocking.
    fn send_to(&self, buf: &[u8], addr: &SocketAddrV4) -> io::Result<usize>;
}

/// Host side of the network stack.
pub trait Platform {
    /// Socket type opened by [`Platform::open_socket`].
    type Socket: Socket;

    /// Make sure the networking module is loaded.
    fn load_module(&self) -> io::Result<()>;

    /// Check if the network stack is up.
    fn is_stack_ready(&self) -> bool;

    /// Bring the network stack up. `scratch` is used by the stack for bookkeeping and
    /// must stay alive until [`Platform::term_stack`] is called.
    fn init_stack(&self, scratch: &mut [u8]) -> io::Result<()>;

    /// Shut down a stack previously brought up with [`Platform::init_stack`].
    fn term_stack(&self);

    /// Open an IPv4 datagram socket.
    fn open_socket(&self) -> io::Result<Self::Socket>;
}

/// The operating system network stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct Host;

impl Platform for Host {
    type Socket = HostSocket;

    fn load_module(&self) -> io::Result<()> {
        Ok(())
    }

    // Hosted targets have their stack brought up by the kernel.
    fn is_stack_ready(&self) -> bool {
        true
    }

    fn init_stack(&self, _scratch: &mut [u8]) -> io::Result<()> {
        Ok(())
    }

    fn term_stack(&self) {}

    fn open_socket(&self) -> io::Result<HostSocket> {
        socket2::Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP)).map(HostSocket)
    }
}

/// UDP socket of the [`Host`] platform.
#[derive(Debug)]
pub struct HostSocket(socket2::Socket);

impl Socket for HostSocket {
    fn set_broadcast(&self, broadcast: bool) -> io::Result<()> {
        self.0.set_broadcast(broadcast)
    }

    fn send_to(&self, buf: &[u8], addr: &SocketAddrV4) -> io::Result<usize> {
        let addr = SockAddr::from(*addr);
        self.0.send_to_with_flags(buf, &addr, libc::MSG_DONTWAIT)
    }
}
