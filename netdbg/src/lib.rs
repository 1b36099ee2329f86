// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Network debug console
//!
//! Fire and forget text output over UDP. Messages are sent as raw datagrams to a
//! configurable IPv4 address (broadcast by default) on port [`PORT`]. Nobody has to
//! listen and nothing is acknowledged. Messages longer than [`MAX_PAYLOAD_SIZE`] are
//! split into several datagrams without any framing.
//!
//! ```no_run
//! use netdbg::Console;
//!
//! let mut console = Console::default();
//! console.initialize(Some("192.168.1.2")).unwrap();
//! netdbg::echo_to!(console, "booted in {} ms\n", 42).unwrap();
//! ```

mod config;
mod console;
mod error;
mod ffi;
pub mod global;
pub mod logger;
pub mod platform;
mod segment;

#[cfg(test)]
mod mock;

pub use config::Config;
pub use console::Console;
pub use error::Error;

/// Destination port of the console.
pub const PORT: u16 = 0xDEAD;
/// Maximum payload of a single datagram.
pub const MAX_PAYLOAD_SIZE: usize = 576;
/// Destination if no address is given.
pub const BROADCAST_ADDRESS: &str = "255.255.255.255";
/// Size of the scratch memory handed to the network stack on bring-up.
pub const NET_INIT_PARAM_SIZE: usize = 16 * 1024;

/// Format and send a message through the process console.
///
/// Uses the same syntax as [`format!`]. Evaluates to the result of [`global::echo`].
#[macro_export]
macro_rules! echo {
    ($($arg:tt)*) => {
        $crate::global::echo(format_args!($($arg)*))
    };
}

/// Format and send a message through `console`.
///
/// Uses the same syntax as [`format!`] after the console argument. Evaluates to the
/// result of [`Console::echo`].
#[macro_export]
macro_rules! echo_to {
    ($console:expr, $($arg:tt)*) => {
        $console.echo(format_args!($($arg)*))
    };
}
