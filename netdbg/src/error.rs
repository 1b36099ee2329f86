// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Console error implementation

use std::io;

/// Console error type
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// Network stack bring-up failed
    Init(io::Error),
    /// Datagram socket could not be created
    Socket(io::Error),
    /// Broadcast could not be enabled on the socket
    SocketOption(io::Error),
    /// Destination address is not a valid IPv4 address
    Address(String),
    /// Message formatting failed
    Format,
    /// Console is not initialized
    NotInitialized,
    /// Another logger is already installed
    LoggerInstalled,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Init(e) | Error::Socket(e) | Error::SocketOption(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Init(e) => write!(f, "Network stack initialization failed: {}", e),
            Error::Socket(e) => write!(f, "Socket error: {}", e),
            Error::SocketOption(e) => write!(f, "Failed to enable broadcast: {}", e),
            Error::Address(address) => write!(f, "Invalid address: {:?}", address),
            Error::Format => write!(f, "Failed to format message"),
            Error::NotInitialized => write!(f, "Console not initialized"),
            Error::LoggerInstalled => write!(f, "Logger already installed"),
        }
    }
}
