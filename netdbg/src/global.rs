// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Process wide console.
//!
//! Free function interface to a single [`Console`] shared by the whole process.
//! Lifecycle calls are serialized with each other and with [`echo`].

use crate::console::Console;
use crate::error::Error;
use crate::platform::Host;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

static CONSOLE: RwLock<Console<Host>> = RwLock::new(Console::new(Host));

fn read() -> RwLockReadGuard<'static, Console<Host>> {
    CONSOLE.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Console<Host>> {
    CONSOLE.write().unwrap_or_else(PoisonError::into_inner)
}

/// Initialize the process console on port [`PORT`](crate::PORT). Broadcast is used if
/// `address` is `None`. This is a no-op if the console is already initialized.
pub fn initialize(address: Option<&str>) -> Result<(), Error> {
    write().initialize(address)
}

/// Check if the process console is initialized.
pub fn was_initialized() -> bool {
    read().was_initialized()
}

/// Format `args` and send them through the process console. Use [`echo!`](crate::echo).
pub fn echo(args: fmt::Arguments) -> Result<usize, Error> {
    read().echo(args)
}

/// Close the process console. This is a no-op if the console is not initialized.
pub fn destroy() {
    write().destroy()
}
