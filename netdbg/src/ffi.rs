// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::global;
use std::ffi::{c_char, c_int, CStr};

/// Initialize the process console. `ip` may be null for broadcast.
///
/// Returns 0 on success, -1 otherwise.
#[no_mangle]
extern "C" fn netdbg_initialize(ip: *const c_char) -> c_int {
    let ip = if ip.is_null() {
        None
    } else {
        // Safety: ip is a valid nul terminated string as required by the api.
        match unsafe { CStr::from_ptr(ip) }.to_str() {
            Ok(ip) => Some(ip),
            Err(_) => return -1,
        }
    };

    match global::initialize(ip) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

/// Returns 1 if the process console is initialized, 0 otherwise.
#[no_mangle]
extern "C" fn netdbg_was_init() -> c_int {
    global::was_initialized().into()
}

/// Send an already formatted `message`. Invalid UTF-8 is replaced.
///
/// Returns the length of the message or -1 on error.
#[no_mangle]
extern "C" fn netdbg_echo(message: *const c_char) -> c_int {
    if message.is_null() {
        return -1;
    }
    // Safety: message is a valid nul terminated string as required by the api.
    let message = unsafe { CStr::from_ptr(message) }.to_string_lossy();

    match global::echo(format_args!("{message}")) {
        Ok(len) => c_int::try_from(len).unwrap_or(c_int::MAX),
        Err(_) => -1,
    }
}

/// Close the process console.
#[no_mangle]
extern "C" fn netdbg_destroy() {
    global::destroy();
}
