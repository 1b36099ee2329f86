// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::MAX_PAYLOAD_SIZE;

/// Split `payload` into datagram sized segments. Every segment but the last is exactly
/// `MAX_PAYLOAD_SIZE` bytes long. An empty payload yields no segments.
pub fn segments(payload: &[u8]) -> impl Iterator<Item = &[u8]> {
    payload.chunks(MAX_PAYLOAD_SIZE)
}
