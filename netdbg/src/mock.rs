// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Platform double that records resource usage and captures datagrams.

use crate::platform::{Platform, Socket};
use std::io;
use std::net::SocketAddrV4;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Datagram = (SocketAddrV4, Vec<u8>);

#[derive(Debug)]
struct State {
    ready: AtomicBool,
    fail_load: AtomicBool,
    fail_init: AtomicBool,
    fail_socket: AtomicBool,
    fail_broadcast: AtomicBool,
    would_block: AtomicBool,
    broadcast: AtomicBool,
    stack_inits: AtomicUsize,
    stack_terms: AtomicUsize,
    scratch_len: AtomicUsize,
    sockets_opened: AtomicUsize,
    sockets_closed: AtomicUsize,
    sent: Mutex<Vec<Datagram>>,
}

/// Cloning yields a handle to the same state.
#[derive(Debug, Clone)]
pub struct MockPlatform {
    state: Arc<State>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        let state = State {
            ready: AtomicBool::new(true),
            fail_load: AtomicBool::default(),
            fail_init: AtomicBool::default(),
            fail_socket: AtomicBool::default(),
            fail_broadcast: AtomicBool::default(),
            would_block: AtomicBool::default(),
            broadcast: AtomicBool::default(),
            stack_inits: AtomicUsize::default(),
            stack_terms: AtomicUsize::default(),
            scratch_len: AtomicUsize::default(),
            sockets_opened: AtomicUsize::default(),
            sockets_closed: AtomicUsize::default(),
            sent: Mutex::default(),
        };
        Self {
            state: Arc::new(state),
        }
    }
}

impl MockPlatform {
    pub fn set_stack_ready(&self, ready: bool) {
        self.state.ready.store(ready, Ordering::SeqCst);
    }

    pub fn set_fail_load(&self, fail: bool) {
        self.state.fail_load.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_init(&self, fail: bool) {
        self.state.fail_init.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_socket(&self, fail: bool) {
        self.state.fail_socket.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_broadcast(&self, fail: bool) {
        self.state.fail_broadcast.store(fail, Ordering::SeqCst);
    }

    pub fn set_would_block(&self, would_block: bool) {
        self.state.would_block.store(would_block, Ordering::SeqCst);
    }

    pub fn is_ready(&self) -> bool {
        self.state.ready.load(Ordering::SeqCst)
    }

    pub fn broadcast_enabled(&self) -> bool {
        self.state.broadcast.load(Ordering::SeqCst)
    }

    pub fn stack_inits(&self) -> usize {
        self.state.stack_inits.load(Ordering::SeqCst)
    }

    pub fn stack_terms(&self) -> usize {
        self.state.stack_terms.load(Ordering::SeqCst)
    }

    pub fn scratch_len(&self) -> usize {
        self.state.scratch_len.load(Ordering::SeqCst)
    }

    pub fn sockets_opened(&self) -> usize {
        self.state.sockets_opened.load(Ordering::SeqCst)
    }

    pub fn sockets_closed(&self) -> usize {
        self.state.sockets_closed.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<Datagram> {
        self.state.sent.lock().unwrap().clone()
    }

    pub fn clear_sent(&self) {
        self.state.sent.lock().unwrap().clear();
    }
}

impl Platform for MockPlatform {
    type Socket = MockSocket;

    fn load_module(&self) -> io::Result<()> {
        if self.state.fail_load.load(Ordering::SeqCst) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        Ok(())
    }

    fn is_stack_ready(&self) -> bool {
        self.is_ready()
    }

    fn init_stack(&self, scratch: &mut [u8]) -> io::Result<()> {
        if self.state.fail_init.load(Ordering::SeqCst) {
            return Err(io::Error::from(io::ErrorKind::OutOfMemory));
        }
        assert!(scratch.iter().all(|b| *b == 0), "scratch not zeroed");
        self.state.scratch_len.store(scratch.len(), Ordering::SeqCst);
        self.state.stack_inits.fetch_add(1, Ordering::SeqCst);
        self.set_stack_ready(true);
        Ok(())
    }

    fn term_stack(&self) {
        self.state.stack_terms.fetch_add(1, Ordering::SeqCst);
        self.set_stack_ready(false);
    }

    fn open_socket(&self) -> io::Result<MockSocket> {
        if self.state.fail_socket.load(Ordering::SeqCst) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        self.state.sockets_opened.fetch_add(1, Ordering::SeqCst);
        Ok(MockSocket {
            state: self.state.clone(),
        })
    }
}

#[derive(Debug)]
pub struct MockSocket {
    state: Arc<State>,
}

impl Socket for MockSocket {
    fn set_broadcast(&self, broadcast: bool) -> io::Result<()> {
        if self.state.fail_broadcast.load(Ordering::SeqCst) {
            return Err(io::Error::from(io::ErrorKind::InvalidInput));
        }
        self.state.broadcast.store(broadcast, Ordering::SeqCst);
        Ok(())
    }

    fn send_to(&self, buf: &[u8], addr: &SocketAddrV4) -> io::Result<usize> {
        if self.state.would_block.load(Ordering::SeqCst) {
            return Err(io::Error::from(io::ErrorKind::WouldBlock));
        }
        self.state.sent.lock().unwrap().push((*addr, buf.to_vec()));
        Ok(buf.len())
    }
}

impl Drop for MockSocket {
    fn drop(&mut self) {
        self.state.sockets_closed.fetch_add(1, Ordering::SeqCst);
    }
}
