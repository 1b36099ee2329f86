// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Send text to a network debug console listener.
//!
//! Echoes the positional arguments as one line, or every line read from stdin if
//! there are none.

use anyhow::{Context, Error};
use argh::FromArgs;
use log::{debug, info, LevelFilter};
use netdbg::{echo_to, Config, Console};
use std::io::{self, BufRead};

#[derive(FromArgs)]
#[argh(help_triggers("-h", "--help", "help"))]
/// Echo arguments
struct Args {
    #[argh(description = "destination address (default: broadcast or NETDBG_ADDRESS)")]
    #[argh(option, short = 'a')]
    address: Option<String>,

    #[argh(description = "destination port (default: 57005 or NETDBG_PORT)")]
    #[argh(option, short = 'p')]
    port: Option<u16>,

    #[argh(description = "log level")]
    #[argh(option, short = 'l')]
    log_level: Option<LevelFilter>,

    #[argh(description = "message to send")]
    #[argh(positional)]
    message: Vec<String>,
}

fn main() -> Result<(), Error> {
    let Args {
        address,
        port,
        log_level,
        message,
    } = argh::from_env();

    env_logger::Builder::new()
        .filter_level(log_level.unwrap_or(LevelFilter::Warn))
        .init();

    // Flags take precedence over the environment.
    let mut config = Config::from_env();
    if address.is_some() {
        config.address = address;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let mut console = Console::default();
    console
        .initialize_with(&config)
        .with_context(|| format!("failed to initialize console with {config:?}"))?;
    info!("Sending to {:?}", console.destination());

    if message.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            let len = echo_to!(console, "{line}\n")?;
            debug!("Sent {len} bytes");
        }
    } else {
        let len = echo_to!(console, "{}\n", message.join(" "))?;
        debug!("Sent {len} bytes");
    }

    console.destroy();
    Ok(())
}
