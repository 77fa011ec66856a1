//! Compile-time constants.
//!
//! The server has no configuration file: the listen address is fixed and the
//! only runtime knob is the log filter (CLI flag or `RUST_LOG`).

use std::net::{IpAddr, Ipv4Addr};

/// Interface the listener binds to (all interfaces).
pub const LISTEN_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// TCP port the server listens on. Fixed, not configurable.
pub const LISTEN_PORT: u16 = 5000;

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "upcheck=debug";
