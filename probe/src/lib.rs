//! A DHCP reachability probe.
//!
//! Broadcasts a `DHCPDISCOVER` and reports the lease parameters of the
//! first `DHCPOFFER` answering it.

#[macro_use]
mod macros;

mod args;
mod config;
mod error;
pub mod privileges;
mod probe;
mod report;

pub use self::{
    args::Args,
    config::Config,
    error::Error,
    probe::{Exchange, Probe},
    report::Report,
};
