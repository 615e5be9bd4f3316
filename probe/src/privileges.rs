//! Privilege check before binding the client port.

use crate::error::Error;

/// Ports below this one need superuser rights to bind.
pub const PRIVILEGED_PORT_LIMIT: u16 = 1024;

/// Fails early instead of at `bind` if `port` needs rights the process lacks.
///
/// # Errors
/// `Error::Privileges` for a privileged port and a non-root effective user.
#[cfg(unix)]
pub fn check(port: u16) -> Result<(), Error> {
    if port < PRIVILEGED_PORT_LIMIT && !nix::unistd::geteuid().is_root() {
        return Err(Error::Privileges);
    }
    Ok(())
}

#[cfg(not(unix))]
pub fn check(_port: u16) -> Result<(), Error> {
    Ok(())
}
