//! Exit statuses and signal handling.

use crate::error::Error;

pub const INVALID_CONFIGURATION: u8 = 2;
pub const FAILURE: u8 = 1;
pub const INTERRUPTED: u8 = 130;

/// Exit status for a failed run.
pub fn status(err: &Error) -> u8 {
    match err {
        Error::InvalidConfiguration(_) => INVALID_CONFIGURATION,
        Error::UnknownSymbol { .. } | Error::Output(_) => FAILURE,
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::_exit(libc::c_int::from(INTERRUPTED)) }
}

/// Install signal handlers and keep the process out of core dumps.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        #[cfg(target_os = "linux")]
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
