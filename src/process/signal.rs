use crate::process::ProcessError;
use log::debug;

/// Keeps the shell alive when SIGINT hits the foreground process group.
/// Children get the default disposition back on exec.
pub fn install_interrupt_handler() -> Result<(), ProcessError> {
    ctrlc::set_handler(|| {
        debug!("interrupt received, left to the foreground child");
    })
    .map_err(|e| ProcessError::SignalError(e.to_string()))
}

pub fn signal_name(signal: i32) -> &'static str {
    signal_hook::low_level::signal_name(signal).unwrap_or("unknown signal")
}
