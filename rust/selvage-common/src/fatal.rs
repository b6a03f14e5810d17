use crate::error::Error;

/// Reports `err` on the standard error channel and terminates the process
/// with a non-zero status.
///
/// This is the boundary adapter for conditions the tool does not recover
/// from: path capacity overflow and allocation failure. Library code always
/// returns typed errors; callers that treat such failures as terminal route
/// results through [`OrFatal::or_fatal`] instead of matching on them.
pub fn fatal(err: &Error) -> ! {
    log::error!("fatal: {err}");
    eprintln!("{err}");
    std::process::exit(1);
}

/// Unwraps a [`crate::Result`], terminating the process on error.
pub trait OrFatal<T> {
    fn or_fatal(self) -> T;
}

impl<T> OrFatal<T> for crate::Result<T> {
    fn or_fatal(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => fatal(&err),
        }
    }
}
