//! `Result` alias and the verification macros used at API boundaries.

pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Verifies a property of a caller-supplied argument, failing with
/// `ErrorKind::InvalidArgument`.
///
/// The first operand names the argument and the second is the condition it
/// must satisfy; both are captured verbatim in the diagnostic.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {
        $crate::result::check_arg($expr, stringify!($name), stringify!($expr))?
    };
}

/// Verifies a property of externally supplied data, failing with
/// `ErrorKind::InvalidFormat`.
#[macro_export]
macro_rules! verify_data {
    ($name:expr, $expr:expr) => {
        $crate::result::check_data($expr, stringify!($name), stringify!($expr))?
    };
}

#[inline]
pub fn check_arg(ok: bool, name: &str, condition: &str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(arg_rejected(name, condition))
    }
}

#[inline]
pub fn check_data(ok: bool, element: &str, condition: &str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(data_rejected(element, condition))
    }
}

#[cold]
fn arg_rejected(name: &str, condition: &str) -> crate::error::Error {
    crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into()
}

#[cold]
fn data_rejected(element: &str, condition: &str) -> crate::error::Error {
    crate::error::ErrorKind::InvalidFormat {
        element: element.to_string(),
        message: condition.to_string(),
    }
    .into()
}
