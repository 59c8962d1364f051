//! Logging facade.
//!
//! Call sites write `crate::log::debug!(field = %value, "message")`. With the
//! `tracing` feature these are the `tracing` macros; without it every level
//! borrows its field values and discards them, so bindings that only feed a
//! log line still count as used.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, info, warn};

/// Accepts `name = %value`, `name = ?value`, `name = value` and bare `name`
/// fields followed by a message literal.
#[cfg(not(feature = "tracing"))]
macro_rules! discard {
    () => {};
    ($msg:literal $(, $arg:expr)*) => {
        $( let _ = &$arg; )*
    };
    ($field:ident = % $value:expr, $($rest:tt)*) => {
        let _ = &$value;
        $crate::log::debug!($($rest)*);
    };
    ($field:ident = ? $value:expr, $($rest:tt)*) => {
        let _ = &$value;
        $crate::log::debug!($($rest)*);
    };
    ($field:ident = $value:expr, $($rest:tt)*) => {
        let _ = &$value;
        $crate::log::debug!($($rest)*);
    };
    ($field:ident, $($rest:tt)*) => {
        let _ = &$field;
        $crate::log::debug!($($rest)*);
    };
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {discard as debug, discard as info, discard as warn};
