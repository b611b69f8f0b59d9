//! Log routing: `defmt` on target, `tracing` on desktop, nothing otherwise.
//!
//! Format strings use plain `{}` placeholders so the same call site is valid
//! for both backends. Arguments must implement `defmt::Format` and
//! `core::fmt::Display`.

macro_rules! log_event {
    ($defmt:ident, $tracing:ident, $($arg:tt)+) => {{
        #[cfg(feature = "defmt")]
        defmt::$defmt!($($arg)+);
        #[cfg(feature = "tracing")]
        tracing::$tracing!($($arg)+);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        {
            let _ = core::format_args!($($arg)+);
        }
    }};
}

macro_rules! warn {
    ($($arg:tt)+) => { log_event!(warn, warn, $($arg)+) };
}

macro_rules! info {
    ($($arg:tt)+) => { log_event!(info, info, $($arg)+) };
}

macro_rules! debug {
    ($($arg:tt)+) => { log_event!(debug, debug, $($arg)+) };
}
