//! Log routing: `defmt` on target, nothing otherwise.

macro_rules! log_event {
    ($defmt:ident, $($arg:tt)+) => {{
        #[cfg(feature = "defmt")]
        defmt::$defmt!($($arg)+);
        #[cfg(not(feature = "defmt"))]
        {
            let _ = core::format_args!($($arg)+);
        }
    }};
}

macro_rules! info {
    ($($arg:tt)+) => { log_event!(info, $($arg)+) };
}

macro_rules! debug {
    ($($arg:tt)+) => { log_event!(debug, $($arg)+) };
}
