//! Logging through `defmt` when the feature is enabled, nothing otherwise.

macro_rules! info {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)+);
    );
}

macro_rules! error {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::error!($($arg)+);
    );
}

pub(crate) use error;
pub(crate) use info;
