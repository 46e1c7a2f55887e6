macro_rules! warning {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)+);
    );
}

pub(crate) use warning;
