//! Error macros for simrec

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::SimrecError::invalid_value($context, $value))
    };
}

/// Macro for creating invalid item errors
#[macro_export]
macro_rules! bail_invalid_item {
    ($index:expr, $reason:expr) => {
        return Err($crate::error::SimrecError::invalid_item($index, $reason))
    };
}

/// Macro for creating corrupt snapshot errors
#[macro_export]
macro_rules! bail_corrupt {
    ($path:expr, $reason:expr) => {
        return Err($crate::error::SimrecError::corrupt($path, $reason))
    };
}
