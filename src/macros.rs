// Diagnostics go through the `log` facade when the `log` feature is enabled
// and compile to nothing otherwise. Arguments are still type-checked in both
// configurations.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($argument:tt)+) => {
        ::log::trace!(target: "linked_set", $($argument)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($argument:tt)+) => {
        if false {
            let _ = ::std::format!($($argument)+);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($($argument:tt)+) => {
        ::log::debug!(target: "linked_set", $($argument)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($argument:tt)+) => {
        if false {
            let _ = ::std::format!($($argument)+);
        }
    };
}
