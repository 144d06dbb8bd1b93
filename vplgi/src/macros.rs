#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                panic!("{}: {}", $msg, why);
            }
        }
    };
}

// Thin wrappers so call sites don't need `log` as a direct dependency

#[macro_export]
macro_rules! vplgi_trace {
    ($($arg:tt)+) => {
        $crate::log::trace!($($arg)+)
    };
}

#[macro_export]
macro_rules! vplgi_debug {
    ($($arg:tt)+) => {
        $crate::log::debug!($($arg)+)
    };
}

#[macro_export]
macro_rules! vplgi_info {
    ($($arg:tt)+) => {
        $crate::log::info!($($arg)+)
    };
}

#[macro_export]
macro_rules! vplgi_warn {
    ($($arg:tt)+) => {
        $crate::log::warn!($($arg)+)
    };
}
