// Some feature combinations result in some of these macros never being used.
// Which is fine. Just squash the warnings.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! error {
    ($($tt:tt)*) => { log!(log::error!($($tt)*)) }
}

macro_rules! warn {
    ($($tt:tt)*) => { log!(log::warn!($($tt)*)) }
}

macro_rules! info {
    ($($tt:tt)*) => { log!(log::info!($($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}

/// A tiny logger that writes every record to stderr.
///
/// This only exists so that unit tests can see log output without pulling
/// in a logging implementation as a dependency. When the `logging` feature
/// is disabled, initializing it does nothing.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct Logger(());

#[cfg(test)]
impl Logger {
    #[cfg(feature = "logging")]
    pub(crate) fn init() -> Result<(), log::SetLoggerError> {
        static LOGGER: Logger = Logger(());

        log::set_logger(&LOGGER)?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }

    #[cfg(not(feature = "logging"))]
    pub(crate) fn init() -> Result<(), crate::Error> {
        Ok(())
    }
}

#[cfg(all(test, feature = "logging"))]
impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        match (record.file(), record.line()) {
            (Some(file), Some(line)) => {
                std::eprintln!(
                    "{}|{}|{}:{}: {}",
                    record.level(),
                    record.target(),
                    file,
                    line,
                    record.args()
                );
            }
            (Some(file), None) => {
                std::eprintln!(
                    "{}|{}|{}: {}",
                    record.level(),
                    record.target(),
                    file,
                    record.args()
                );
            }
            _ => {
                std::eprintln!(
                    "{}|{}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}
