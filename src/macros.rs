/// Logs a message at the error level, then exits the process with a
/// status of 1.
///
/// Evaluates to `!`, so it can stand in for any value.
#[macro_export]
macro_rules! fatal {
  (target: $target:expr, $($arg:tt)*) => ({
    error!(target: $target, $($arg)*);
    ::std::process::exit(1)
  });
  ($($arg:tt)*) => ({
    error!($($arg)*);
    ::std::process::exit(1)
  });
}
