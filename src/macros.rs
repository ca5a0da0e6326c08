//! Call-site macros.
//!
//! Every expansion declares its own `static` gate, so each textual call site
//! is throttled independently. Putting an expansion inside a function that is
//! called from many places still yields one shared site: the gate belongs to
//! the code location, not to the caller.

/// Runs `$action` at most once per `$interval` milliseconds (or `Duration`)
/// for this call site, evaluating to `Some(value)` when it ran.
///
/// A non-positive interval runs the action every time. The interval
/// expression is evaluated on every call.
///
/// ```
/// for _ in 0..3 {
///     let ran = loggate::every_ms!(60_000, { 1 + 1 });
///     // Only the first iteration gets through.
/// #   let _ = ran;
/// }
/// ```
#[macro_export]
macro_rules! every_ms {
    (clock: $clock:expr, $interval:expr, $action:block) => {{
        static __LOGGATE_GATE: $crate::gate::WindowedGate = $crate::gate::WindowedGate::new();
        if __LOGGATE_GATE.try_acquire_with($clock, $interval) {
            ::core::option::Option::Some($action)
        } else {
            ::core::option::Option::None
        }
    }};
    ($interval:expr, $action:block) => {
        $crate::every_ms!(clock: &$crate::clock::SystemClock, $interval, $action)
    };
}

/// Runs `$action` the first time this call site is reached and never again.
#[macro_export]
macro_rules! once {
    ($action:block) => {{
        static __LOGGATE_ONCE: $crate::gate::OnceGate = $crate::gate::OnceGate::new();
        if __LOGGATE_ONCE.try_acquire() {
            ::core::option::Option::Some($action)
        } else {
            ::core::option::Option::None
        }
    }};
}

/// Emits a `tracing` event at `$lvl` no more often than every `$interval`.
///
/// ```
/// use loggate::log_every_ms;
/// use tracing::Level;
///
/// let queue_depth = 1_024;
/// log_every_ms!(Level::WARN, 10_000, queue_depth, "queue is backing up");
/// ```
#[macro_export]
macro_rules! log_every_ms {
    ($lvl:expr, $interval:expr, $($arg:tt)+) => {
        $crate::every_ms!($interval, { $crate::__private::tracing::event!($lvl, $($arg)+) })
    };
}

/// Emits a `tracing` event at `$lvl` only the first time this site is hit.
#[macro_export]
macro_rules! log_once {
    ($lvl:expr, $($arg:tt)+) => {
        $crate::once!({ $crate::__private::tracing::event!($lvl, $($arg)+) })
    };
}

#[macro_export]
macro_rules! trace_every_ms {
    ($interval:expr, $($arg:tt)+) => {
        $crate::log_every_ms!($crate::__private::tracing::Level::TRACE, $interval, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug_every_ms {
    ($interval:expr, $($arg:tt)+) => {
        $crate::log_every_ms!($crate::__private::tracing::Level::DEBUG, $interval, $($arg)+)
    };
}

#[macro_export]
macro_rules! info_every_ms {
    ($interval:expr, $($arg:tt)+) => {
        $crate::log_every_ms!($crate::__private::tracing::Level::INFO, $interval, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn_every_ms {
    ($interval:expr, $($arg:tt)+) => {
        $crate::log_every_ms!($crate::__private::tracing::Level::WARN, $interval, $($arg)+)
    };
}

#[macro_export]
macro_rules! error_every_ms {
    ($interval:expr, $($arg:tt)+) => {
        $crate::log_every_ms!($crate::__private::tracing::Level::ERROR, $interval, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace_once {
    ($($arg:tt)+) => {
        $crate::log_once!($crate::__private::tracing::Level::TRACE, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug_once {
    ($($arg:tt)+) => {
        $crate::log_once!($crate::__private::tracing::Level::DEBUG, $($arg)+)
    };
}

#[macro_export]
macro_rules! info_once {
    ($($arg:tt)+) => {
        $crate::log_once!($crate::__private::tracing::Level::INFO, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn_once {
    ($($arg:tt)+) => {
        $crate::log_once!($crate::__private::tracing::Level::WARN, $($arg)+)
    };
}

#[macro_export]
macro_rules! error_once {
    ($($arg:tt)+) => {
        $crate::log_once!($crate::__private::tracing::Level::ERROR, $($arg)+)
    };
}
