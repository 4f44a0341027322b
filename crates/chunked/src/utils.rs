//! Internal helper macros.

/// Returns early with `Err($error)` unless `$predicate` holds.
///
/// Like `assert!`, but for validating untrusted input.
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
