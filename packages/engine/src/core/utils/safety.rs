//! Zero-Cost Numerical Safety Macros
//!
//! Debug mode: every guarded value is checked and a non-finite one panics
//! with the particle and field that went bad.
//! Release mode: the checks compile away entirely.
//!
//! Non-finite state can only come from a logic error in the stepper (all
//! inputs are validated before a run starts), so there is nothing to recover.
//!
//! Usage:
//! ```rust
//! use capsule_engine::assert_finite;
//!
//! let x = 140.0_f32;
//! assert_finite!(x, "x of particle {}", 0);
//! ```

/// Panics in debug builds when `$value` is NaN or infinite.
///
/// - Debug: `assert!` with a formatted message
/// - Release: no code emitted
#[macro_export]
macro_rules! assert_finite {
    ($value:expr, $($msg:tt)+) => {{
        #[cfg(debug_assertions)]
        {
            let v: f32 = $value;
            assert!(v.is_finite(), "non-finite {} ({})", format_args!($($msg)+), v);
        }
    }};
}

/// Checks both components of a `Vec2`-like value (anything with `x`/`y`).
#[macro_export]
macro_rules! assert_finite_vec {
    ($vec:expr, $($msg:tt)+) => {{
        #[cfg(debug_assertions)]
        {
            let v = $vec;
            $crate::assert_finite!(v.x, "{}.x", format_args!($($msg)+));
            $crate::assert_finite!(v.y, "{}.y", format_args!($($msg)+));
        }
    }};
}
