//! Zero-Cost Safety Macros
//!
//! Debug builds keep normal bounds-checked indexing (panics with useful
//! errors); release builds drop to unchecked access on the per-agent arrays,
//! which are always sized to the agent count by `resize`.
//!
//! Usage:
//! ```rust
//! use vortex_engine::fast;
//!
//! let angles = vec![0.0f32, 0.5, 1.0];
//! // Read: fast!(slice, [index])
//! let a = *fast!(angles, [1]);
//! assert_eq!(a, 0.5);
//!
//! let mut rows = vec![0u32; 3];
//! // Write: fast!(slice, [index] = value)
//! fast!(rows, [2] = 7);
//! assert_eq!(rows[2], 7);
//! ```

/// Bounds-checked in debug, `get_unchecked` in release.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
