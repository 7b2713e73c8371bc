// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly at the end of each block.
///
/// ```
/// use r3bl_text_edit::{CommonResult, throws};
///
/// fn check_tab_spaces(tab_spaces: usize) -> CommonResult<()> {
///     throws!({
///         if tab_spaces == 0 {
///             miette::bail!("tab_spaces must be positive");
///         }
///     });
/// }
///
/// assert!(check_tab_spaces(4).is_ok());
/// assert!(check_tab_spaces(0).is_err());
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Syntactic sugar for `Ok(())` and `Ok(value)`.
///
/// ```
/// use r3bl_text_edit::{CommonResult, ok};
///
/// fn unit() -> CommonResult<()> { ok!() }
/// fn value() -> CommonResult<usize> { ok!(4) }
///
/// assert!(unit().is_ok());
/// assert_eq!(value().unwrap(), 4);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
