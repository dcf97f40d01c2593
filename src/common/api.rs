use crate::engine;

/// Returns the version number of the liblzo release whose LZO1X, LZO1Y
/// and LZO1Z stream layouts the built-in engine follows.
///
/// The engine is not liblzo; this is a format reference, not a library
/// version.
///
/// # Example
///
/// ```
/// assert_eq!(lzoo::version_number(), 0x20a0); // 2.10
/// ```
pub const fn version_number() -> u32 {
    engine::LZO_VERSION
}

/// Returns [`version_number`] as a string.
///
/// # Example
///
/// ```
/// assert_eq!(lzoo::version_string(), "2.10");
/// ```
pub const fn version_string() -> &'static str {
    engine::LZO_VERSION_STRING
}

/// Returns the release date of the liblzo version given by
/// [`version_number`].
///
/// # Example
///
/// ```
/// assert_eq!(lzoo::version_date(), "Mar 01 2017");
/// ```
pub const fn version_date() -> &'static str {
    engine::LZO_VERSION_DATE
}
