//! Usage: Application layer (logging setup, the conversion pipeline).

pub(crate) mod date_conversion;
pub(crate) mod logging;
