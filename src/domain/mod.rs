//! Usage: Domain logic (date record conversion, no IO).

pub(crate) mod date_records;
