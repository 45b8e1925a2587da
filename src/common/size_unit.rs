// SizeUnit
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use humansize::{
    FormatSizeOptions,
    BINARY,
    DECIMAL,
};
use std::str::FromStr;

// We remove the space from the humansize output so that our own output is
// sortable by `sort -h`.
/// The same as `humansize::BINARY` without a space before the unit.
fn size_unit_binary() -> FormatSizeOptions {
    FormatSizeOptions::from(BINARY).space_after_value(false)
}

/// The same as `humansize::DECIMAL` without a space before the unit.
fn size_unit_decimal() -> FormatSizeOptions {
    FormatSizeOptions::from(DECIMAL).space_after_value(false)
}

/// Valid `--unit` values. These should match the `FromStr` impl below.
pub const VALID_SIZE_UNITS: [&str; 3] = [
    "binary",
    "bytes",
    "decimal",
];

/// `SizeUnit` represents how we want the bucket size to be displayed.
#[derive(Debug)]
pub enum SizeUnit {
    /// Represent the bucket size as human readable using multiples of 1024.
    Binary(FormatSizeOptions),

    /// Represent the bucket size as the number of bytes.
    Bytes,

    /// Represent the bucket size as human readable using multiples of 1000.
    Decimal(FormatSizeOptions),
}

/// This converts from the string arguments we receive on the command line to
/// our enum type.
impl FromStr for SizeUnit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary"  => Ok(Self::Binary(size_unit_binary())),
            "bytes"   => Ok(Self::Bytes),
            "decimal" => Ok(Self::Decimal(size_unit_decimal())),
            _         => Err("no match"),
        }
    }
}
