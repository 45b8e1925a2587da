// HumanSize trait and implementations
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::SizeUnit;
use humansize::format_size;
use tracing::debug;

/// `HumanSize` renders a byte count for display.
pub trait HumanSize {
    /// Return `self` formatted according to `unit`.
    fn humansize(&self, unit: &SizeUnit) -> String;
}

/// `HumanSize` trait implementation for `u64`.
impl HumanSize for u64 {
    fn humansize(&self, unit: &SizeUnit) -> String {
        debug!("humansize: size {}, unit {:?}", self, unit);

        match unit {
            SizeUnit::Binary(opts)  => format_size(*self, opts),
            SizeUnit::Bytes         => format!("{self} bytes"),
            SizeUnit::Decimal(opts) => format_size(*self, opts),
        }
    }
}
