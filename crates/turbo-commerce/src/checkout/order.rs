//! Order numbers shown after a successful payment.

use chrono::{Datelike, Utc};
use rand::Rng;
use std::fmt;

/// `ORD-<year>-<six digits>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderNumber {
    year: i32,
    serial: u32,
}

impl OrderNumber {
    /// Build from parts. `serial` is expected in `100000..=999999`.
    pub fn new(year: i32, serial: u32) -> Self {
        Self { year, serial }
    }

    /// A random number for the current year.
    pub fn generate() -> Self {
        let serial = rand::rng().random_range(100_000..1_000_000);
        Self::new(Utc::now().year(), serial)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// Text of the modal's order line.
    pub fn label(&self) -> String {
        format!("Order #{}", self)
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ORD-{}-{:06}", self.year, self.serial)
    }
}
