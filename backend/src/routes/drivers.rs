use serde::{Deserialize, Serialize};

/// Options for the driver selector. The empty value means "all drivers" and
/// is not part of the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverList {
    pub drivers: Vec<String>,
    pub total: usize,
}

impl From<Vec<String>> for DriverList {
    fn from(drivers: Vec<String>) -> Self {
        Self {
            total: drivers.len(),
            drivers,
        }
    }
}

/// Route path for the driver list
pub const LIST_DRIVERS: &str = "/drivers";
