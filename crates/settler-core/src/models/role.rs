//! Role domain model.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    ColonyResident,
    MissionControlOperator,
    InfrastructureTechnician,
}

impl Role {
    /// Human-readable form for logs and UI display.
    pub const fn label(self) -> &'static str {
        match self {
            Role::ColonyResident => "Colony Resident",
            Role::MissionControlOperator => "Mission Control Operator",
            Role::InfrastructureTechnician => "Infrastructure Technician",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
