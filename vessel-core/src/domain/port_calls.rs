use crate::CallSign;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw ERS departure (DEP) row.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DepartureReport {
    pub message_id: u64,
    pub call_sign: Option<CallSign>,
    pub timestamp: DateTime<Utc>,
    pub port_code: Option<String>,
}

/// Raw ERS port-arrival (POR) row. Arrival messages report one row per
/// quantum category, each carrying that category's round weight.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArrivalReport {
    pub message_id: u64,
    pub call_sign: Option<CallSign>,
    pub timestamp: DateTime<Utc>,
    pub port_code: Option<String>,
    pub quantum_type_code: Option<String>,
    pub round_weight: Option<f64>,
}

/// The quantum categories an arrival row's weight is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum QuantumType {
    Landed,
    Onboard,
}

/// The recognized quantum category codes of the source report format.
/// Supplied through configuration rather than hardcoded in the scan logic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuantumCodes {
    pub landed: String,
    pub onboard: String,
}

impl Default for QuantumCodes {
    fn default() -> Self {
        QuantumCodes {
            landed: "KG".to_string(),
            onboard: "OB".to_string(),
        }
    }
}

impl QuantumCodes {
    pub fn classify(&self, code: &str) -> Option<QuantumType> {
        if code == self.landed {
            Some(QuantumType::Landed)
        } else if code == self.onboard {
            Some(QuantumType::Onboard)
        } else {
            None
        }
    }
}

/// An ERS departure event after per-message aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    pub message_id: u64,
    pub timestamp: DateTime<Utc>,
    pub port_code: Option<String>,
}

/// An ERS arrival event with its weights summed per quantum category.
/// A category is `None` when no row of the message reported it.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrival {
    pub message_id: u64,
    pub timestamp: DateTime<Utc>,
    pub port_code: Option<String>,
    pub landed_weight: Option<f64>,
    pub onboard_weight: Option<f64>,
}

impl Arrival {
    /// A landing is complete when everything that was aboard has been
    /// unloaded, closing the catch account of the current trip legs.
    pub fn is_complete_landing(&self) -> bool {
        match (self.landed_weight, self.onboard_weight) {
            (Some(landed), Some(onboard)) => landed == onboard,
            _ => false,
        }
    }
}

#[cfg(feature = "test")]
mod test {
    use super::*;

    impl DepartureReport {
        pub fn test_default(
            message_id: u64,
            call_sign: &str,
            timestamp: DateTime<Utc>,
        ) -> DepartureReport {
            DepartureReport {
                message_id,
                call_sign: Some(call_sign.parse().unwrap()),
                timestamp,
                port_code: Some("NOTOS".to_string()),
            }
        }
    }

    impl ArrivalReport {
        pub fn test_default(
            message_id: u64,
            call_sign: &str,
            timestamp: DateTime<Utc>,
            quantum_type_code: &str,
            round_weight: f64,
        ) -> ArrivalReport {
            ArrivalReport {
                message_id,
                call_sign: Some(call_sign.parse().unwrap()),
                timestamp,
                port_code: Some("NOTRD".to_string()),
                quantum_type_code: Some(quantum_type_code.to_string()),
                round_weight: Some(round_weight),
            }
        }
    }
}
