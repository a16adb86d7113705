// Domain layer: request/report models and the tolerance port. No external dependencies beyond serde.

pub mod model;
pub mod ports;
