// Domain layer: CDM output types, the generic record and the storage/config ports.

pub mod cdm;
pub mod model;
pub mod ports;
