// Domain layer: lab models, import data types and ports.

pub mod lab;
pub mod model;
pub mod ports;
