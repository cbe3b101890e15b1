// Domain layer: plain models and ports. No engine logic here.

pub mod model;
pub mod ports;
