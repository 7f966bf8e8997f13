// Domain layer: dataset models and the ports the render layer depends on.

pub mod model;
pub mod ports;
