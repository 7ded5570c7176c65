// Domain layer: restaurant/menu models and the clock port. No I/O here.

pub mod model;
pub mod ports;
