// Domain layer: the round index and the seam to wherever records come from.

pub mod model;
pub mod ports;
