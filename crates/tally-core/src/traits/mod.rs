mod bias_estimator;
mod seat_projector;

pub use bias_estimator::IBiasEstimator;
pub use seat_projector::{ISeatProjector, SeatAllocation};
