pub mod mask;
pub mod output;
pub mod sampler;

pub use mask::FootprintMask;
pub use output::write_points;
pub use sampler::{GridIter, SamplingGrid, sample_grid};
