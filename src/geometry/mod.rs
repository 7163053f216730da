pub mod extent;
pub mod linspace;

pub use extent::Extent;
pub use linspace::Linspace;
