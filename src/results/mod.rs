pub mod parser;
pub mod value_grid;

pub use parser::{load_results, parse_results};
pub use value_grid::ValueGrid;
