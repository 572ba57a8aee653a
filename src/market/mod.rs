pub mod analysis;
pub mod history;

pub use analysis::analyze_market;
pub use history::{PriceHistory, PriceWindow};
