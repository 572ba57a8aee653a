pub mod momentum;
pub mod volatility;
