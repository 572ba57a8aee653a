pub mod cci;
pub mod macd;
pub mod rsi;
pub mod stochastic;

pub use cci::cci;
pub use macd::macd;
pub use rsi::rsi;
pub use stochastic::stochastic;
