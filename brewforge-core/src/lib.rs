pub mod beerxml;
pub mod carbonation;
pub mod defaults;
pub mod efficiency;
pub mod error;
pub mod fermentation;
pub mod gravity_log;
pub mod normalize;
pub mod units;
pub mod water;
