pub mod coefficients;
pub mod forecast;
pub mod risk;
pub mod trend;
