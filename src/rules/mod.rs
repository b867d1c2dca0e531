pub mod browser;
pub mod cobrand;
pub mod platform;
