pub mod rules;
pub mod windows;


pub use rules::{PlatformMatch, resolve};
