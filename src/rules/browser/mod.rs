pub mod build_tables;
pub mod helpers;
pub mod rules;

#[cfg(test)]
mod tests;
