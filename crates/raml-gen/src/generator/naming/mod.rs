pub mod constants;
pub mod identifiers;
pub mod policy;

#[cfg(test)]
mod tests;
