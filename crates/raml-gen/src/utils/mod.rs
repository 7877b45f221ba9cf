pub mod spec;

#[cfg(test)]
mod tests;
