#[cfg(test)]
pub mod overtime;
