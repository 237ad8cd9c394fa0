pub mod clock;
pub mod config;
pub mod cut_off;
pub mod employee;
pub mod macros;
pub mod overtime;
pub mod report;
pub mod uuid_service;

#[cfg(test)]
mod test;
