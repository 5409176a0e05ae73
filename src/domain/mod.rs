pub mod dtos;
pub mod entities;
pub mod helpers;
pub mod orgs;
pub mod schedule;
pub mod timezone;
pub mod units;

#[cfg(test)]
pub mod mocks;
