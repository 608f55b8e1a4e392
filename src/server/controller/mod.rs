//! HTTP request handlers.
//!
//! Handlers are thin adapters: they convert the request DTO into operation parameters,
//! make exactly one call on the shared `DataLoader`, and map the outcome to a status code.
//! Data-layer failures are converted through `AppError` into their HTTP responses.

pub mod health;
pub mod soldier;

#[cfg(test)]
mod test;
