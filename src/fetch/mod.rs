//! The three lookup stages.
//!
//! Each stage is one HTTP GET against a third-party service, with no retries
//! and no recovery: a failure is returned immediately and terminates the
//! stage. The stages are independent functions; sequencing them is the
//! caller's job (see `run_lookup`).

mod flyover;
mod geo;
mod ip;

pub use flyover::fetch_flyover_times;
pub use geo::fetch_coords_by_ip;
pub use ip::fetch_my_ip;
