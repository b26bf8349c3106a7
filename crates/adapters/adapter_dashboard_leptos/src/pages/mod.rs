mod gauges;
mod not_found;
mod portal;
mod readout;

pub use gauges::Gauges;
pub use not_found::NotFound;
pub use portal::Portal;
pub use readout::Readout;
