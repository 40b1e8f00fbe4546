//! Place search provider integration.

mod photon;

pub use photon::{DEFAULT_PHOTON_URL, PhotonGeocoder, parse_features};
