//! Fixture repository for the refute harness.
//!
//! A fixture is one deliberately-invalid source snippet paired with the
//! diagnostic category it must provoke from an external compiler. Fixtures
//! are declared in TOML manifests (`fixtures.toml`) that keep the
//! expected-failure metadata separate from the source blob: each record
//! names an id, an expected category, and either inline source text or a
//! sidecar source file. Fixtures are immutable once parsed.

mod category;
mod discovery;
mod error;
mod fixture;
mod manifest;

pub use category::CategoryId;
pub use discovery::{discover_manifests, discover_manifests_in, MANIFEST_FILE_NAME};
pub use error::FixtureError;
pub use fixture::{Fixture, FixtureSource};
pub use manifest::{Manifest, ToolchainSpec};
