mod artifact;
mod device;
pub mod error;
mod missing;
mod resolved;
pub mod settings;
mod sources;
pub mod weights_paths;

pub use artifact::{Artifact, ArtifactSet, REQUIRED_ARTIFACTS};
pub use device::Device;
pub use error::AppError;
pub use missing::{CHECK_COMMAND, MissingArtifact, MissingArtifacts};
pub use resolved::{Origin, ResolvedArtifact, ResolvedPaths, WeightRoots};
pub use settings::{RuntimeFlags, Settings};
pub use sources::SourceManifest;
