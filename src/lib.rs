// ─── Libstrap ───
// Runtime library dependency resolution for plugin hosts.
//
// Reads a libraries manifest declaring Maven repositories and dependency
// coordinates, rewrites Maven Central URLs to a sanctioned mirror, and
// assembles the resolution request handed to the host's dependency
// resolver. Downloading, verification, and classloading stay host-side.
//
// Architecture:
//   manifest — JSON manifest model + parser
//   maven    — coordinate parser + mirror substitution policy
//   resolver — request assembly + host resolver boundary

pub mod error;
pub mod manifest;
pub mod maven;
pub mod resolver;

pub use error::{LoaderError, LoaderResult};
pub use manifest::{LibrariesManifest, RepositoryEntry};
pub use maven::{MavenArtifact, MirrorProvider};
pub use resolver::{
    resolve_libraries, LibraryResolver, RemoteRepository, RepositoryResolver, ResolutionRequest,
};
