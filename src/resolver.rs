// ─── Repository Resolver ───
// Turns a parsed manifest into the resolution request handed to the
// host's dependency resolver.

use serde::Serialize;
use tracing::debug;

use crate::error::LoaderResult;
use crate::manifest::LibrariesManifest;
use crate::maven::{substitute_url, MavenArtifact, MirrorProvider};

/// A repository descriptor after mirror substitution.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RemoteRepository {
    pub id: String,
    pub url: String,
}

/// Complete, self-contained input for the host's dependency resolver.
/// Repositories and dependencies keep manifest order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub repositories: Vec<RemoteRepository>,
    pub dependencies: Vec<MavenArtifact>,
}

/// Registration surface exposed by the host's dependency resolver.
///
/// Mirrors the add-repository / add-dependency calls of classpath
/// builders, so this crate never depends on a concrete host type.
pub trait LibraryResolver {
    fn add_repository(&mut self, repository: &RemoteRepository);
    fn add_dependency(&mut self, dependency: &MavenArtifact);
}

impl ResolutionRequest {
    /// Feed the request into a host resolver, preserving order.
    pub fn submit(&self, resolver: &mut dyn LibraryResolver) {
        for repository in &self.repositories {
            resolver.add_repository(repository);
        }
        for dependency in &self.dependencies {
            resolver.add_dependency(dependency);
        }
    }
}

/// Resolves manifest entries against the mirror substitution policy.
pub struct RepositoryResolver<'a> {
    mirrors: &'a dyn MirrorProvider,
}

impl<'a> RepositoryResolver<'a> {
    pub fn new(mirrors: &'a dyn MirrorProvider) -> Self {
        Self { mirrors }
    }

    /// Resolve a whole manifest into a `ResolutionRequest`.
    ///
    /// One descriptor per repository entry, same id, possibly rewritten
    /// URL. A single bad coordinate fails the whole batch rather than
    /// dropping the entry.
    pub fn resolve(&self, manifest: &LibrariesManifest) -> LoaderResult<ResolutionRequest> {
        let repositories: Vec<RemoteRepository> = manifest
            .repositories
            .iter()
            .map(|entry| RemoteRepository {
                id: entry.id.clone(),
                url: substitute_url(&entry.id, &entry.url, self.mirrors),
            })
            .collect();

        let dependencies = manifest
            .dependencies
            .iter()
            .map(|coord| MavenArtifact::parse(coord))
            .collect::<LoaderResult<Vec<_>>>()?;

        debug!(
            "Resolved {} repositories and {} dependencies",
            repositories.len(),
            dependencies.len()
        );

        Ok(ResolutionRequest {
            repositories,
            dependencies,
        })
    }
}

/// Parse and resolve manifest bytes in one shot.
///
/// The whole startup pipeline: decode the manifest, apply the mirror
/// policy, parse coordinates, assemble the request. Any failure aborts
/// the batch.
pub fn resolve_libraries(
    bytes: &[u8],
    mirrors: &dyn MirrorProvider,
) -> LoaderResult<ResolutionRequest> {
    let manifest = LibrariesManifest::parse(bytes)?;
    RepositoryResolver::new(mirrors).resolve(&manifest)
}
