mod artifact;
mod mirror;

pub use artifact::MavenArtifact;
pub use mirror::{is_central_url, substitute_url, MirrorProvider, FALLBACK_CENTRAL_MIRROR};

/// Well-known Maven repositories used by plugin hosts.
pub const MAVEN_CENTRAL: &str = "https://repo1.maven.org/maven2";
pub const MAVEN_CENTRAL_APACHE: &str = "https://repo.maven.apache.org/maven2";
pub const PAPER_MAVEN: &str = "https://repo.papermc.io/repository/maven-public/";
