// ─── Mirror Substitution ───
// Policy for rewriting Maven Central URLs to a sanctioned mirror.
// Downloading libraries directly from Maven Central may be considered a
// violation of their Terms of Service, so Central URLs never survive
// into the resolution request.

use tracing::{debug, warn};

/// Hard-coded fallback used when the host resolver exposes no mirror.
pub const FALLBACK_CENTRAL_MIRROR: &str =
    "https://maven-central.storage-download.googleapis.com/maven2";

/// Substrings identifying a Maven Central URL. Substring match on
/// purpose: catches every Central host variant without a URL parse.
const CENTRAL_MARKERS: [&str; 2] = ["maven.org", "maven.apache.org"];

/// Capability for reading the sanctioned Central mirror owned by the
/// host's dependency resolver. Production hosts forward their resolver
/// configuration; tests supply a stub.
pub trait MirrorProvider {
    /// The host resolver's default Central mirror URL, if it exposes one.
    fn default_central_mirror(&self) -> Option<String>;
}

/// Whether `url` points at Maven Central.
pub fn is_central_url(url: &str) -> bool {
    CENTRAL_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Apply the mirror substitution policy to one repository URL.
///
/// Three tiers:
/// 1. Ask `mirrors` for the host-owned Central mirror.
/// 2. Lookup succeeded: Central URLs become the mirror, anything else
///    passes through untouched.
/// 3. Lookup failed: every URL is forced to [`FALLBACK_CENTRAL_MIRROR`],
///    Central or not. An entry that cannot be proven non-Central is
///    treated as Central.
pub fn substitute_url(id: &str, url: &str, mirrors: &dyn MirrorProvider) -> String {
    match mirrors.default_central_mirror() {
        Some(mirror) => {
            if is_central_url(url) {
                debug!("Replacing Central repository {} with mirror {}", id, mirror);
                mirror
            } else {
                url.to_string()
            }
        }
        None => {
            warn!(
                "Mirror lookup unavailable; forcing fallback mirror for repository {}",
                id
            );
            FALLBACK_CENTRAL_MIRROR.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedMirror(&'static str);

    impl MirrorProvider for FixedMirror {
        fn default_central_mirror(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    struct NoMirror;

    impl MirrorProvider for NoMirror {
        fn default_central_mirror(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn recognizes_central_url_variants() {
        assert!(is_central_url(crate::maven::MAVEN_CENTRAL));
        assert!(is_central_url(crate::maven::MAVEN_CENTRAL_APACHE));
        assert!(!is_central_url(crate::maven::PAPER_MAVEN));
    }

    #[test]
    fn central_urls_get_the_provided_mirror() {
        let mirrors = FixedMirror("https://mirror.example/maven2");
        let url = substitute_url("central", "https://repo1.maven.org/maven2", &mirrors);
        assert_eq!(url, "https://mirror.example/maven2");
    }

    #[test]
    fn non_central_urls_pass_through() {
        let mirrors = FixedMirror("https://mirror.example/maven2");
        let url = substitute_url(
            "paper",
            "https://repo.papermc.io/repository/maven-public/",
            &mirrors,
        );
        assert_eq!(url, "https://repo.papermc.io/repository/maven-public/");
    }

    #[test]
    fn missing_lookup_forces_fallback_for_any_url() {
        let central = substitute_url("central", "https://repo1.maven.org/maven2", &NoMirror);
        assert_eq!(central, FALLBACK_CENTRAL_MIRROR);

        // The fallback tier rewrites non-Central entries too.
        let paper = substitute_url(
            "paper",
            "https://repo.papermc.io/repository/maven-public/",
            &NoMirror,
        );
        assert_eq!(paper, FALLBACK_CENTRAL_MIRROR);
    }
}
