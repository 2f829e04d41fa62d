//! Auth-type detection over a connector's source tree.
//!
//! The first artifact (in stable sorted traversal order) containing any
//! auth-scheme marker decides the result; within a file, markers are
//! ranked by the priority order below. A connector with no marker
//! anywhere is checked for an explicit no-auth declaration in its entry
//! artifact, and otherwise defaults to secret_text — never none — so
//! required credentials are not silently under-declared.

use aho_corasick::AhoCorasick;
use pieceworks_core::AuthType;

use crate::scanner::{self, ConnectorDir};

/// Auth-scheme markers in priority order.
pub const AUTH_MARKERS: &[(&str, AuthType)] = &[
    ("PieceAuth.OAuth2", AuthType::OAuth2),
    ("PieceAuth.BasicAuth", AuthType::BasicAuth),
    ("PieceAuth.CustomAuth", AuthType::Custom),
    ("PieceAuth.SecretText", AuthType::SecretText),
];

/// Explicit no-auth declarations, checked only in the entry artifact.
const NO_AUTH_MARKERS: &[&str] = &["auth: undefined", "PieceAuth.None"];

/// Pre-built literal scanner over the auth markers.
pub struct AuthDetector {
    automaton: Option<AhoCorasick>,
}

impl Default for AuthDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthDetector {
    pub fn new() -> Self {
        Self {
            automaton: AhoCorasick::new(AUTH_MARKERS.iter().map(|(m, _)| m)).ok(),
        }
    }

    /// Resolve exactly one auth type for a connector source tree.
    /// Total: always produces a value.
    pub fn detect(&self, dir: &ConnectorDir) -> AuthType {
        for path in scanner::source_files(dir) {
            let Ok(text) = std::fs::read_to_string(&path) else {
                continue;
            };
            if let Some(auth) = self.classify_text(&text) {
                return auth;
            }
        }

        if let Ok(text) = std::fs::read_to_string(scanner::entry_file(dir)) {
            if NO_AUTH_MARKERS.iter().any(|m| text.contains(m)) {
                return AuthType::None;
            }
        }

        AuthType::SecretText
    }

    /// The highest-priority auth marker present in one artifact's text,
    /// if any.
    pub fn classify_text(&self, text: &str) -> Option<AuthType> {
        let automaton = self.automaton.as_ref()?;
        let best = automaton
            .find_iter(text)
            .map(|m| m.pattern().as_usize())
            .min()?;
        Some(AUTH_MARKERS[best].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write(path: &Path, text: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
    }

    fn connector(root: &Path, id: &str) -> ConnectorDir {
        ConnectorDir {
            id: id.into(),
            path: root.join(id),
        }
    }

    #[test]
    fn priority_order_within_a_file() {
        let detector = AuthDetector::new();
        // SecretText appears first in the text; OAuth2 still outranks it.
        let text = "const a = PieceAuth.SecretText({}); const b = PieceAuth.OAuth2({});";
        assert_eq!(detector.classify_text(text), Some(AuthType::OAuth2));
        assert_eq!(detector.classify_text("nothing"), None);
    }

    #[test]
    fn first_file_with_any_marker_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = connector(tmp.path(), "acme");
        write(
            &dir.path.join("src/auth.ts"),
            "export const auth = PieceAuth.BasicAuth({});",
        );
        write(
            &dir.path.join("src/index.ts"),
            "export const acme = createPiece({ auth: PieceAuth.OAuth2({}) });",
        );
        // src/auth.ts sorts before src/index.ts.
        assert_eq!(AuthDetector::new().detect(&dir), AuthType::BasicAuth);
    }

    #[test]
    fn explicit_no_auth_in_entry_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = connector(tmp.path(), "webhook");
        write(
            &dir.path.join("src/index.ts"),
            "export const webhook = createPiece({ auth: undefined });",
        );
        assert_eq!(AuthDetector::new().detect(&dir), AuthType::None);
    }

    #[test]
    fn default_is_secret_text_never_none() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = connector(tmp.path(), "mystery");
        write(&dir.path.join("src/index.ts"), "export const x = 1;");
        assert_eq!(AuthDetector::new().detect(&dir), AuthType::SecretText);
    }
}
