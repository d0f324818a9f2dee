use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::config::{ArchitectureMode, ScaffoldConfig};

/// Files present in every generated project, all created empty.
const BASE_FILES: &[&str] = &[
    "api.ini",
    "run.py",
    "wsgi.py",
    "requirements.txt",
    "README.md",
    "app/__init__.py",
    "app/config.py",
    "app/routes.py",
    "app/errors.py",
    "app/middleware.py",
    "app/utils/__init__.py",
    "app/utils/response.py",
    "app/utils/security.py",
    "app/utils/jwt_helpers.py",
    "app/models/__init__.py",
    "app/models/user.py",
    "app/schemas/__init__.py",
    "app/resources/__init__.py",
    "app/decorators/__init__.py",
    "app/decorators/token_validation.py",
    "app/decorators/payload_verification.py",
    "tests/__init__.py",
    "tests/test_auth.py",
];

/// Relative path to initial content, applied later by [`super::apply_plan`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilePlan {
    entries: BTreeMap<Utf8PathBuf, String>,
}

impl FilePlan {
    /// Later inserts for the same path replace earlier content.
    pub fn insert(&mut self, path: impl Into<Utf8PathBuf>, content: impl Into<String>) {
        self.entries.insert(path.into(), content.into());
    }

    #[cfg(test)]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(Utf8Path::new(path)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Utf8Path, &str)> {
        self.entries
            .iter()
            .map(|(path, content)| (path.as_path(), content.as_str()))
    }
}

/// Compute the full file plan for `config`. Touches nothing on disk.
pub fn build_plan(config: &ScaffoldConfig) -> FilePlan {
    let mut plan = FilePlan::default();

    for path in BASE_FILES {
        plan.insert(*path, "");
    }

    for module in &config.modules {
        plan.insert(
            format!("app/resources/{module}.py"),
            format!("# API endpoints for {module}\n"),
        );
    }

    match config.mode {
        ArchitectureMode::Services => {
            plan.insert("app/services/__init__.py", "");
            for module in &config.modules {
                plan.insert(
                    format!("app/services/{module}/__init__.py"),
                    format!("# {} service logic\n", title_case(module)),
                );
            }
        }
        ArchitectureMode::Bridge => {
            plan.insert("app/bridge/__init__.py", "");
            for module in &config.modules {
                plan.insert(
                    format!("app/bridge/{module}/__init__.py"),
                    format!("# {} bridge logic\n", title_case(module)),
                );
                plan.insert(
                    format!("app/bridge/{module}/{module}_rust_bridge.py"),
                    format!("# Rust bridge for {module}\n"),
                );
            }
        }
    }

    debug!(
        entries = plan.len(),
        modules = config.modules.len(),
        mode = %config.mode,
        "built scaffold plan"
    );
    plan
}

/// Capitalize the first letter of each word and lowercase the rest. Any
/// non-alphabetic character ends a word, so `user_profile` becomes `User_Profile`.
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
