//! Model artifact path resolution.
//!
//! Everything here is lexical: paths are joined and normalized as strings,
//! the filesystem is never consulted.

use std::path::{Component, Path, PathBuf};

use crate::constants::DEFAULT_MODEL_SUBPATH;

/// Workspace root, fixed when the crate is built.
pub fn default_base_dir() -> PathBuf {
    normalize_lexically(&Path::new(env!("CARGO_MANIFEST_DIR")).join("../../.."))
}

/// Default model location under `base_dir`.
pub fn default_model_path(base_dir: &Path) -> PathBuf {
    resolve_model_path(base_dir, Path::new(DEFAULT_MODEL_SUBPATH), None)
}

/// Resolve the model artifact path.
///
/// - no override (or an empty one): `base_dir/default_subpath`, normalized
/// - absolute override: returned as given
/// - relative override: `base_dir/override`, normalized
///
/// `base_dir` is expected to be absolute; the result is then always absolute.
pub fn resolve_model_path(
    base_dir: &Path,
    default_subpath: &Path,
    override_value: Option<&str>,
) -> PathBuf {
    match override_value.filter(|value| !value.is_empty()) {
        None => normalize_lexically(&base_dir.join(default_subpath)),
        Some(value) if Path::new(value).is_absolute() => PathBuf::from(value),
        Some(value) => normalize_lexically(&base_dir.join(value)),
    }
}

/// Drop `.` components and fold `..` into the preceding component.
///
/// A `..` directly under the root is discarded, so `/../a` becomes `/a`.
/// Leading `..` on a relative path is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                Some(Component::ParentDir) | Some(Component::CurDir) | None => {
                    parts.push(component);
                }
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    parts.iter().collect()
}
