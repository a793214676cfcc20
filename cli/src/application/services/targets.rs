//! Application service: turn a requested target into config names.

use crate::domain::config::AppConfig;
use crate::domain::error::LookupError;

/// Target literal that expands to every cluster target.
pub const ALL_TARGETS: &str = "all";

/// A single named target. It must appear in the cluster or single list.
///
/// # Errors
///
/// Returns [`LookupError::UnknownTarget`] if it appears in neither.
pub fn resolve_single<'a>(app: &AppConfig, target: &'a str) -> Result<&'a str, LookupError> {
    if app.is_known_target(target) {
        Ok(target)
    } else {
        Err(LookupError::UnknownTarget(target.to_string()))
    }
}

/// Every cluster target, in declared order. Single targets are never included.
///
/// # Errors
///
/// Returns [`LookupError::EmptyCluster`] if no cluster targets are configured.
pub fn resolve_all(app: &AppConfig) -> Result<&[String], LookupError> {
    if app.cluster_targets.is_empty() {
        Err(LookupError::EmptyCluster)
    } else {
        Ok(&app.cluster_targets)
    }
}

/// Names to process for `target`, in processing order.
///
/// # Errors
///
/// Returns a [`LookupError`] from [`resolve_all`] or [`resolve_single`].
pub fn resolve(app: &AppConfig, target: &str) -> Result<Vec<String>, LookupError> {
    if target == ALL_TARGETS {
        resolve_all(app).map(<[String]>::to_vec)
    } else {
        resolve_single(app, target).map(|name| vec![name.to_string()])
    }
}
