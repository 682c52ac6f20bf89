//! Project file loading
//!
//! A project file is the JSON a canvas editor saves:
//! `{ "nodes": [...], "edges": [...], "constraints": {...} }`. Every key is
//! optional and unknown fields on nodes and edges survive a load/save cycle.

use crate::config::{load_project_config, ProjectConfig};
use crate::models::{Constraints, RawEdge, RawNode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ProjectFileError {
    #[error("project file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid project file: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize project for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Architecture plus constraints, as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFile {
    pub nodes: Vec<RawNode>,
    pub edges: Vec<RawEdge>,
    pub constraints: Constraints,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectFile {
    pub fn load(path: &Path) -> Result<Self, ProjectFileError> {
        if !path.is_file() {
            return Err(ProjectFileError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ProjectFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let project: ProjectFile =
            serde_json::from_str(&content).map_err(|source| ProjectFileError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            "Loaded {} node(s), {} edge(s) from {}",
            project.nodes.len(),
            project.edges.len(),
            path.display()
        );
        Ok(project)
    }

    pub fn save(&self, path: &Path) -> Result<(), ProjectFileError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| ProjectFileError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json + "\n").map_err(|source| ProjectFileError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Directory holding the project file, where `preflight.toml` is looked up
pub fn project_dir(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.to_path_buf();
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Load the project file and the config next to it
pub fn load_project(path: &Path) -> Result<(ProjectFile, ProjectConfig), ProjectFileError> {
    let project = ProjectFile::load(path)?;
    let config = load_project_config(&project_dir(path));
    Ok((project, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetLevel;
    use tempfile::TempDir;

    #[test]
    fn test_load_partial_project() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("arch.json");
        std::fs::write(
            &path,
            r#"{"nodes":[{"id":"api","type":"custom","data":{"componentId":"fastapi","category":"backend"}}],
                "constraints":{"budgetLevel":"low"},"viewport":{"zoom":1.5}}"#,
        )
        .unwrap();

        let project = ProjectFile::load(&path).unwrap();
        assert_eq!(project.nodes.len(), 1);
        assert!(project.edges.is_empty());
        assert_eq!(project.constraints.budget_level, BudgetLevel::Low);
        assert!(project.extra.contains_key("viewport"));
    }

    #[test]
    fn test_save_round_trip_keeps_extras() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("arch.json");
        std::fs::write(&path, r#"{"nodes":[],"edges":[],"viewport":{"x":3}}"#).unwrap();

        let project = ProjectFile::load(&path).unwrap();
        let out = dir.path().join("out.json");
        project.save(&out).unwrap();
        let back: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(back["viewport"]["x"], 3);
        assert_eq!(back["constraints"]["teamSize"], 2);
    }

    #[test]
    fn test_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            ProjectFile::load(&missing),
            Err(ProjectFileError::NotFound(_))
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{not json").unwrap();
        let err = ProjectFile::load(&bad).unwrap_err();
        assert!(matches!(err, ProjectFileError::Parse { .. }));
        assert!(err.to_string().contains("not a valid project file"));
    }

    #[test]
    fn test_project_dir() {
        assert_eq!(project_dir(Path::new("arch.json")), PathBuf::from("."));
        assert_eq!(
            project_dir(Path::new("designs/arch.json")),
            PathBuf::from("designs")
        );
    }
}
