//! Ontology text acquisition.
//!
//! The loader hands raw ontology text to an external parser; it never parses
//! serialized RDF itself. Sources are a local file or a branch-addressed
//! artifact in the upstream repository (`{repo_url}/{branch}/LMSS.owl`).

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use taxo_core::defaults::{DEFAULT_REPO_ARTIFACT_URL, DEFAULT_REPO_BRANCH, ONTOLOGY_FILE};
use taxo_core::{Error, Result};

/// Where ontology text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OntologySource {
    /// Read from a local file.
    Path(PathBuf),
    /// Fetch from a branch of the upstream repository.
    Remote { repo_url: String, branch: String },
}

impl OntologySource {
    /// Parse a source-spec string of the form `file=/path/to/file.owl` or
    /// `branch=main`, optionally `branch=main&url=https://…/fork/`.
    ///
    /// Malformed specs (unknown key, missing `=`, both `file` and `branch`)
    /// are rejected at this boundary.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut file: Option<String> = None;
        let mut branch: Option<String> = None;
        let mut url: Option<String> = None;

        for token in spec.split('&') {
            let (key, value) = token
                .split_once('=')
                .ok_or_else(|| Error::InvalidInput(format!("malformed source token: {token}")))?;
            match key {
                "file" => file = Some(value.to_string()),
                "branch" => branch = Some(value.to_string()),
                "url" => url = Some(value.to_string()),
                other => {
                    return Err(Error::InvalidInput(format!(
                        "unknown source key: {other}"
                    )))
                }
            }
        }

        match (file, branch) {
            (Some(_), Some(_)) => Err(Error::InvalidInput(format!(
                "cannot pass both file and branch: {spec}"
            ))),
            (Some(path), None) => Ok(Self::Path(PathBuf::from(path))),
            (None, Some(branch)) => Ok(Self::Remote {
                repo_url: url.unwrap_or_else(|| DEFAULT_REPO_ARTIFACT_URL.to_string()),
                branch,
            }),
            (None, None) => Err(Error::InvalidInput(format!(
                "source spec needs file= or branch=: {spec}"
            ))),
        }
    }

    /// The default remote source: latest stable branch of the upstream repo.
    pub fn default_remote() -> Self {
        Self::Remote {
            repo_url: DEFAULT_REPO_ARTIFACT_URL.to_string(),
            branch: DEFAULT_REPO_BRANCH.to_string(),
        }
    }
}

/// Read ontology text from a local file.
pub fn read_ontology_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), op = "read_ontology_file", "reading ontology text");
    Ok(std::fs::read_to_string(path)?)
}

/// Fetch ontology text from a branch-addressed artifact URL.
pub async fn fetch_ontology_text(repo_url: &str, branch: &str) -> Result<String> {
    let url = format!(
        "{}/{}/{ONTOLOGY_FILE}",
        repo_url.trim_end_matches('/'),
        branch.trim_start_matches('/')
    );
    info!(url = %url, op = "fetch_ontology_text", "fetching ontology artifact");
    let response = reqwest::get(&url).await?.error_for_status()?;
    Ok(response.text().await?)
}

/// Load ontology text from whichever source was specified.
pub async fn load(source: &OntologySource) -> Result<String> {
    match source {
        OntologySource::Path(path) => read_ontology_file(path),
        OntologySource::Remote { repo_url, branch } => {
            fetch_ontology_text(repo_url, branch).await
        }
    }
}
