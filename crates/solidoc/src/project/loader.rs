use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{
    ast::{Contract, Node},
    error::{Error, Result},
};

/// The parts of a build artifact we read. Everything else (bytecode,
/// source maps, networks, ...) is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    contract_name: Option<String>,
    ast: Option<Node>,
    #[serde(default)]
    abi: Value,
}

/// Parse one artifact. Returns `None` for artifacts without an AST, which
/// cannot be documented.
///
/// `path` is used for error reporting and as the contract name fallback.
pub fn parse_artifact(
    text: &str,
    path: &Path,
) -> Result<Option<Contract>> {
    let artifact: Artifact = serde_json::from_str(text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(ast) = artifact.ast else {
        warn!("Skipping {}: artifact has no AST", path.display());
        return Ok(None);
    };

    let contract_name = artifact
        .contract_name
        .filter(|name| !name.is_empty())
        .or_else(|| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
        .unwrap_or_default();

    Ok(Some(Contract {
        contract_name,
        ast,
        abi: artifact.abi,
    }))
}

/// Paths of the `*.json` files directly inside `build_dir`, following
/// symlinks. Entries that cannot be read are reported and skipped.
pub fn artifact_paths(build_dir: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(build_dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(build_dir).display().to_string();
                warn!("Skipping unreadable build entry {path}: {e}");
                continue;
            },
        };
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|ext| ext == "json") {
            paths.push(entry.into_path());
        }
    }
    paths
}

/// Load every `*.json` artifact directly inside `build_dir`.
///
/// Contracts are sorted by name so the generated documentation does not
/// depend on directory iteration order.
pub async fn load_contracts(build_dir: &Path) -> Result<Vec<Contract>> {
    if !tokio::fs::metadata(build_dir).await.is_ok_and(|meta| meta.is_dir()) {
        return Err(Error::MissingDirectory(build_dir.to_path_buf()));
    }

    let paths = artifact_paths(build_dir);

    let mut contracts = Vec::with_capacity(paths.len());
    for path in &paths {
        let text = tokio::fs::read_to_string(path).await.map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        if let Some(contract) = parse_artifact(&text, path)? {
            debug!("Loaded {} from {}", contract.contract_name, path.display());
            contracts.push(contract);
        }
    }

    contracts.sort_by(|a, b| a.contract_name.cmp(&b.contract_name));
    info!("Loaded {} contracts from {}", contracts.len(), build_dir.display());
    Ok(contracts)
}
