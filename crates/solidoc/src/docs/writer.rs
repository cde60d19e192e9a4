use std::path::{Path, PathBuf};

use futures::future::join_all;
use tracing::{debug, info};

use crate::{
    ast::Contract,
    config::Settings,
    docs::page::{INDEX_PAGE, PageRenderer},
    error::{Error, Result},
};

/// Render every contract page (plus the index page when enabled) and write
/// them into `output_dir`, creating it if needed.
///
/// Pages are rendered up front from the shared, read-only project and then
/// written concurrently. Returns the number of files written.
pub async fn write_docs(
    contracts: &[Contract],
    settings: &Settings,
    template: &str,
    output_dir: &Path,
) -> Result<usize> {
    tokio::fs::create_dir_all(output_dir).await.map_err(|source| Error::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let renderer = PageRenderer::new(contracts, settings, template);
    let mut pages: Vec<(PathBuf, String)> = Vec::with_capacity(contracts.len() + 1);
    for contract in contracts {
        pages.push((output_dir.join(contract.page_name()), renderer.render(contract)?));
    }
    if settings.output.write_index {
        pages.push((output_dir.join(INDEX_PAGE), renderer.render_index()));
    }

    let writes = pages.iter().map(|(path, content)| async move {
        debug!("Writing {}", path.display());
        tokio::fs::write(path, content).await.map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })
    });
    for result in join_all(writes).await {
        result?;
    }

    info!("Wrote {} pages to {}", pages.len(), output_dir.display());
    Ok(pages.len())
}
