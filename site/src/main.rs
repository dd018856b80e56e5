use std::path::PathBuf;

use anyhow::Context;
use folio_site::{Site, app};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let site = Site::embedded().context("portfolio content is invalid")?;
    let html = folio_platform::export_static(&site.content.settings.title, "", || app(&site));

    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
            }
            std::fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}
