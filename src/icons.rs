//! The launcher and store icon set, generated from the raw SVG.
use crate::rasterize::Rasterizer;
use crate::Error;
use std::path::{Path, PathBuf};
use tracing::info;

/// Android launcher icon sizes per density bucket.
pub const DENSITIES: &[(&str, u32)] = &[
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// Size of the app store listing icon.
pub const STORE_SIZE: u32 = 512;

const ASSET_DIR: &str = "assets/icon";
const SOURCE_SVG: &str = "icon.svg";
const RES_DIR: &str = "android/app/src/main/res";
const LAUNCHER_PNG: &str = "ic_launcher.png";
const STORE_PNG: &str = "icon_512.png";

/// Renders the source SVG under `root` into one launcher icon per density
/// plus the store icon, creating output directories as needed. Returns the
/// store icon path.
pub fn generate(root: &Path, rasterizer: &dyn Rasterizer) -> Result<PathBuf, Error> {
    let asset_dir = root.join(ASSET_DIR);
    create_dir_all(&asset_dir)?;

    let svg = asset_dir.join(SOURCE_SVG);
    if !svg.exists() {
        return Err(Error::SourceMissing(svg));
    }

    for &(density, size) in DENSITIES {
        let mipmap_dir = root.join(RES_DIR).join(format!("mipmap-{density}"));
        create_dir_all(&mipmap_dir)?;
        let png = mipmap_dir.join(LAUNCHER_PNG);
        rasterizer.rasterize(&svg, &png, size)?;
        info!("generated {} ({}x{})", png.display(), size, size);
    }

    let store_png = asset_dir.join(STORE_PNG);
    rasterizer.rasterize(&svg, &store_png, STORE_SIZE)?;
    info!("generated {} ({}x{})", store_png.display(), STORE_SIZE, STORE_SIZE);

    Ok(store_png)
}

fn create_dir_all(path: &Path) -> Result<(), Error> {
    std::fs::create_dir_all(path).map_err(|source| Error::CreateDir {
        path: path.to_owned(),
        source,
    })
}
