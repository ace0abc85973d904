pub mod icons;
pub mod rasterize;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "no SVG rasterizer found on PATH\n\
         install one of:\n\
         - inkscape (https://inkscape.org or your package manager)\n\
         - rsvg-convert (librsvg, e.g. apt install librsvg2-bin)\n\
         - resvg (cargo install resvg)"
    )]
    RasterizerNotFound,
    #[error("source icon '{}' does not exist", .0.display())]
    SourceMissing(PathBuf),
    #[error("failed to rasterize '{}' at {size}x{size}", .svg.display())]
    Rasterize {
        svg: PathBuf,
        size: u32,
        #[source]
        source: xshell::Error,
    },
    #[error("failed to create directory '{}'", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to set up the shell")]
    Shell(#[source] xshell::Error),
}
