use icon_gen::{icons, rasterize::SvgTool, Error};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Generate the launcher and store icons from assets/icon/icon.svg.
#[derive(argh::FromArgs)]
struct Args {}

fn main() -> eyre::Result<()> {
    let _args: Args = argh::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let rasterizer = SvgTool::locate()?;
    match icons::generate(Path::new("."), &rasterizer) {
        Ok(store_png) => {
            println!("all icons generated");
            println!("store icon: {}", store_png.display());
            Ok(())
        }
        Err(err @ Error::SourceMissing(_)) => {
            eprintln!("error: {err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
