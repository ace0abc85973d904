//! Binding to an external SVG rasterizer.
use crate::Error;
use std::path::Path;
use xshell::{cmd, Shell};

/// Renders a vector file to a square PNG, overwriting any existing output.
pub trait Rasterizer {
    fn rasterize(&self, svg: &Path, png: &Path, size: u32) -> Result<(), Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tool {
    Inkscape,
    RsvgConvert,
    Resvg,
}

impl Tool {
    const ALL: &'static [Tool] = &[Tool::Inkscape, Tool::RsvgConvert, Tool::Resvg];

    fn program(self) -> &'static str {
        match self {
            Tool::Inkscape => "inkscape",
            Tool::RsvgConvert => "rsvg-convert",
            Tool::Resvg => "resvg",
        }
    }
}

/// An SVG rasterizer tool found on PATH.
pub struct SvgTool {
    sh: Shell,
    tool: Tool,
}

impl SvgTool {
    /// Probes PATH for a known rasterizer tool; the first one that responds
    /// to `--version` wins.
    pub fn locate() -> Result<SvgTool, Error> {
        let sh = Shell::new().map_err(Error::Shell)?;
        for &tool in Tool::ALL {
            let program = tool.program();
            let probe = cmd!(sh, "{program} --version")
                .quiet()
                .ignore_stdout()
                .ignore_stderr()
                .run();
            if probe.is_ok() {
                return Ok(SvgTool { sh, tool });
            }
        }
        Err(Error::RasterizerNotFound)
    }
}

impl Rasterizer for SvgTool {
    fn rasterize(&self, svg: &Path, png: &Path, size: u32) -> Result<(), Error> {
        let sh = &self.sh;
        let px = size.to_string();
        let result = match self.tool {
            Tool::Inkscape => cmd!(
                sh,
                "inkscape {svg}
                    --export-type=png
                    --export-filename={png}
                    --export-width={px} --export-height={px}
                    --export-area-page"
            )
            .run(),
            Tool::RsvgConvert => cmd!(
                sh,
                "rsvg-convert --width={px} --height={px} --output={png} {svg}"
            )
            .run(),
            Tool::Resvg => cmd!(sh, "resvg --width={px} --height={px} {svg} {png}").run(),
        };
        result.map_err(|source| Error::Rasterize {
            svg: svg.to_owned(),
            size,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_every_candidate_tool_in_the_not_found_message() {
        let message = Error::RasterizerNotFound.to_string();

        for &tool in Tool::ALL {
            assert!(
                message.contains(tool.program()),
                "message does not mention '{}'",
                tool.program()
            );
        }
    }
}
