//! CLI logic for the Gyre diagram tool.
//!
//! This module resolves the ring to generate from the command line, loads
//! configuration, and writes the rendered diagram into the output directory.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Preset};

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use log::info;

use gyre::{DiagramBuilder, GyreError, export::Sink};

/// A sink that writes each output to a file in a directory.
#[derive(Debug)]
pub struct FileSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSink {
    /// Creates a sink writing into `dir`, which is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Returns the files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Joins `destination` onto the output directory.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::Export`] unless `destination` is a plain file
    /// name, so output never escapes the directory.
    fn target(&self, destination: &str) -> Result<PathBuf, GyreError> {
        let mut components = Path::new(destination).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Ok(self.dir.join(name)),
            _ => Err(GyreError::Export(
                format!("destination `{destination}` is not a plain file name").into(),
            )),
        }
    }
}

impl Sink for FileSink {
    fn write(&mut self, rendered: &str, destination: &str) -> Result<(), GyreError> {
        let path = self.target(destination)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, rendered)?;
        info!(output_file = path.display().to_string(); "Diagram exported successfully");
        self.written.push(path);
        Ok(())
    }
}

/// Resolves the diagram name and ring parameters from the arguments.
///
/// A preset supplies its own name and ring; an explicit name always wins.
///
/// # Errors
///
/// Returns [`GyreError::Config`] if neither a preset nor both ring
/// parameters are given.
fn resolve_ring(args: &Args) -> Result<(String, usize, usize), GyreError> {
    let (default_name, vertices, coprime) = match (args.preset, args.vertices, args.coprime) {
        (Some(preset), _, _) => {
            let (vertices, coprime) = preset.ring();
            (preset.name().to_string(), vertices, coprime)
        }
        (None, Some(vertices), Some(coprime)) => {
            (format!("ring_{vertices}_{coprime}"), vertices, coprime)
        }
        _ => {
            return Err(GyreError::Config(
                "either --preset or both --vertices and --coprime are required".to_string(),
            ));
        }
    };
    let name = args.name.clone().unwrap_or(default_name);
    Ok((name, vertices, coprime))
}

/// Run the Gyre CLI application
///
/// This function generates the requested ring graph and writes it to
/// `<output_dir>/<name>.svg`, or `.html` when HTML output is requested.
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns `GyreError` for:
/// - Configuration loading errors
/// - Invalid ring parameters
/// - File I/O errors
/// - Names that do not form a plain file name
pub fn run(args: &Args) -> Result<PathBuf, GyreError> {
    let (name, vertices, coprime) = resolve_ring(args)?;
    info!(
        name = name.as_str(),
        vertices,
        coprime,
        output_dir = args.output_dir;
        "Processing diagram"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.html {
        let output = app_config.output().with_embed_in_html(true);
        app_config = app_config.with_output(output);
    }

    let builder = DiagramBuilder::new(app_config);
    let mut sink = FileSink::new(&args.output_dir);
    builder.render_to(&name, vertices, coprime, &mut sink)?;

    sink.written().last().cloned().ok_or_else(|| {
        GyreError::Export(format!("no output was written for `{name}`").into())
    })
}
