#![deny(unsafe_code)]
//! CLI for inspecting what the webgl-quad frame would upload.
//!
//! Subcommands:
//! - `matrices` -- print the projection and model-view matrices for a size
//! - `quad` -- print the vertex data
//! - `shaders` -- print the embedded shader sources

mod error;
mod logging;

use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;
use webgl_quad_core::geometry::{quad_positions, QUAD_VERTEX_COUNT};
use webgl_quad_core::render::Viewport;
use webgl_quad_core::{Camera, Mat4, SceneConfig, ShaderRole, ShaderSources};

#[derive(Parser)]
#[command(name = "webgl-quad", about = "Inspect the webgl-quad frame setup")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the projection and model-view matrices.
    Matrices {
        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 640)]
        width: u32,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 480)]
        height: u32,

        /// Scene config JSON file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the quad's vertex positions.
    Quad,
    /// Print embedded shader sources.
    Shaders {
        /// Only print this role.
        #[arg(short, long)]
        role: Option<RoleArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Vertex,
    Fragment,
}

impl From<RoleArg> for ShaderRole {
    fn from(r: RoleArg) -> Self {
        match r {
            RoleArg::Vertex => ShaderRole::Vertex,
            RoleArg::Fragment => ShaderRole::Fragment,
        }
    }
}

/// Loads a scene config from `path`, or the defaults when absent.
fn load_config(path: Option<&Path>) -> Result<SceneConfig, CliError> {
    let Some(path) = path else {
        return Ok(SceneConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid JSON in {}: {e}", path.display())))?;
    if !value.is_object() {
        return Err(CliError::Input(format!(
            "{} must contain a JSON object",
            path.display()
        )));
    }
    log::debug!("loaded scene config from {}", path.display());
    Ok(SceneConfig::from_json(&value)?)
}

fn print_matrix(name: &str, m: &Mat4) {
    println!("{name}:");
    for row in m.to_rows() {
        println!(
            "  [{:>10.6} {:>10.6} {:>10.6} {:>10.6}]",
            row[0], row[1], row[2], row[3]
        );
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Matrices {
            width,
            height,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let viewport = Viewport::new(width, height)?;
            let camera = Camera::from_config(&config);
            let m = camera.matrices(viewport.width, viewport.height);
            let aspect = Camera::aspect(viewport.width, viewport.height);

            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "aspect": aspect,
                    "fov_y_degrees": camera.fov_y_degrees,
                    "near": camera.near,
                    "far": camera.far,
                    "projection": m.projection.to_rows(),
                    "model_view": m.model_view.to_rows(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{width}x{height}, aspect {aspect:.6}, fov {}°, near {}, far {}",
                    camera.fov_y_degrees, camera.near, camera.far
                );
                print_matrix("projection", &m.projection);
                print_matrix("model-view", &m.model_view);
            }
        }
        Command::Quad => {
            let positions: Vec<[f32; 3]> = quad_positions().collect();
            if cli.json {
                let info = serde_json::json!({
                    "vertex_count": QUAD_VERTEX_COUNT,
                    "positions": positions,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{QUAD_VERTEX_COUNT} vertices (triangle strip):");
                for [x, y, z] in positions {
                    println!("  ({x:>4}, {y:>4}, {z:>4})");
                }
            }
        }
        Command::Shaders { role } => {
            let sources = ShaderSources::embedded();
            let roles: Vec<ShaderRole> = match role {
                Some(r) => vec![r.into()],
                None => ShaderRole::ALL.to_vec(),
            };
            if cli.json {
                let map: serde_json::Map<String, serde_json::Value> = roles
                    .iter()
                    .map(|r| (r.to_string(), sources.get(*r).into()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                for r in roles {
                    println!("// {r} shader");
                    println!("{}", sources.get(r));
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
