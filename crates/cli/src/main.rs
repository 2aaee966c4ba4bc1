use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod scene;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Evaluate 2D line intersection queries")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Intersect the scene's query line with its shape
    Intersect {
        /// JSON scene file (`{"shape": ..., "line": ...}`)
        #[arg(long)]
        scene: PathBuf,
        /// Write the result here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print version and code revision as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Intersect { scene, out } => intersect(scene, out),
        Action::Report => report(),
    }
}

fn intersect(scene_path: PathBuf, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(scene = %scene_path.display(), out = ?out, "intersect");
    let scene = scene::load(&scene_path)?;
    let outcome = scene::evaluate(&scene)?;
    let params = json!({
        "scene": scene_path.to_string_lossy(),
        "shape": scene.shape,
        "line": scene.line,
    });
    let doc = output::document(params, &outcome)?;
    output::emit(&doc, out.as_deref())
}

fn report() -> Result<()> {
    let doc = output::document(json!({}), &json!({}))?;
    output::emit(&doc, None)
}
