use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nexus_og::config::DEFAULT_FETCH_TIMEOUT_MS;
use nexus_og::{
    DirImageLoader, ImageSet, Rasterizer, ResolvedTemplate, SceneRequest, ServiceConfig,
    StaticMetrics,
};

#[derive(Parser, Debug)]
#[command(name = "nexus-og", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service.
    Serve(ServiceConfig),
    /// Render a single card from a JSON scene request.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Directory artwork paths are resolved against (defaults to the input's directory).
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Also write the composed scene as SVG.
    #[arg(long)]
    dump_svg: Option<PathBuf>,

    /// Extra font directories.
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Serve(config) => nexus_og::service::http::serve(&config).await,
        Command::Render(args) => cmd_render(args).await,
    }
}

async fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let json = std::fs::read(&args.in_path)
        .with_context(|| format!("read scene request '{}'", args.in_path.display()))?;
    let template = ResolvedTemplate::from_request(SceneRequest::from_json(&json)?)?;
    let doc = nexus_og::compose(&template, &StaticMetrics);

    if let Some(path) = &args.dump_svg {
        create_parent_dir(path)?;
        std::fs::write(path, doc.to_svg())
            .with_context(|| format!("write svg '{}'", path.display()))?;
    }

    let assets_root = args.assets_dir.clone().unwrap_or_else(|| {
        args.in_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf()
    });
    let loader = DirImageLoader::new(assets_root);
    let images = ImageSet::prefetch(
        &doc,
        &loader,
        Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
    )
    .await;

    let image = Rasterizer::new(&args.font_dirs).rasterize(&doc, &images)?;

    create_parent_dir(&args.out)?;
    std::fs::write(&args.out, image.bytes())
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
