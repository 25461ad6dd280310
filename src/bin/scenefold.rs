use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scenefold", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Optimize a scene document and write the result.
    Optimize(OptimizeArgs),
    /// Print the non-default property set of every reachable node.
    Classify(ClassifyArgs),
}

#[derive(Parser, Debug)]
struct OptimizeArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output scene JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Do not append fold notes to node descriptions.
    #[arg(long)]
    no_annotate: bool,

    /// Compare folded matrices with this absolute tolerance instead of exactly.
    #[arg(long)]
    tolerance: Option<f64>,
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Optimize(args) => cmd_optimize(args),
        Command::Classify(args) => cmd_classify(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<scenefold::SceneDocument> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let doc: scenefold::SceneDocument =
        serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    doc.validate()?;
    Ok(doc)
}

fn cmd_optimize(args: OptimizeArgs) -> anyhow::Result<()> {
    let mut doc = read_scene_json(&args.in_path)?;

    let matrix_comparison = match args.tolerance {
        Some(eps) if !(eps.is_finite() && eps >= 0.0) => {
            anyhow::bail!("--tolerance must be a finite, non-negative number (got {eps})");
        }
        Some(eps) => scenefold::MatrixComparison::Tolerance(eps),
        None => scenefold::MatrixComparison::Exact,
    };
    let opts = scenefold::OptimizeOpts {
        annotate: !args.no_annotate,
        matrix_comparison,
    };

    let outcome = scenefold::optimize_property_values_with(&mut doc.graph, doc.root, &opts);

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let json = doc.to_json_string_pretty()?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write scene '{}'", args.out.display()))?;

    let s = outcome.stats;
    eprintln!(
        "visited={} folded={} dropped={} pivots_cleared={} stroke_cleared={} animators_stopped={}",
        s.nodes_visited,
        s.transforms_folded,
        s.transforms_dropped,
        s.pivots_cleared,
        s.stroke_properties_cleared,
        s.animators_stopped,
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let doc = read_scene_json(&args.in_path)?;

    for id in scenefold::distinct_nodes(&doc.graph, doc.root) {
        let Some(node) = doc.graph.node(id) else {
            continue;
        };
        let set = scenefold::non_default_properties(node);
        if set.is_empty() {
            println!("{id} {}", node.kind.name());
        } else {
            println!("{id} {}: {set}", node.kind.name());
        }
    }
    Ok(())
}
