mod config;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::{LevelFilter, info, warn};
use tumble_blocks::{BlockFamily, BlockUri, FaceMaterialTransformer, FamilyRegistry};
use tumble_geom::{Face, Vec3i};
use tumble_runtime::{ReorientationPolicy, Runtime};
use tumble_world::EditStore;

use crate::config::RunConfig;

#[derive(Parser, Debug)]
#[command(name = "tumble")]
#[command(about = "Oriented block families and rotate-on-activate", long_about = None)]
struct Cli {
    /// Run settings file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Materials catalog
    #[arg(long, global = true)]
    materials: Option<PathBuf>,

    /// Family definitions
    #[arg(long, global = true)]
    families: Option<PathBuf>,

    /// Seed for reorientation draws (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List families, or every variant of one family
    List {
        /// Family URI, e.g. tutorial:dice
        #[arg(long)]
        family: Option<String>,
    },
    /// Resolve a block URI to its variant
    Show { uri: String },
    /// Place a block and activate it repeatedly
    Roll {
        /// Family URI, e.g. tutorial:dice
        #[arg(long)]
        family: String,

        /// Face of the neighbor the block is attached to
        #[arg(long, default_value = "top")]
        attach: String,

        /// Number of activations
        #[arg(short = 'n', long)]
        activations: Option<u32>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = match &cli.config {
        Some(p) => RunConfig::from_path(p)?,
        None => RunConfig::default(),
    };
    let materials = cli
        .materials
        .or(cfg.materials)
        .unwrap_or_else(|| PathBuf::from("assets/materials.toml"));
    let families = cli
        .families
        .or(cfg.families)
        .unwrap_or_else(|| PathBuf::from("assets/families.toml"));
    let registry =
        FamilyRegistry::load_from_paths(&materials, &families, &FaceMaterialTransformer)?;
    info!(
        "loaded {} families from {}",
        registry.len(),
        families.display()
    );

    match cli.command {
        Commands::List { family } => list(&registry, family.as_deref()),
        Commands::Show { uri } => show(&registry, &uri),
        Commands::Roll {
            family,
            attach,
            activations,
        } => {
            let seed = cli.seed.or(cfg.seed).unwrap_or_else(rand::random::<u64>);
            let n = activations.or(cfg.activations).unwrap_or(6);
            roll(registry, &family, &attach, n, seed)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .init();
}

fn family_by_uri<'a>(
    registry: &'a FamilyRegistry,
    uri: &str,
) -> Result<&'a BlockFamily, Box<dyn Error>> {
    let uri: BlockUri = uri.parse()?;
    registry
        .family_for_uri(&uri)
        .ok_or_else(|| format!("no family registered for {uri}").into())
}

fn list(registry: &FamilyRegistry, family: Option<&str>) -> Result<(), Box<dyn Error>> {
    match family {
        None => {
            for fam in registry.families() {
                let kind = match fam {
                    BlockFamily::Single(_) => "single",
                    BlockFamily::Dice(_) => "dice",
                };
                println!(
                    "{:>3}  {:<28} {:<6} variants={:<2} rotate_on_activate={}",
                    fam.id(),
                    fam.uri().to_string(),
                    kind,
                    fam.blocks().len(),
                    registry.rotates_on_activate(fam.id())
                );
            }
        }
        Some(uri) => {
            let fam = family_by_uri(registry, uri)?;
            for v in fam.blocks() {
                println!(
                    "{:>2}  {:<36} faces {:<6} {}",
                    v.index(),
                    v.uri().to_string(),
                    v.direction(),
                    v.rotation()
                );
            }
        }
    }
    Ok(())
}

fn show(registry: &FamilyRegistry, uri: &str) -> Result<(), Box<dyn Error>> {
    let v = registry
        .variant_for_uri_str(uri)
        .ok_or_else(|| format!("no block for {uri}"))?;
    println!("{}", v.uri());
    println!("  state     {}", v.index());
    println!("  top       {}", v.top());
    println!("  front     {}", v.front());
    println!("  direction {}", v.direction());
    println!("  rotation  {}", v.rotation());
    for face in Face::ALL {
        let mat = v.shape().material(face);
        let key = registry
            .materials
            .get(mat)
            .map(|m| m.key.as_str())
            .unwrap_or("?");
        println!("  {:<6}    {}", face, key);
    }
    Ok(())
}

fn roll(
    registry: FamilyRegistry,
    family: &str,
    attach: &str,
    activations: u32,
    seed: u64,
) -> Result<(), Box<dyn Error>> {
    let id = family_by_uri(&registry, family)?.id();
    let attach: Face = attach.to_ascii_uppercase().parse()?;
    info!("seed {seed}");
    let mut rt = Runtime::new(
        Arc::new(registry),
        EditStore::default(),
        ReorientationPolicy::seeded(seed),
    );
    let pos = Vec3i::ZERO;
    let entity = rt.place(id, pos, attach, Face::Front)?;
    if !rt.components.rotates_on_activate(entity) {
        warn!("{family} does not rotate on activation");
    }
    if let Some(v) = rt.variant_at(pos) {
        println!("placed  {}", v.uri());
    }
    for _ in 0..activations {
        rt.activate(entity);
        let report = rt.step();
        if let Some((_, err)) = report.failures.first() {
            return Err((*err).into());
        }
        if let Some(v) = rt.variant_at(pos) {
            println!("tick {:<3} {} (faces {})", report.tick, v.uri(), v.direction());
        }
    }
    Ok(())
}
