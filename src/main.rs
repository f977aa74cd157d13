use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use clusterview::{
    random_points, ClusterSession, ClusteringClient, Config, DataPoint, SessionState, SurfaceSize,
};

/// Drive a full visualization session against a live clustering server.
#[derive(Parser)]
#[command(name = "clusterview", version, about)]
struct Args {
    /// Model server base URL (overrides CLUSTERVIEW_SERVING_URL)
    #[arg(long)]
    serving_url: Option<String>,

    /// Name the clustering model is served under
    #[arg(long)]
    model: Option<String>,

    /// Number of random points to seed the session with
    #[arg(long, default_value_t = 20)]
    points: usize,

    /// Cluster count to request (must be a served model version)
    #[arg(long, default_value_t = 3)]
    clusters: u32,

    /// Seed for the random point batch
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Surface size in pixels, WIDTHxHEIGHT
    #[arg(long, default_value = "800x600")]
    surface: String,

    /// Write the final scene's draw commands to this file as JSON
    #[arg(long)]
    scene_out: Option<PathBuf>,
}

fn parse_surface(raw: &str) -> anyhow::Result<SurfaceSize> {
    let (w, h) = raw
        .split_once('x')
        .context("surface must look like 800x600")?;
    Ok(SurfaceSize::new(
        w.parse().context("surface width is not a number")?,
        h.parse().context("surface height is not a number")?,
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = Config::from_env();
    let serving_url = args.serving_url.unwrap_or(config.serving_url);
    let model = args.model.unwrap_or(config.model_name);
    let surface = parse_surface(&args.surface)?;

    println!("=== clusterview: incremental clustering session ===\n");

    // Step 1: check what the server offers
    println!("Step 1: Checking model catalog at {}...", serving_url);
    let client = ClusteringClient::new(&serving_url, &model);
    let mut session = ClusterSession::new(client, surface);

    if let Err(e) = session.refresh_catalog().await {
        eprintln!("✗ Catalog check failed: {}", e);
        eprintln!(
            "\n  Make sure the model server is running and serving '{}'.",
            model
        );
        return Ok(());
    }
    let counts: Vec<String> = session
        .catalog()
        .options()
        .iter()
        .map(|o| {
            if o.available {
                o.count.to_string()
            } else {
                format!("{} (unavailable)", o.count)
            }
        })
        .collect();
    println!("✓ Served cluster counts: [{}]\n", counts.join(", "));

    if !session.set_cluster_count(args.clusters).await {
        eprintln!(
            "✗ Cluster count {} is not served; using {}\n",
            args.clusters,
            session.cluster_count()
        );
    }

    // Step 2: seed the plane with random points
    println!(
        "Step 2: Seeding {} random points (seed {})...",
        args.points, args.seed
    );
    session
        .add_points(random_points(args.points, args.seed))
        .await;
    report(&session);

    // Step 3: add points one at a time; stable identities should hold
    println!("Step 3: Adding three more points one at a time...");
    for point in [
        DataPoint::new(1.0, 1.0),
        DataPoint::new(-3.5, 7.25),
        DataPoint::new(8.0, -8.0),
    ] {
        session.add_point(point).await;
        report(&session);
    }

    // Step 4: render, resize, render again
    println!("\nStep 4: Rendering...");
    let scene = session.render();
    println!(
        "✓ Scene at {}x{}: {} draw commands",
        surface.width,
        surface.height,
        scene.len()
    );

    session.resize_surface(SurfaceSize::new(1280.0, 720.0));
    let scene = session.render();
    println!(
        "✓ Scene at 1280x720: {} draw commands, {} points kept",
        scene.len(),
        session.points().len()
    );

    if let Some(path) = args.scene_out {
        std::fs::write(&path, serde_json::to_vec_pretty(&scene)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("✓ Scene written to {}", path.display());
    }

    Ok(())
}

/// Print one status line for the session, sized per stable identity when a
/// result is up.
fn report(session: &ClusterSession) {
    if session.state() == SessionState::Ready {
        let result = session.result().expect("ready session has a result");

        let mut sizes: BTreeMap<usize, usize> = BTreeMap::new();
        for assignment in &result.assignments {
            if let Some(id) = session.identities().stable_id(assignment.cluster) {
                *sizes.entry(id).or_default() += 1;
            }
        }
        let summary: Vec<String> = sizes
            .iter()
            .map(|(id, n)| format!("#{}: {}", id, n))
            .collect();

        println!(
            "  ✓ {} points in {} clusters [{}]",
            session.points().len(),
            result.centroids.len(),
            summary.join(", ")
        );
    } else if let Some(err) = session.last_error() {
        println!("  ✗ {:?}: {}", session.state(), err);
    } else {
        println!(
            "  – {:?} ({} points)",
            session.state(),
            session.points().len()
        );
    }
}
