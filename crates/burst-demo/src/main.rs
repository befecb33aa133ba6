//! Binary entry point for the exploded geodesic sphere logo renderer.
//!
//! Settings come from `config.ron` with CLI flags taking precedence.
//! `cargo run -p burst-demo` renders the default still logo;
//! `cargo run -p burst-demo -- --scene turntable` renders the full
//! rotation sequence.

use std::f64::consts::TAU;
use std::fs;

use burst_config::{CliArgs, Config, default_config_dir};
use burst_export::{SvgParams, render_svg, write_mtl, write_obj};
use burst_geodesic::{generate_mesh, shrink_faces};
use burst_view::{bounding_radius, project_and_order};
use clap::Parser;
use tracing::info;

/// Base name for 3D model exports (`logo.obj` + `logo.mtl`).
const MODEL_NAME: &str = "logo";

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // A broken config file should not block rendering
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });

    // The log filter reads this field, so the flag applies up front.
    if let Some(ref level) = args.log_level {
        config.debug.log_level = level.clone();
    }

    let log_dir = config_dir.join("logs");
    burst_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    // Override warnings need the subscriber, so the full pass runs here.
    config.apply_cli_overrides(&args);

    let result = match args.scene.as_deref().unwrap_or("still") {
        "still" => render_still(&config),
        "turntable" => render_turntable(&config),
        "model" => export_model(&config),
        other => Err(format!("unknown scene {other:?}, expected still, turntable or model").into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Render the logo once with the configured viewing angles.
fn render_still(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = generate_mesh(config.sphere.subdivisions)?;
    info!(
        "Generated geodesic mesh: {} vertices, {} faces, {} edges",
        mesh.vertex_count(),
        mesh.face_count(),
        mesh.edge_count()
    );

    let triangles = shrink_faces(&mesh, config.sphere.shrink_factor, config.sphere.scale)?;
    let ordered = project_and_order(&triangles, config.view.angle_x, config.view.angle_y);
    let svg = render_svg(&ordered, bounding_radius(&triangles), &svg_params(config));

    fs::create_dir_all(&config.export.out_dir)?;
    let path = config.export.out_dir.join("logo.svg");
    fs::write(&path, svg)?;
    info!("Wrote {}", path.display());

    Ok(())
}

/// Render one SVG per turntable frame, sweeping a full turn around Y.
///
/// The X tilt stays fixed at the configured viewing angle so the sweep
/// reads as a turntable rather than a tumble.
fn render_turntable(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = generate_mesh(config.sphere.subdivisions)?;
    let triangles = shrink_faces(&mesh, config.sphere.shrink_factor, config.sphere.scale)?;
    let radius = bounding_radius(&triangles);
    let params = svg_params(config);
    let frames = config.turntable.frames;

    fs::create_dir_all(&config.export.out_dir)?;
    for frame in 0..frames {
        let angle_y = TAU * f64::from(frame) / f64::from(frames);
        let ordered = project_and_order(&triangles, config.view.angle_x, angle_y);
        let svg = render_svg(&ordered, radius, &params);
        let path = config.export.out_dir.join(format!("frame_{frame:04}.svg"));
        fs::write(&path, svg)?;
    }
    info!(
        "Wrote {} turntable frames to {}",
        frames,
        config.export.out_dir.display()
    );

    Ok(())
}

/// Export the shrunk faces as a Wavefront OBJ with its material file.
fn export_model(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = generate_mesh(config.sphere.subdivisions)?;
    let triangles = shrink_faces(&mesh, config.sphere.shrink_factor, config.sphere.scale)?;
    info!("Exporting {} shrunk faces as {MODEL_NAME}.obj", triangles.len());

    let obj = write_obj(&triangles, MODEL_NAME);
    let mtl = write_mtl(
        MODEL_NAME,
        &config.style.fill_color,
        config.style.model_fill_opacity,
    )?;

    fs::create_dir_all(&config.export.out_dir)?;
    let obj_path = config.export.out_dir.join(format!("{MODEL_NAME}.obj"));
    fs::write(&obj_path, obj)?;
    let mtl_path = config.export.out_dir.join(format!("{MODEL_NAME}.mtl"));
    fs::write(&mtl_path, mtl)?;
    info!("Wrote {} and {}", obj_path.display(), mtl_path.display());

    Ok(())
}

/// SVG parameters assembled from the style and export config sections.
fn svg_params(config: &Config) -> SvgParams {
    SvgParams {
        size: config.export.frame_size,
        stroke_width: config.style.stroke_width,
        fill_color: config.style.fill_color.clone(),
        stroke_color: config.style.stroke_color.clone(),
        background_color: config.style.background_color.clone(),
        ..SvgParams::default()
    }
}
