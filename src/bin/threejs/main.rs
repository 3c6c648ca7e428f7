//! threejs-scene CLI - Tool for building and inspecting three.js JSON scenes.

use std::env;
use std::path::Path;
use std::process;

use threejs_scene::core::Identified;
use threejs_scene::object::Object3D;
use threejs_scene::scene::{default_generator, JsonStyle, ObjectScene};
use threejs_scene::util::{Color, Vector3};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags
    let mut level = "info";
    let mut compact = false;
    let mut filtered_args: Vec<&str> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => level = "debug",
            "-vv" | "--trace" => level = "trace",
            "-q" | "--quiet" => level = "error",
            "--compact" => compact = true,
            _ => filtered_args.push(arg),
        }
    }
    init_logging(level);
    let style = if compact { JsonStyle::Compact } else { JsonStyle::Pretty };

    if filtered_args.is_empty() {
        print_help();
        return;
    }

    match filtered_args[0] {
        // Cube command - write a one-cube scene
        "cube" | "c" => {
            let (positional, options) = split_options(&filtered_args[1..]);
            let Some(out) = positional.first() else {
                usage("missing output file", "threejs-scene cube <out.json> [--size w,h,d] [--at x,y,z] [--color hex]");
            };
            cmd_cube(out, &options, style);
        }

        // Info command - document summary
        "info" | "i" => {
            let Some(file) = filtered_args.get(1) else {
                usage("missing file argument", "threejs-scene info <file.json>");
            };
            cmd_info(file);
        }

        // Tree command - show hierarchy
        "tree" | "t" => {
            let Some(file) = filtered_args.get(1) else {
                usage("missing file argument", "threejs-scene tree <file.json>");
            };
            cmd_tree(file);
        }

        // Optimize command - flatten hierarchy
        "optimize" | "o" => {
            let (positional, options) = split_options(&filtered_args[1..]);
            if positional.len() < 2 {
                usage("missing arguments", "threejs-scene optimize <in.json> <out.json> [--aggressive]");
            }
            let aggressive = options.iter().any(|(k, _)| *k == "--aggressive");
            cmd_optimize(positional[0], positional[1], aggressive, style);
        }

        // Merge command - combine two documents
        "merge" | "m" => {
            let (positional, options) = split_options(&filtered_args[1..]);
            if positional.len() < 3 {
                usage("missing arguments", "threejs-scene merge <target.json> <other.json> <out.json> [--at x,y,z]");
            }
            let at = option_value(&options, "--at").map(|v| parse_vector(v).unwrap_or_else(|e| fail(&e)));
            cmd_merge(positional[0], positional[1], positional[2], at, style);
        }

        // Validate command - check references
        "validate" | "val" => {
            let Some(file) = filtered_args.get(1) else {
                usage("missing file argument", "threejs-scene validate <file.json>");
            };
            cmd_validate(file);
        }

        // Help
        "help" | "h" | "-h" | "--help" => print_help(),

        // Default: if file exists, show info; otherwise error
        _ => {
            if Path::new(filtered_args[0]).exists() {
                cmd_info(filtered_args[0]);
            } else {
                eprintln!("Unknown command: {}", filtered_args[0]);
                eprintln!();
                print_help();
                process::exit(1);
            }
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_help() {
    println!("threejs-scene - three.js JSON scene toolkit");
    println!("{}", default_generator());
    println!();
    println!("USAGE:");
    println!("    threejs-scene [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    c, cube     <out> [--size w,h,d] [--at x,y,z] [--color hex]");
    println!("                                      Write a scene holding one box mesh");
    println!("    i, info     <file>                Show document summary");
    println!("    t, tree     <file>                Show object hierarchy");
    println!("    o, optimize <in> <out> [--aggressive]");
    println!("                                      Flatten hierarchy to visible leaves");
    println!("    m, merge    <target> <other> <out> [--at x,y,z]");
    println!("                                      Move other's content into target");
    println!("    val, validate <file>              Report unresolved geometry/material references");
    println!("    h, help                           Show this help");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Show debug output");
    println!("    -vv, --trace     Show trace output (very verbose)");
    println!("    -q, --quiet      Only show errors");
    println!("    --compact        Write single-line JSON");
    println!();
    println!("EXAMPLES:");
    println!("    threejs-scene cube cube.json --color '#ffffff'");
    println!("    threejs-scene tree scene.json");
    println!("    threejs-scene optimize scene.json flat.json --aggressive");
    println!("    threejs-scene merge a.json b.json ab.json --at 0,5,0");
    println!();
    println!("NOTES:");
    println!("    - Passing a .json file directly is equivalent to 'info'");
    println!("    - RUST_LOG overrides the -v/-vv/-q levels");
    println!("    - optimize does not fold removed parents' transforms into promoted leaves");
}

fn cmd_cube(out: &str, options: &[(&str, Option<&str>)], style: JsonStyle) {
    let (width, height, depth) = match option_value(options, "--size") {
        Some(v) => parse_size(v).unwrap_or_else(|e| fail(&e)),
        None => (1.0, 1.0, 1.0),
    };
    let position = option_value(options, "--at").map(|v| parse_vector(v).unwrap_or_else(|e| fail(&e)));
    let color = option_value(options, "--color")
        .map(|v| Color::from_hex(v).unwrap_or_else(|e| fail(&e.to_string())));

    let mut scene = ObjectScene::new(default_generator()).unwrap_or_else(|e| fail(&e.to_string()));
    let cube = scene
        .add_cube(width, height, depth, position, color)
        .unwrap_or_else(|e| fail(&e.to_string()));
    debug!(uuid = %cube.uuid(), "added cube");

    save(&scene, out, style);
    println!("Wrote {}", out);
}

fn cmd_info(path: &str) {
    let scene = load(path);

    println!("Document: {}", path);
    println!("Generator: {}", scene.metadata.generator);
    println!("Format: {} {}", scene.metadata.format_type, scene.metadata.version);
    println!();

    let root = scene.object();
    let nodes = root.descendants().count();
    let meshes = root.descendants().filter(|o| !o.is_invisible()).count();
    println!("Root: {} ({})", root.type_name(), root.uuid());
    println!("Objects: {} ({} drawable)", nodes, meshes);
    println!("Geometries: {}", scene.geometries().len());
    for g in scene.geometries() {
        println!("  {} {}", g.type_name(), g.uuid());
    }
    println!("Materials: {}", scene.materials().len());
    for m in scene.materials() {
        println!("  {} {} {}", m.type_name(), m.uuid(), m.name());
    }
    if !scene.user_data.is_empty() {
        println!("User data: {} entries", scene.user_data.len());
    }

    let dangling = scene.dangling_references().len();
    if dangling > 0 {
        println!();
        println!("Unresolved references: {} (run 'validate' for details)", dangling);
    }
}

fn cmd_tree(path: &str) {
    let scene = load(path);

    println!("Document: {}", path);
    println!();
    print_tree(scene.object(), 0);
}

fn print_tree(node: &Object3D, depth: usize) {
    let indent = "  ".repeat(depth);
    let name = if node.name.is_empty() { "<unnamed>" } else { node.name.as_str() };
    let mut line = format!("{}{} [{}] {}", indent, name, node.type_name(), node.position);
    if let Some(g) = &node.geometry {
        line.push_str(&format!(" geometry={}", g));
    }
    if let Some(m) = &node.material {
        line.push_str(&format!(" material={}", m));
    }
    if !node.visible {
        line.push_str(" (hidden)");
    }
    println!("{}", line);

    for child in node.children() {
        print_tree(child, depth + 1);
    }
}

fn cmd_optimize(input: &str, out: &str, aggressive: bool, style: JsonStyle) {
    let mut scene = load(input);
    let before = scene.object().descendants().count();
    scene.optimize(aggressive);
    let after = scene.object().descendants().count();

    info!(before, after, aggressive, "optimized");
    save(&scene, out, style);
    println!("Objects: {} -> {}", before, after);
}

fn cmd_merge(target: &str, other: &str, out: &str, at: Option<Vector3>, style: JsonStyle) {
    let mut scene = load(target);
    let other_scene = load(other);
    scene.merge(other_scene, at);

    save(&scene, out, style);
    println!(
        "Merged {} into {}: {} children, {} geometries, {} materials",
        other,
        target,
        scene.object().children().len(),
        scene.geometries().len(),
        scene.materials().len()
    );
}

fn cmd_validate(path: &str) {
    let scene = load(path);
    let dangling = scene.dangling_references();
    if dangling.is_empty() {
        println!("{}: OK", path);
        return;
    }
    for r in &dangling {
        println!("{}", r);
    }
    eprintln!("{}: {} unresolved reference(s)", path, dangling.len());
    process::exit(1);
}

fn load(path: &str) -> ObjectScene {
    info!("Opening document: {}", path);
    ObjectScene::load(path).unwrap_or_else(|e| fail(&format!("Failed to open {}: {}", path, e)))
}

fn save(scene: &ObjectScene, path: &str, style: JsonStyle) {
    if let Err(e) = scene.save(path, style) {
        fail(&format!("Failed to write {}: {}", path, e));
    }
}

/// Options that take a value; every other `--flag` is a switch.
const VALUED_OPTIONS: &[&str] = &["--size", "--at", "--color"];

/// Separate `--flag [value]` pairs from positional arguments.
fn split_options<'a>(args: &[&'a str]) -> (Vec<&'a str>, Vec<(&'a str, Option<&'a str>)>) {
    let mut positional = Vec::new();
    let mut options = Vec::new();
    let mut iter = args.iter().copied().peekable();
    while let Some(arg) = iter.next() {
        if arg.starts_with("--") {
            let value = if VALUED_OPTIONS.contains(&arg) {
                iter.next_if(|next| !next.starts_with("--"))
            } else {
                None
            };
            options.push((arg, value));
        } else {
            positional.push(arg);
        }
    }
    (positional, options)
}

fn option_value<'a>(options: &[(&str, Option<&'a str>)], name: &str) -> Option<&'a str> {
    options.iter().find(|(k, _)| *k == name).and_then(|(_, v)| *v)
}

fn parse_vector(s: &str) -> Result<Vector3, String> {
    let parts: Vec<i64> = s
        .split(',')
        .map(|p| p.trim().parse::<i64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("Invalid vector '{}': {}", s, e))?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(format!("Invalid vector '{}': expected x,y,z", s)),
    }
}

fn parse_size(s: &str) -> Result<(f64, f64, f64), String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("Invalid size '{}': {}", s, e))?;
    match parts.as_slice() {
        [w, h, d] => Ok((*w, *h, *d)),
        [edge] => Ok((*edge, *edge, *edge)),
        _ => Err(format!("Invalid size '{}': expected w,h,d", s)),
    }
}

fn usage(error: &str, usage: &str) -> ! {
    eprintln!("Error: {}", error);
    eprintln!("Usage: {}", usage);
    process::exit(1);
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector() {
        assert_eq!(parse_vector("1, -2,3").unwrap(), Vector3::new(1, -2, 3));
        assert!(parse_vector("1,2").is_err());
        assert!(parse_vector("a,b,c").is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("2").unwrap(), (2.0, 2.0, 2.0));
        assert_eq!(parse_size("1,2.5,3").unwrap(), (1.0, 2.5, 3.0));
        assert!(parse_size("1,2").is_err());
    }

    #[test]
    fn test_split_options() {
        let (pos, opts) = split_options(&["a.json", "--aggressive", "b.json", "--at", "1,2,3"]);
        assert_eq!(pos, ["a.json", "b.json"]);
        assert_eq!(opts, [("--aggressive", None), ("--at", Some("1,2,3"))]);
        assert_eq!(option_value(&opts, "--at"), Some("1,2,3"));
        assert_eq!(option_value(&opts, "--aggressive"), None);
    }
}
