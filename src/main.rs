//! Gallery Router CLI
//!
//! Loads a route table configuration, composes it, and lets an operator
//! check, list, resolve, or simulate navigation over it.
//!
//! ```text
//! gallery.toml → loader → validation → RouteRegistry
//!                                          │
//!                    ┌─────────────────────┼──────────────────────┐
//!                    ▼                     ▼                      ▼
//!                  check            routes / resolve      navigate (Navigator
//!                                                          + TitleGuard)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use gallery_router::config::load_config;
use gallery_router::navigation::{DocumentTitle, Navigator, TitleGuard};
use gallery_router::observability::logging::init_logging;
use gallery_router::routing::{ResolvedRoute, RouteRegistry};

#[derive(Parser)]
#[command(name = "gallery-router")]
#[command(about = "Inspect and exercise the gallery route table", long_about = None)]
struct Cli {
    /// Route table configuration file.
    #[arg(short, long, default_value = "gallery.toml")]
    config: PathBuf,

    /// Override the configured log level.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and compose the route table
    Check,
    /// List addressable routes in table order
    Routes {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Resolve a single path
    Resolve { path: String },
    /// Navigate through each path in turn, printing the document title
    Navigate {
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

#[derive(Serialize)]
struct RouteRow<'a> {
    path: &'a str,
    view: &'a str,
    group: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    redirected_from: Vec<&'a str>,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.observability.log_level.clone());
    if let Err(err) = init_logging(&level) {
        eprintln!("Logging not initialized: {}", err);
    }

    let registry = match RouteRegistry::from_config(&config) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("Route table in {} rejected:", cli.config.display());
            for violation in err.violations() {
                eprintln!("  - {}", violation);
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    match cli.command {
        Commands::Check => {
            println!(
                "OK: {} routes, {} redirects, {} groups",
                registry.len(),
                registry.redirects().len(),
                config.groups.len()
            );
        }
        Commands::Routes { json } => {
            let rows = route_rows(&registry);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!(
                        "{:<40} {:<36} {:<12} {}{}",
                        row.path,
                        row.view,
                        row.group,
                        row.title.unwrap_or("-"),
                        if row.redirected_from.is_empty() {
                            String::new()
                        } else {
                            format!("  (from {})", row.redirected_from.join(", "))
                        }
                    );
                }
            }
        }
        Commands::Resolve { path } => match registry.resolve_target(&path) {
            Ok(found) => {
                let route = found.route();
                println!("path:  {}", route.path());
                println!("view:  {}", route.view());
                println!("title: {}", route.title().unwrap_or("-"));
                if let Some(from) = found.redirected_from() {
                    println!("redirected from: {}", from);
                }
            }
            Err(err) => println!("{}: {}", path, err),
        },
        Commands::Navigate { paths } => {
            let title = DocumentTitle::new();
            let mut navigator = Navigator::new(Arc::new(registry));
            navigator.before_each(TitleGuard::with_format(title.clone(), config.app.title_format()));

            for path in paths {
                match navigator.navigate(&path) {
                    Ok(transition) => println!(
                        "{} -> {}  title: {}",
                        path,
                        transition.path,
                        title.get().unwrap_or_else(|| "<unset>".to_string())
                    ),
                    Err(err) => println!("{}: {}", path, err),
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn route_rows(registry: &RouteRegistry) -> Vec<RouteRow<'_>> {
    let redirects = registry.redirects();
    registry
        .routes()
        .iter()
        .map(|route: &ResolvedRoute| RouteRow {
            path: route.path(),
            view: route.view().as_str(),
            group: route.group(),
            title: route.title(),
            redirected_from: redirects
                .iter()
                .filter(|(_, to)| *to == route.path())
                .map(|(from, _)| *from)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_router::routing::{RouteEntry, RouteGroup};

    #[test]
    fn test_route_rows_carry_view_and_redirect_source() {
        let root = RouteEntry::redirect(
            "/",
            "/demo/ray",
            vec![RouteEntry::new("/demo/ray", "chapter5/Index").with_title("射线")],
        );
        let groups = [RouteGroup::from_routes(
            "chapter4",
            vec![RouteEntry::new("/chapter4/MeshBasicMaterial", "chapter4/MeshBasicMaterial")],
        )];
        let registry = RouteRegistry::compose(&groups, Some(&root)).unwrap();

        let rows = route_rows(&registry);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].view, "chapter5/Index");
        assert_eq!(rows[0].redirected_from, ["/"]);
        assert_eq!(rows[1].view, "chapter4/MeshBasicMaterial");
        assert_eq!(rows[1].title, None);

        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["view"], "chapter5/Index");
        assert_eq!(json[0]["group"], "root");
        assert!(json[1].get("redirected_from").is_none());
    }
}
