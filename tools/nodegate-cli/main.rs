mod config;

use clap::{Parser, Subcommand};
use config::{CliConfig, OutputFormat};
use nodegate::prelude::*;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Query node classification, action gating and display strings from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the variant of every node in a snapshot
    Classify {
        /// Path to the node snapshot JSON file
        snapshot: PathBuf,
    },
    /// Check whether an action form may be opened for a node
    Gate {
        snapshot: PathBuf,
        system_id: String,
        /// Backend action name, e.g. "deploy" or "check-power"
        action: String,
    },
    /// List the actions whose forms may be opened, for one node or all of them
    Permitted {
        snapshot: PathBuf,
        system_id: Option<String>,
    },
    /// Format the submit label for an action
    Label {
        model: String,
        action: String,
        /// Use the in-progress phrasing
        #[arg(short, long)]
        processing: bool,
    },
    /// Resolve the side-panel title for a view
    Title {
        /// Name half of the view tag; omit for an empty side panel
        name: Option<String>,
        /// Section half of the view tag
        #[arg(long, default_value = "")]
        section: String,
        /// Title shown when the side panel is empty
        #[arg(short, long)]
        default: Option<String>,
    },
    /// Summarise the health of a controller from its service statuses
    Health {
        /// Service statuses: running, degraded, dead, off, unknown
        #[arg(required = true)]
        services: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    init_tracing(&config.log_filter);

    let output = cli.format.unwrap_or(config.output);
    tracing::debug!(?output, command = ?cli.command, "running command");

    match cli.command {
        Command::Classify { snapshot } => run_classify(&load_snapshot(&snapshot), output),
        Command::Gate {
            snapshot,
            system_id,
            action,
        } => run_gate(&load_snapshot(&snapshot), &system_id, &action, output),
        Command::Permitted {
            snapshot,
            system_id,
        } => run_permitted(&load_snapshot(&snapshot), system_id.as_deref(), output),
        Command::Label {
            model,
            action,
            processing,
        } => print_value(output, json!(node_action_label(&model, &action, processing))),
        Command::Title {
            name,
            section,
            default,
        } => {
            let default_title = default.unwrap_or(config.default_title);
            let content =
                name.map(|name| SidePanelContent::new(SidePanelView::new(section, name)));
            print_value(
                output,
                json!(side_panel_title(&default_title, content.as_ref())),
            );
        }
        Command::Health { services } => run_health(&services, output),
    }
}

fn init_tracing(fallback_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_snapshot(path: &Path) -> NodeSnapshot {
    NodeSnapshot::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn find_node<'a>(snapshot: &'a NodeSnapshot, system_id: &str) -> &'a Node {
    snapshot.find(system_id).unwrap_or_else(|| {
        exit_with_error(&format!("No node with system id '{}' in snapshot", system_id))
    })
}

fn run_classify(snapshot: &NodeSnapshot, output: OutputFormat) {
    match output {
        OutputFormat::Json => {
            let rows: Vec<_> = snapshot
                .nodes
                .iter()
                .map(|node| {
                    json!({
                        "system_id": node.system_id(),
                        "kind": classify(node),
                        "details": is_node_details(Some(node)),
                    })
                })
                .collect();
            print_json(&json!(rows));
        }
        OutputFormat::Text => {
            for node in &snapshot.nodes {
                let type_display = node.node_type().map_or("Unknown", node_type_display);
                println!(
                    "{:<12} {:<12} {:<28} {}",
                    node.system_id().unwrap_or("-"),
                    format!("{:?}", classify(node)),
                    type_display,
                    node.hostname().unwrap_or("-"),
                );
            }
        }
    }
}

fn run_gate(snapshot: &NodeSnapshot, system_id: &str, action: &str, output: OutputFormat) {
    let node = find_node(snapshot, system_id);
    // An unparseable action is treated like an absent one.
    let action = action.parse::<NodeAction>().ok();
    let allowed = can_open_action_form(Some(node), action);

    match output {
        OutputFormat::Json => print_json(&json!({
            "system_id": system_id,
            "action": action,
            "allowed": allowed,
        })),
        OutputFormat::Text => {
            let verdict = if allowed { "allowed" } else { "denied" };
            println!("{}: {}", node_action_title(action), verdict);
        }
    }
}

fn run_permitted(snapshot: &NodeSnapshot, system_id: Option<&str>, output: OutputFormat) {
    let nodes: Vec<&Node> = match system_id {
        Some(id) => vec![find_node(snapshot, id)],
        None => snapshot.nodes.iter().collect(),
    };

    match output {
        OutputFormat::Json => {
            let rows: Vec<_> = nodes
                .iter()
                .map(|node| {
                    json!({
                        "system_id": node.system_id(),
                        "actions": permitted_actions(node),
                    })
                })
                .collect();
            print_json(&json!(rows));
        }
        OutputFormat::Text => {
            for node in nodes {
                let titles: Vec<_> = permitted_actions(node)
                    .into_iter()
                    .map(|action| node_action_title(Some(action)))
                    .collect();
                println!("{}: {}", node.system_id().unwrap_or("-"), titles.join(", "));
            }
        }
    }
}

fn run_health(services: &[String], output: OutputFormat) {
    let statuses: Vec<ServiceStatus> = services
        .iter()
        .map(|s| {
            s.parse::<ServiceStatus>()
                .unwrap_or_else(|e: ParseError| exit_with_error(&e.to_string()))
        })
        .collect();
    let health = controller_health(&statuses);
    let summary = service_summary(&statuses);

    match output {
        OutputFormat::Json => print_json(&json!({
            "health": health,
            "icon": health.icon(),
            "summary": summary,
        })),
        OutputFormat::Text => match summary {
            Some(summary) => println!("{} ({})", health.icon(), summary),
            None => println!("{}", health.icon()),
        },
    }
}

fn print_value(output: OutputFormat, value: serde_json::Value) {
    match output {
        OutputFormat::Json => print_json(&value),
        OutputFormat::Text => match value.as_str() {
            Some(text) => println!("{}", text),
            None => println!("{}", value),
        },
    }
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => exit_with_error(&format!("Failed to serialize output: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
