use clap::Parser;
use nodegate::node::{Controller, Device, Machine, MachineDetails, PowerState};
use nodegate::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use std::fs;

/// A CLI tool to generate random node snapshots for nodegate-cli
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_nodes.json")]
    output: String,

    /// Number of machines to generate
    #[arg(long, default_value_t = 20)]
    machines: usize,

    /// Number of controllers to generate
    #[arg(long, default_value_t = 3)]
    controllers: usize,

    /// Number of devices to generate
    #[arg(long, default_value_t = 5)]
    devices: usize,
}

const HOSTNAMES: [&str; 10] = [
    "koala", "wombat", "quokka", "numbat", "bilby", "dingo", "echidna", "possum", "wallaby",
    "platypus",
];

const POOLS: [&str; 3] = ["default", "batch", "gpu"];
const ZONES: [&str; 3] = ["default", "zone-a", "zone-b"];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating {} machine(s), {} controller(s), {} device(s)...",
        cli.machines, cli.controllers, cli.devices
    );

    let mut nodes: Vec<Node> = Vec::with_capacity(cli.machines + cli.controllers + cli.devices);
    for idx in 0..cli.machines {
        nodes.push(generate_machine(&mut rng, idx).into());
    }
    for idx in 0..cli.controllers {
        nodes.push(generate_controller(&mut rng, idx).into());
    }
    for idx in 0..cli.devices {
        nodes.push(generate_device(&mut rng, idx).into());
    }

    let snapshot = NodeSnapshot::new(nodes);
    fs::write(&cli.output, snapshot.to_json_pretty()?)?;

    println!(
        "Successfully generated and saved {} node(s) to '{}'",
        snapshot.nodes.len(),
        cli.output
    );

    Ok(())
}

fn hostname(rng: &mut ThreadRng, idx: usize) -> String {
    let base = HOSTNAMES.choose(rng).copied().unwrap_or("node");
    format!("{}-{}", base, idx)
}

fn system_id(rng: &mut ThreadRng) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    (0..6)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// A plausible advertised action set for a machine in `status`.
fn machine_actions(status: NodeStatus) -> Vec<NodeAction> {
    use NodeAction::*;
    let mut actions = match status {
        NodeStatus::New | NodeStatus::FailedCommissioning => vec![Commission, Delete],
        NodeStatus::Ready | NodeStatus::FailedTesting => {
            vec![Acquire, Deploy, Commission, Test, Lock, SetPool, SetZone, Tag, Delete]
        }
        NodeStatus::Allocated => vec![Deploy, Release, Lock, Tag],
        NodeStatus::Deployed => vec![Release, RescueMode, On, Off, SoftOff, Lock, Tag],
        NodeStatus::Commissioning
        | NodeStatus::Deploying
        | NodeStatus::Testing
        | NodeStatus::DiskErasing => vec![Abort],
        NodeStatus::RescueMode => vec![ExitRescueMode],
        NodeStatus::Broken => vec![MarkFixed, Delete],
        _ => vec![Delete],
    };
    if status == NodeStatus::FailedTesting {
        actions.push(OverrideFailedTesting);
    }
    actions
}

fn generate_machine(rng: &mut ThreadRng, idx: usize) -> Machine {
    let status = *NodeStatus::ALL.choose(rng).unwrap_or(&NodeStatus::New);
    let mut machine = Machine::new(system_id(rng), hostname(rng, idx), status)
        .with_actions(machine_actions(status));
    machine.power_state = *[PowerState::On, PowerState::Off, PowerState::Unknown]
        .choose(rng)
        .unwrap_or(&PowerState::Unknown);
    machine.pool = POOLS.choose(rng).map(|pool| pool.to_string());
    machine.zone = ZONES.choose(rng).map(|zone| zone.to_string());

    // Roughly a third of the records are full detail records.
    if rng.random_bool(0.3) {
        machine = machine.with_details(MachineDetails {
            osystem: "ubuntu".to_string(),
            distro_series: "noble".to_string(),
            cpu_count: rng.random_range(2..=64),
            memory: rng.random_range(4..=512) as f64,
            ..Default::default()
        });
    }
    machine
}

fn generate_controller(rng: &mut ThreadRng, idx: usize) -> Controller {
    let node_type = *[
        NodeType::RackController,
        NodeType::RegionController,
        NodeType::RegionAndRackController,
    ]
    .choose(rng)
    .unwrap_or(&NodeType::RegionAndRackController);
    let mut controller = Controller::new(
        system_id(rng),
        format!("controller-{}", idx),
        node_type,
        NodeStatus::Deployed,
    )
    .with_actions([NodeAction::SetZone, NodeAction::ImportImages, NodeAction::Delete]);
    controller.service_ids = (0..rng.random_range(1..=6)).collect();
    controller
}

fn generate_device(rng: &mut ThreadRng, idx: usize) -> Device {
    let mut device = Device::new(system_id(rng), hostname(rng, idx), NodeStatus::Deployed)
        .with_actions([NodeAction::SetZone, NodeAction::Delete]);
    device.primary_mac = (0..6)
        .map(|_| format!("{:02x}", rng.random::<u8>()))
        .collect::<Vec<_>>()
        .join(":");
    device
}
