mod cli;
mod render;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use perfm_core::encoder::DefaultEncoder;
use perfm_core::error::Error;
use perfm_core::monitor::Monitor;
use perfm_core::top::{self, TopEngine};
use perfm_core::topology::Topology;

use cli::{Cli, Command};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Stat(args) => run_stat(args),
        Command::Top(args) => run_top(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run_stat(args: cli::StatArgs) -> Result<(), Error> {
    let output_path = args.output.clone();
    let config = args.into_config()?;

    let topology = Topology::build()?;
    let encoder = DefaultEncoder;
    let mut monitor = Monitor::open(&config, &encoder, &topology)?;

    let mut sink: Box<dyn io::Write> = match &output_path {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(io::stdout()),
    };

    monitor.run(|snapshot| {
        if let Err(err) = render::render_snapshot(&mut sink, &snapshot) {
            log::warn!("could not write snapshot: {err}");
        }
    })
}

fn run_top(args: cli::TopArgs) -> Result<(), Error> {
    top::install_interrupt_handler();

    let config = perfm_core::config::Config {
        loop_count: 1,
        interval_secs: args.delay,
        groups: vec!["cycles:u,cycles:k".to_string()],
        output: None,
        cpu: cli::parse_cpu_selector(&args.common.cpu)?,
        pid: cli::parse_pid_selector(args.common.pid),
        plm: perfm_core::flags::Plm::parse(&args.common.plm)?,
        include_children: false,
        skip_on_error: false,
    }
    .finish()?;

    let topology = Topology::build()?;
    let encoder = DefaultEncoder;
    let mut engine = TopEngine::open(&config, &encoder, &topology, args.iterations.max(1), args.delay)?;

    let mut stdout = io::stdout();
    let mut previous_lines = 0usize;
    engine.run(|frames| {
        let result = if args.batch {
            render::render_frames_batch(&mut stdout, frames)
        } else {
            render::render_frames_inplace(&mut stdout, frames, previous_lines)
        };
        if let Err(err) = result {
            log::warn!("could not write frame: {err}");
        }
        previous_lines = frames.len();
    })
}
