// scripts/benchmark.rs
use bs_lanes::harness::{run_benchmark, HarnessConfig, KernelRun, KernelSet};
use bs_lanes::output::write_runs_csv;
use clap::Parser;
use std::env;
use std::process::{Command, ExitCode};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Time the scalar and lane-parallel kernels over a random option book
#[derive(Debug, Parser)]
#[command(name = "benchmark", version)]
struct Args {
    /// Number of random options per round
    #[arg(long, default_value_t = 100)]
    options: usize,

    /// Trajectories per option (multiple of 8 for the vector kernel)
    #[arg(long, default_value_t = 100_000)]
    trajectories: usize,

    /// Timed rounds per kernel
    #[arg(long, default_value_t = 1)]
    repetitions: usize,

    /// Seed for parameter generation and the pricing streams
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Kernels to run: scalar, vector, all, or a comma-separated list
    #[arg(long, default_value = "all", value_parser = KernelSet::from_names)]
    kernels: KernelSet,

    /// CSV output path (default: benchmark_results_<timestamp>.csv)
    #[arg(long)]
    output: Option<String>,
}

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }

    fn metadata(&self) -> Vec<(&'static str, String)> {
        vec![
            ("OS", self.os.clone()),
            ("CPU", self.cpu_model.clone()),
            ("CPU Cores", self.cpu_cores.to_string()),
            ("Rust Version", self.rust_version.clone()),
            ("RUSTFLAGS", self.rustc_flags.clone()),
            ("Rayon Threads", self.rayon_threads.to_string()),
            (
                "Benchmark Date",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ),
        ]
    }
}

fn print_results(runs: &[KernelRun]) {
    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<8} {:>8} {:>12} {:>12} {:>16} {:>10} {:>10}",
        "Kernel", "Options", "Traj/opt", "Time (ms)", "Traj/sec", "Mean", "MAE"
    );
    println!("{:-<80}", "");
    for run in runs {
        println!(
            "{:<8} {:>8} {:>12} {:>12.2} {:>16.0} {:>10.4} {:>10.4}",
            run.kernel,
            run.options,
            run.trajectories,
            run.time_ms,
            run.throughput_traj_per_sec,
            run.mean_price,
            run.mean_abs_error
        );
    }
    println!("{:=<80}", "");

    if let [scalar, vector] = runs {
        println!(
            "Vector speedup over scalar: {:.2}x",
            scalar.time_ms / vector.time_ms.max(f64::MIN_POSITIVE)
        );
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = HarnessConfig {
        options: args.options,
        trajectories: args.trajectories,
        repetitions: args.repetitions,
        seed: args.seed,
        kernels: args.kernels,
        ..Default::default()
    };

    let system_info = SystemInfo::gather();
    println!("bs-lanes Kernel Benchmark");
    println!("=========================\n");
    for (key, value) in system_info.metadata() {
        println!("  {}: {}", key, value);
    }

    let runs = match run_benchmark(&config) {
        Ok(runs) => runs,
        Err(e) => {
            error!(error = %e, "benchmark failed");
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    print_results(&runs);

    let filename = args.output.unwrap_or_else(|| {
        format!(
            "benchmark_results_{}.csv",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        )
    });
    if let Err(e) = write_runs_csv(&filename, &runs, &system_info.metadata()) {
        error!(error = %e, path = %filename, "could not write CSV");
        return ExitCode::FAILURE;
    }
    info!(path = %filename, "results written");
    println!("\nResults saved to: {}", filename);

    ExitCode::SUCCESS
}
