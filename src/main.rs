use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use tracing::info;

use fame_balance::cli::{Cli, Commands};
use fame_balance::output::{self, OutputFormat, RowFilter};
use fame_balance::systems::{career_sim, k_tuning};
use fame_balance::BalanceConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = BalanceConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load balance config")?;

    match cli.command {
        Commands::Table { format, output: out_path, k, z, fame } => {
            let records = cfg.sweep();
            let filter = RowFilter { k, z, fame };
            let rows = filter.apply(&records);
            info!(total = records.len(), shown = rows.len(), "table ready");

            let rendered = output::render(&rows, format)?;
            match out_path {
                Some(path) => fs::write(&path, rendered)
                    .with_context(|| format!("Failed to write output file: {}", path.display()))?,
                None if format == OutputFormat::Table => println!("{rendered}"),
                None => print!("{rendered}"),
            }
        }
        Commands::Score { fame, lives, loss } => {
            println!("{:.2}", cfg.score.score(!loss, fame, lives));
        }
        Commands::Tune { target_ratio, lives, tolerance, gain, start_k, max_iters } => {
            if tolerance <= 0.0 {
                bail!("--tolerance must be > 0");
            }
            let env = k_tuning::Env { lives, fame: cfg.grid.fame.values(), rules: cfg.constants };
            let out = k_tuning::balance_k(
                start_k,
                &env,
                k_tuning::Targets { ratio: target_ratio, tolerance },
                k_tuning::Bounds::soft(),
                k_tuning::Gains { k: gain },
                max_iters,
            );
            println!("k          = {:.4}", out.theta);
            println!("mean ratio = {:.4}", out.obs.mean_ratio);
            println!("zero gains = {}", out.obs.zero_gain_rows);
            println!("iterations = {}", out.iters);
            println!("converged  = {}", out.converged);
        }
        Commands::Career { k, lives, start_fame, win_rate, duels, seed, trajectory } => {
            let spec = career_sim::CareerSpec { k, lives, start_fame, win_rate, duels, seed };
            let rep = career_sim::simulate_career(&spec, &cfg.constants, &cfg.score);
            if trajectory {
                println!("{}", output::render_trajectory(&rep));
            }
            println!("duels fought = {} ({} won, {} lost)", rep.duels_fought, rep.wins, rep.losses);
            println!("final fame   = {}", rep.final_fame);
            println!("peak fame    = {}", rep.peak_fame);
            println!("total score  = {:.2}", rep.total_score);
            println!("died         = {}", rep.died);
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default = match verbose {
        0 => "fame_balance=warn",
        1 => "fame_balance=info",
        _ => "fame_balance=debug",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let json_logging = std::env::var("FAME_BALANCE_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
