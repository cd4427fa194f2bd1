use anyhow::{Result, ensure};
use clap::Parser;
use maskvec_cv::evaluation::LayerScorer;
use maskvec_cv::io::read_polygons;
use maskvec_cv::{LocateConfig, LocatePipeline, MarkupConfig, MarkupPipeline, MaskDirectory};

mod cli;

use cli::{Cli, Command};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Markup {
            masks,
            dir,
            edges_width,
            seed,
            order,
            force,
        } => {
            let generator = MaskDirectory::open(&masks)?;
            let config = MarkupConfig {
                seed,
                draw_order: order.into(),
                skip_existing: !force,
                ..MarkupConfig::with_edges_width(edges_width)
            };

            let report = MarkupPipeline::new(config, generator).run(&dir)?;
            println!(
                "processed {}, skipped {}, failed {}",
                report.processed, report.skipped, report.failed
            );
        }
        Command::Locate {
            masks,
            dir,
            alpha,
            summary,
        } => {
            ensure!((0.0..=1.0).contains(&alpha), "alpha must be within [0, 1], got {}", alpha);
            let predictor = MaskDirectory::open(&masks)?;
            let mut config = LocateConfig::default();
            config.overlay.alpha = alpha;

            let result = LocatePipeline::new(config, predictor).run(&dir)?;
            if let Some(path) = summary {
                result.export_json(&path)?;
            }
            println!("mean iou = {}", result.mean_iou);
        }
        Command::Score {
            predicted,
            reference,
        } => {
            let scorer = LayerScorer::new(read_polygons(&reference)?);
            let score = scorer.score(&read_polygons(&predicted)?);
            println!("objects {} IoU = {}%", score.objects, score.mean_iou * 100.0);
        }
    }

    Ok(())
}
