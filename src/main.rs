mod config;
mod labeler;
mod model;
mod pipeline;
mod report;
mod storage;
mod utils;

use config::{load_config, AppConfig};
use labeler::ThumbnailLabeler;
use model::PipelineError;
use pipeline::LabelPipeline;
use tracing::{error, info};

fn main() {
    // Initialize logging; stdout is reserved for the report
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Load configuration from file
    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    match report::opening(&config.input_path) {
        Ok(line) => println!("{}", line),
        Err(line) => {
            println!("{}", line);
            return;
        }
    }

    let pipeline = LabelPipeline::new(ThumbnailLabeler::new());
    match pipeline.run(&config.input_path, &config.output_path) {
        Ok(summary) => {
            info!(
                "Skipped rows: {} incomplete, {} not knives, {} duplicates, {} unreadable",
                summary.skipped_incomplete,
                summary.skipped_not_knife,
                summary.skipped_duplicate,
                summary.skipped_unreadable
            );
            println!(
                "{}",
                report::render(&summary, &config.output_path, config.sample_size)
            );
        }
        Err(PipelineError::InputNotFound(path)) => {
            println!("{}", report::missing_input(&path));
        }
        Err(e) => {
            error!("Labeling failed: {}", e);
        }
    }
}
