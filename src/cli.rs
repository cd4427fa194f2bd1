//! Command-line interface

use clap::{Parser, Subcommand, ValueEnum};
use maskvec_cv::DrawOrder;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "maskvec", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Turn every generated mask into edges, colored segments and WKT polygons
    Markup {
        /// Directory of exported mask rasters (`<stem>_mask_<i>.png`)
        masks: PathBuf,
        /// Directory of source JPEG images
        dir: PathBuf,
        /// Contour stroke width in pixels
        edges_width: u32,
        /// Seed for segment colors
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = OrderArg::AreaDesc)]
        order: OrderArg,
        /// Reprocess images whose products already exist
        #[arg(long)]
        force: bool,
    },
    /// Pick the best candidate mask per image by IoU against its reference
    Locate {
        /// Directory of exported candidate rasters (`<stem>_cand_<i>.png`)
        masks: PathBuf,
        /// Directory of source JPEG images with .bbox, .points and .object files
        dir: PathBuf,
        /// Opacity of the chosen mask on the overlay
        #[arg(long, default_value_t = 0.5)]
        alpha: f32,
        /// Write per-image scores and the mean as JSON
        #[arg(long)]
        summary: Option<PathBuf>,
    },
    /// Mean best IoU of a predicted WKT layer against a reference layer
    Score {
        predicted: PathBuf,
        reference: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    AreaDesc,
    AreaAsc,
    AsGiven,
}

impl From<OrderArg> for DrawOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::AreaDesc => DrawOrder::AreaDescending,
            OrderArg::AreaAsc => DrawOrder::AreaAscending,
            OrderArg::AsGiven => DrawOrder::AsGiven,
        }
    }
}
