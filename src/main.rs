use std::{fmt::Write, path::PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use folksonomy::{
    CloudOptions, Correlation, HeatMapOptions, IndexOptions, Order, Scaling,
    Widget,
};

mod io_pipe;
use io_pipe::IoPipe;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Count tags in an outline of items with `:tags` attributes.
    ///
    /// Writes `tag count` lines, most used tags first.
    Tally(IoArgs),

    /// Render a list of tag links with use counts.
    Index {
        #[arg(long, value_enum, default_value_t)]
        order: Order,

        #[command(flatten)]
        widget: WidgetArgs,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Render a tag cloud with weight classes.
    Cloud {
        #[arg(long, value_enum, default_value_t)]
        order: Order,

        #[arg(long, value_enum, default_value_t)]
        scaling: Scaling,

        /// Number of weight classes.
        #[arg(short, long, default_value = "6")]
        gradations: usize,

        #[command(flatten)]
        widget: WidgetArgs,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Render a heat map, most used tags first.
    HeatMap {
        #[arg(long, value_enum, default_value_t)]
        correlation: Correlation,

        /// Don't show counts next to the tags.
        #[arg(long)]
        hide_count: bool,

        #[arg(long, default_value = "1.0")]
        saturation: f64,

        #[arg(long, default_value = "0.5")]
        luminance: f64,

        /// Keep every item at full width.
        #[arg(long)]
        no_taper: bool,

        /// Width percentage of the narrowest item.
        #[arg(long, default_value = "50")]
        min_width: u32,

        #[command(flatten)]
        widget: WidgetArgs,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Render a parallel tag cloud (not supported).
    ParallelCloud {
        #[command(flatten)]
        widget: WidgetArgs,

        #[command(flatten)]
        io: IoArgs,
    },
}

/// Options shared by the rendering subcommands.
#[derive(Debug, Args, Clone)]
struct WidgetArgs {
    /// URL for tag links, `{tag}` is replaced with the tag.
    #[arg(long, default_value = "/tags/{tag}")]
    url: String,

    /// Only show this many of the most used tags.
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Id attribute of the widget's list element.
    #[arg(long)]
    id: Option<String>,

    /// Input is CSV with a `tag,count` header instead of IDM.
    #[arg(long)]
    csv: bool,
}

use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Tally(args) => {
            let io = IoPipe::try_from(args)?;
            let counts = folksonomy::tally(&io.read_outline()?)?;
            log::info!("Counted {} distinct tags", counts.len());

            let mut out = String::new();
            for t in counts.iter() {
                writeln!(out, "{} {}", t.tag, t.count)?;
            }
            io.write_text(&out)
        }

        Index { order, widget, io } => {
            let mut options = IndexOptions {
                order,
                top_n: widget.top,
                ..Default::default()
            };
            if let Some(id) = &widget.id {
                options.control_id = id.clone();
            }
            run(Widget::Index(options), widget, io)
        }

        Cloud {
            order,
            scaling,
            gradations,
            widget,
            io,
        } => {
            let mut options = CloudOptions {
                order,
                scaling,
                gradations,
                top_n: widget.top,
                ..Default::default()
            };
            if let Some(id) = &widget.id {
                options.control_id = id.clone();
            }
            run(Widget::Cloud(options), widget, io)
        }

        HeatMap {
            correlation,
            hide_count,
            saturation,
            luminance,
            no_taper,
            min_width,
            widget,
            io,
        } => {
            let mut options = HeatMapOptions {
                correlation,
                show_count: !hide_count,
                top_n: widget.top,
                saturation,
                luminance,
                taper_width: !no_taper,
                min_width_percentage: min_width,
                ..Default::default()
            };
            if let Some(id) = &widget.id {
                options.control_id = id.clone();
            }
            run(Widget::HeatMap(options), widget, io)
        }

        ParallelCloud { widget, io } => run(Widget::ParallelCloud, widget, io),
    }
}

fn run(widget: Widget, args: WidgetArgs, io: IoArgs) -> Result<()> {
    // Fail before touching the input, stdin could block indefinitely.
    if widget == Widget::ParallelCloud {
        widget.render(&[], |tag| tag.to_string())?;
    }

    let io = IoPipe::try_from(io)?;
    let counts = io.read_counts(args.csv)?;
    log::info!("Rendering {} tags", counts.len());

    let html = widget.render(&counts, |tag| args.url.replace("{tag}", tag))?;
    io.write_text(html)
}

/// Standard input/output specification for subcommands.
///
/// By default the subcommand reads from stdin and writes to stdout, this
/// allows pointing to files instead.
#[derive(Debug, Args, Clone)]
pub struct IoArgs {
    /// Input file path, defaults to stdin.
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file path, defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}
