//! Command-line front end for the polygon clipper.
//!
//! Usage:
//! ```text
//! cargo run --example clip                                   # difference of the default pair
//! cargo run --example clip -- --union
//! cargo run --example clip -- --intersection --subject-poly "0,0;2,0;2,2;0,2"
//! cargo run --example clip -- --reversed-diff --debug
//! ```
//!
//! Polygons are written as `x1,y1;x2,y2;...`. Each result polygon is printed
//! on its own line in the same syntax.

use polyclip::io::{format_polygon, parse_polygon};
use polyclip::math::Point2;
use polyclip::operations::boolean::{boolean_execute, clip_rings, BooleanOp};
use polyclip::topology::Ring;

const DEFAULT_SUBJECT: &str = "1.5,1.3;7.5,2.5;4,3;4.5,6.5";
const DEFAULT_CLIP: &str = "5,4.5;3,5.5;1,4;1.5,3.5;0,2;3,2.3;2.5,1;5.5,0";

struct Options {
    op: BooleanOp,
    subject: Vec<Point2>,
    clip: Vec<Point2>,
    debug: bool,
}

fn default_polygon(text: &str) -> Vec<Point2> {
    parse_polygon(text).unwrap_or_default()
}

/// Parses `value` as a polygon override, keeping `fallback` on failure.
fn polygon_override(flag: &str, value: Option<String>, fallback: Vec<Point2>) -> Vec<Point2> {
    let Some(value) = value else {
        tracing::warn!(flag, "missing polygon after flag, using default");
        return fallback;
    };
    match parse_polygon(&value) {
        Ok(points) => points,
        Err(err) => {
            tracing::warn!(flag, %err, "invalid polygon, using default");
            fallback
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Options {
    let mut options = Options {
        op: BooleanOp::default(),
        subject: default_polygon(DEFAULT_SUBJECT),
        clip: default_polygon(DEFAULT_CLIP),
        debug: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--subject-poly" => {
                let fallback = std::mem::take(&mut options.subject);
                options.subject = polygon_override(&arg, args.next(), fallback);
            }
            "--clip-poly" => {
                let fallback = std::mem::take(&mut options.clip);
                options.clip = polygon_override(&arg, args.next(), fallback);
            }
            "--debug" => options.debug = true,
            flag => match flag.strip_prefix("--").map(str::parse::<BooleanOp>) {
                Some(Ok(op)) => options.op = op,
                _ => tracing::warn!(arg = flag, "ignoring unknown argument"),
            },
        }
    }

    options
}

fn dump_rings(options: &Options) -> polyclip::Result<()> {
    let mut subject = Ring::from_points(&options.subject);
    let mut clip = Ring::from_points(&options.clip);
    clip_rings(&mut subject, &mut clip, options.op)?;
    println!("subject ring:\n{subject}");
    println!("clip ring:\n{clip}");
    Ok(())
}

fn main() -> polyclip::Result<()> {
    // Default: WARN for everything, INFO for polyclip.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyclip=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("clip=info".parse().unwrap_or_default())
        .add_directive("polyclip=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let options = parse_args(std::env::args().skip(1));
    tracing::info!(op = ?options.op, "clipping");

    let results = boolean_execute(&options.subject, &options.clip, options.op)?;
    if options.debug {
        dump_rings(&options)?;
    }

    if results.is_empty() {
        println!("(empty)");
    }
    for polygon in &results {
        println!("{}", format_polygon(polygon));
    }
    Ok(())
}
