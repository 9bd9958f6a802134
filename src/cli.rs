// ============================================================================
// CLI: `icon` and `split` subcommands
// ============================================================================
//
// Usage examples:
//   appicon-tools icon                                  (AppIcon*.png in the cwd)
//   appicon-tools icon --output-dir assets/ --sizes 16,32,1024
//   appicon-tools split                                 (stock VoiceInput layout)
//   appicon-tools split --source ./SettingsView.swift --dry-run
//   appicon-tools split --plan plan.json
//
// With no flags each subcommand reproduces the stock constants exactly.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};

use crate::icon::{self, DEFAULT_BASE_NAME, DEFAULT_SIZES, IconConfig};
use crate::logger;
use crate::split::{self, SplitMode, SplitPlan};
use crate::{log_err, log_info};

/// Developer utilities for the VoiceInput app: icon rendering and view splitting.
#[derive(Parser, Debug)]
#[command(name = "appicon-tools", version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Echo the session log to stderr and print timing.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render AppIcon.png plus downscaled copies.
    Icon(IconArgs),
    /// Split SettingsView.swift into per-section view files.
    Split(SplitArgs),
}

#[derive(Args, Debug)]
pub struct IconArgs {
    /// Directory the PNGs are written into.
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// File name stem for every output.
    #[arg(long, default_value = DEFAULT_BASE_NAME, value_name = "NAME")]
    pub base_name: String,

    /// Downscaled sizes to export, comma separated.
    #[arg(long, value_delimiter = ',', value_name = "PX")]
    pub sizes: Option<Vec<u32>>,

    /// Overlay the diagonal gloss sheen before saving.
    #[arg(long)]
    pub gloss: bool,
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Source file to split (overrides the plan's source).
    #[arg(short, long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// JSON split plan replacing the built-in ranges.
    #[arg(long, value_name = "PLAN.json")]
    pub plan: Option<PathBuf>,

    /// Report what would be written without touching any file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Run one subcommand and return an OS exit code.
pub fn run(args: CliArgs) -> ExitCode {
    let name = match &args.command {
        Command::Icon(_) => "icon",
        Command::Split(_) => "split",
    };
    logger::set_echo(args.verbose);
    logger::init(name);

    let start = Instant::now();
    let result = match args.command {
        Command::Icon(icon_args) => run_icon(icon_args),
        Command::Split(split_args) => run_split(split_args),
    };

    if args.verbose {
        eprintln!("{} finished in {:.2}s", name, start.elapsed().as_secs_f32());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            log_err!("{}", msg);
            eprintln!("error: {}", msg);
            ExitCode::FAILURE
        }
    }
}

fn run_icon(args: IconArgs) -> Result<(), String> {
    let config = IconConfig {
        output_dir: args.output_dir,
        base_name: args.base_name,
        sizes: args.sizes.unwrap_or_else(|| DEFAULT_SIZES.to_vec()),
        gloss: args.gloss,
        ..IconConfig::default()
    };
    let master = config.master_path();
    log_info!("rendering {}px icon into {}", config.canvas_size, config.output_dir.display());

    icon::generate(&config, |path| {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if path == master {
            println!("{} created successfully!", file);
        } else {
            println!("{} created!", file);
        }
    })
    .map(|_| ())
    .map_err(|e| e.to_string())
}

fn run_split(args: SplitArgs) -> Result<(), String> {
    let mut plan = match &args.plan {
        Some(path) => SplitPlan::from_json_file(path).map_err(|e| e.to_string())?,
        None => SplitPlan::default(),
    };
    if let Some(source) = args.source {
        plan.source = source;
    }

    let mode = if args.dry_run { SplitMode::DryRun } else { SplitMode::Write };
    let report = split::run(&plan, mode).map_err(|e| e.to_string())?;

    if args.dry_run {
        println!(
            "{}: {} lines (dry run, nothing written)",
            plan.source.display(),
            report.source_lines
        );
        for view in &report.views {
            println!("  would write {} ({} lines)", view.path.display(), view.body_lines);
        }
        println!(
            "  would rewrite {} to {} lines",
            plan.source.display(),
            report.remaining_lines
        );
    } else {
        println!("Split completed successfully");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_defaults_mirror_the_stock_pipeline() {
        let args = CliArgs::try_parse_from(["appicon-tools", "icon"]).unwrap();
        match args.command {
            Command::Icon(a) => {
                assert_eq!(a.output_dir, PathBuf::from("."));
                assert_eq!(a.base_name, "AppIcon");
                assert!(a.sizes.is_none());
                assert!(!a.gloss);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn sizes_parse_comma_separated() {
        let args = CliArgs::try_parse_from(["appicon-tools", "icon", "--sizes", "16,48"]).unwrap();
        match args.command {
            Command::Icon(a) => assert_eq!(a.sizes, Some(vec![16, 48])),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn split_flags_parse() {
        let args = CliArgs::try_parse_from([
            "appicon-tools",
            "split",
            "--source",
            "a.swift",
            "--dry-run",
            "-v",
        ])
        .unwrap();
        assert!(args.verbose);
        match args.command {
            Command::Split(a) => {
                assert_eq!(a.source, Some(PathBuf::from("a.swift")));
                assert!(a.dry_run);
                assert!(a.plan.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(CliArgs::try_parse_from(["appicon-tools"]).is_err());
    }
}
