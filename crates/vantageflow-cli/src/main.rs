mod tui;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use vantageflow_core::{
    build_report, load_streams, DayBuckets, GridRequest, GridWindow, StreakStats, ViewMode,
};

#[derive(Parser)]
#[command(name = "vantageflow")]
#[command(author, version, about = "Task activity dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, default_value = "green")]
    theme: String,

    #[arg(long, help = "Directory of task board exports", default_value = ".")]
    dir: PathBuf,

    #[arg(long, help = "Override the reference date (YYYY-MM-DD)")]
    today: Option<String>,

    #[arg(long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Show activity summary and streaks")]
    Stats {
        #[arg(long, help = "Directory of task board exports", default_value = ".")]
        dir: PathBuf,
        #[arg(long, help = "Override the reference date (YYYY-MM-DD)")]
        today: Option<String>,
        #[arg(long, help = "Output as JSON")]
        json: bool,
        #[arg(long, help = "Show processing time")]
        benchmark: bool,
    },
    #[command(about = "Render a calendar grid window")]
    Grid {
        #[arg(long, help = "Directory of task board exports", default_value = ".")]
        dir: PathBuf,
        #[arg(long, help = "Override the reference date (YYYY-MM-DD)")]
        today: Option<String>,
        #[arg(long, default_value = "month", help = "week, month, quarter, year, or range")]
        mode: String,
        #[arg(
            long,
            default_value = "0",
            allow_hyphen_values = true,
            help = "Page week/month views backward or forward"
        )]
        offset: i32,
        #[arg(long, help = "Range start (YYYY-MM-DD), with --mode range")]
        since: Option<String>,
        #[arg(long, help = "Range end (YYYY-MM-DD), with --mode range")]
        until: Option<String>,
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    #[command(about = "Export the activity report as JSON")]
    Report {
        #[arg(long, help = "Directory of task board exports", default_value = ".")]
        dir: PathBuf,
        #[arg(long, help = "Override the reference date (YYYY-MM-DD)")]
        today: Option<String>,
        #[arg(long, help = "Write to file instead of stdout")]
        output: Option<String>,
    },
    #[command(about = "Launch the interactive dashboard")]
    Tui {
        #[arg(long, help = "Directory of task board exports", default_value = ".")]
        dir: PathBuf,
        #[arg(long, help = "Override the reference date (YYYY-MM-DD)")]
        today: Option<String>,
        #[arg(short, long, default_value = "green")]
        theme: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    match cli.command {
        Some(Commands::Stats {
            dir,
            today,
            json,
            benchmark,
        }) => run_stats(&dir, today, json, benchmark),
        Some(Commands::Grid {
            dir,
            today,
            mode,
            offset,
            since,
            until,
            json,
        }) => run_grid(&dir, today, &mode, offset, since, until, json),
        Some(Commands::Report { dir, today, output }) => run_report(&dir, today, output),
        Some(Commands::Tui { dir, today, theme }) => {
            let today = resolve_today(today)?;
            tui::run(&theme, &dir, today)
        }
        None => {
            let today = resolve_today(cli.today)?;
            tui::run(&cli.theme, &cli.dir, today)
        }
    }
}

fn resolve_today(flag: Option<String>) -> Result<NaiveDate> {
    match flag {
        Some(s) => s
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid --today value '{}', expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}

fn load_buckets(dir: &std::path::Path, today: NaiveDate) -> DayBuckets {
    DayBuckets::collect(load_streams(dir, today))
}

fn run_stats(
    dir: &std::path::Path,
    today: Option<String>,
    json: bool,
    benchmark: bool,
) -> Result<()> {
    let start = std::time::Instant::now();
    let today = resolve_today(today)?;
    let buckets = load_buckets(dir, today);
    let report = build_report(&buckets, today);
    let processing_time_ms = start.elapsed().as_millis();

    if json {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct StatsJson {
            total: u64,
            current_streak: u32,
            longest_streak: u32,
            active_days: u32,
            max_in_single_day: u32,
            open_due: u64,
            open_overdue: u64,
        }

        let output = StatsJson {
            total: report.stats.total,
            current_streak: report.stats.current_streak,
            longest_streak: report.stats.longest_streak,
            active_days: report.active_days,
            max_in_single_day: report.max_in_single_day,
            open_due: report.open_due,
            open_overdue: report.open_overdue,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        use comfy_table::{ContentArrangement, Table};

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Metric", "Value"]);
        table.add_row(vec!["Completed tasks".to_string(), report.stats.total.to_string()]);
        table.add_row(vec!["Active days".to_string(), report.active_days.to_string()]);
        table.add_row(vec![
            "Current streak".to_string(),
            format!("{} days", report.stats.current_streak),
        ]);
        table.add_row(vec![
            "Longest streak".to_string(),
            format!("{} days", report.stats.longest_streak),
        ]);
        table.add_row(vec![
            "Busiest day".to_string(),
            report.max_in_single_day.to_string(),
        ]);
        table.add_row(vec!["Open (due later)".to_string(), report.open_due.to_string()]);
        table.add_row(vec!["Overdue".to_string(), report.open_overdue.to_string()]);

        println!("{table}");

        if benchmark {
            println!(
                "{}",
                format!("  Processing time: {}ms", processing_time_ms).bright_black()
            );
        }
    }

    Ok(())
}

fn run_grid(
    dir: &std::path::Path,
    today: Option<String>,
    mode: &str,
    offset: i32,
    since: Option<String>,
    until: Option<String>,
    json: bool,
) -> Result<()> {
    let today = resolve_today(today)?;
    let mode: ViewMode = mode
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid --mode '{}'", mode))?;

    let request = if mode == ViewMode::Range {
        let since: NaiveDate = since
            .ok_or_else(|| anyhow::anyhow!("--mode range requires --since"))?
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid --since value, expected YYYY-MM-DD"))?;
        let until: NaiveDate = until
            .ok_or_else(|| anyhow::anyhow!("--mode range requires --until"))?
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid --until value, expected YYYY-MM-DD"))?;
        GridRequest::range(since, until)
    } else {
        GridRequest::with_offset(mode, offset)
    };

    let buckets = load_buckets(dir, today);
    let grid = GridWindow::build(request, today, &buckets);

    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    print_grid(&grid, today, &buckets);
    Ok(())
}

fn print_grid(grid: &GridWindow, today: NaiveDate, buckets: &DayBuckets) {
    if grid.is_empty() {
        println!("{}", "  empty window".bright_black());
        return;
    }

    println!(
        "\n  {} {} – {}\n",
        grid.mode.as_str().bold(),
        grid.start.format("%Y-%m-%d"),
        grid.end.format("%Y-%m-%d")
    );
    println!("  {}", "Su Mo Tu We Th Fr Sa".bright_black());

    for week in &grid.weeks {
        let mut line = String::from("  ");
        for cell in week {
            let text = cell.date.format("%e").to_string();
            let painted = if !cell.in_range {
                text.bright_black().dimmed().to_string()
            } else if cell.overdue > 0 {
                // Overdue wins visually over same-day activity.
                text.red().bold().to_string()
            } else if cell.is_future && cell.due > 0 {
                text.yellow().to_string()
            } else if cell.activity_intensity >= 3 {
                text.bright_green().bold().to_string()
            } else if cell.activity_intensity >= 1 {
                text.green().to_string()
            } else if cell.is_today {
                text.white().bold().underline().to_string()
            } else {
                text.normal().to_string()
            };
            line.push_str(&painted);
            line.push(' ');
        }
        println!("{line}");
    }

    let stats = StreakStats::compute(&buckets.activity, today);
    println!(
        "\n  {} {}",
        "streak:".bright_black(),
        format!(
            "{} current / {} longest",
            stats.current_streak, stats.longest_streak
        )
        .cyan()
    );
    println!(
        "  {} {} {}  {} {}\n",
        "legend:".bright_black(),
        "overdue".red(),
        "due".yellow(),
        "done".green(),
        "(brighter = busier)".bright_black()
    );
}

fn run_report(dir: &std::path::Path, today: Option<String>, output: Option<String>) -> Result<()> {
    let today = resolve_today(today)?;
    let buckets = load_buckets(dir, today);
    let report = build_report(&buckets, today);
    let json = serde_json::to_string_pretty(&report)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("{}", format!("  ✓ Report written to {}", path).green());
        }
        None => println!("{json}"),
    }

    Ok(())
}
