//! Command-line interface for the sortscope utility
//!
//! Sorts arrays with a chosen algorithm, prints the totals, and animates the
//! recorded trace as a terminal bar chart.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crossterm::tty::IsTty;
use crossterm::{cursor, queue, terminal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info, span, Level};

use crate::colorizer::colorize_frame;
use sortscope::core::logging::init_logging;
use sortscope::playback::{PlaybackConfig, PlaybackDriver, Snapshot};
use sortscope::render::{format_value, ChartConfig, ChartRenderer, Renderer};
use sortscope::{parse_input, record, Algorithm, CharacterSet, SortOutcome};

/// Sortscope - Watch classic sorting algorithms work step by step
#[derive(Parser)]
#[command(name = "sortscope")]
#[command(about = "Record sorting algorithms and animate them as terminal bar charts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error); defaults to
    /// SORTSCOPE_LOG_LEVEL, then RUST_LOG, then warn
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json); defaults to SORTSCOPE_LOG_FORMAT,
    /// then compact
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Where the array to sort comes from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ArraySource {
    /// Input file containing the array (use - for stdin)
    #[arg(short, long, conflicts_with_all = ["values", "random"])]
    pub input: Option<PathBuf>,

    /// Array given inline, e.g. "64, 34, 25"
    #[arg(long, allow_hyphen_values = true, conflicts_with = "random")]
    pub values: Option<String>,

    /// Generate 5 to 12 random values between 1 and 100
    #[arg(long)]
    pub random: bool,

    /// Seed for --random, for repeatable arrays
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort an array and print the result with comparison and swap totals
    Sort {
        /// Sorting algorithm (bubble|selection|insertion|quick)
        #[arg(short, long, default_value = "bubble")]
        algorithm: Algorithm,

        #[command(flatten)]
        source: ArraySource,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the full outcome, including every step, as JSON
        #[arg(long)]
        json: bool,
    },

    /// Animate a sort as a bar chart in the terminal
    Play {
        /// Sorting algorithm (bubble|selection|insertion|quick)
        #[arg(short, long, default_value = "bubble")]
        algorithm: Algorithm,

        #[command(flatten)]
        source: ArraySource,

        /// Delay between steps in milliseconds; defaults to
        /// SORTSCOPE_DELAY_MS, then 300
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Rows available to the tallest bar
        #[arg(long, default_value_t = 10)]
        height: usize,

        /// Character set to use for the chart
        #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
        style: StyleChoice,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Show supported algorithms
    Algorithms {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check that the input is a valid array of finite numbers
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long, conflicts_with = "values")]
        input: Option<PathBuf>,

        /// Array given inline
        #[arg(long, allow_hyphen_values = true)]
        values: Option<String>,
    },
}

/// Supported chart character sets
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StyleChoice {
    Ascii,
    Unicode,
}

impl From<StyleChoice> for CharacterSet {
    fn from(value: StyleChoice) -> Self {
        match value {
            StyleChoice::Ascii => CharacterSet::Ascii,
            StyleChoice::Unicode => CharacterSet::Unicode,
        }
    }
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Main CLI application
pub struct SortscopeApp {
    chart: ChartConfig,
}

impl SortscopeApp {
    /// Create a new application instance with the default chart layout
    pub fn new() -> Self {
        Self::with_chart_config(ChartConfig::default())
    }

    /// Create a new application instance with a chart layout
    pub fn with_chart_config(chart: ChartConfig) -> Self {
        Self { chart }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        let level = cli.log_level.map(|level| level.as_str());
        let format = cli.log_format.map(|format| format.as_str());
        if let Err(e) = init_logging(level, format) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Sortscope v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Sort {
                algorithm,
                source,
                output,
                json,
            } => self.sort_command(algorithm, source, output, json, cli.verbose),
            Commands::Play {
                algorithm,
                source,
                delay_ms,
                height,
                style,
                color,
            } => {
                let config = delay_ms
                    .map(PlaybackConfig::from_millis)
                    .unwrap_or_else(PlaybackConfig::from_env);
                let chart = ChartConfig {
                    height,
                    style: style.into(),
                    ..self.chart
                };
                self.play_command(algorithm, source, config, chart, color, cli.verbose)
            }
            Commands::Algorithms { json } => self.algorithms_command(json, cli.verbose),
            Commands::Validate { input, values } => {
                self.validate_command(input, values, cli.verbose)
            }
        }
    }

    /// Handle the sort command
    fn sort_command(
        &self,
        algorithm: Algorithm,
        source: ArraySource,
        output: Option<PathBuf>,
        json: bool,
        verbose: bool,
    ) -> Result<()> {
        let command_span = span!(Level::INFO, "sort_command", %algorithm);
        let _enter = command_span.enter();

        let values = self.load_values(source, verbose)?;
        let outcome = record(algorithm, &values)?;
        info!(
            comparisons = outcome.total_comparisons,
            swaps = outcome.total_swaps,
            "Sorted {} values",
            values.len()
        );

        let rendered = if json {
            serde_json::to_string_pretty(&outcome)?
        } else {
            format_outcome(&outcome)
        };
        self.write_output(output, &rendered)
    }

    /// Handle the play command
    fn play_command(
        &self,
        algorithm: Algorithm,
        source: ArraySource,
        config: PlaybackConfig,
        chart: ChartConfig,
        color: ColorChoice,
        verbose: bool,
    ) -> Result<()> {
        let values = self.load_values(source, verbose)?;
        if verbose {
            eprintln!(
                "Playing {} on {} values, {}ms per step",
                algorithm,
                values.len(),
                config.delay.as_millis()
            );
        }

        let renderer = ChartRenderer::with_config(chart);
        let colorize = self.should_colorize(color);
        let interactive = io::stdout().is_tty();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .context("Failed to start playback runtime")?;

        let mut stdout = io::stdout().lock();
        let mut screen = FrameWriter::new(&mut stdout, interactive);
        runtime.block_on(async {
            let mut driver = PlaybackDriver::with_config(config);
            let mut stream = driver.start_sort(algorithm, &values)?;

            screen.draw(&self.render_frame(&renderer, &driver.snapshot(), colorize)?)?;
            while let Some(snapshot) = stream.recv().await {
                debug!(step = ?snapshot.step_index, "Drawing frame");
                screen.draw(&self.render_frame(&renderer, &snapshot, colorize)?)?;
            }
            info!("Playback finished");
            Ok::<(), anyhow::Error>(())
        })
    }

    fn render_frame(
        &self,
        renderer: &ChartRenderer,
        snapshot: &Snapshot,
        colorize: bool,
    ) -> Result<String> {
        let frame = renderer.render(snapshot)?;
        Ok(if colorize {
            colorize_frame(&frame)
        } else {
            frame.to_string()
        })
    }

    /// Determine if we should colorize the output based on color choice and stdout
    fn should_colorize(&self, color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                io::stdout().is_tty()
            }
        }
    }

    /// Handle the algorithms command
    fn algorithms_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported algorithms");
        }
        println!("{}", format_algorithms(json)?);
        Ok(())
    }

    /// Handle the validate command
    fn validate_command(
        &self,
        input: Option<PathBuf>,
        values: Option<String>,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_source(input, values)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        match parse_input(&content) {
            Ok(values) => {
                println!("✓ Valid array of {} values", values.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ {}", e);
                Err(e.into())
            }
        }
    }

    /// Resolve an array source to validated values
    pub fn load_values(&self, source: ArraySource, verbose: bool) -> Result<Vec<f64>> {
        if source.random {
            let values = match source.seed {
                Some(seed) => random_values(&mut StdRng::seed_from_u64(seed)),
                None => random_values(&mut rand::thread_rng()),
            };
            debug!(count = values.len(), seed = ?source.seed, "Generated random array");
            return Ok(values);
        }

        let content = self.read_source(source.input, source.values)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }
        Ok(parse_input(&content)?)
    }

    /// Inline values take precedence over file or stdin input
    pub fn read_source(&self, input: Option<PathBuf>, values: Option<String>) -> Result<String> {
        match values {
            Some(values) => Ok(values),
            None => self.read_input(input),
        }
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout();
                if content.is_empty() || content.ends_with('\n') {
                    write!(stdout, "{}", content)?;
                } else {
                    writeln!(stdout, "{}", content)?;
                }
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

impl Default for SortscopeApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Random whole numbers for quick experiments: 5 to 12 values in `1..=100`
pub fn random_values<R: Rng>(rng: &mut R) -> Vec<f64> {
    let len = rng.gen_range(5..=12);
    (0..len).map(|_| f64::from(rng.gen_range(1..=100u32))).collect()
}

/// Human-readable summary of a sort
pub fn format_outcome(outcome: &SortOutcome) -> String {
    let sorted: Vec<String> = outcome.sorted.iter().map(|v| format_value(*v)).collect();
    format!(
        "algorithm:   {}\nsorted:      [{}]\ncomparisons: {}\nswaps:       {}\nsteps:       {}",
        outcome.trace.algorithm,
        sorted.join(", "),
        outcome.total_comparisons,
        outcome.total_swaps,
        outcome.trace.len()
    )
}

/// Supported algorithms, as a table or JSON
pub fn format_algorithms(json: bool) -> Result<String> {
    if json {
        let entries: Vec<serde_json::Value> = Algorithm::ALL
            .iter()
            .map(|algorithm| {
                serde_json::json!({
                    "name": algorithm.to_string(),
                    "display_name": algorithm.display_name(),
                    "complexity": algorithm.complexity(),
                    "description": algorithm.description(),
                })
            })
            .collect();
        let listing = serde_json::json!({
            "algorithms": entries,
            "total": Algorithm::ALL.len(),
        });
        return Ok(serde_json::to_string_pretty(&listing)?);
    }

    let mut text = String::from("Supported algorithms:\n");
    for algorithm in Algorithm::ALL {
        text.push_str(&format!(
            "  {:<10} {:<15} {:<11} - {}\n",
            algorithm.to_string(),
            algorithm.display_name(),
            algorithm.complexity(),
            algorithm.description()
        ));
    }
    text.push_str(&format!(
        "\nTotal: {} algorithms supported",
        Algorithm::ALL.len()
    ));
    Ok(text)
}

/// Draws successive frames, redrawing in place on a terminal
struct FrameWriter<W: Write> {
    out: W,
    interactive: bool,
    previous_lines: u16,
}

impl<W: Write> FrameWriter<W> {
    fn new(out: W, interactive: bool) -> Self {
        Self {
            out,
            interactive,
            previous_lines: 0,
        }
    }

    fn draw(&mut self, frame: &str) -> Result<()> {
        if self.interactive && self.previous_lines > 0 {
            queue!(
                self.out,
                cursor::MoveUp(self.previous_lines),
                cursor::MoveToColumn(0),
                terminal::Clear(terminal::ClearType::FromCursorDown)
            )?;
        } else if !self.interactive && self.previous_lines > 0 {
            writeln!(self.out)?;
        }

        writeln!(self.out, "{}", frame)?;
        self.out.flush()?;
        self.previous_lines = u16::try_from(frame.lines().count()).unwrap_or(u16::MAX);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing_sort_command() {
        let args = vec![
            "sortscope",
            "sort",
            "--algorithm",
            "quick",
            "--input",
            "values.txt",
            "--output",
            "sorted.txt",
            "--json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Sort {
                algorithm,
                source,
                output,
                json,
            } => {
                assert_eq!(algorithm, Algorithm::Quick);
                assert_eq!(source.input.unwrap().to_string_lossy(), "values.txt");
                assert!(source.values.is_none());
                assert!(!source.random);
                assert_eq!(output.unwrap().to_string_lossy(), "sorted.txt");
                assert!(json);
            }
            _ => panic!("Expected Sort command"),
        }
    }

    #[test]
    fn test_cli_parsing_default_algorithm() {
        let cli = Cli::try_parse_from(vec!["sortscope", "sort", "--values", "3 1 2"]).unwrap();
        match cli.command {
            Commands::Sort {
                algorithm, source, ..
            } => {
                assert_eq!(algorithm, Algorithm::Bubble);
                assert_eq!(source.values.as_deref(), Some("3 1 2"));
            }
            _ => panic!("Expected Sort command"),
        }
    }

    #[test]
    fn test_cli_parsing_rejects_unknown_algorithm() {
        let result = Cli::try_parse_from(vec!["sortscope", "sort", "-a", "bogo"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_input_conflicts_with_values() {
        let result = Cli::try_parse_from(vec![
            "sortscope", "sort", "--input", "a.txt", "--values", "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_random_source() {
        let cli = Cli::try_parse_from(vec!["sortscope", "play", "--random", "--seed", "7"]).unwrap();
        match cli.command {
            Commands::Play { source, .. } => {
                assert!(source.random);
                assert_eq!(source.seed, Some(7));
            }
            _ => panic!("Expected Play command"),
        }

        assert!(Cli::try_parse_from(vec!["sortscope", "sort", "--seed", "7"]).is_err());
        assert!(
            Cli::try_parse_from(vec!["sortscope", "sort", "--random", "--values", "1"]).is_err()
        );
    }

    #[test]
    fn test_cli_parsing_negative_values() {
        let cli = Cli::try_parse_from(vec!["sortscope", "validate", "--values", "-3, 2"]).unwrap();
        match cli.command {
            Commands::Validate { values, .. } => {
                assert_eq!(values.as_deref(), Some("-3, 2"));
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parsing_play_command() {
        let args = vec![
            "sortscope",
            "play",
            "--algorithm",
            "insertion",
            "--values",
            "5,4,3",
            "--delay-ms",
            "50",
            "--style",
            "ascii",
            "--color",
            "never",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Play {
                algorithm,
                source,
                delay_ms,
                height,
                style,
                color,
                ..
            } => {
                assert_eq!(algorithm, Algorithm::Insertion);
                assert_eq!(source.values.as_deref(), Some("5,4,3"));
                assert_eq!(delay_ms, Some(50));
                assert_eq!(height, 10); // default
                assert_eq!(style, StyleChoice::Ascii);
                assert_eq!(color, ColorChoice::Never);
            }
            _ => panic!("Expected Play command"),
        }
    }

    #[test]
    fn test_cli_parsing_play_defaults() {
        let cli = Cli::try_parse_from(vec!["sortscope", "play", "--values", "1"]).unwrap();
        match cli.command {
            Commands::Play {
                delay_ms,
                style,
                color,
                ..
            } => {
                assert!(delay_ms.is_none());
                assert_eq!(style, StyleChoice::Unicode);
                assert_eq!(color, ColorChoice::Auto);
            }
            _ => panic!("Expected Play command"),
        }
    }

    #[test]
    fn test_cli_parsing_algorithms_command() {
        let cli = Cli::try_parse_from(vec!["sortscope", "algorithms", "--json"]).unwrap();
        match cli.command {
            Commands::Algorithms { json } => assert!(json),
            _ => panic!("Expected Algorithms command"),
        }
    }

    #[test]
    fn test_cli_parsing_validate_command() {
        let cli = Cli::try_parse_from(vec!["sortscope", "validate"]).unwrap();
        match cli.command {
            Commands::Validate { input, values } => {
                assert!(input.is_none());
                assert!(values.is_none());
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let args = vec![
            "sortscope",
            "--verbose",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "algorithms",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn test_style_choice_maps_to_character_set() {
        assert_eq!(CharacterSet::from(StyleChoice::Ascii), CharacterSet::Ascii);
        assert_eq!(CharacterSet::from(StyleChoice::Unicode), CharacterSet::Unicode);
    }

    #[test]
    fn test_sortscope_app_default() {
        let app = SortscopeApp::default();
        assert_eq!(app.chart, ChartConfig::default());
    }

    #[test]
    fn test_read_input_from_file() {
        let app = SortscopeApp::new();
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("values.txt");
        fs::write(&file_path, "64 34 25\n12 22 11 90\n").unwrap();

        let content = app.read_input(Some(file_path)).unwrap();
        assert_eq!(parse_input(&content).unwrap().len(), 7);
    }

    #[test]
    fn test_read_input_missing_file() {
        let app = SortscopeApp::new();
        let dir = tempdir().unwrap();
        let result = app.read_input(Some(dir.path().join("missing.txt")));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Failed to read input file"));
    }

    #[test]
    fn test_read_source_prefers_values() {
        let app = SortscopeApp::new();
        let content = app
            .read_source(Some(PathBuf::from("never-read.txt")), Some("1, 2".to_string()))
            .unwrap();
        assert_eq!(content, "1, 2");
    }

    #[test]
    fn test_write_output_to_file() {
        let app = SortscopeApp::new();
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("output.txt");

        app.write_output(Some(file_path.clone()), "sorted").unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "sorted");
    }

    #[test]
    fn test_sort_command_writes_json_file() {
        let app = SortscopeApp::new();
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("outcome.json");

        let source = ArraySource {
            values: Some("5 4 3 2 1".to_string()),
            ..ArraySource::default()
        };
        app.sort_command(
            Algorithm::Selection,
            source,
            Some(file_path.clone()),
            true,
            false,
        )
        .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&file_path).unwrap()).unwrap();
        assert_eq!(written["total_comparisons"], 10);
        assert_eq!(written["sorted"], serde_json::json!([1.0, 2.0, 3.0, 4.0, 5.0]));
        assert_eq!(written["trace"]["algorithm"], "selection");
    }

    #[test]
    fn test_sort_command_rejects_invalid_input() {
        let app = SortscopeApp::new();
        let source = ArraySource {
            values: Some("1, two, 3".to_string()),
            ..ArraySource::default()
        };
        let result = app.sort_command(
            Algorithm::Bubble,
            source,
            None,
            false,
            false,
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("two"));
    }

    #[test]
    fn test_random_values_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let values = random_values(&mut rng);
            assert!((5..=12).contains(&values.len()));
            assert!(values.iter().all(|v| (1.0..=100.0).contains(v) && v.fract() == 0.0));
        }
    }

    #[test]
    fn test_seeded_random_source_is_repeatable() {
        let app = SortscopeApp::new();
        let source = ArraySource {
            random: true,
            seed: Some(2024),
            ..ArraySource::default()
        };
        let first = app.load_values(source.clone(), false).unwrap();
        let second = app.load_values(source, false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_outcome() {
        let outcome = record(Algorithm::Bubble, &[64.0, 34.0, 25.0, 12.0, 22.0, 11.0, 90.0])
            .unwrap();
        let text = format_outcome(&outcome);
        assert!(text.contains("algorithm:   bubble"));
        assert!(text.contains("sorted:      [11, 12, 22, 25, 34, 64, 90]"));
        assert!(text.contains("comparisons: 21"));
    }

    #[test]
    fn test_format_algorithms_human() {
        let text = format_algorithms(false).unwrap();
        for algorithm in Algorithm::ALL {
            assert!(text.contains(&algorithm.to_string()));
        }
        assert!(text.contains("Quick Sort"));
        assert!(text.contains("O(n log n)"));
        assert!(text.ends_with("Total: 4 algorithms supported"));
    }

    #[test]
    fn test_format_algorithms_json() {
        let text = format_algorithms(true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["total"], 4);
        assert_eq!(parsed["algorithms"][3]["name"], "quick");
        assert_eq!(parsed["algorithms"][3]["display_name"], "Quick Sort");
        assert_eq!(parsed["algorithms"][3]["complexity"], "O(n log n)");
        assert_eq!(parsed["algorithms"][0]["complexity"], "O(n²)");
    }

    #[test]
    fn test_validate_command() {
        let app = SortscopeApp::new();
        assert!(app
            .validate_command(None, Some("1.5, -2, 3e2".to_string()), false)
            .is_ok());
        assert!(app
            .validate_command(None, Some("1, inf".to_string()), false)
            .is_err());
    }

    #[test]
    fn test_should_colorize_explicit_choices() {
        let app = SortscopeApp::new();
        assert!(app.should_colorize(ColorChoice::Always));
        assert!(!app.should_colorize(ColorChoice::Never));
    }

    #[test]
    fn test_frame_writer_non_interactive_separates_frames() {
        let mut buffer = Vec::new();
        {
            let mut writer = FrameWriter::new(&mut buffer, false);
            writer.draw("a\nb").unwrap();
            writer.draw("c\nd").unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "a\nb\n\nc\nd\n");
    }

    #[test]
    fn test_frame_writer_interactive_redraws_in_place() {
        let mut buffer = Vec::new();
        {
            let mut writer = FrameWriter::new(&mut buffer, true);
            writer.draw("a\nb").unwrap();
            writer.draw("c\nd").unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("a\nb\n"));
        // Cursor up two rows before the second frame
        assert!(output.contains("\x1b[2A"));
        assert!(output.ends_with("c\nd\n"));
    }
}
