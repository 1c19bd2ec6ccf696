mod common;
mod logic;
mod store;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use common::scenario::{expand_scenarios, get_scenario, list_scenarios};
use common::split_csv;
use common::util::parse_seeds;
use logic::answers::{format_answers, parse_answers};
use logic::{LogicTester, ScenarioResult};
use mbti_quiz::constants::STORAGE_KEY;
use mbti_quiz::{DecodeOutcome, QuizEngine, ResultView, Step, decode};
use store::FileStore;

#[derive(Debug, Parser)]
#[command(name = "mbti-tester", version = "0.1.0")]
#[command(about = "Automated QA testing for the MBTI quiz core logic")]
struct Args {
    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds for seeded scenarios (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Iterations per seed for seeded scenarios
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON file standing in for browser storage
    #[arg(long, default_value = "target/mbti-store.json")]
    store: PathBuf,

    /// Play one session with these answers (e.g. YNYNYNYNYYNY) and store the result
    #[arg(long, conflicts_with = "decode")]
    play: Option<String>,

    /// Decode a raw stored value and show what the result page would render
    #[arg(long)]
    decode: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }
    if let Some(trail) = args.play.as_deref() {
        return play_session(&args, trail);
    }
    if let Some(raw) = args.decode.as_deref() {
        return decode_value(&args, raw);
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&split_csv(&args.scenarios));
    let seeds = parse_seeds(&args.seeds)?;
    let results = run_scenarios(&args, &scenarios, &seeds);

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🧭 MBTI Quiz Automated Tester".bright_cyan().bold());
    println!("{}", "==============================".cyan());
}

fn run_scenarios(args: &Args, scenarios: &[String], seeds: &[u64]) -> Vec<ScenarioResult> {
    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let tester = LogicTester::new(args.store.clone(), args.verbose);
    let mut results = Vec::new();
    for key in scenarios {
        match get_scenario(key) {
            Some(scenario) => {
                results.extend(tester.run_scenario(&scenario, seeds, args.iterations));
            }
            None => eprintln!("⚠️  Unknown scenario: {}", key.yellow()),
        }
    }
    results
}

fn play_session(args: &Args, trail: &str) -> Result<()> {
    let answers = parse_answers(trail)?;
    let engine = QuizEngine::with_builtin_bank(FileStore::new(&args.store))
        .context("loading question bank")?;
    let mut session = engine.start_session();
    if answers.len() > session.total() {
        bail!(
            "{} answers given, the quiz has only {} questions",
            answers.len(),
            session.total()
        );
    }
    let mut finished = None;
    for (idx, is_yes) in answers.iter().enumerate() {
        match engine
            .answer(&mut session, *is_yes)
            .with_context(|| format!("answering question {}", idx + 1))?
        {
            Step::Next(_) => {}
            Step::Complete(code) => finished = Some(code),
        }
    }
    let code = finished.ok_or_else(|| {
        anyhow!(
            "{} answers given, the quiz needs {}",
            answers.len(),
            session.total()
        )
    })?;

    let mut out = OutputTarget::new(args.output.clone())?;
    let letters: String = session.trail().iter().map(|l| l.as_char()).collect();
    writeln!(out, "Answers: {}", format_answers(&answers))?;
    writeln!(out, "Letters: {letters}")?;
    writeln!(out, "Code: {code}")?;
    writeln!(out, "Stored: {} in {}", STORAGE_KEY, args.store.display())?;
    writeln!(out, "Result: {}", engine.load_result().message)?;
    out.flush_inner()?;
    Ok(())
}

fn decode_value(args: &Args, raw: &str) -> Result<()> {
    let outcome = decode(Some(raw));
    let view = ResultView::render(&outcome);
    let mut out = OutputTarget::new(args.output.clone())?;
    match &outcome {
        DecodeOutcome::Resolved { code, via } => writeln!(out, "Resolved: {code} via {via}")?,
        DecodeOutcome::Missing => writeln!(out, "Resolved: nothing stored")?,
        DecodeOutcome::Unrecognized(_) => writeln!(out, "Resolved: unrecognized JSON")?,
        DecodeOutcome::Unreadable => writeln!(out, "Resolved: unreadable")?,
    }
    writeln!(out, "Message: {}", view.message)?;
    if let Some(copy) = view.copy_text() {
        writeln!(out, "Copy: {copy}")?;
    }
    out.flush_inner()?;
    Ok(())
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# MBTI Quiz Logic Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No logic scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
