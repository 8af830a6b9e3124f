#![forbid(unsafe_code)]

//! selbox demo
//!
//! Replays a scripted input session against a two-field form: a multiple
//! select preset to `[first]` and a single select preset to `first`, over the
//! options `first..fifth` valued `1..5`. Every step prints the rendered form.
//!
//! # Running
//!
//! ```sh
//! cargo run -p selbox-demo -- "tab enter down enter tab click option:2"
//! cargo run -p selbox-demo -- --options options.json --keep-open
//! SELBOX_LOG=debug cargo run -p selbox-demo
//! ```
//!
//! Pointer tokens (`click`, `option:N`, `hover:N`, `badge:V`, `clear`) land on
//! the focused field, or on the first field when nothing is focused. See
//! [`script`] for the token list.

mod script;

use clap::Parser;
use selbox::{
    FocusId, Form, Hit, Multiple, OptionList, OptionValue, Select, SelectConfig, SelectOption,
    Single, load_options,
};
use std::fmt;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use script::{ScriptError, Step};

const DEFAULT_SCRIPT: &str =
    "tab down down enter tab space down down enter shift-tab click badge:1 blur";
const WIDTH: usize = 36;
const LOG_ENV: &str = "SELBOX_LOG";

/// Replay a scripted input session against a two-field select form.
#[derive(Debug, Parser, PartialEq, Eq)]
#[command(name = "selbox-demo", version)]
struct Args {
    /// Whitespace-separated input tokens; a built-in session when omitted.
    script: Option<String>,

    /// JSON option list to use instead of `first..fifth`.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Keep the multiple-choice list open after pointer picks.
    #[arg(long)]
    keep_open: bool,
}

#[derive(Debug)]
enum CliError {
    Script(ScriptError),
    Selbox(selbox::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Script(err) => write!(f, "script: {err}"),
            Self::Selbox(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ScriptError> for CliError {
    fn from(err: ScriptError) -> Self {
        Self::Script(err)
    }
}

impl From<selbox::Error> for CliError {
    fn from(err: selbox::Error) -> Self {
        Self::Selbox(err)
    }
}

impl From<selbox::OptionError> for CliError {
    fn from(err: selbox::OptionError) -> Self {
        Self::Selbox(err.into())
    }
}

fn default_options() -> Result<OptionList, selbox::OptionError> {
    OptionList::new(
        ["first", "second", "third", "fourth", "fifth"]
            .into_iter()
            .zip(1..)
            .map(|(label, value)| SelectOption::new(label, value)),
    )
}

/// The two-field arrangement, returned with the ids of (multiple, single).
fn build_form(options: OptionList, keep_open: bool) -> (Form, FocusId, FocusId) {
    let preset = options.get(0).map(|option| option.value().clone());
    let mut form = Form::new();

    let multiple = Select::<Multiple>::new(options.clone())
        .config(SelectConfig::new().close_on_select(!keep_open));
    let multiple = form.add_with(
        multiple,
        preset.iter().cloned().collect(),
        |next: &Vec<OptionValue>| {
            tracing::info!(message = "demo.change", field = "multiple", value = ?next);
            true
        },
    );

    let single = form.add_with(
        Select::<Single>::new(options),
        preset,
        |next: &Option<OptionValue>| {
            tracing::info!(message = "demo.change", field = "single", value = ?next);
            true
        },
    );

    (form, multiple, single)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_frame(title: &str, form: &Form) {
    println!("-- {title} --");
    for line in form.render(WIDTH) {
        println!("{line}");
    }
    println!();
}

fn describe(form: &Form, multiple: FocusId, single: FocusId) -> String {
    let many = form
        .value::<Multiple>(multiple)
        .map(|keys| {
            keys.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    let one = form
        .value::<Single>(single)
        .and_then(|key| key.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| "-".into());
    format!("multiple = [{many}], single = {one}")
}

fn run(args: Args) -> Result<(), CliError> {
    let steps = script::parse(args.script.as_deref().unwrap_or(DEFAULT_SCRIPT))?;
    let options = match &args.options {
        Some(path) => load_options(path)?,
        None => default_options()?,
    };
    tracing::info!(
        message = "demo.start",
        options = options.len(),
        steps = steps.len(),
        keep_open = args.keep_open
    );

    let (mut form, multiple, single) = build_form(options, args.keep_open);
    print_frame("start", &form);

    for (i, step) in steps.iter().enumerate() {
        let (event, target) = step.event();
        let hit = target.and_then(|target| {
            let field = form.focused().or_else(|| form.ids().first().copied())?;
            Some(Hit::new(field, target))
        });
        let changed = form.dispatch(&event, hit.as_ref());
        tracing::debug!(message = "demo.step", step = i + 1, token = %step, changed);
        print_frame(&format!("{} {step}", i + 1), &form);
    }

    println!("{}", describe(&form, multiple, single));
    Ok(())
}

fn main() {
    init_logging();
    let args = Args::parse();
    if let Err(err) = run(args) {
        tracing::error!(message = "demo.failed", error = %err);
        eprintln!("selbox-demo: {err}");
        std::process::exit(2);
    }
}
