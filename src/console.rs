#![warn(missing_docs)]
//! Handling the LENSIM CLI and the interactive console loop.
//!
//! The console loop is the stand-in for the GUI slider: it reads object
//! distances line by line and drives one synchronous redraw cycle per
//! accepted value.
use crate::{
    error::{LensimError, LsResult},
    plottable::DiagramFormat,
    simulator::{Simulator, INITIAL_OBJECT_DISTANCE},
};
use clap::Parser;
use rprompt::prompt_reply_from_bufread;
use std::{
    io::{stdin, stdout, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};
use strum::IntoEnumIterator;

/// Default output diagram file if none is given on the command line.
pub const DEFAULT_OUTPUT: &str = "lens_diagram.svg";

/// Validated command line arguments for the LENSIM application.
pub struct Args {
    /// initial object distance in focal-length units
    pub object_distance: f64,

    /// path of the diagram file re-rendered on every update
    pub output: PathBuf,

    /// render a single frame and exit instead of entering the interactive loop
    pub single_shot: bool,
}

/// Raw command line arguments as parsed by clap.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct PartialArgs {
    /// initial object distance in focal-length units, clamped to [-5, 5]
    #[arg(short = 'd', long)]
    object_distance: Option<String>,

    /// output diagram file, re-rendered on every update (png or svg)
    #[arg(short, long)]
    output: Option<String>,

    /// render a single frame and exit
    #[arg(short, long)]
    single_shot: bool,
}

/// Evaluates if the passed object distance string is a usable distance.
fn eval_distance_input(distance_input: &str) -> Option<f64> {
    distance_input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Evaluates if the passed output path carries an extension with a known
/// plotting backend.
fn eval_output_input(output_input: &str) -> Option<PathBuf> {
    DiagramFormat::from_path(Path::new(output_input)).map(|_| PathBuf::from(output_input))
}

/// Creates the prompt string that is displayed in the console, depending on
/// the argument flag ("d" for the object distance, "o" for the output file).
fn create_prompt_str(flag: &str, init_str: &str) -> LsResult<String> {
    let mut prompt_str = init_str.to_owned();
    match flag {
        "d" => {
            prompt_str += "Please insert an object distance in focal-length units:\n";
            Ok(prompt_str)
        }
        "o" => {
            prompt_str += "Please insert an output diagram file path; supported extensions:\n";
            for format in DiagramFormat::iter() {
                prompt_str += &format!(".{format}\n");
            }
            Ok(prompt_str)
        }
        _ => Err(LensimError::Console(
            "Invalid flag type! Cannot create prompt string!".into(),
        )),
    }
}

/// Extracts an argument, re-prompting through the passed reader/writer until
/// the evaluation function accepts the input. The reader may be
/// `stdin().lock()` for user input or a `BufReader` over a static string for
/// tests.
fn get_args<T>(
    func: fn(&str) -> Option<T>,
    input: &str,
    arg_flag: &str,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> LsResult<T> {
    if let Some(arg) = func(input) {
        Ok(arg)
    } else {
        let prompt_str = create_prompt_str(arg_flag, "Invalid input!\n")?;
        let reply = prompt_reply_from_bufread(reader, writer, prompt_str)
            .map_err(|e| LensimError::Console(format!("reading console input failed: {e}")))?;
        get_args(func, &reply, arg_flag, reader, writer)
    }
}

impl Args {
    /// Validate raw [`PartialArgs`], re-prompting for invalid values through
    /// the passed reader and writer. Missing optional arguments fall back to
    /// their defaults without prompting.
    ///
    /// # Errors
    /// This function returns a [`LensimError::Console`] if the console input
    /// ends before a valid value was given.
    pub fn resolve(
        part_args: PartialArgs,
        reader: &mut impl BufRead,
        writer: &mut impl Write,
    ) -> LsResult<Self> {
        let object_distance = match part_args.object_distance.as_deref() {
            None => INITIAL_OBJECT_DISTANCE,
            Some(input) => get_args(eval_distance_input, input, "d", reader, writer)?,
        };
        let output = match part_args.output.as_deref() {
            None => PathBuf::from(DEFAULT_OUTPUT),
            Some(input) => get_args(eval_output_input, input, "o", reader, writer)?,
        };
        Ok(Self {
            object_distance,
            output,
            single_shot: part_args.single_shot,
        })
    }
}

impl TryFrom<PartialArgs> for Args {
    type Error = LensimError;

    fn try_from(part_args: PartialArgs) -> LsResult<Self> {
        let mut reader = BufReader::new(stdin().lock());
        let mut writer = BufWriter::new(stdout().lock());
        show_intro();
        Self::resolve(part_args, &mut reader, &mut writer)
    }
}

/// Print the LENSIM banner and version.
pub fn show_intro() {
    println!(
        "{: ^60}\n{: ^60}\n",
        "LENSIM - interactive thin-lens imaging diagram",
        format!("version {}", env!("CARGO_PKG_VERSION"))
    );
}

fn console_write_error(error: std::io::Error) -> LensimError {
    LensimError::Console(format!("console write failed: {error}"))
}

fn write_readout(simulator: &Simulator, writer: &mut impl Write) -> LsResult<()> {
    let state = simulator.state();
    match state.image() {
        Some(image) => writeln!(
            writer,
            "s = {:.2}, s' = {:.2}, y = {:.2}, y' = {:.2}",
            state.object().distance(),
            image.distance(),
            state.object().height(),
            image.height()
        )
        .map_err(console_write_error),
        None => writeln!(
            writer,
            "s = {:.2}, image at infinity",
            state.object().distance()
        )
        .map_err(console_write_error),
    }
}

/// Run the interactive loop: read object distances until `q` (or end of
/// input), drive one redraw cycle per accepted value and echo the resulting
/// imaging readout.
///
/// # Errors
/// This function propagates simulator update errors and console write
/// errors. Unparsable distances are reported and skipped.
pub fn run_interactive(
    simulator: &mut Simulator,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> LsResult<()> {
    loop {
        let prompt = format!(
            "object distance [{:.1}, {:.1}] (q to quit): ",
            simulator.slider().min(),
            simulator.slider().max()
        );
        let Ok(reply) = prompt_reply_from_bufread(reader, writer, prompt) else {
            break; // end of input
        };
        let input = reply.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("q") {
            break;
        }
        match input.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                simulator.update(value)?;
                write_readout(simulator, writer)?;
            }
            _ => {
                writeln!(writer, "invalid object distance: {input}")
                    .map_err(console_write_error)?;
            }
        }
    }
    Ok(())
}
