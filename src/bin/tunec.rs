// sintunes -- turning tune strings into synthesized audio
// Copyright (C) 2021  John Lynch
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `tunec` reads tune strings from the terminal and compiles each of them
//! into a wav file.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use simple_logger;
use structopt::StructOpt;

use sintunes::output;
use sintunes::pitch::PitchTable;
use sintunes::render;
use sintunes::synth::Waveform;

/// Samples per second of the rendered audio.
const SAMPLE_RATE: u32 = 44100;

/// How long every note is held, in seconds.
const NOTE_DURATION: f64 = 0.25;

#[derive(Debug, StructOpt)]
#[structopt(name = "tunec", about = "Compiling tune strings into wav files")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Waveform used for every note: sin, sq or saw. Prompted for when absent.
    #[structopt(short, long)]
    waveform: Option<String>,

    /// Directory the wav files are written to.
    #[structopt(short, long, parse(from_os_str), default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level).unwrap();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let name = match opt.waveform {
        Some(name) => Some(name),
        None => prompt(&mut lines, "Choose waveform (sin/sq/saw):  ")?,
    };
    let waveform = match name.as_deref().filter(|name| !name.is_empty()) {
        None => Waveform::Sine,
        Some(name) => Waveform::from_name(name).unwrap_or_else(|| {
            log::warn!("unknown waveform {:?}, falling back to sin", name);
            Waveform::Sine
        }),
    };

    let pitch = PitchTable::default();

    // One tune per line; an empty line or a closed input ends the session.
    while let Some(tune) = prompt(&mut lines, "Enter tune:  ")? {
        if tune.is_empty() {
            break;
        }
        let samples = match render::render(&tune, NOTE_DURATION, waveform, SAMPLE_RATE, &pitch) {
            Ok(samples) => samples,
            Err(err) => {
                // A bad tune only loses this iteration.
                log::error!("cannot render {:?}: {}", tune, err);
                continue;
            }
        };
        let path = opt.output_dir.join(output::tune_filename(waveform, &tune));
        match output::write_wav(&path, SAMPLE_RATE, &samples) {
            Ok(()) => log::info!(
                "wrote {} samples ({:.2} seconds) to {}",
                samples.len(),
                samples.len() as f64 / SAMPLE_RATE as f64,
                path.display()
            ),
            Err(err) => log::error!("cannot write {}: {}", path.display(), err),
        }
    }
    Ok(())
}

/// Show a prompt and read the reply line. `None` means the input was closed.
fn prompt<L>(lines: &mut L, message: &str) -> io::Result<Option<String>>
where
    L: Iterator<Item = io::Result<String>>,
{
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
