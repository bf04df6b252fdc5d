use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use spectrel::capture::{self, CaptureConfig};
use spectrel::cli::Args;
use spectrel::dsp::plan::Plan;
use spectrel::dsp::signal::Signal;
use spectrel::dsp::window::{Window, WindowType};
use spectrel::error::SpectrelError;
use spectrel::output::path::{resolve_output_dir, OutputFile, OutputFormat};
use spectrel::sdr::tone::ToneReceiver;
use spectrel::sdr::{Receiver, ReceiverParams};

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: "spectrel", %err, "capture failed");
            eprintln!("spectrel: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let params = ReceiverParams {
        frequency: args.frequency,
        sample_rate: args.sample_rate,
        bandwidth: args.bandwidth,
        gain: args.gain,
    };

    if args.window_size == 0 || args.window_hop == 0 || args.buffer_size == 0 {
        return Err(SpectrelError::InvalidArgument(
            "window-size, window-hop, and buffer-size must all be >= 1".into(),
        )
        .into());
    }
    if args.window_size > args.buffer_size {
        return Err(SpectrelError::InvalidArgument(format!(
            "window-size ({}) must not exceed buffer-size ({})",
            args.window_size, args.buffer_size
        ))
        .into());
    }

    let mut receiver = ToneReceiver::open(&args.driver, params)
        .with_context(|| format!("opening receiver for driver '{}'", args.driver))?;

    let mut plan = Plan::make(args.window_size).context("building DFT plan")?;
    let window = Window::make(WindowType::Boxcar, args.window_size).context("building window")?;
    let mut buffer = Signal::empty(args.buffer_size).context("allocating sample buffer")?;

    let dir = resolve_output_dir(args.dir.as_deref());
    let mut output =
        OutputFile::create(&dir, &args.driver, OutputFormat::Pgm).context("opening output file")?;

    let config = CaptureConfig {
        driver: args.driver.clone(),
        sample_rate: args.sample_rate,
        duration: args.duration,
        window_hop: args.window_hop,
    };

    capture::run(&config, &mut receiver, &mut plan, &window, &mut buffer, &mut output)?;

    Ok(())
}
