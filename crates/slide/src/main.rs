use clap::Parser;
use slide::animate::{animate, resolve_input, Pacing};
use slide::catalog::{self, EXAMPLES};
use slide::cli::{Cli, Command};
use slide::output::Output;
use slide::report::{report, report_json, Commentary, Verbosity};
use slide::{interactive, tour, CaseSensitivity};
use slide_match::{Observer, Step};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

/// Exit status for a run stopped with Ctrl-C.
const EXIT_INTERRUPTED: i32 = 130;

fn main() -> anyhow::Result<()> {
    // Reset SIGPIPE handler to default (terminate) so piping to head/tail works correctly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    let cli = Cli::parse();

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color);

    match cli.command {
        Command::Search {
            text,
            pattern,
            ignore_case,
            verbose,
            json,
        } => {
            let case = CaseSensitivity::from(!ignore_case);
            if json {
                report_json(&mut io::stdout().lock(), &text, &pattern, case)?;
                return Ok(());
            }

            let verbosity = if verbose {
                Verbosity::Verbose
            } else {
                Verbosity::Quiet
            };
            let matches = report(&mut output, &text, &pattern, case, verbosity)?;
            output.print_summary(&matches)?;
        }
        Command::Animate {
            text,
            pattern,
            example,
            ignore_case,
            speed,
        } => {
            let pacing = Pacing::new(speed)?;
            let (text, pattern) = resolve_input(text, pattern, example.as_deref())?;
            let case = CaseSensitivity::from(!ignore_case);

            let completed = run_animation(&text, &pattern, case, &pacing, use_color, &mut output)?;
            if !completed {
                std::process::exit(EXIT_INTERRUPTED);
            }
        }
        Command::Examples { run, ignore_case } => {
            if run {
                let results = catalog::run_all(CaseSensitivity::from(!ignore_case));
                output.print_example_results(&results)?;
            } else {
                output.print_examples(EXAMPLES)?;
            }
        }
        Command::Tour {
            no_explain,
            interactive,
        } => {
            if !no_explain {
                tour::explain(&mut output)?;
            }
            tour::run_demos(&mut output)?;
            if interactive {
                interactive::run(&mut io::stdin().lock(), &mut output, CaseSensitivity::Sensitive)?;
            }
            tour::print_closing(&mut output)?;
        }
        Command::Explain => tour::explain(&mut output)?,
        Command::Interactive { ignore_case } => {
            interactive::run(
                &mut io::stdin().lock(),
                &mut output,
                CaseSensitivity::from(!ignore_case),
            )?;
        }
    }

    Ok(())
}

/// Animate on this thread while a printer thread renders the steps.
///
/// Returns `false` when the run was stopped with Ctrl-C.
fn run_animation(
    text: &str,
    pattern: &str,
    case: CaseSensitivity,
    pacing: &Pacing,
    use_color: bool,
    output: &mut Output,
) -> anyhow::Result<bool> {
    let cancel = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&cancel);
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))?;

    if !case.is_sensitive() {
        output.print_case_insensitive_notice()?;
    }
    let text_chars = case.prepare(text);
    let pattern_chars = case.prepare(pattern);

    let (step_tx, step_rx) = mpsc::channel::<Step>();
    let printer_text = text_chars.clone();
    let printer_pattern = pattern_chars.clone();

    let printer_handle = thread::spawn(move || -> io::Result<()> {
        let mut output = Output::new(use_color);
        let mut commentary = Commentary::new(
            &mut output,
            &printer_text,
            &printer_pattern,
            Verbosity::Animated,
        );
        for step in step_rx {
            commentary.observe(&step);
        }
        commentary.finish()
    });

    let mut step_tx = step_tx;
    let animation = animate(&text_chars, &pattern_chars, pacing, &cancel, &mut step_tx);

    drop(step_tx);
    printer_handle
        .join()
        .map_err(|_| anyhow::anyhow!("printer thread panicked"))??;

    let Some(offsets) = animation.complete_offsets() else {
        output.print_stopped(&animation.offsets)?;
        return Ok(false);
    };

    let shown_text: String = text_chars.iter().collect();
    let shown_pattern: String = pattern_chars.iter().collect();
    output.blank()?;
    output.print_outcome(&shown_text, &shown_pattern, offsets)?;
    Ok(true)
}
