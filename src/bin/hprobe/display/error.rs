use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = collect_hints(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Option<Vec<String>> {
    use hbond_probe::batch::Error as BatchError;
    use hbond_probe::probe::Error as ProbeError;

    let mut hints = Vec::new();

    let probe_err = err.downcast_ref::<ProbeError>().or_else(|| {
        match err.downcast_ref::<BatchError>() {
            Some(BatchError::Probe(e)) => Some(e),
            _ => None,
        }
    });

    if let Some(probe_err) = probe_err {
        match probe_err {
            ProbeError::SiteOutOfRange { .. } => {
                hints.push("Check the [sites] indices in the dataset file".to_string());
                hints.push("Check --offset matches the topology of these snapshots".to_string());
            }
            ProbeError::DegenerateGeometry { .. } => {
                hints.push("Two atoms of the snapshot coincide; inspect the file".to_string());
            }
        }
    }

    let chain = error_chain_text(err);

    if chain.contains("no such file") || chain.contains("not found") {
        hints.push("Check that the path is correct and the file exists".to_string());
    }
    if chain.contains("permission denied") {
        hints.push("Check file permissions with `ls -la`".to_string());
    }
    if chain.contains("missing the") && chain.contains("column") {
        hints.push("Prediction CSVs need Atom Index, Atom Type and Chemical Shift (ppm) columns".to_string());
    }
    if chain.contains("parse") && chain.contains("toml") {
        hints.push("Validate the TOML structure of the configuration file".to_string());
    }

    if hints.is_empty() { None } else { Some(hints) }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}
