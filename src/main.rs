use clap::{Arg, Command};
use menu_translator::shell::{self, INSTRUCTIONS, NO_ITEMS, PROMPT};
use menu_translator::{Lexicon, Translation, Translator, load_lexicon_from_file, translate_items};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("menu-translator")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate menu items between the two languages of a bilingual lexicon")
        .arg(
            Arg::new("items")
                .help("Menu items to translate (read from stdin when omitted)")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("lexicon")
                .long("lexicon")
                .short('l')
                .help("JSON lexicon file to use instead of the built-in Portuguese-English one")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("direction")
                .long("direction")
                .short('d')
                .help("Translation direction (default: detect per item)")
                .value_parser(["auto", "forward", "reverse"])
                .default_value("auto"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show debug logs and the detected direction of each item")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    // Initialize tracing; logs go to stderr so stdout carries only the translation
    let mut filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    if verbose {
        filter = filter.add_directive(LevelFilter::DEBUG.into());
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let lexicon = match matches.get_one::<PathBuf>("lexicon") {
        Some(path) => match load_lexicon_from_file(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                eprintln!("❌ {}", e);
                return Err(e.into());
            }
        },
        None => Lexicon::builtin(),
    };
    let translator = Translator::new(Arc::new(lexicon));

    let direction = matches
        .get_one::<String>("direction")
        .and_then(|mode| shell::forced_direction(mode));

    let items: Vec<String> = match matches.get_many::<String>("items") {
        Some(values) => values.cloned().collect(),
        None => read_items(&translator)?,
    };
    debug!("Read {} items", items.len());

    let translations = translate_items(&translator, &items, direction);
    if translations.is_empty() {
        println!("{}", NO_ITEMS);
        return Ok(());
    }

    if verbose {
        for translation in &translations {
            report(&translator, translation);
        }
    }

    let texts: Vec<String> = translations.into_iter().map(|t| t.text).collect();
    println!("{}", shell::join_items(&texts));

    Ok(())
}

/// Read items from stdin, one per line, until an empty line or end of input.
fn read_items(translator: &Translator) -> io::Result<Vec<String>> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stderr = io::stderr();

    if interactive {
        let lexicon = translator.lexicon();
        writeln!(
            stderr,
            "{}",
            shell::banner(lexicon.source_language(), lexicon.target_language())
        )?;
        writeln!(stderr, "{}", INSTRUCTIONS)?;
    }

    let mut items = Vec::new();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(stderr, "{}", PROMPT)?;
            stderr.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        items.push(line);
    }

    if interactive {
        writeln!(stderr)?;
    }
    Ok(items)
}

/// Per-item summary for `--verbose`.
fn report(translator: &Translator, translation: &Translation) {
    let (from, to) = translator.lexicon().languages(translation.direction);
    match translation.score {
        Some(score) => eprintln!(
            "🌍 {} → {} ({} vs {}): \"{}\"",
            from, to, score.source_to_target, score.target_to_source, translation.text
        ),
        None => eprintln!("🌍 {} → {} (forced): \"{}\"", from, to, translation.text),
    }
}
