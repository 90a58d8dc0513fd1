use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use structopt::StructOpt;

use permuterm::{FileFormat, IndexError, QueryResult, SearchConfig, Wordlist};


/// Look words up in a permuterm index. Queries may use one `*` anywhere
/// (`ab*`, `*ab`, `a*b`) or two around a fragment (`*ab*`).
#[derive(StructOpt)]
struct Cli {
    /// The word list to index
    #[structopt(parse(from_os_str))]
    path: std::path::PathBuf,
    /// Queries to run; read from stdin when none are given
    queries: Vec<String>,
    /// Field delimiter, when the word list has several columns
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Column holding the word (with --delimiter)
    #[structopt(short = "c", long)]
    word_column: Option<usize>,
    /// Stop listing after this many matches
    #[structopt(short = "n", long)]
    max_results: Option<usize>,
    /// Skip words longer than this while loading
    #[structopt(long)]
    max_word_len: Option<usize>,
    /// Print results as JSON, one object per line
    #[structopt(long)]
    json: bool,
}

fn main() -> ExitCode {
    let debug_enabled = std::env::var("PERMUTERM_DEBUG").is_ok();
    permuterm::log::init_logger(debug_enabled);

    match try_main(Cli::from_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error [{}]: {}", e.code(), e);
            if let Some(help) = e.help() {
                eprintln!("  help: {}", help);
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Cli) -> Result<(), IndexError> {
    let format = match (args.delimiter, args.word_column) {
        (Some(d), Some(c)) => FileFormat::builder().delimiter(d).word_column(c).build(),
        (Some(d), None) => FileFormat::builder().delimiter(d).build(),
        _ => FileFormat::builder().build(),
    };
    let config = SearchConfig { max_results: args.max_results, max_word_len: args.max_word_len };

    let start = Instant::now();
    let wl = Wordlist::from_file(&args.path, &format, config)?;
    log::info!("{} words ready in {:.3}s", wl.len(), start.elapsed().as_secs_f64());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.queries.is_empty() {
        for (query, result) in args.queries.iter().zip(wl.lookup_many(args.queries.as_slice())) {
            let result = result.map(|matches| QueryResult {
                query: query.clone(),
                wildcard: query.contains('*'),
                matches,
            });
            report(&mut out, query, result, args.json)?;
        }
        return Ok(());
    }

    write!(out, "\nQuery: ")?;
    out.flush()?;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        for query in line?.split_whitespace() {
            report(&mut out, query, wl.query(query), args.json)?;
        }
        write!(out, "\nQuery: ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

/// Prints one query outcome. Malformed queries are reported and skipped.
fn report<W: Write>(out: &mut W, query: &str, result: Result<QueryResult, IndexError>,
                    json: bool) -> Result<(), IndexError> {
    let result = match result {
        Ok(result) => result,
        Err(e) if e.is_recoverable() => {
            log::warn!("[{}] {}", query, e);
            writeln!(out, "[{}] invalid query: {}", query, e)?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if json {
        let line = serde_json::to_string(&result)
            .map_err(|e| IndexError::Io(e.into()))?;
        writeln!(out, "{}", line)?;
    } else if !result.found() {
        writeln!(out, "[{}] not found!", query)?;
    } else if !result.wildcard {
        writeln!(out, "[{}] found!", result.matches[0])?;
    } else {
        for word in &result.matches {
            writeln!(out, "{}", word)?;
        }
    }
    Ok(())
}
