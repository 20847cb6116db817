use anyhow::Result;
use boolsearch_core::{build_index, search, DocId, InvertedIndex};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

mod corpus;

use corpus::{read_lines, Corpus};

#[derive(Parser)]
#[command(name = "boolsearch")]
#[command(about = "Answer AND queries over a line-per-document corpus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every query in a query file against the corpus
    Run {
        /// Corpus file, one document per line
        #[arg(long, default_value = "documents.txt")]
        documents: PathBuf,
        /// Query file, one query per line
        #[arg(long, default_value = "queries.txt")]
        queries: PathBuf,
    },
    /// Run a single query given on the command line
    Query {
        #[arg(long, default_value = "documents.txt")]
        documents: PathBuf,
        /// Query terms (implicitly AND-ed)
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Print index statistics as JSON
    Stats {
        #[arg(long, default_value = "documents.txt")]
        documents: PathBuf,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run { documents, queries } => {
            let (corpus, index) = load(&documents)?;
            let queries = read_lines(&queries)?;
            tracing::info!(num_queries = queries.len(), "running query file");
            for query in &queries {
                let results = search(&index, query);
                write_report(&mut out, query, &results, &corpus)?;
            }
        }
        Commands::Query { documents, terms } => {
            let (corpus, index) = load(&documents)?;
            let query = terms.join(" ");
            let results = search(&index, &query);
            write_report(&mut out, &query, &results, &corpus)?;
        }
        Commands::Stats { documents } => {
            let (_, index) = load(&documents)?;
            serde_json::to_writer_pretty(&mut out, &index.stats())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn load(documents: &Path) -> Result<(Corpus, InvertedIndex)> {
    let corpus = Corpus::load(documents)?;
    let index = build_index(corpus.docs());
    tracing::info!(path = %documents.display(), num_docs = corpus.len(), "loaded corpus");
    Ok((corpus, index))
}

fn write_report<W: Write>(out: &mut W, query: &str, results: &[DocId], corpus: &Corpus) -> Result<()> {
    writeln!(out, "\n\nQUERY:{query}\nRESULTS:")?;
    for &doc_id in results {
        if let Some(text) = corpus.get(doc_id) {
            writeln!(out, "[{doc_id}] {text}")?;
        }
    }
    Ok(())
}
