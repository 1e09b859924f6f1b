use super::{load_corpus, load_pool};
use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use pephire::engine::book::PoolBook;
use pephire::workflows;
use std::io::Write;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    let pool = load_pool(&args.pool, args.pool_column.as_deref())?;
    let corpus = load_corpus(&args.ladderons)?;

    let size_limit = args
        .size_limit
        .to_limit()
        .map(|limit| limit.validate())
        .transpose()
        .map_err(|e| CliError::Config(e.to_string()))?;
    let size_cap = size_limit.map(|limit| limit.resolve(pool.peptide_length()));

    info!("Building pool book for inspection...");
    let book = workflows::generate::build_pool_book(&pool, &corpus, size_limit)?;

    let stdout = std::io::stdout();
    render(&book, pool.len(), size_cap, args.top, &mut stdout.lock())?;
    Ok(())
}

fn render(
    book: &PoolBook,
    pool_size: usize,
    size_cap: Option<usize>,
    top: Option<usize>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    let catalog = book.catalog();
    let total = catalog.total_weight();

    writeln!(out, "Peptide length : {}", book.peptide_length())?;
    writeln!(out, "Pool size      : {}", pool_size)?;
    match size_cap {
        Some(cap) => writeln!(out, "Size cap       : {}", cap)?,
        None => writeln!(out, "Size cap       : none")?,
    }
    writeln!(
        out,
        "Catalog        : {} ladderon(s), total weight {}",
        catalog.len(),
        total
    )?;
    writeln!(out)?;

    let mut entries: Vec<_> = catalog.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));

    let width = catalog.max_ladderon_len().max("LADDERON".len());
    writeln!(
        out,
        "{:<width$}  {:>8}  {:>7}  OFFSETS",
        "LADDERON", "WEIGHT", "SHARE"
    )?;
    for (ladderon, weight) in entries.into_iter().take(top.unwrap_or(usize::MAX)) {
        let share = if total == 0 {
            0.0
        } else {
            100.0 * weight as f64 / total as f64
        };
        let offsets = book
            .index()
            .get(ladderon.as_str())
            .map(|offsets| {
                offsets
                    .iter()
                    .map(usize::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default();
        writeln!(
            out,
            "{:<width$}  {:>8}  {:>6.2}%  {}",
            ladderon.as_str(),
            weight,
            share,
            offsets
        )?;
    }
    Ok(())
}
