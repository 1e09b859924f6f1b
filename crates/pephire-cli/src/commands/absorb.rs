use super::{load_pool, read_sequences, write_sequences};
use crate::cli::AbsorbArgs;
use crate::error::Result;
use pephire::core::io::format::SequenceFormat;
use pephire::workflows;
use tracing::info;

pub fn run(args: AbsorbArgs) -> Result<()> {
    let mut pool = load_pool(&args.pool, None)?;

    info!("Loading selected survivors from {:?}", &args.selected);
    let selected = read_sequences(&args.selected, args.column.as_deref())?;
    let offered = selected.len();

    let added = workflows::generate::absorb(&mut pool, selected)?;

    let output = args.output.as_ref().unwrap_or(&args.pool);
    write_sequences(
        pool.sequences(),
        SequenceFormat::from_path(output),
        0,
        output,
    )?;

    eprintln!(
        "✓ Added {} of {} selected peptide(s); pool of {} written to: {}",
        added,
        offered,
        pool.len(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn absorb_appends_new_survivors_in_order() {
        let dir = tempdir().unwrap();
        let pool_path = dir.path().join("pool.txt");
        let selected_path = dir.path().join("selected.fasta");
        let output_path = dir.path().join("next_pool.txt");
        fs::write(&pool_path, "AAAA\nAABA\n").unwrap();
        fs::write(
            &selected_path,
            ">peptide1_0\nABAA\n>peptide1_1\nAABA\n>peptide1_2\nBAAA\n",
        )
        .unwrap();

        run(AbsorbArgs {
            pool: pool_path.clone(),
            selected: selected_path,
            column: None,
            output: Some(output_path.clone()),
        })
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output_path).unwrap(),
            "AAAA\nAABA\nABAA\nBAAA\n"
        );
        assert_eq!(fs::read_to_string(&pool_path).unwrap(), "AAAA\nAABA\n");
    }

    #[test]
    fn absorb_rewrites_pool_when_no_output_is_given() {
        let dir = tempdir().unwrap();
        let pool_path = dir.path().join("pool.txt");
        let selected_path = dir.path().join("selected.txt");
        fs::write(&pool_path, "QLKQ\n").unwrap();
        fs::write(&selected_path, "KQLL\n").unwrap();

        run(AbsorbArgs {
            pool: pool_path.clone(),
            selected: selected_path,
            column: None,
            output: None,
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&pool_path).unwrap(), "QLKQ\nKQLL\n");
    }

    #[test]
    fn absorb_rejects_survivors_of_the_wrong_length() {
        let dir = tempdir().unwrap();
        let pool_path = dir.path().join("pool.txt");
        let selected_path = dir.path().join("selected.txt");
        fs::write(&pool_path, "QLKQ\n").unwrap();
        fs::write(&selected_path, "KQL\n").unwrap();

        let result = run(AbsorbArgs {
            pool: pool_path.clone(),
            selected: selected_path,
            column: None,
            output: None,
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&pool_path).unwrap(), "QLKQ\n");
    }

    #[test]
    fn absorb_reads_survivors_from_named_csv_column() {
        let dir = tempdir().unwrap();
        let pool_path = dir.path().join("pool.txt");
        let selected_path = dir.path().join("dockingpool0.csv");
        fs::write(&pool_path, "AAAA\nAABA\n").unwrap();
        fs::write(&selected_path, "dockingpool\nABAA\nAABA\n").unwrap();

        run(AbsorbArgs {
            pool: pool_path.clone(),
            selected: selected_path,
            column: Some("dockingpool".to_string()),
            output: None,
        })
        .unwrap();

        assert_eq!(
            fs::read_to_string(&pool_path).unwrap(),
            "AAAA\nAABA\nABAA\n"
        );
    }

    #[test]
    fn absorb_rejects_column_for_non_csv_survivors() {
        let dir = tempdir().unwrap();
        let pool_path = dir.path().join("pool.txt");
        let selected_path = dir.path().join("selected.txt");
        fs::write(&pool_path, "AAAA\n").unwrap();
        fs::write(&selected_path, "ABAA\n").unwrap();

        let result = run(AbsorbArgs {
            pool: pool_path,
            selected: selected_path,
            column: Some("dockingpool".to_string()),
            output: None,
        });
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
