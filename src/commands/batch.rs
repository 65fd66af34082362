use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use judgment_roles::{Dataset, DocumentRow, Extractor};

use crate::cli::BatchArgs;
use crate::commands::{extract_config, require_dataset};
use crate::model::{BatchDocumentEntry, BatchManifest};
use crate::util::{now_utc_string, read_text, sha256_hex, write_json_pretty};

pub fn run(args: BatchArgs) -> Result<()> {
    let config = extract_config(&args.resources)?;
    let dataset = require_dataset(&config, "batch")?;
    let threshold = config.threshold()?;
    let resources = config.load_resources()?;
    let extractor = resources.extractor()?;

    let (source, rows) = match (&args.input_dir, &args.input_jsonl) {
        (Some(dir), _) => (dir.display().to_string(), load_directory(dir)?),
        (None, Some(path)) => (path.display().to_string(), load_jsonl(path, dataset)?),
        (None, None) => bail!("batch requires --input-dir or --input-jsonl"),
    };

    let manifest = build_manifest(
        &extractor,
        dataset,
        threshold,
        source,
        rows,
        args.with_summary,
    );

    write_json_pretty(&args.output, &manifest)?;
    info!(path = %args.output.display(), "wrote batch manifest");
    info!(
        documents = manifest.document_count,
        accepted = manifest.accepted_sentence_total,
        "batch completed"
    );

    Ok(())
}

pub fn build_manifest(
    extractor: &Extractor<'_>,
    dataset: Dataset,
    threshold: f64,
    source: String,
    rows: Vec<DocumentRow>,
    with_summary: bool,
) -> BatchManifest {
    let mut documents = Vec::with_capacity(rows.len());

    for row in rows {
        let document = extractor.prepare(&row.document);
        let extraction = extractor.run_prepared(&document, threshold);

        let mut role_counts = BTreeMap::new();
        for role in extraction.sentences.iter().filter_map(|record| record.role) {
            *role_counts.entry(role.code().to_string()).or_insert(0) += 1;
        }

        if extraction.accepted_count() == 0 {
            warn!(id = %row.id, threshold, "no sentence passed the threshold");
        }

        documents.push(BatchDocumentEntry {
            id: row.id,
            sha256: sha256_hex(row.document.as_bytes()),
            sentence_count: extraction.sentences.len(),
            accepted_count: extraction.accepted_count(),
            role_counts,
            tagged: extraction.tagged,
            grouped: extraction.grouped,
            budgeted_summary: with_summary.then(|| extractor.category_summary(&document)),
            reference_summary: row.reference_summary,
        });
    }

    BatchManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        dataset: dataset.key().to_string(),
        threshold,
        source,
        document_count: documents.len(),
        accepted_sentence_total: documents.iter().map(|entry| entry.accepted_count).sum(),
        documents,
    }
}

/// Every `*.txt` file directly inside `dir`, sorted by file name. The file
/// stem is the document id.
fn load_directory(dir: &Path) -> Result<Vec<DocumentRow>> {
    let mut paths = discover_documents(dir)?;
    paths.sort();

    if paths.is_empty() {
        bail!("no .txt documents found in {}", dir.display());
    }

    paths
        .into_iter()
        .map(|path| {
            let id = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(ToOwned::to_owned)
                .with_context(|| format!("invalid UTF-8 filename: {}", path.display()))?;
            Ok(DocumentRow {
                id,
                document: read_text(&path)?,
                reference_summary: None,
            })
        })
        .collect()
}

fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    let entries = fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();

        if !entry
            .file_type()
            .with_context(|| format!("failed to inspect file type: {}", path.display()))?
            .is_file()
        {
            continue;
        }

        let is_text = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("txt"))
            .unwrap_or(false);

        if is_text {
            documents.push(path);
        }
    }

    Ok(documents)
}

/// One JSON object per line, read with the dataset's column names. Blank
/// lines are skipped.
fn load_jsonl(path: &Path, dataset: Dataset) -> Result<Vec<DocumentRow>> {
    let raw = read_text(path)?;
    let mut rows = Vec::new();

    for (line_number, line) in raw.lines().enumerate().map(|(idx, line)| (idx + 1, line)) {
        if line.trim().is_empty() {
            continue;
        }

        let record: serde_json::Map<String, serde_json::Value> = serde_json::from_str(line)
            .with_context(|| format!("failed to parse {} line {line_number}", path.display()))?;

        let row = dataset.document_row(&record).with_context(|| {
            format!(
                "{} line {line_number} lacks the {} / {} columns of {dataset}",
                path.display(),
                dataset.id_column(),
                dataset.document_column(),
            )
        })?;
        rows.push(row);
    }

    if rows.is_empty() {
        bail!("no records found in {}", path.display());
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> Extractor<'static> {
        Extractor::builtin().expect("built-in extractor should initialise")
    }

    #[test]
    fn directory_documents_are_sorted_and_filtered() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("b.txt"), "The appeal is dismissed with costs.")
            .expect("write b");
        fs::write(
            dir.path().join("a.TXT"),
            "The appellant filed the case on 3 January.",
        )
        .expect("write a");
        fs::write(dir.path().join("notes.md"), "ignored").expect("write notes");
        fs::create_dir(dir.path().join("nested.txt")).expect("create dir");

        let rows = load_directory(dir.path()).expect("documents should load");
        let ids = rows.iter().map(|row| row.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_directory(dir.path()).expect_err("nothing to process");
        assert!(err.to_string().contains("no .txt documents"));
    }

    #[test]
    fn jsonl_rows_use_dataset_columns() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rows.jsonl");
        fs::write(
            &path,
            "{\"doc_id\": \"c-1\", \"text\": \"The appeal is dismissed.\", \"summary\": \"Dismissed.\"}\n\n\
             {\"doc_id\": \"c-2\", \"text\": \"The weather was pleasant.\"}\n",
        )
        .expect("write rows");

        let rows = load_jsonl(&path, Dataset::CivilSum).expect("rows should load");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].reference_summary.as_deref(), Some("Dismissed."));
        assert_eq!(rows[1].id, "c-2");

        let err = load_jsonl(&path, Dataset::Ilc).expect_err("wrong columns");
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn manifest_counts_roles_and_hashes_documents() {
        let rows = vec![
            DocumentRow {
                id: "fact".to_string(),
                document: "The appellant filed the case on 3 January. The weather was pleasant."
                    .to_string(),
                reference_summary: Some("Filed.".to_string()),
            },
            DocumentRow {
                id: "quiet".to_string(),
                document: "The weather was pleasant.".to_string(),
                reference_summary: None,
            },
        ];

        let manifest = build_manifest(
            &extractor(),
            Dataset::InAbs,
            0.0,
            "memory".to_string(),
            rows,
            true,
        );

        assert_eq!(manifest.manifest_version, 1);
        assert_eq!(manifest.dataset, "inabs");
        assert_eq!(manifest.document_count, 2);
        assert_eq!(manifest.accepted_sentence_total, 1);

        let fact = &manifest.documents[0];
        assert_eq!(fact.sentence_count, 2);
        assert_eq!(fact.role_counts.get("F"), Some(&1));
        assert_eq!(fact.sha256.len(), 64);
        assert_eq!(fact.tagged, "<Fact>The appellant filed the case on 3 January.</Fact>");
        assert!(fact.budgeted_summary.is_some());

        let quiet = &manifest.documents[1];
        assert_eq!(quiet.accepted_count, 0);
        assert!(quiet.role_counts.is_empty());
        assert_eq!(quiet.grouped, "");
    }
}
