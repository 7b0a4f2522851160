//! Command execution logic.
//!
//! One `execute_*` function per subcommand. Each loads the workspace
//! configuration, resolves paths (flag first, then `trestle.yaml`, then the
//! built-in defaults), does the work, and hands rendering to [`crate::output`].

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::cli::args::{AnalyzeArgs, GenerateArgs, InspectArgs, ReportArgs};
use crate::config::TrestleConfig;
use crate::output::OutputMode;

/// Picks the flag value when given, otherwise the configured fallback.
fn resolve(flag: Option<&PathBuf>, configured: &str) -> PathBuf {
    flag.cloned().unwrap_or_else(|| PathBuf::from(configured))
}

async fn load_config() -> Result<TrestleConfig> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    Ok(TrestleConfig::load_or_default(&cwd).await?)
}

/// Runs both engines over every graph in the input document, prints each
/// comparison, and records the outcomes.
///
/// # Errors
///
/// Fails when the input document cannot be loaded, a graph definition is
/// invalid, or the results document cannot be written.
pub async fn execute_analyze(args: &AnalyzeArgs, output_mode: OutputMode) -> Result<()> {
    use crate::io::{AnalysisRecord, InputDocument, ResultsDocument, csv};
    use crate::mst::{KruskalEngine, MstAlgorithm, PrimEngine};

    let config = load_config().await?;
    let input_path = resolve(args.input.as_ref(), &config.input);
    let output_path = resolve(args.output.as_ref(), &config.output);

    let document = InputDocument::load(&input_path)
        .await
        .with_context(|| format!("failed to load {}", input_path.display()))?;
    let graphs = document.build_graphs()?;

    if output_mode == OutputMode::Text {
        println!(
            "Loaded {} graph(s) from {}",
            graphs.len(),
            input_path.display()
        );
        println!();
    }

    let prim = PrimEngine::new();
    let kruskal = KruskalEngine::new();
    let mut records = Vec::with_capacity(graphs.len());

    for graph in &graphs {
        let prim_outcome = prim.find_mst(graph);
        let kruskal_outcome = kruskal.find_mst(graph);

        crate::output::print_analysis(
            graph,
            &prim_outcome,
            &kruskal_outcome,
            config.tolerance,
            output_mode,
        )?;
        if output_mode == OutputMode::Text {
            println!("\n{}\n", "=".repeat(60));
        }

        records.push(AnalysisRecord::new(graph, &prim_outcome, &kruskal_outcome));
    }

    let results = ResultsDocument::new(records);
    results
        .save(&output_path)
        .await
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    if output_mode == OutputMode::Text {
        println!("Results written to {}", output_path.display());
    }

    if let Some(csv_path) = &args.csv {
        csv::write_report(&results, csv_path, config.tolerance)
            .await
            .with_context(|| format!("failed to write {}", csv_path.display()))?;
        if output_mode == OutputMode::Text {
            println!("CSV report generated: {}", csv_path.display());
        }
    }

    Ok(())
}

/// Prints structural details for graphs in the input document.
///
/// # Errors
///
/// Fails when the input document cannot be loaded, a graph definition is
/// invalid, or `--graph` names an id the document does not contain.
pub async fn execute_inspect(args: &InspectArgs, output_mode: OutputMode) -> Result<()> {
    use crate::io::InputDocument;

    let config = load_config().await?;
    let input_path = resolve(args.input.as_ref(), &config.input);

    let document = InputDocument::load(&input_path)
        .await
        .with_context(|| format!("failed to load {}", input_path.display()))?;
    let graphs = document.build_graphs()?;

    let selected: Vec<_> = graphs
        .iter()
        .filter(|graph| args.graph.is_none_or(|id| graph.id() == id))
        .collect();

    if selected.is_empty() {
        if let Some(id) = args.graph {
            bail!("no graph with id {id} in {}", input_path.display());
        }
        if output_mode == OutputMode::Text {
            println!("No graphs found.");
        }
        return Ok(());
    }

    for (index, graph) in selected.iter().enumerate() {
        if index > 0 && output_mode == OutputMode::Text {
            println!();
        }
        crate::output::print_inspection(graph, output_mode)?;
    }

    Ok(())
}

/// Regenerates the CSV summary from a recorded results document.
///
/// # Errors
///
/// Fails when the results document cannot be loaded or the CSV file cannot
/// be written.
pub async fn execute_report(args: &ReportArgs, output_mode: OutputMode) -> Result<()> {
    use crate::io::{ResultsDocument, csv};

    let config = load_config().await?;
    let results_path = resolve(args.results.as_ref(), &config.output);
    let csv_path = resolve(args.csv.as_ref(), &config.csv);

    let document = ResultsDocument::load(&results_path)
        .await
        .with_context(|| format!("failed to load {}", results_path.display()))?;
    csv::write_report(&document, &csv_path, config.tolerance)
        .await
        .with_context(|| format!("failed to write {}", csv_path.display()))?;

    match output_mode {
        OutputMode::Text => println!("CSV report generated: {}", csv_path.display()),
        OutputMode::Json => crate::output::print_json(&serde_json::json!({
            "csv": csv_path.display().to_string(),
            "rows": document.results.len(),
        }))?,
    }

    Ok(())
}

/// Builds seeded random connected graphs and writes them as an input
/// document.
///
/// # Errors
///
/// Fails when graph construction rejects the parameters or the document
/// cannot be written.
pub async fn execute_generate(args: &GenerateArgs, output_mode: OutputMode) -> Result<()> {
    use crate::graph::generate::random_connected;
    use crate::io::{GraphSpec, InputDocument};

    let config = load_config().await?;
    let output_path = resolve(args.output.as_ref(), &config.input);

    let mut specs = Vec::new();
    for index in 0..args.graphs {
        let seed = args.seed.wrapping_add(u64::from(index));
        let mut graph = random_connected(args.vertices, args.edges, seed)?;
        graph.set_id(index + 1);
        graph.set_name(format!("Random_Graph_{}", index + 1));
        specs.push(GraphSpec::from_graph(&graph));
    }

    let document = InputDocument { graphs: specs };
    document
        .save(&output_path)
        .await
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    match output_mode {
        OutputMode::Text => println!(
            "Generated {} graph(s) to {}",
            document.graphs.len(),
            output_path.display()
        ),
        OutputMode::Json => crate::output::print_json(&serde_json::json!({
            "output": output_path.display().to_string(),
            "graphs": document.graphs.len(),
            "vertices": args.vertices,
            "edges": args.edges,
            "seed": args.seed,
        }))?,
    }

    Ok(())
}
