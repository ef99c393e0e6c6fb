//! Human-facing output: graph listings and cycle reports

use std::io::{self, Write};

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use globorder_annot::find_annotation;
use globorder_graph::{CycleError, DependencyGraph, SourceFile};

/// Write an error report to `out` for each file caught in `err`.
///
/// Each report points at the file's `/*global*/` block and lists the other
/// stuck files it waits on.
pub fn report_cycle<W: Write>(
    err: &CycleError,
    graph: &DependencyGraph,
    sources: &[SourceFile],
    mut out: W,
    color: bool,
) -> io::Result<()> {
    // Annotation spans are byte ranges.
    let config = Config::default()
        .with_index_type(IndexType::Byte)
        .with_color(color);

    for source in sources.iter().filter(|source| err.contains(source.name())) {
        let filename = source.name();
        let range = find_annotation(source.text()).map_or(0..0, |annotation| annotation.span);

        let mut waiting_on: Vec<&str> = graph
            .dependencies(filename)
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(|dep| err.contains(dep))
            .collect();
        waiting_on.sort_unstable();

        let span = (filename, range);
        Report::build(ReportKind::Error, span.clone())
            .with_config(config)
            .with_code("E0001")
            .with_message("Dependency cycle")
            .with_label(
                Label::new(span)
                    .with_message(format!("requires identifiers defined by {}", waiting_on.join(", ")))
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source.text())), &mut out)?;
    }

    Ok(())
}

/// One `file -> dependency` line per edge, then one line per file with no
/// dependencies. Both parts are sorted.
pub fn render_graph(graph: &DependencyGraph) -> String {
    let mut lines: Vec<String> = graph
        .edges()
        .into_iter()
        .map(|(file, dep)| format!("{file} -> {dep}"))
        .collect();

    let mut leaves: Vec<&str> = graph
        .files()
        .filter(|file| graph.dependencies(file).is_some_and(|deps| deps.is_empty()))
        .collect();
    leaves.sort_unstable();
    lines.extend(leaves.into_iter().map(str::to_string));

    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
