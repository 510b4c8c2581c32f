use std::io::Write;

use super::walk::Path;

/// Writes a numbered listing of `paths` to the given writer.
pub fn write_paths_report(paths: &[Path<'_>], writer: &mut dyn Write) -> std::io::Result<()> {
    if paths.is_empty() {
        writeln!(writer, "No path found between the given nodes.")?;
        return Ok(());
    }

    writeln!(writer, "=== PATHS WITHIN TOLERANCE ===")?;
    writeln!(writer, "Total paths found: {}", paths.len())?;
    writeln!(writer)?;
    for (i, path) in paths.iter().enumerate() {
        let marker = if path.is_cyclic() { " (cyclic)" } else { "" };
        writeln!(
            writer,
            "Path {}: {} length={} hops={}{}",
            i,
            path,
            path.length(),
            path.edge_count(),
            marker
        )?;
    }
    Ok(())
}
