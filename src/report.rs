use std::fs::File;
use std::io::{
    BufWriter,
    Write,
};
use std::path::PathBuf;

use tracing::*;

use crate::allocation::NodeSummary;
use crate::error::{
    AuditError,
    AuditResult,
};
use crate::sizing::SizeBucket;
use crate::tally::NamespaceTally;

pub const DEFAULT_REPORT_PATH: &str = "cluster_containers.csv";

// blank lines between the namespace rows and the node summary
const SUMMARY_GAP: usize = 5;

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub output_path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> ReportConfig {
        return ReportConfig { output_path: PathBuf::from(DEFAULT_REPORT_PATH) };
    }
}

fn header() -> String {
    let mut line = String::from("Namespace / Size");
    for bucket in SizeBucket::ALL {
        line.push_str(", ");
        line.push_str(bucket.label());
    }
    return line;
}

pub fn render(tally: &NamespaceTally, summary: &NodeSummary) -> String {
    let mut out = header();
    out.push('\n');

    for (namespace, counts) in tally.iter() {
        out.push_str(namespace);
        out.push(',');
        for &count in counts {
            if count > 0 {
                out.push_str(&count.to_string());
            }
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str(&"\n".repeat(SUMMARY_GAP));
    out.push_str(&format!(
        "Number of nodes {}, Average of CPU limits on nodes: {:.2}%, Average of memory limits on nodes: {:.2}%\n",
        summary.count, summary.avg_cpu_percent, summary.avg_memory_percent
    ));

    return out;
}

pub fn write_report(config: &ReportConfig, tally: &NamespaceTally, summary: &NodeSummary) -> AuditResult<PathBuf> {
    let path = config.output_path.clone();
    let wrap = |source| AuditError::WriteReport { path: path.clone(), source };

    let file = File::create(&path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render(tally, summary).as_bytes()).map_err(wrap)?;
    writer.flush().map_err(wrap)?;

    info!("wrote {} namespaces to {}", tally.len(), path.display());
    return Ok(path);
}

#[cfg(test)]
mod test;
