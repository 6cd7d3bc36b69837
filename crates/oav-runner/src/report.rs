use std::fmt::Write as _;
use std::path::PathBuf;

use oav_core::{Diagnostic, Severity};
use serde::Serialize;

/// Findings for one document, grouped by severity in evaluation order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    pub document_digest: String,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub infos: Vec<Diagnostic>,
}

impl FileReport {
    pub fn new(file: PathBuf, document_digest: String, diagnostics: Vec<Diagnostic>) -> Self {
        let mut report = Self {
            file,
            document_digest,
            ..Default::default()
        };
        for d in diagnostics {
            match d.severity {
                Severity::Error => report.errors.push(d),
                Severity::Warning => report.warnings.push(d),
                Severity::Info => report.infos.push(d),
                Severity::Off => {}
            }
        }
        report
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.infos.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
}

impl RunReport {
    /// 0 when no file has errors or warnings, 1 otherwise. Infos never fail a run.
    pub fn exit_code(&self) -> u8 {
        if self.files.iter().any(FileReport::has_failures) {
            1
        } else {
            0
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessageCount {
    pub message: String,
    pub count: usize,
}

/// Frequency of each distinct message at one severity, first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub messages: Vec<MessageCount>,
}

impl Statistics {
    pub fn tally<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) -> Self {
        let mut stats = Statistics::default();
        for d in diagnostics {
            stats.total += 1;
            match stats.messages.iter_mut().find(|m| m.message == d.message) {
                Some(m) => m.count += 1,
                None => stats.messages.push(MessageCount {
                    message: d.message.clone(),
                    count: 1,
                }),
            }
        }
        stats
    }

    pub fn percent(&self, count: usize) -> usize {
        if self.total == 0 {
            return 0;
        }
        (count * 100 + self.total / 2) / self.total
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    pub print_rule_ids: bool,
    pub report_statistics: bool,
}

pub fn render_text(report: &RunReport, opts: RenderOptions) -> String {
    let mut out = String::new();
    for file in &report.files {
        if file.is_clean() {
            let _ = writeln!(out, "{}: passed", file.file.display());
            continue;
        }
        let _ = writeln!(out, "{}", file.file.display());
        render_section(&mut out, "errors", &file.errors, opts);
        render_section(&mut out, "warnings", &file.warnings, opts);
        render_section(&mut out, "infos", &file.infos, opts);

        if opts.report_statistics {
            let _ = writeln!(out, "\nSummary:");
            let _ = writeln!(out, "  Total number of errors   : {}", file.errors.len());
            let _ = writeln!(out, "  Total number of warnings : {}", file.warnings.len());
            render_statistics(&mut out, "errors", &Statistics::tally(&file.errors));
            render_statistics(&mut out, "warnings", &Statistics::tally(&file.warnings));
            render_statistics(&mut out, "infos", &Statistics::tally(&file.infos));
        }
        out.push('\n');
    }
    out
}

fn render_section(out: &mut String, title: &str, diagnostics: &[Diagnostic], opts: RenderOptions) {
    if diagnostics.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}\n", title);
    for d in diagnostics {
        if opts.print_rule_ids {
            let _ = writeln!(out, "  Rule    :  {}", d.rule_id);
        }
        let _ = writeln!(out, "  Message :  {}", d.message);
        let _ = writeln!(out, "  Path    :  {}", d.locator);
        out.push('\n');
    }
}

fn render_statistics(out: &mut String, title: &str, stats: &Statistics) {
    if stats.total == 0 {
        return;
    }
    let _ = writeln!(out, "\n  {}", title);
    for m in &stats.messages {
        let _ = writeln!(out, "  {:>4} : {:>3}% : {}", m.count, stats.percent(m.count), m.message);
    }
}

pub fn render_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag(severity: Severity, message: &str) -> Diagnostic {
        Diagnostic {
            rule_id: "operation-ids".to_string(),
            locator: "paths./a.get.operationId".to_string(),
            message: message.to_string(),
            severity,
        }
    }

    #[test]
    fn groups_by_severity() {
        let report = FileReport::new(
            PathBuf::from("api.yaml"),
            String::new(),
            vec![
                diag(Severity::Warning, "w"),
                diag(Severity::Error, "e"),
                diag(Severity::Info, "i"),
                diag(Severity::Off, "o"),
            ],
        );
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.infos.len(), 1);
        assert!(report.has_failures());
    }

    #[test]
    fn exit_code_ignores_infos() {
        let infos_only = RunReport {
            files: vec![FileReport::new(PathBuf::from("a"), String::new(), vec![diag(Severity::Info, "i")])],
        };
        assert_eq!(infos_only.exit_code(), 0);

        let with_warning = RunReport {
            files: vec![
                FileReport::new(PathBuf::from("a"), String::new(), vec![]),
                FileReport::new(PathBuf::from("b"), String::new(), vec![diag(Severity::Warning, "w")]),
            ],
        };
        assert_eq!(with_warning.exit_code(), 1);
        assert_eq!(RunReport::default().exit_code(), 0);
    }

    #[test]
    fn statistics_count_messages() {
        let ds = vec![
            diag(Severity::Error, "operationIds must be unique"),
            diag(Severity::Error, "other"),
            diag(Severity::Error, "operationIds must be unique"),
        ];
        let stats = Statistics::tally(&ds);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.messages[0].count, 2);
        assert_eq!(stats.percent(2), 67);
        assert_eq!(stats.messages[1].message, "other");
        assert_eq!(stats.percent(1), 33);
    }

    #[test]
    fn text_shows_rule_ids_on_request() {
        let report = RunReport {
            files: vec![FileReport::new(PathBuf::from("api.yaml"), String::new(), vec![diag(Severity::Error, "boom")])],
        };
        let plain = render_text(&report, RenderOptions::default());
        assert!(plain.contains("Message :  boom"));
        assert!(plain.contains("Path    :  paths./a.get.operationId"));
        assert!(!plain.contains("Rule    :"));

        let verbose = render_text(
            &report,
            RenderOptions {
                print_rule_ids: true,
                report_statistics: true,
            },
        );
        assert!(verbose.contains("Rule    :  operation-ids"));
        assert!(verbose.contains("Total number of errors   : 1"));
        assert!(verbose.contains("100% : boom"));
    }
}
