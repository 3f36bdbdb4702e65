use super::severity::Severity;

/// One performance metric attached to the check result.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfData {
    pub label: String,
    pub value: f64,
}

/// Accumulates per-item diagnostic messages, per-category tallies and
/// performance data over one evaluation, then reduces them into the final
/// (severity, message) pair.
///
/// Messages keep insertion order; the tally keeps first-seen category order.
/// One report lives for exactly one evaluation.
#[derive(Debug, Default)]
pub struct CheckReport {
    messages: Vec<(Severity, String)>,
    tally: Vec<(String, usize)>,
    perfdata: Vec<PerfData>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one diagnostic entry.
    pub fn add(&mut self, severity: Severity, text: impl Into<String>) {
        self.messages.push((severity, text.into()));
    }

    /// Count one evaluated item under `category`, creating the counter at
    /// zero if this is the first item of that category.
    pub fn tally(&mut self, category: &str) {
        match self.tally.iter_mut().find(|(name, _)| name == category) {
            Some((_, count)) => *count += 1,
            None => self.tally.push((category.to_string(), 1)),
        }
    }

    pub fn add_perfdata(&mut self, label: impl Into<String>, value: f64) {
        self.perfdata.push(PerfData {
            label: label.into(),
            value,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn tally_total(&self) -> usize {
        self.tally.iter().map(|(_, count)| count).sum()
    }

    /// Summary used when every recorded item turned out healthy:
    /// `All {n} health checks are GREEN: memory: 1, cpu: 2, ...`
    pub fn green_summary(&self) -> String {
        let breakdown = self
            .tally
            .iter()
            .map(|(name, count)| format!("{}: {}", name, count))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "All {} health checks are GREEN: {}",
            self.tally_total(),
            breakdown
        )
    }

    /// Reduce the accumulated entries to the final severity and message.
    ///
    /// The worst severity is CRITICAL if any critical entry exists, else
    /// WARNING if any warning, else UNKNOWN if any unknown; UNKNOWN is a
    /// fallback only and never outranks a recorded warning or critical.
    /// When the worst is OK (including an empty report) the message is
    /// `allok`; otherwise it is every entry's text joined with newlines in
    /// insertion order.
    pub fn reduce(&self, allok: &str) -> (Severity, String) {
        let worst = self.worst_severity();
        if worst == Severity::Ok {
            return (Severity::Ok, allok.to_string());
        }
        let message = self
            .messages
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        (worst, message)
    }

    pub fn perfdata(&self) -> &[PerfData] {
        &self.perfdata
    }

    pub fn take_perfdata(&mut self) -> Vec<PerfData> {
        std::mem::take(&mut self.perfdata)
    }

    fn worst_severity(&self) -> Severity {
        let mut worst = Severity::Ok;
        let mut saw_unknown = false;
        for (severity, _) in &self.messages {
            match severity {
                Severity::Critical => return Severity::Critical,
                Severity::Warning => worst = Severity::Warning,
                Severity::Unknown => saw_unknown = true,
                Severity::Ok => {}
            }
        }
        if worst == Severity::Ok && saw_unknown {
            Severity::Unknown
        } else {
            worst
        }
    }
}

/// Render perfdata in the `label=value` wire format, single-quoting labels
/// that contain spaces.
pub fn render_perfdata(perfdata: &[PerfData]) -> Option<String> {
    if perfdata.is_empty() {
        return None;
    }
    let rendered = perfdata
        .iter()
        .map(|pd| {
            let label = if pd.label.contains(' ') {
                format!("'{}'", pd.label)
            } else {
                pd.label.clone()
            };
            format!("{}={}", label, format_value(pd.value))
        })
        .collect::<Vec<_>>()
        .join(" ");
    Some(rendered)
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
