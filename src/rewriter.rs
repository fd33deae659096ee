use crate::depfile::{DependencyLine, LineKind, VERSION_PLACEHOLDER, replace_version_value};
use crate::resolver::Resolve;

/// A dependency constant the rewriter had to leave alone, and why
#[derive(Debug)]
pub struct Skipped {
    /// 1-indexed line number for display
    pub line_number: usize,
    pub name: String,
    pub coordinate: String,
    pub reason: String,
}

/// Result of one rewrite pass
#[derive(Debug)]
pub struct RewriteOutcome {
    /// Rewritten lines, same length and order as the input
    pub lines: Vec<String>,
    /// Number of lines whose text actually changed
    pub updated: usize,
    pub skipped: Vec<Skipped>,
}

/// The version declaration whose replacement value is not yet decided.
/// Its effective value is only known once the constants referencing
/// `$version` after it have been resolved, so the slot is backfilled when
/// the next declaration appears (or at the end of the pass).
struct PendingVersion {
    index: usize,
    raw: String,
    candidate: String,
}

impl PendingVersion {
    fn backfill(self, out: &mut [String], updated: &mut usize) {
        let rewritten = replace_version_value(&self.raw, &self.candidate);
        if rewritten != self.raw {
            *updated += 1;
        }
        out[self.index] = rewritten;
    }
}

/// Walk the classified lines once in original order, resolving each
/// dependency constant and substituting versions. Resolution failures are
/// converted to skip diagnostics here; nothing a single coordinate does can
/// abort the pass. `progress` is called with the running line count.
pub async fn rewrite(
    lines: &[DependencyLine],
    resolver: &impl Resolve,
    mut progress: impl FnMut(usize),
) -> RewriteOutcome {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut pending: Option<PendingVersion> = None;
    let mut updated = 0;
    let mut skipped = Vec::new();

    for line in lines {
        match &line.kind {
            LineKind::Version { value } => {
                // A new declaration supersedes the previous slot; decide the
                // previous one's text now.
                if let Some(previous) = pending.take() {
                    previous.backfill(&mut out, &mut updated);
                }
                out.push(line.raw.clone());
                pending = Some(PendingVersion {
                    index: line.index,
                    raw: line.raw.clone(),
                    // Until a placeholder constant resolves, the slot keeps
                    // its current value, so constant-free files round-trip.
                    candidate: value.clone(),
                });
            }
            LineKind::Constant {
                name,
                group,
                artifact,
                version,
            } if version == VERSION_PLACEHOLDER => {
                // The constant keeps referencing the shared variable by
                // name; its resolved version feeds the pending slot instead.
                out.push(line.raw.clone());
                match &mut pending {
                    Some(slot) => match resolver.resolve(group, artifact).await {
                        Ok(latest) => slot.candidate = latest,
                        Err(err) => skipped.push(Skipped {
                            line_number: line.index + 1,
                            name: name.clone(),
                            coordinate: format!("{group}:{artifact}"),
                            reason: err.to_string(),
                        }),
                    },
                    None => skipped.push(Skipped {
                        line_number: line.index + 1,
                        name: name.clone(),
                        coordinate: format!("{group}:{artifact}"),
                        reason: "placeholder with no preceding version declaration".to_string(),
                    }),
                }
            }
            LineKind::Constant {
                name,
                group,
                artifact,
                version,
            } => match resolver.resolve(group, artifact).await {
                Ok(latest) if latest != *version => {
                    let old = format!("{group}:{artifact}:{version}");
                    let new = format!("{group}:{artifact}:{latest}");
                    out.push(line.raw.replacen(&old, &new, 1));
                    updated += 1;
                }
                Ok(_) => out.push(line.raw.clone()),
                Err(err) => {
                    out.push(line.raw.clone());
                    skipped.push(Skipped {
                        line_number: line.index + 1,
                        name: name.clone(),
                        coordinate: format!("{group}:{artifact}"),
                        reason: err.to_string(),
                    });
                }
            },
            LineKind::Passthrough => out.push(line.raw.clone()),
        }
        progress(line.index + 1);
    }

    if let Some(previous) = pending.take() {
        previous.backfill(&mut out, &mut updated);
    }

    RewriteOutcome {
        lines: out,
        updated,
        skipped,
    }
}
