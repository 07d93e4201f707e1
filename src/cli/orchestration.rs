//! Main workflow orchestration logic
//!
//! This module contains the release workflow, separated from CLI argument
//! parsing so it can be driven with any [ReleaseLister] and [Publisher].

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{CalverTag, TagPattern, YearMonth};
use crate::error::ReleaseError;
use crate::git::{PublishCommand, Publisher, ReleaseLister};
use crate::ui;
use crate::version;

/// Arguments for the release workflow
///
/// Resolved from the configuration file and CLI flags. This decoupling
/// allows the workflow to be called programmatically without depending on clap.
#[derive(Debug, Clone)]
pub struct ReleaseWorkflowArgs {
    /// Remote to push to
    pub remote: String,

    /// Branch pushed alongside the new tag
    pub branch: String,

    /// How tag names wrap the calendar version
    pub tag_pattern: TagPattern,

    /// Display the publish command instead of running it
    pub dry_run: bool,

    /// Skip the confirmation prompt
    pub force: bool,

    /// Ask before publishing
    pub confirm: bool,

    /// Start from the current month when nothing was released yet
    pub seed_first_release: bool,
}

impl ReleaseWorkflowArgs {
    /// Workflow arguments taken from a configuration, without CLI overrides
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        Ok(ReleaseWorkflowArgs {
            remote: config.remote.clone(),
            branch: config.branch.clone(),
            tag_pattern: config.tag_pattern()?,
            dry_run: config.dry_run,
            force: false,
            confirm: config.behavior.confirm,
            seed_first_release: config.behavior.seed_first_release,
        })
    }
}

/// Result of a release workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The latest tag reported by the lister
    pub latest_tag: Option<String>,

    /// The computed tag name
    pub tag: String,

    /// The tag-and-push command for the new tag
    pub command: PublishCommand,

    /// Whether the publisher ran
    pub published: bool,

    /// Publisher output, when it ran
    pub output: Option<String>,

    /// Non-fatal issues noticed along the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Main release workflow, confirming on stdin when asked to
pub fn run_release_workflow<L, P>(
    args: &ReleaseWorkflowArgs,
    lister: &L,
    publisher: &P,
    now: YearMonth,
) -> Result<WorkflowResult>
where
    L: ReleaseLister + ?Sized,
    P: Publisher + ?Sized,
{
    run_release_workflow_with(args, lister, publisher, now, ui::confirm_action)
}

/// Main release workflow
///
/// 1. Ask the lister for the latest tag
/// 2. Compute the next tag for `now` (or seed the first one)
/// 3. Display the command in dry-run mode, otherwise confirm if needed and publish
///
/// # Arguments
///
/// * `args` - Resolved workflow arguments
/// * `lister` - Source of the latest release tag
/// * `publisher` - Creates and pushes the new tag
/// * `now` - The current year and month
/// * `confirm` - Asked before publishing when confirmation is enabled
#[instrument(skip_all, fields(now = %now, dry_run = args.dry_run))]
pub fn run_release_workflow_with<L, P, C>(
    args: &ReleaseWorkflowArgs,
    lister: &L,
    publisher: &P,
    now: YearMonth,
    mut confirm: C,
) -> Result<WorkflowResult>
where
    L: ReleaseLister + ?Sized,
    P: Publisher + ?Sized,
    C: FnMut(&str) -> Result<bool>,
{
    let latest_tag = lister
        .latest_tag()
        .context("Failed to look up the latest release")?;
    ui::display_latest_tag(latest_tag.as_deref());

    let mut warnings = Vec::new();

    let new_version = match latest_tag.as_deref() {
        Some(name) => {
            let latest = parse_latest(name, &args.tag_pattern)?;
            warnings.extend(inspect_latest(name, &latest, now));
            version::next_after(&latest, now)?
        }
        None => {
            if !args.seed_first_release {
                return Err(ReleaseError::NoPriorRelease.into());
            }
            let seed = version::seed_tag(now);
            warnings.push(BoundaryWarning::NoPriorRelease {
                seed_tag: args.tag_pattern.format(&seed),
            });
            seed
        }
    };

    for warning in &warnings {
        ui::display_boundary_warning(warning);
    }

    let tag = args.tag_pattern.format(&new_version);
    ui::display_new_tag(&tag);
    info!(tag = %tag, "computed release tag");

    let command = PublishCommand::new(tag.clone(), args.remote.clone(), args.branch.clone());

    let mut result = WorkflowResult {
        latest_tag,
        tag,
        command,
        published: false,
        output: None,
        warnings,
    };

    if args.dry_run {
        ui::display_dry_run(&result.command);
        return Ok(result);
    }

    if args.confirm && !args.force && !confirm(&format!("Publish {}?", result.tag))? {
        ui::display_status("Release cancelled by user.");
        return Ok(result);
    }

    debug!("Publishing with: {}", result.command);
    let output = publisher
        .publish(&result.command)
        .with_context(|| format!("Failed to publish tag {}", result.tag))?;
    ui::display_publish_output(&output);
    ui::display_success(&format!(
        "Published {} to {}",
        result.tag, result.command.remote
    ));

    result.published = true;
    result.output = Some(output);
    Ok(result)
}

/// Parse a listed tag name through the configured pattern
fn parse_latest(name: &str, pattern: &TagPattern) -> crate::Result<CalverTag> {
    let version = pattern.strip(name).ok_or_else(|| {
        ReleaseError::malformed(
            BoundaryWarning::TagMismatchPattern {
                tag: name.to_string(),
                pattern: pattern.pattern.clone(),
            }
            .to_string(),
        )
    })?;
    CalverTag::parse(version)
}

fn inspect_latest(name: &str, latest: &CalverTag, now: YearMonth) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();

    if latest.year_month > now {
        warnings.push(BoundaryWarning::ClockBehindLatestTag {
            latest_tag: name.to_string(),
            current: now.to_string(),
        });
    }

    if latest.minor.is_some_and(|minor| minor <= 0) {
        warnings.push(BoundaryWarning::NonPositiveMinor {
            tag: name.to_string(),
        });
    }

    warnings
}
