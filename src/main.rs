use anyhow::{Context, Result};
use clap::Parser;
use std::env;

use calver_release::cli::{run_release_workflow, ReleaseWorkflowArgs};
use calver_release::config::{self, Config, PublishBackend, ReleaseSource};
use calver_release::domain::YearMonth;
use calver_release::git::{
    CommandPublisher, GhReleaseLister, Git2Repository, Publisher, ReleaseLister,
};
use calver_release::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "calver-release",
    version,
    about = "Compute the next YY.MM[.N] release tag, then tag and push it"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Remote to push to")]
    remote: Option<String>,

    #[arg(short, long, help = "Branch to push along with the tag")]
    branch: Option<String>,

    #[arg(short, long, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(long, help = "Print the tag and push command without running it")]
    dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

impl Args {
    /// Overlay command-line flags on the configured workflow arguments
    fn apply(&self, mut workflow: ReleaseWorkflowArgs) -> ReleaseWorkflowArgs {
        if let Some(remote) = &self.remote {
            workflow.remote = remote.clone();
        }
        if let Some(branch) = &self.branch {
            workflow.branch = branch.clone();
        }
        workflow.dry_run |= self.dry_run;
        workflow.force = self.force;
        workflow
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = args.apply(ReleaseWorkflowArgs::from_config(&config)?);
    let now = YearMonth::now();

    let lister = release_lister(&config)?;
    let publisher = publisher(&config)?;

    run_release_workflow(&workflow_args, lister.as_ref(), publisher.as_ref(), now)?;
    Ok(())
}

fn release_lister(config: &Config) -> Result<Box<dyn ReleaseLister>> {
    let dir = env::current_dir().context("Cannot determine current directory")?;
    Ok(match config.release.source {
        ReleaseSource::Gh => Box::new(GhReleaseLister::new(dir)),
        ReleaseSource::Git => Box::new(
            Git2Repository::open(&dir, config.tag_pattern()?)
                .context("Not in a git repository")?,
        ),
    })
}

fn publisher(config: &Config) -> Result<Box<dyn Publisher>> {
    let dir = env::current_dir().context("Cannot determine current directory")?;
    Ok(match config.publish.backend {
        PublishBackend::Cli => Box::new(CommandPublisher::new(dir)),
        PublishBackend::Git2 => Box::new(
            Git2Repository::open(&dir, config.tag_pattern()?)
                .context("Not in a git repository")?,
        ),
    })
}
