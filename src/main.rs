use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};

use dist_release::config;
use dist_release::executor::ShellExecutor;
use dist_release::git::Git2Repository;
use dist_release::release::{Release, ReleaseOptions};
use dist_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "dist-release",
    version,
    about = "Build the project on its dist branch, then publish, tag and push the release"
)]
struct Args {
    #[arg(
        long,
        help = "Run every local step but skip publishing and pushing; any branch is allowed"
    )]
    dry_run: bool,
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let repo = Git2Repository::open(".").context("Git repository error")?;
    let workdir = repo.workdir()?;
    let config = config::load_config(None, &workdir).context("Error loading config")?;
    let executor = ShellExecutor::new(&workdir);

    let options = ReleaseOptions {
        dry_run: args.dry_run,
    };
    let report = Release::new(&config, &repo, &executor, workdir, options).run()?;

    ui::display_report(&report);
    Ok(())
}
