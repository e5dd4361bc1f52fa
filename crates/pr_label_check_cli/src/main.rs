use clap::Parser;
use pr_label_check_cli::{
    commands::check_cmd::{execute, CheckArgs},
    logging::init_logging,
    report::{error_annotation, notice_annotation},
};
use tracing::error;

/// PR label check: enforce the label taxonomy on a pull request
#[derive(Parser)]
#[command(name = "pr-label-check")]
#[command(version)]
#[command(
    about = "Enforce the label taxonomy on a pull request",
    long_about = "Checks that a pull request has exactly one type::* label, a bug::* label \
when it is a bug, and at most one severity::* label. When no type label is set, one is \
inferred from a semantic commit prefix in the title (e.g. 'feat: ...') and applied."
)]
struct Cli {
    #[command(flatten)]
    args: CheckArgs,
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    match execute(&cli.args).await {
        Ok(outcome) => {
            if let Some(label) = outcome.applied_label {
                println!(
                    "{}",
                    notice_annotation(&format!(
                        "Added label {label} based on the semantic commit type"
                    ))
                );
            }
        }
        Err(e) => {
            error!("Error: {e}");
            println!("{}", error_annotation(&e.to_string()));
            std::process::exit(e.exit_code());
        }
    }
}
