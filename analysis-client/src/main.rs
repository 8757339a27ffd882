use anyhow::Result;
use shared::observability::{init_logging, LogConfig, LogFormat, LogLevel};
use shared::types::VerdictBand;

mod config;
mod models;
mod services;
mod utils;

use config::ClientConfig;
use models::{SubmissionPhase, SubmissionState};
use services::api_client::{AnalyzeApi, ApiClient};
use services::endpoint::EndpointResolver;
use services::submission::SubmissionController;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClientConfig::from_env()?;
    config.validate()?;

    init_logging(LogConfig {
        level: LogLevel::parse(&config.logging.level),
        format: LogFormat::parse(&config.logging.format),
        service_name: "clicksafe".to_string(),
        ..Default::default()
    })?;

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("Usage: clicksafe <url> | clicksafe health");
        std::process::exit(2);
    };

    let api = ApiClient::from_config(&config.api)?;
    let resolver = EndpointResolver::new(&config.api.base_url);

    if input == "health" {
        let endpoint = resolver.resolve_health(&config.api.origin, config.api.dev_build);
        let healthy = api
            .health(&endpoint.request_url(&config.api.origin))
            .await
            .unwrap_or(false);
        if healthy {
            println!("analysis service is healthy");
            return Ok(());
        }
        eprintln!("analysis service is unreachable");
        std::process::exit(1);
    }

    let mut controller =
        SubmissionController::new(api, resolver, &config.api.origin, config.api.dev_build);
    controller.submit(&input).await;

    render(controller.state());
    if controller.state().phase != SubmissionPhase::Succeeded {
        std::process::exit(1);
    }

    Ok(())
}

/// Render the terminal submission state to stdout/stderr.
fn render(state: &SubmissionState) {
    match state.phase {
        SubmissionPhase::Succeeded => {
            let Some(report) = &state.result else {
                return;
            };
            let verdict = VerdictBand::from_score(report.score);

            println!("URL:     {}", report.url);
            println!("Score:   {:.1}/100", report.score);
            println!("Verdict: {}", verdict.as_str());
            if let Some(explanation) = &report.explanation {
                println!("Explanation: {explanation}");
            }
            if !report.reputation_checks.is_empty() {
                println!("Reputation checks:");
                for check in &report.reputation_checks {
                    let elapsed = check
                        .elapsed_ms
                        .map(|ms| format!(" [{ms}ms]"))
                        .unwrap_or_default();
                    println!(
                        "  - {}: {} ({}){}",
                        check.source,
                        check.status.verdict_label(),
                        check.reason.as_deref().unwrap_or("-"),
                        elapsed
                    );
                }
            }
        }
        SubmissionPhase::Failed => {
            let message = state.error_message.as_deref().unwrap_or("unknown error");
            eprintln!("{message}");
        }
        SubmissionPhase::Idle | SubmissionPhase::Loading => {}
    }
}
