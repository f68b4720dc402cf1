// File: src/bin/main.rs
use anyhow::{bail, Context};
use lingua_core::{Classifier, ClassifierConfig, Label};
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct Request {
    train_words: Vec<String>,
    train_labels: Vec<String>,
    test_words: Vec<String>,
    test_labels: Option<Vec<Label>>,
}

#[derive(Debug, Serialize)]
struct Response {
    labels: Vec<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accuracy: Option<f64>,
}

/// Reads `--legacy` and `--config <path>`; the last one given wins.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<ClassifierConfig> {
    let mut config = ClassifierConfig::standard();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--legacy" => config = ClassifierConfig::legacy(),
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config = ClassifierConfig::from_file(&path)?;
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(config)
}

/// Answers one JSON request.
fn run(config: ClassifierConfig, input: &str) -> anyhow::Result<Response> {
    let request: Request = serde_json::from_str(input).context("parsing request")?;

    let model = Classifier::new(config).train(&request.train_words, &request.train_labels)?;
    let labels = model.predict_batch(&request.test_words);
    let accuracy = match &request.test_labels {
        Some(expected) => Some(model.accuracy(&request.test_words, expected)?),
        None => None,
    };

    Ok(Response { labels, accuracy })
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the JSON response.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = parse_args(std::env::args().skip(1))?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading request from stdin")?;
    let response = run(config, &input)?;

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
