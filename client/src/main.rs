use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct QueryCreate<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct HexagramScore {
    hexagram_name: String,
    hexagram_unicode: String,
    score: f32,
}

#[derive(Debug, Deserialize)]
struct QueryRecord {
    id: u64,
    query: String,
    hexagram_set: Vec<HexagramScore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} 'Your question here'", args[0]);
        eprintln!("Example: {} 'What should I focus on today?'", args[0]);
        std::process::exit(1);
    }

    let question = args[1..].join(" ");
    let base_url = std::env::var("ICHING_API_URL")
        .unwrap_or_else(|_| "http://localhost:8000".to_string());
    let base_url = base_url.trim_end_matches('/');

    match ask(base_url, &question).await {
        Ok(record) => {
            print!("{}", render(&record));
            Ok(())
        }
        Err(err) => {
            if err
                .downcast_ref::<reqwest::Error>()
                .is_some_and(|e| e.is_connect())
            {
                eprintln!("Cannot connect to API. Make sure the server is running.");
            } else {
                eprintln!("Error: {:#}", err);
            }
            std::process::exit(1);
        }
    }
}

async fn ask(base_url: &str, question: &str) -> anyhow::Result<QueryRecord> {
    let url = format!("{}/queries/", base_url);
    tracing::debug!("POST {}", url);

    let resp = reqwest::Client::new()
        .post(&url)
        .json(&QueryCreate { query: question })
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("{} - {}", status.as_u16(), body);
    }

    resp.json::<QueryRecord>()
        .await
        .context("Failed to decode query response")
}

fn render(record: &QueryRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("\nYour question: {}\n\n", record.query));
    out.push_str("The I Ching responds with these hexagrams:\n\n");

    for (i, hex) in record.hexagram_set.iter().enumerate() {
        let relevance = (hex.score * 100.0) as i64;
        out.push_str(&format!(
            "{}. {} {:<30} ({}% relevance)\n",
            i + 1,
            hex.hexagram_unicode,
            hex.hexagram_name,
            relevance
        ));
    }

    out.push_str(&format!("\n(Query saved with ID: {})\n", record.id));
    out
}
