use clap::{Parser, Subcommand};
use mapreduce_plagiarism::api::create_router;
use mapreduce_plagiarism::cluster::partitioner::split_documents;
use mapreduce_plagiarism::config;
use mapreduce_plagiarism::detector::types::DistributedReport;
use mapreduce_plagiarism::ingestion::reader::{load_documents, read_file};
use mapreduce_plagiarism::text::resources;
use mapreduce_plagiarism::PlagiarismDetector;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "plagiarism-detector",
    about = "Distributed plagiarism detection with MapReduce"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare files against a reference document
    Detect {
        /// Reference document
        #[arg(short, long)]
        reference: PathBuf,

        /// Similarity threshold (0-1)
        #[arg(short, long, env = "PLAGIARISM_THRESHOLD", default_value_t = config::DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Number of simulated servers the files are spread over
        #[arg(short, long, default_value_t = config::DEFAULT_SERVERS)]
        servers: usize,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Documents to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "PLAGIARISM_BIND", default_value = config::DEFAULT_BIND)]
        bind: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Load language resources once, before any document is touched.
    resources::setup();

    match args.command {
        Command::Detect {
            reference,
            threshold,
            servers,
            json,
            files,
        } => detect(reference, threshold, servers, json, files),
        Command::Serve { bind } => serve(bind).await,
    }
}

fn detect(
    reference: PathBuf,
    threshold: f64,
    servers: usize,
    json: bool,
    files: Vec<PathBuf>,
) -> anyhow::Result<()> {
    let reference_content = read_file(&reference)?;
    tracing::info!("Reference document loaded: {}", reference.display());

    let detector = PlagiarismDetector::new(&reference_content, threshold)?;
    let documents = load_documents(&files)?;
    let servers = servers.clamp(1, config::MAX_SERVERS);
    let partitions = split_documents(&documents, servers);

    let report = detector.run_distributed_report(&partitions);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &DistributedReport) {
    println!("Map phase ({} servers)", report.servers);
    for server in &report.map_phase {
        println!("  Server {}", server.server);
        for scored in &server.scored {
            println!("    - {}: {:.1}%", scored.id, scored.similarity * 100.0);
        }
    }

    println!();
    println!("Reduce phase (threshold {:.2})", report.stats.threshold);
    if report.plagiarized.is_empty() {
        println!("  No plagiarized document detected with this threshold.");
    }
    for result in &report.plagiarized {
        let server = result
            .server
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  - {} (similarity: {:.2}%, server: {})",
            result.id,
            result.similarity * 100.0,
            server
        );
    }

    println!();
    println!("Total documents:      {}", report.total_documents);
    println!("Servers used:         {}", report.servers);
    println!("Plagiarized:          {}", report.stats.total_docs);
    if report.stats.total_docs > 0 {
        println!(
            "Similarity max/min/avg: {:.4} / {:.4} / {:.4}",
            report.stats.max_similarity, report.stats.min_similarity, report.stats.average
        );
    }
}

async fn serve(bind: SocketAddr) -> anyhow::Result<()> {
    let app = create_router();

    tracing::info!("HTTP server listening on {}", bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
