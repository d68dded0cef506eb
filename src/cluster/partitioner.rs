use crate::detector::types::Document;

/// Deals documents round robin over `n_servers` simulated servers.
///
/// The server count is clamped to `[1, docs.len()]` so no server is left empty.
/// An empty input, or `n_servers == 0`, yields a single empty partition.
/// Each document is tagged with its 1-based server number.
pub fn split_documents(docs: &[Document], n_servers: usize) -> Vec<Vec<Document>> {
    if docs.is_empty() || n_servers < 1 {
        return vec![vec![]];
    }

    let n_servers = n_servers.clamp(1, docs.len());
    let mut chunks: Vec<Vec<Document>> = vec![Vec::new(); n_servers];
    for (i, doc) in docs.iter().enumerate() {
        let server = i % n_servers;
        chunks[server].push(doc.clone().with_server(server + 1));
    }

    tracing::debug!(
        "Split {} documents across {} servers",
        docs.len(),
        n_servers
    );
    chunks
}
