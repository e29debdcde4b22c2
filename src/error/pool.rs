use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Number of hammers must be greater than 0.")]
    NoWorkers,
    #[error("Failed to start hammer runtime: {source}")]
    Runtime {
        #[source]
        source: std::io::Error,
    },
}
