pub mod deepfri_client;

pub use deepfri_client::{extract_job_id, DeepFriClient, JobId, PredictionApi};
