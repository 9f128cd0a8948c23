pub mod dto;
pub mod error;
pub mod service;

pub use dto::{
    ModelsResponse, SynthesizeResponse, TtsRequest, UpstreamTtsRequest, UpstreamTtsResponse,
};
pub use error::TtsServiceError;
pub use service::{TtsService, TtsServiceApi, TtsSynthesisResult};
