// qualis-core/src/ports/assessor.rs

// What the risk flow needs from the outside world: the four historical
// attributes of an assessor. Whether they come from a file, an HTTP API or a
// test double is the adapter's business.

use crate::domain::quality::RiskProfile;
use crate::error::QualisError;
use async_trait::async_trait;

#[async_trait]
pub trait AssessorSource: Send + Sync {
    /// One request per call; no retry, no caching.
    async fn fetch(&self, assessor_id: &str) -> Result<RiskProfile, QualisError>;
}
