use crate::pb::HealthRes;

/// Simple health service shared by every SymCheck API surface.
///
/// Matching needs no external resources, so the service is healthy whenever it can answer.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "SymCheck is alive".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_is_ok() {
        let res = HealthService::check_health();
        assert!(res.ok);
        let json = serde_json::to_value(&res).expect("serialize health");
        assert_eq!(json["message"], "SymCheck is alive");
    }
}
